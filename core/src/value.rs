//! Runtime values.
//!
//! Values are what generators produce, what fields hold and what members
//! receive and return. Scalars mirror the primitive kinds a subject may
//! declare; containers keep insertion order, while sets and maps compare
//! without regard to it.

use crate::{Class, ObjectRef};
use std::fmt;

/// The primitive kinds a value or a class can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl ValueKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Bool,
        ValueKind::Byte,
        ValueKind::Short,
        ValueKind::Int,
        ValueKind::Long,
        ValueKind::Float,
        ValueKind::Double,
        ValueKind::Char,
    ];

    /// Name of the primitive class for this kind.
    pub fn primitive_name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "boolean",
            ValueKind::Byte => "byte",
            ValueKind::Short => "short",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Char => "char",
        }
    }

    /// Name of the nullable (boxed) class for this kind.
    pub fn boxed_name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "Boolean",
            ValueKind::Byte => "Byte",
            ValueKind::Short => "Short",
            ValueKind::Int => "Integer",
            ValueKind::Long => "Long",
            ValueKind::Float => "Float",
            ValueKind::Double => "Double",
            ValueKind::Char => "Character",
        }
    }

    /// The zero value a field of this kind starts with.
    pub fn zero(&self) -> Value {
        match self {
            ValueKind::Bool => Value::Bool(false),
            ValueKind::Byte => Value::Byte(0),
            ValueKind::Short => Value::Short(0),
            ValueKind::Int => Value::Int(0),
            ValueKind::Long => Value::Long(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Double => Value::Double(0.0),
            ValueKind::Char => Value::Char('\0'),
        }
    }
}

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent reference.
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Set of distinct values, kept in insertion order.
    Set(Vec<Value>),
    /// Map entries with distinct keys, kept in insertion order.
    Map(Vec<(Value, Value)>),
    /// Fixed-size array with its component class.
    Array(Class, Vec<Value>),
    /// Reference to an object instance.
    Object(ObjectRef),
}

impl Value {
    /// Builds a set, dropping later duplicates.
    pub fn set_of(items: impl IntoIterator<Item = Value>) -> Self {
        let mut distinct: Vec<Value> = Vec::new();
        for item in items {
            if !distinct.contains(&item) {
                distinct.push(item);
            }
        }
        Value::Set(distinct)
    }

    /// Builds a map, keeping the first entry for each key.
    pub fn map_of(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut distinct: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            if !distinct.iter().any(|(k, _)| *k == key) {
                distinct.push((key, value));
            }
        }
        Value::Map(distinct)
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the primitive kind of a scalar value.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Bool(_) => Some(ValueKind::Bool),
            Value::Byte(_) => Some(ValueKind::Byte),
            Value::Short(_) => Some(ValueKind::Short),
            Value::Int(_) => Some(ValueKind::Int),
            Value::Long(_) => Some(ValueKind::Long),
            Value::Float(_) => Some(ValueKind::Float),
            Value::Double(_) => Some(ValueKind::Double),
            Value::Char(_) => Some(ValueKind::Char),
            _ => None,
        }
    }

    /// Get the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Set(_) => "Set",
            Value::Map(_) => "Map",
            Value::Array(_, _) => "Array",
            Value::Object(_) => "Object",
            scalar => scalar
                .kind()
                .map(|kind| kind.primitive_name())
                .unwrap_or("unknown"),
        }
    }

    /// Numeric value truncated toward zero, for any numeric kind.
    pub fn as_truncated(&self) -> Option<i64> {
        match self {
            Value::Byte(v) => Some(i64::from(*v)),
            Value::Short(v) => Some(i64::from(*v)),
            Value::Int(v) => Some(i64::from(*v)),
            Value::Long(v) => Some(*v),
            Value::Float(v) => Some(v.trunc() as i64),
            Value::Double(v) => Some(v.trunc() as i64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Items of a list, set or array.
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Set(items) | Value::Array(_, items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().all(|item| b.contains(item))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len() && a.iter().all(|entry| b.contains(entry))
            }
            (Value::Array(ca, a), Value::Array(cb, b)) => ca == cb && a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Short(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Double(v) => write!(f, "{:?}", v),
            Value::Char(c) => write!(f, "{}", c),
            Value::String(s) => write!(f, "{}", s),
            Value::List(items) | Value::Set(items) | Value::Array(_, items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Object(object) => write!(f, "{}", object),
        }
    }
}

// Convenient From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<ObjectRef> for Value {
    fn from(object: ObjectRef) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
