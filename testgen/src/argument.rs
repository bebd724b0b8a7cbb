//! Arguments handed to a test, one per requested fact.

use std::fmt;
use std::rc::Rc;
use vet_core::{CheckError, CheckResult, Class, Mutability, Origin, Scope, Sourced, Value, Visibility};
use vet_locator::{ConstructorLocator, FieldLocator, GetterLocator, SetterLocator};
use vet_registry::{Generator, Modifier};

/// A value extracted from a definition item.
///
/// Locators, generators and modifiers compare by identity, everything else
/// by value, so that two items yielding the same definition elements yield
/// equal arguments.
#[derive(Debug, Clone)]
pub enum Argument {
    Field(Rc<FieldLocator>),
    Getter(Rc<GetterLocator>),
    Setter(Rc<SetterLocator>),
    Constructor(Rc<ConstructorLocator>),
    Visibility(Visibility),
    Mutability(Mutability),
    Scope(Scope),
    Index(usize),
    Class(Class),
    Value(Value),
    Name(String),
    Generator(Generator),
    Modifier(Modifier),
}

macro_rules! accessor {
    ($name:ident, $variant:ident, $ty:ty, $expected:literal) => {
        pub fn $name(&self) -> CheckResult<&$ty> {
            match self {
                Argument::$variant(inner) => {
                    let inner: &$ty = inner;
                    Ok(inner)
                }
                other => Err(other.mismatch($expected)),
            }
        }
    };
}

impl Argument {
    accessor!(as_field, Field, FieldLocator, "a field");
    accessor!(as_getter, Getter, GetterLocator, "a getter");
    accessor!(as_setter, Setter, SetterLocator, "a setter");
    accessor!(as_constructor, Constructor, ConstructorLocator, "a constructor");
    accessor!(as_visibility, Visibility, Visibility, "a visibility");
    accessor!(as_mutability, Mutability, Mutability, "a mutability");
    accessor!(as_scope, Scope, Scope, "a scope");
    accessor!(as_index, Index, usize, "an index");
    accessor!(as_class, Class, Class, "a class");
    accessor!(as_value, Value, Value, "a value");
    accessor!(as_name, Name, String, "a name");
    accessor!(as_generator, Generator, Generator, "a generator");
    accessor!(as_modifier, Modifier, Modifier, "a modifier");

    pub fn kind(&self) -> &'static str {
        match self {
            Argument::Field(_) => "field",
            Argument::Getter(_) => "getter",
            Argument::Setter(_) => "setter",
            Argument::Constructor(_) => "constructor",
            Argument::Visibility(_) => "visibility",
            Argument::Mutability(_) => "mutability",
            Argument::Scope(_) => "scope",
            Argument::Index(_) => "index",
            Argument::Class(_) => "class",
            Argument::Value(_) => "value",
            Argument::Name(_) => "name",
            Argument::Generator(_) => "generator",
            Argument::Modifier(_) => "modifier",
        }
    }

    fn mismatch(&self, expected: &str) -> CheckError {
        CheckError::internal(format!(
            "Expected {} argument, got {} '{}'",
            expected,
            self.kind(),
            self
        ))
    }

    /// Declaration site of a locator argument.
    pub fn origin(&self) -> Option<Origin> {
        match self {
            Argument::Field(l) => Some(l.origin()),
            Argument::Getter(l) => Some(l.origin()),
            Argument::Setter(l) => Some(l.origin()),
            Argument::Constructor(l) => Some(l.origin()),
            _ => None,
        }
    }
}

impl PartialEq for Argument {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Argument::Field(a), Argument::Field(b)) => Rc::ptr_eq(a, b),
            (Argument::Getter(a), Argument::Getter(b)) => Rc::ptr_eq(a, b),
            (Argument::Setter(a), Argument::Setter(b)) => Rc::ptr_eq(a, b),
            (Argument::Constructor(a), Argument::Constructor(b)) => Rc::ptr_eq(a, b),
            (Argument::Visibility(a), Argument::Visibility(b)) => a == b,
            (Argument::Mutability(a), Argument::Mutability(b)) => a == b,
            (Argument::Scope(a), Argument::Scope(b)) => a == b,
            (Argument::Index(a), Argument::Index(b)) => a == b,
            (Argument::Class(a), Argument::Class(b)) => a == b,
            (Argument::Value(a), Argument::Value(b)) => a == b,
            (Argument::Name(a), Argument::Name(b)) => a == b,
            (Argument::Generator(a), Argument::Generator(b)) => a == b,
            (Argument::Modifier(a), Argument::Modifier(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Field(l) => write!(f, "{}", l),
            Argument::Getter(l) => write!(f, "{}", l),
            Argument::Setter(l) => write!(f, "{}", l),
            Argument::Constructor(l) => write!(f, "{}", l),
            Argument::Visibility(v) => write!(f, "{}", v),
            Argument::Mutability(m) => write!(f, "{}", m),
            Argument::Scope(s) => write!(f, "{}", s),
            Argument::Index(i) => write!(f, "{}", i),
            Argument::Class(c) => write!(f, "{}", c),
            Argument::Value(v) => write!(f, "{}", v),
            Argument::Name(n) => write!(f, "{}", n),
            Argument::Generator(g) => write!(f, "{:?}", g),
            Argument::Modifier(m) => write!(f, "{:?}", m),
        }
    }
}
