//! Ready-made generators and modifiers.
//!
//! Generators start every basic kind from a fixed seed. Modifiers step away
//! from their input and restart at the seed when a step leaves a small
//! range, so repeated modification cycles through a handful of values.
//! Container values hold [`CONTAINER_SIZE`] items taken from a sequence of
//! their item type; sets and maps hold fewer when the item type has fewer
//! distinct values. Container modifiers modify every item and drop the first
//! one when that alone gives back an equal container.

use crate::{Generator, Modifier, Sequence, Type, TypeRegistry};
use vet_core::{CheckError, CheckResult, Class, ObjectRef, Value, ValueKind};

/// Number of items in generated lists, sets, maps and arrays.
pub const CONTAINER_SIZE: usize = 3;

/// Longest string the string modifier produces before restarting.
pub const STRING_LENGTH_CAP: usize = 10;

const STRING_SEED: &str = "test";

fn one_digit(value: &Value) -> bool {
    value.as_truncated().map_or(false, |v| (0..10).contains(&v))
}

fn short_string(value: &Value) -> bool {
    value
        .as_str()
        .map_or(false, |s| s.chars().count() <= STRING_LENGTH_CAP)
}

fn lowercase_letter(value: &Value) -> bool {
    value.as_char().map_or(false, |c| ('a'..='z').contains(&c))
}

/// `modified`, unless it equals `input`: then the same container without its
/// first item, or a newly generated one when there is no item to drop.
fn distinct_from(input: &Value, modified: Value, start: &Generator) -> CheckResult<Value> {
    if modified != *input {
        return Ok(modified);
    }
    match modified {
        Value::List(items) if !items.is_empty() => Ok(Value::List(items[1..].to_vec())),
        Value::Set(items) if !items.is_empty() => Ok(Value::Set(items[1..].to_vec())),
        Value::Map(entries) if !entries.is_empty() => Ok(Value::Map(entries[1..].to_vec())),
        Value::Array(class, items) if !items.is_empty() => {
            Ok(Value::Array(class, items[1..].to_vec()))
        }
        _ => start.create(),
    }
}

fn items_of<'v>(value: &'v Value, expected: &str) -> Result<&'v [Value], CheckError> {
    value.as_items().ok_or_else(|| {
        CheckError::internal(format!(
            "Cannot modify '{}' of kind {}, expected {}",
            value,
            value.type_name(),
            expected
        ))
    })
}

/// Generators for basic kinds and containers.
pub struct GeneratorLibrary<'r> {
    types: &'r TypeRegistry,
}

impl<'r> GeneratorLibrary<'r> {
    pub fn new(types: &'r TypeRegistry) -> Self {
        Self { types }
    }

    /// Generator for the given primitive kind.
    pub fn of_kind(&self, kind: ValueKind) -> Generator {
        match kind {
            ValueKind::Bool => self.of_booleans(),
            ValueKind::Byte => self.of_bytes(),
            ValueKind::Short => self.of_shorts(),
            ValueKind::Int => self.of_ints(),
            ValueKind::Long => self.of_longs(),
            ValueKind::Float => self.of_floats(),
            ValueKind::Double => self.of_doubles(),
            ValueKind::Char => self.of_chars(),
        }
    }

    pub fn of_booleans(&self) -> Generator {
        Generator::constant(false)
    }

    pub fn of_bytes(&self) -> Generator {
        Generator::constant(0i8)
    }

    pub fn of_shorts(&self) -> Generator {
        Generator::constant(0i16)
    }

    pub fn of_ints(&self) -> Generator {
        Generator::constant(0i32)
    }

    pub fn of_longs(&self) -> Generator {
        Generator::constant(0i64)
    }

    pub fn of_floats(&self) -> Generator {
        Generator::constant(0f32)
    }

    pub fn of_doubles(&self) -> Generator {
        Generator::constant(0f64)
    }

    pub fn of_chars(&self) -> Generator {
        Generator::constant('a')
    }

    pub fn of_strings(&self) -> Generator {
        Generator::constant(STRING_SEED)
    }

    /// Always the same plain object.
    pub fn of_objects(&self) -> Generator {
        Generator::constant(ObjectRef::new_object())
    }

    pub fn of_lists(&self, item: &Type) -> Generator {
        let item = item.clone();
        Generator::new(move || {
            Ok(Value::List(Sequence::new(&item).next_values(CONTAINER_SIZE)?))
        })
    }

    pub fn of_lists_of(&self, item: &Class) -> Generator {
        self.of_lists(&self.types.from(item))
    }

    pub fn of_sets(&self, item: &Type) -> Generator {
        let item = item.clone();
        Generator::new(move || {
            Ok(Value::set_of(Sequence::new(&item).next_values(CONTAINER_SIZE)?))
        })
    }

    pub fn of_sets_of(&self, item: &Class) -> Generator {
        self.of_sets(&self.types.from(item))
    }

    pub fn of_maps(&self, key: &Type, value: &Type) -> Generator {
        let (key, value) = (key.clone(), value.clone());
        Generator::new(move || {
            let keys = Sequence::new(&key).next_values(CONTAINER_SIZE)?;
            let values = Sequence::new(&value).next_values(CONTAINER_SIZE)?;
            Ok(Value::map_of(keys.into_iter().zip(values)))
        })
    }

    pub fn of_maps_of(&self, key: &Class, value: &Class) -> Generator {
        self.of_maps(&self.types.from(key), &self.types.from(value))
    }

    /// Arrays whose items follow the sequence of `component`.
    pub fn of_arrays(&self, component: &Type) -> Generator {
        let component = component.clone();
        let class = component.class().cloned().unwrap_or_else(Class::object);
        Generator::new(move || {
            let items = Sequence::new(&component).next_values(CONTAINER_SIZE)?;
            Ok(Value::Array(class.clone(), items))
        })
    }
}

/// Modifiers for basic kinds and containers.
pub struct ModifierLibrary<'r> {
    types: &'r TypeRegistry,
}

impl<'r> ModifierLibrary<'r> {
    pub fn new(types: &'r TypeRegistry) -> Self {
        Self { types }
    }

    /// Modifier for the given primitive kind.
    pub fn of_kind(&self, kind: ValueKind) -> Modifier {
        match kind {
            ValueKind::Bool => self.of_booleans(),
            ValueKind::Byte => self.of_bytes(),
            ValueKind::Short => self.of_shorts(),
            ValueKind::Int => self.of_ints(),
            ValueKind::Long => self.of_longs(),
            ValueKind::Float => self.of_floats(),
            ValueKind::Double => self.of_doubles(),
            ValueKind::Char => self.of_chars(),
        }
    }

    /// Flips the input; null becomes false.
    pub fn of_booleans(&self) -> Modifier {
        Modifier::new(|value| match value {
            Value::Null => Ok(Value::Bool(false)),
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => Err(CheckError::internal(format!(
                "Cannot modify '{}' of kind {}, expected a boolean value",
                other,
                other.type_name()
            ))),
        })
    }

    pub fn of_bytes(&self) -> Modifier {
        Modifier::restarting(
            0i8,
            |v| match v {
                Value::Byte(b) => Some(Value::Byte(b.wrapping_add(1))),
                _ => None,
            },
            one_digit,
        )
    }

    pub fn of_shorts(&self) -> Modifier {
        Modifier::restarting(
            0i16,
            |v| match v {
                Value::Short(s) => Some(Value::Short(s.wrapping_add(1))),
                _ => None,
            },
            one_digit,
        )
    }

    pub fn of_ints(&self) -> Modifier {
        Modifier::restarting(
            0i32,
            |v| match v {
                Value::Int(i) => Some(Value::Int(i.wrapping_add(1))),
                _ => None,
            },
            one_digit,
        )
    }

    pub fn of_longs(&self) -> Modifier {
        Modifier::restarting(
            0i64,
            |v| match v {
                Value::Long(l) => Some(Value::Long(l.wrapping_add(1))),
                _ => None,
            },
            one_digit,
        )
    }

    pub fn of_floats(&self) -> Modifier {
        Modifier::restarting(
            0f32,
            |v| match v {
                Value::Float(f) => Some(Value::Float(f + 0.1)),
                _ => None,
            },
            one_digit,
        )
    }

    pub fn of_doubles(&self) -> Modifier {
        Modifier::restarting(
            0f64,
            |v| match v {
                Value::Double(d) => Some(Value::Double(d + 0.1)),
                _ => None,
            },
            one_digit,
        )
    }

    /// Steps through 'a'..='z'.
    pub fn of_chars(&self) -> Modifier {
        Modifier::restarting(
            'a',
            |v| {
                v.as_char()
                    .map(|c| Value::Char(char::from_u32(c as u32 + 1).unwrap_or('a')))
            },
            lowercase_letter,
        )
    }

    /// Appends a star, restarting once the string grows too long.
    pub fn of_strings(&self) -> Modifier {
        Modifier::restarting(
            STRING_SEED,
            |v| v.as_str().map(|s| Value::String(format!("{}*", s))),
            short_string,
        )
    }

    /// A new plain object for every input.
    pub fn of_objects(&self) -> Modifier {
        Modifier::from_fn(|_| Value::Object(ObjectRef::new_object()))
    }

    pub fn of_lists(&self, item: &Type) -> Modifier {
        let start = GeneratorLibrary::new(self.types).of_lists(item);
        let item = item.clone();
        Modifier::new(move |value| {
            if value.is_null() {
                return start.create();
            }
            let modifier = item.modifier()?;
            let items = items_of(value, "a list")?
                .iter()
                .map(|v| modifier.modify(v))
                .collect::<Result<Vec<_>, _>>()?;
            distinct_from(value, Value::List(items), &start)
        })
    }

    pub fn of_lists_of(&self, item: &Class) -> Modifier {
        self.of_lists(&self.types.from(item))
    }

    pub fn of_sets(&self, item: &Type) -> Modifier {
        let start = GeneratorLibrary::new(self.types).of_sets(item);
        let item = item.clone();
        Modifier::new(move |value| {
            if value.is_null() {
                return start.create();
            }
            let modifier = item.modifier()?;
            let items = items_of(value, "a set")?
                .iter()
                .map(|v| modifier.modify(v))
                .collect::<Result<Vec<_>, _>>()?;
            distinct_from(value, Value::set_of(items), &start)
        })
    }

    pub fn of_sets_of(&self, item: &Class) -> Modifier {
        self.of_sets(&self.types.from(item))
    }

    /// Modifies both keys and values of every entry.
    pub fn of_maps(&self, key: &Type, value: &Type) -> Modifier {
        let start = GeneratorLibrary::new(self.types).of_maps(key, value);
        let (key, value_type) = (key.clone(), value.clone());
        Modifier::new(move |input| match input {
            Value::Null => start.create(),
            Value::Map(entries) => {
                let key_modifier = key.modifier()?;
                let value_modifier = value_type.modifier()?;
                let modified = entries
                    .iter()
                    .map(|(k, v)| Ok((key_modifier.modify(k)?, value_modifier.modify(v)?)))
                    .collect::<Result<Vec<_>, CheckError>>()?;
                distinct_from(input, Value::map_of(modified), &start)
            }
            other => Err(CheckError::internal(format!(
                "Cannot modify '{}' of kind {}, expected a map",
                other,
                other.type_name()
            ))),
        })
    }

    pub fn of_maps_of(&self, key: &Class, value: &Class) -> Modifier {
        self.of_maps(&self.types.from(key), &self.types.from(value))
    }

    pub fn of_arrays(&self, component: &Type) -> Modifier {
        let start = GeneratorLibrary::new(self.types).of_arrays(component);
        let component = component.clone();
        Modifier::new(move |value| match value {
            Value::Null => start.create(),
            Value::Array(class, items) => {
                let modifier = component.modifier()?;
                let items = items
                    .iter()
                    .map(|v| modifier.modify(v))
                    .collect::<Result<Vec<_>, _>>()?;
                distinct_from(value, Value::Array(class.clone(), items), &start)
            }
            other => Err(CheckError::internal(format!(
                "Cannot modify '{}' of kind {}, expected an array",
                other,
                other.type_name()
            ))),
        })
    }
}
