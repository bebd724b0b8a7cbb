//! Generators, modifiers and value sequences.

use crate::Type;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use vet_core::{CheckError, CheckResult, Value};

/// Produces a value on demand.
#[derive(Clone)]
pub struct Generator(Rc<dyn Fn() -> CheckResult<Value>>);

impl Generator {
    pub fn new(f: impl Fn() -> CheckResult<Value> + 'static) -> Self {
        Generator(Rc::new(f))
    }

    /// Generator from an infallible closure.
    pub fn from_fn(f: impl Fn() -> Value + 'static) -> Self {
        Generator::new(move || Ok(f()))
    }

    /// Generator that always returns `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Generator::new(move || Ok(value.clone()))
    }

    pub fn create(&self) -> CheckResult<Value> {
        (self.0)()
    }

    fn address(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generator@{:p}", self.address())
    }
}

/// Derives a value different from its input.
///
/// A modifier fed null returns the seed its type starts from.
#[derive(Clone)]
pub struct Modifier(Rc<dyn Fn(&Value) -> CheckResult<Value>>);

impl Modifier {
    pub fn new(f: impl Fn(&Value) -> CheckResult<Value> + 'static) -> Self {
        Modifier(Rc::new(f))
    }

    /// Modifier from an infallible closure.
    pub fn from_fn(f: impl Fn(&Value) -> Value + 'static) -> Self {
        Modifier::new(move |value| Ok(f(value)))
    }

    /// Modifier stepping from `seed` and falling back to it when a stepped
    /// value leaves the range `keep` accepts.
    ///
    /// `step` returns `None` for inputs of a kind it cannot step.
    pub fn restarting(
        seed: impl Into<Value>,
        step: impl Fn(&Value) -> Option<Value> + 'static,
        keep: impl Fn(&Value) -> bool + 'static,
    ) -> Self {
        let seed = seed.into();
        Modifier::new(move |value| {
            if value.is_null() {
                return Ok(seed.clone());
            }
            let next = step(value).ok_or_else(|| {
                CheckError::internal(format!(
                    "Cannot modify '{}' of kind {}, expected a {} value",
                    value,
                    value.type_name(),
                    seed.type_name()
                ))
            })?;
            Ok(if keep(&next) { next } else { seed.clone() })
        })
    }

    pub fn modify(&self, value: &Value) -> CheckResult<Value> {
        (self.0)(value)
    }

    fn address(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for Modifier {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modifier@{:p}", self.address())
    }
}

/// Endless sequence of values of one type: the generated value first, then
/// each value modified from the previous one.
///
/// The type's generator and modifier are resolved on every step, so a
/// sequence may be built before its type is fully configured.
pub struct Sequence {
    source: Type,
    last: Option<Value>,
}

impl Sequence {
    pub fn new(source: &Type) -> Self {
        Self {
            source: source.clone(),
            last: None,
        }
    }

    pub fn next_value(&mut self) -> CheckResult<Value> {
        let next = match &self.last {
            None => self.source.generator()?.create()?,
            Some(previous) => self.source.modifier()?.modify(previous)?,
        };
        self.last = Some(next.clone());
        Ok(next)
    }

    /// Collect the next `count` values.
    pub fn next_values(&mut self, count: usize) -> CheckResult<Vec<Value>> {
        (0..count).map(|_| self.next_value()).collect()
    }

    /// Turn the sequence into a stateful generator.
    pub fn into_generator(self) -> Generator {
        let state = RefCell::new(self);
        Generator::new(move || state.borrow_mut().next_value())
    }
}

impl Iterator for Sequence {
    type Item = CheckResult<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }
}
