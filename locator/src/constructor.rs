//! Constructor locator.

use crate::resolve::{not_found, single};
use crate::MemberLocator;
use log::debug;
use std::fmt;
use vet_core::{
    CheckError, CheckResult, Class, ConstructorInfo, InvokeError, ObjectRef, OptionKind, Origin,
    Sourced, Value, Visibility,
};
use vet_registry::Type;

/// Finds a constructor by arity. Parameter types carrying a class also pin
/// the class at their position.
pub struct ConstructorLocator {
    class: Class,
    parameters: Vec<Type>,
    origin: Origin,
}

impl ConstructorLocator {
    #[track_caller]
    pub fn new(class: &Class, parameters: Vec<Type>) -> Self {
        Self {
            class: class.clone(),
            parameters,
            origin: Origin::here(),
        }
    }

    pub fn parameters(&self) -> &[Type] {
        &self.parameters
    }

    pub fn find(&self) -> CheckResult<Option<&ConstructorInfo>> {
        let candidates = self
            .class
            .constructors()
            .iter()
            .filter(|c| {
                c.parameters().len() == self.parameters.len()
                    && c.parameters()
                        .iter()
                        .zip(&self.parameters)
                        .all(|(declared, ty)| ty.class().map_or(true, |class| declared == class))
            })
            .collect();
        single("constructor", candidates)
    }

    fn constructor(&self) -> CheckResult<&ConstructorInfo> {
        let constructor = self.find()?.ok_or_else(|| not_found(self))?;
        debug!("{} resolved to {}", self, constructor);
        Ok(constructor)
    }

    pub fn visibility(&self) -> CheckResult<Visibility> {
        Visibility::classify(self.constructor()?.modifiers())
    }

    /// Build a new subject instance from `arguments`.
    pub fn invoke(&self, arguments: &[Value]) -> CheckResult<ObjectRef> {
        self.constructor()?
            .invoke(&self.class, arguments)
            .map_err(|e| match e {
                InvokeError::Arity { expected, actual } => CheckError::unfulfilled(format!(
                    "{} expects {} arguments, got {}",
                    self, expected, actual
                )),
                InvokeError::ArgumentMismatch { index } => CheckError::unfulfilled(format!(
                    "{} does not accept '{}' at position {}",
                    self, arguments[index], index
                )),
                InvokeError::Thrown(thrown) => {
                    CheckError::unfulfilled_by(format!("{} throws an exception", self), thrown)
                }
                other => CheckError::unexpected(&other),
            })
    }
}

impl MemberLocator for ConstructorLocator {
    fn is_present(&self) -> CheckResult<bool> {
        Ok(self.find()?.is_some())
    }
}

impl Sourced for ConstructorLocator {
    fn origin(&self) -> Origin {
        self.origin
    }
}

impl fmt::Display for ConstructorLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.parameters.iter().map(Type::name).collect();
        write!(f, "{}({})", self.class.simple_name(), names.join(", "))
    }
}

impl fmt::Debug for ConstructorLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorLocator")
            .field("class", &self.class)
            .field("parameters", &self.parameters)
            .field("origin", &self.origin)
            .finish()
    }
}
