//! Setter locator.

use crate::resolve::{not_found, single};
use crate::{MemberLocator, Namer};
use log::debug;
use std::fmt;
use vet_core::{
    CheckError, CheckResult, Class, InvokeError, MethodInfo, Mutability, ObjectRef, OptionKind,
    Origin, Scope, Sourced, Value, Visibility,
};
use vet_registry::Type;

/// Finds a one-argument method whose name the namer accepts. When the
/// parameter type carries a class, the parameter must be of that class.
pub struct SetterLocator {
    class: Class,
    namer: Namer,
    parameter: Type,
    origin: Origin,
}

impl SetterLocator {
    #[track_caller]
    pub fn new(class: &Class, namer: Namer, parameter: &Type) -> Self {
        Self {
            class: class.clone(),
            namer,
            parameter: parameter.clone(),
            origin: Origin::here(),
        }
    }

    pub fn namer(&self) -> &Namer {
        &self.namer
    }

    pub fn parameter(&self) -> &Type {
        &self.parameter
    }

    pub fn find(&self) -> CheckResult<Option<&MethodInfo>> {
        let candidates = self
            .class
            .methods()
            .iter()
            .filter(|m| {
                m.parameters().len() == 1
                    && self.namer.matches(m.name())
                    && self
                        .parameter
                        .class()
                        .map_or(true, |class| m.parameters()[0] == *class)
            })
            .collect();
        single("setter", candidates)
    }

    fn method(&self) -> CheckResult<&MethodInfo> {
        let method = self.find()?.ok_or_else(|| not_found(self))?;
        debug!("{} resolved to {}", self, method);
        Ok(method)
    }

    pub fn parameter_class(&self) -> CheckResult<Class> {
        Ok(self.method()?.parameters()[0].clone())
    }

    pub fn visibility(&self) -> CheckResult<Visibility> {
        Visibility::classify(self.method()?.modifiers())
    }

    pub fn mutability(&self) -> CheckResult<Mutability> {
        Mutability::classify(self.method()?.modifiers())
    }

    pub fn scope(&self) -> CheckResult<Scope> {
        Scope::classify(self.method()?.modifiers())
    }

    /// Call the setter on `target` with `value`.
    pub fn set_to(&self, target: &ObjectRef, value: Value) -> CheckResult<()> {
        let arguments = [value];
        self.method()?
            .invoke(target, &arguments)
            .map(|_| ())
            .map_err(|e| match e {
                InvokeError::ArgumentMismatch { .. } => CheckError::unfulfilled(format!(
                    "{} does not accept '{}'",
                    self, arguments[0]
                )),
                InvokeError::Thrown(thrown) => {
                    CheckError::unfulfilled_by(format!("{} throws an exception", self), thrown)
                }
                other => CheckError::unexpected(&other),
            })
    }
}

impl MemberLocator for SetterLocator {
    fn is_present(&self) -> CheckResult<bool> {
        Ok(self.find()?.is_some())
    }
}

impl Sourced for SetterLocator {
    fn origin(&self) -> Origin {
        self.origin
    }
}

impl fmt::Display for SetterLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namer.exact_name() {
            Some(name) => write!(f, "{}({})", name, self.parameter),
            None => write!(f, "{}", self.namer.description()),
        }
    }
}

impl fmt::Debug for SetterLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetterLocator")
            .field("class", &self.class)
            .field("namer", &self.namer)
            .field("parameter", &self.parameter)
            .field("origin", &self.origin)
            .finish()
    }
}
