//! Getter locator.

use crate::resolve::{not_found, single};
use crate::{MemberLocator, Namer};
use log::debug;
use std::fmt;
use vet_core::{
    CheckError, CheckResult, Class, InvokeError, MethodInfo, Mutability, ObjectRef, OptionKind,
    Origin, Scope, Sourced, Value, Visibility,
};

/// Finds a no-argument method whose name the namer accepts.
pub struct GetterLocator {
    class: Class,
    namer: Namer,
    origin: Origin,
}

impl GetterLocator {
    #[track_caller]
    pub fn new(class: &Class, namer: Namer) -> Self {
        Self {
            class: class.clone(),
            namer,
            origin: Origin::here(),
        }
    }

    pub fn namer(&self) -> &Namer {
        &self.namer
    }

    pub fn find(&self) -> CheckResult<Option<&MethodInfo>> {
        let candidates = self
            .class
            .methods()
            .iter()
            .filter(|m| m.parameters().is_empty() && self.namer.matches(m.name()))
            .collect();
        single("getter", candidates)
    }

    fn method(&self) -> CheckResult<&MethodInfo> {
        let method = self.find()?.ok_or_else(|| not_found(self))?;
        debug!("{} resolved to {}", self, method);
        Ok(method)
    }

    pub fn return_class(&self) -> CheckResult<Class> {
        Ok(self.method()?.return_class().clone())
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

    /// Call the getter on `target`.
    pub fn get_from(&self, target: &ObjectRef) -> CheckResult<Value> {
        self.method()?.invoke(target, &[]).map_err(|e| match e {
            InvokeError::Thrown(thrown) => {
                CheckError::unfulfilled_by(format!("{} throws an exception", self), thrown)
            }
            other => CheckError::unexpected(&other),
        })
    }
}

impl MemberLocator for GetterLocator {
    fn is_present(&self) -> CheckResult<bool> {
        Ok(self.find()?.is_some())
    }
}

impl Sourced for GetterLocator {
    fn origin(&self) -> Origin {
        self.origin
    }
}

impl fmt::Display for GetterLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namer.exact_name() {
            Some(name) => write!(f, "{}()", name),
            None => write!(f, "{}", self.namer.description()),
        }
    }
}

impl fmt::Debug for GetterLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetterLocator")
            .field("class", &self.class)
            .field("namer", &self.namer)
            .field("origin", &self.origin)
            .finish()
    }
}
