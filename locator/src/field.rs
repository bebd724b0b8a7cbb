//! Field locator.

use crate::resolve::not_found;
use crate::MemberLocator;
use std::fmt;
use vet_core::{
    CheckError, CheckResult, Class, FieldInfo, InvokeError, Mutability, ObjectRef, OptionKind,
    Origin, Scope, Sourced, Value, Visibility,
};

/// Finds a field declared by the subject class, by exact name.
pub struct FieldLocator {
    class: Class,
    name: String,
    origin: Origin,
}

impl FieldLocator {
    #[track_caller]
    pub fn new(class: &Class, name: impl Into<String>) -> Self {
        Self {
            class: class.clone(),
            name: name.into(),
            origin: Origin::here(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn find(&self) -> Option<&FieldInfo> {
        self.class.field(&self.name)
    }

    fn field(&self) -> CheckResult<&FieldInfo> {
        self.find().ok_or_else(|| not_found(self))
    }

    pub fn field_class(&self) -> CheckResult<Class> {
        Ok(self.field()?.class().clone())
    }

    pub fn visibility(&self) -> CheckResult<Visibility> {
        Visibility::classify(self.field()?.modifiers())
    }

    pub fn mutability(&self) -> CheckResult<Mutability> {
        Mutability::classify(self.field()?.modifiers())
    }

    pub fn scope(&self) -> CheckResult<Scope> {
        Scope::classify(self.field()?.modifiers())
    }

    /// Read the field from `target`.
    pub fn get_from(&self, target: &ObjectRef) -> CheckResult<Value> {
        self.field()?
            .get(target)
            .map_err(|e| CheckError::unexpected(&e))
    }

    /// Write `value` into the field of `target`.
    pub fn set_to(&self, target: &ObjectRef, value: Value) -> CheckResult<()> {
        let field = self.field()?;
        field.set(target, value).map_err(|e| match e {
            InvokeError::ArgumentMismatch { .. } => CheckError::unfulfilled(format!(
                "Field {} only accepts {} values",
                self.name,
                field.class()
            )),
            other => CheckError::unexpected(&other),
        })
    }
}

impl MemberLocator for FieldLocator {
    fn is_present(&self) -> CheckResult<bool> {
        Ok(self.find().is_some())
    }
}

impl Sourced for FieldLocator {
    fn origin(&self) -> Origin {
        self.origin
    }
}

impl fmt::Display for FieldLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field {}", self.name)
    }
}

impl fmt::Debug for FieldLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldLocator")
            .field("class", &self.class)
            .field("name", &self.name)
            .field("origin", &self.origin)
            .finish()
    }
}
