//! Errors raised while building a definition.

use thiserror::Error;
use vet_core::CheckError;
use vet_registry::TypeError;

/// Errors that can occur during definition construction.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Property {name} is already defined with type {existing}, not {requested}")]
    PropertyTypeConflict {
        name: String,
        existing: String,
        requested: String,
    },

    #[error("Property name {0} is already given to an unnamed property")]
    NameOfUnnamedProperty(String),

    #[error("Already defined constructor on {0}")]
    DuplicateConstructor(String),

    #[error("Not a class, but an interface: {0}")]
    ParentIsInterface(String),

    #[error("Not an interface: {0}")]
    NotAnInterface(String),

    #[error("Only one {kind} may be given, found: {options}")]
    ConflictingOptions { kind: &'static str, options: String },

    #[error("Property {property} has no name, so its {member} needs an explicit name")]
    UnnamedMember {
        property: String,
        member: &'static str,
    },

    #[error("Invalid name pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Subject generator did not produce an object: {0}")]
    NotAnObject(String),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Result type for definition construction.
pub type DefinitionResult<T> = Result<T, DefinitionError>;
