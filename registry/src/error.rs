//! Errors raised while configuring types.

use thiserror::Error;

/// Errors that can occur when attaching behavior to a type.
#[derive(Debug, Clone, Error)]
pub enum TypeError {
    #[error("A generator is already set on type {0}")]
    GeneratorAlreadySet(String),

    #[error("A modifier is already set on type {0}")]
    ModifierAlreadySet(String),
}

/// Result type for type configuration.
pub type TypeResult<T> = Result<T, TypeError>;
