//! Error types for vet.

use thiserror::Error;

/// Failure raised by the body of a subject member.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct Thrown {
    message: String,
}

impl Thrown {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors from reflective access to a member.
#[derive(Debug, Clone, Error)]
pub enum InvokeError {
    #[error("wrong number of arguments: expected {expected}, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("argument type mismatch at position {index}")]
    ArgumentMismatch { index: usize },

    #[error("member threw: {0}")]
    Thrown(Thrown),

    #[error("illegal access: {0}")]
    IllegalAccess(String),

    #[error("object is not an instance of declaring class {0}")]
    TargetMismatch(String),
}

/// The three families every failing check reports as.
///
/// Unfulfilled means the subject does not meet its definition, incomplete
/// means the definition lacks something needed to check it, and internal
/// means the engine itself misbehaved.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    #[error("{message}")]
    DefinitionUnfulfilled {
        message: String,
        #[source]
        cause: Option<Thrown>,
    },

    #[error("{0}")]
    IncompleteDefinition(String),

    #[error("{0}")]
    Internal(String),
}

impl CheckError {
    pub fn unfulfilled(message: impl Into<String>) -> Self {
        CheckError::DefinitionUnfulfilled {
            message: message.into(),
            cause: None,
        }
    }

    /// Unfulfilled because a member body failed.
    pub fn unfulfilled_by(message: impl Into<String>, cause: Thrown) -> Self {
        CheckError::DefinitionUnfulfilled {
            message: message.into(),
            cause: Some(cause),
        }
    }

    pub fn incomplete(message: impl Into<String>) -> Self {
        CheckError::IncompleteDefinition(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CheckError::Internal(message.into())
    }

    /// The catch-all for invocation failures no locator anticipates.
    pub fn unexpected(error: &InvokeError) -> Self {
        CheckError::Internal(format!("Something unexpected occurred: {}", error))
    }

    pub fn is_unfulfilled(&self) -> bool {
        matches!(self, CheckError::DefinitionUnfulfilled { .. })
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, CheckError::IncompleteDefinition(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, CheckError::Internal(_))
    }

    /// Prefix the message while keeping the family and cause.
    pub fn context(self, prefix: impl std::fmt::Display) -> Self {
        match self {
            CheckError::DefinitionUnfulfilled { message, cause } => {
                CheckError::DefinitionUnfulfilled {
                    message: format!("{}: {}", prefix, message),
                    cause,
                }
            }
            CheckError::IncompleteDefinition(message) => {
                CheckError::IncompleteDefinition(format!("{}: {}", prefix, message))
            }
            CheckError::Internal(message) => {
                CheckError::Internal(format!("{}: {}", prefix, message))
            }
        }
    }
}

/// Result type for checks.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors from the compute-once cache.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("No value cached for {0}")]
    Missing(String),
}
