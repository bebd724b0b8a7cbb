//! Declaration origins.
//!
//! Every definition element remembers the source location that declared it,
//! so a failing check can point at the declaration instead of the engine.

use std::fmt;
use std::panic::Location;

/// Source location of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    location: &'static Location<'static>,
}

impl Origin {
    /// Location of the outermost `#[track_caller]` frame.
    #[track_caller]
    pub fn here() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    pub fn column(&self) -> u32 {
        self.location.column()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file(), self.line(), self.column())
    }
}

/// Anything that knows where it was declared.
pub trait Sourced {
    fn origin(&self) -> Origin;
}
