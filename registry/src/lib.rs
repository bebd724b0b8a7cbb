//! vet Type Registry
//!
//! The registry maps classes to [`Type`]s, the unit the engine uses to
//! produce and vary values. A type knows how to create a first value (its
//! [`Generator`]) and how to derive a different one from any value (its
//! [`Modifier`]). The [`Factory`] preloads types for the basic classes and
//! extends array classes automatically.

mod error;
mod factory;
mod generator;
mod library;
mod types;

pub use error::*;
pub use factory::*;
pub use generator::*;
pub use library::*;
pub use types::*;
