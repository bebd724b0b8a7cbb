//! vet Core Types
//!
//! This crate provides the foundational types used throughout vet:
//! - Runtime values (the Value enum with scalar, container and object variants)
//! - Class descriptors with fields, methods and constructors
//! - Member options (visibility, mutability, scope) derived from modifiers
//! - Check errors shared by every layer of the engine
//! - A compute-once cache and declaration origins

mod cache;
mod class;
mod error;
mod options;
mod origin;
mod value;

pub use cache::*;
pub use class::*;
pub use error::*;
pub use options::*;
pub use origin::*;
pub use value::*;
