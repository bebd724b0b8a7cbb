//! vet Definitions
//!
//! A [`PojoDefinition`] declares what a subject class is expected to look
//! like: its parent and interfaces, its properties with their fields and
//! accessors, and its constructors. Definitions are built incrementally and
//! are only checked later, when test cases run against them.

mod constructor;
mod error;
mod member;
mod pojo;
mod property;

pub use constructor::*;
pub use error::*;
pub use member::*;
pub use pojo::*;
pub use property::*;
