//! Test Case Generation for vet
//!
//! This crate turns a definition into test cases:
//! - Walks every combination of parent class, interface, constructor and
//!   property of a definition
//! - Extracts the facts a test asks for from each combination
//! - Keeps the combinations that provide all of them, without duplicates
//! - Orders tests so that simpler expectations are checked first

mod argument;
mod cases;
mod fact;
mod item;
mod specificity;

pub use argument::*;
pub use cases::*;
pub use fact::*;
pub use item::*;
pub use specificity::*;
