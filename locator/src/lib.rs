//! vet Member Locators
//!
//! A locator knows how to find one member of a subject class: a field by
//! name, a getter or setter by naming rule, or a constructor by parameter
//! types. Once found, it reports the member's options and gives access to
//! it. Every failure is reported as a check error carrying the member's
//! signature.

mod constructor;
mod field;
mod getter;
mod namer;
mod resolve;
mod setter;

pub use constructor::*;
pub use field::*;
pub use getter::*;
pub use namer::*;
pub use setter::*;

use std::fmt;
use vet_core::{CheckResult, Sourced};

/// Behavior shared by every locator. `Display` renders the signature.
pub trait MemberLocator: Sourced + fmt::Display {
    /// Returns false when no member matches; fails when several do.
    fn is_present(&self) -> CheckResult<bool>;
}
