//! Picking the single member among candidates.

use std::fmt;
use vet_core::{CheckError, CheckResult};

/// The only candidate, none, or an ambiguity listing all candidates in a
/// stable order.
pub(crate) fn single<'m, M: fmt::Display>(
    kind: &str,
    mut candidates: Vec<&'m M>,
) -> CheckResult<Option<&'m M>> {
    if candidates.len() <= 1 {
        return Ok(candidates.pop());
    }
    let mut described: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
    described.sort();
    Err(CheckError::unfulfilled(format!(
        "More than one {} found, consider constraining type: [{}]",
        kind,
        described.join(", ")
    )))
}

pub(crate) fn not_found(signature: impl fmt::Display) -> CheckError {
    CheckError::unfulfilled(format!("{} not found", signature))
}
