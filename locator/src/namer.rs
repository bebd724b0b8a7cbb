//! Naming rules for accessor lookup.

use regex_lite::Regex;

/// Decides which member names an accessor locator accepts.
#[derive(Debug, Clone)]
pub enum Namer {
    /// Exactly this name.
    Exact(String),
    /// Any of a fixed list of conventional names.
    Candidates {
        description: String,
        names: Vec<String>,
    },
    /// Any name the whole pattern matches.
    Pattern { description: String, regex: Regex },
}

impl Namer {
    pub fn exact(name: impl Into<String>) -> Self {
        Namer::Exact(name.into())
    }

    pub fn candidates(description: impl Into<String>, names: Vec<String>) -> Self {
        Namer::Candidates {
            description: description.into(),
            names,
        }
    }

    /// A namer from a user pattern, anchored at both ends.
    pub fn pattern(description: impl Into<String>, pattern: &str) -> Result<Self, regex_lite::Error> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Namer::Pattern {
            description: description.into(),
            regex,
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Namer::Exact(expected) => expected == name,
            Namer::Candidates { names, .. } => names.iter().any(|n| n == name),
            Namer::Pattern { regex, .. } => regex.is_match(name),
        }
    }

    /// The name when only one is accepted.
    pub fn exact_name(&self) -> Option<&str> {
        match self {
            Namer::Exact(name) => Some(name),
            _ => None,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Namer::Exact(name) => name,
            Namer::Candidates { description, .. } | Namer::Pattern { description, .. } => {
                description
            }
        }
    }
}
