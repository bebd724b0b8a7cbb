//! Member options.
//!
//! Each option kind partitions the modifier space: for any member exactly
//! one visibility, one mutability and one scope applies.

use crate::{CheckError, CheckResult, Modifiers};
use std::fmt;

/// An option kind derived from member modifiers.
pub trait OptionKind: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Name of the kind, used in messages.
    const KIND: &'static str;

    /// Every option of this kind.
    fn values() -> &'static [Self];

    /// Returns true if `modifiers` describe this option.
    fn matches(self, modifiers: Modifiers) -> bool;

    /// The single option that applies to `modifiers`.
    fn classify(modifiers: Modifiers) -> CheckResult<Self> {
        let mut matching = Self::values()
            .iter()
            .copied()
            .filter(|option| option.matches(modifiers));
        match (matching.next(), matching.next()) {
            (Some(option), None) => Ok(option),
            _ => Err(CheckError::internal(format!(
                "No single {} corresponds to modifiers '{}'",
                Self::KIND,
                modifiers
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    /// None of the other visibility modifiers.
    Package,
    Private,
}

impl OptionKind for Visibility {
    const KIND: &'static str = "visibility";

    fn values() -> &'static [Self] {
        &[
            Visibility::Public,
            Visibility::Protected,
            Visibility::Package,
            Visibility::Private,
        ]
    }

    fn matches(self, modifiers: Modifiers) -> bool {
        match self {
            Visibility::Public => modifiers.is_public(),
            Visibility::Protected => modifiers.is_protected(),
            Visibility::Private => modifiers.is_private(),
            Visibility::Package => {
                !modifiers.is_public() && !modifiers.is_protected() && !modifiers.is_private()
            }
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Visibility::Public => "PUBLIC",
            Visibility::Protected => "PROTECTED",
            Visibility::Package => "PACKAGE",
            Visibility::Private => "PRIVATE",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    Final,
    NonFinal,
}

impl OptionKind for Mutability {
    const KIND: &'static str = "mutability";

    fn values() -> &'static [Self] {
        &[Mutability::Final, Mutability::NonFinal]
    }

    fn matches(self, modifiers: Modifiers) -> bool {
        match self {
            Mutability::Final => modifiers.is_final(),
            Mutability::NonFinal => !modifiers.is_final(),
        }
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutability::Final => write!(f, "FINAL"),
            Mutability::NonFinal => write!(f, "NON_FINAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Static,
    NonStatic,
}

impl OptionKind for Scope {
    const KIND: &'static str = "scope";

    fn values() -> &'static [Self] {
        &[Scope::Static, Scope::NonStatic]
    }

    fn matches(self, modifiers: Modifiers) -> bool {
        match self {
            Scope::Static => modifiers.is_static(),
            Scope::NonStatic => !modifiers.is_static(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Static => write!(f, "STATIC"),
            Scope::NonStatic => write!(f, "NON_STATIC"),
        }
    }
}

/// Any single option, as passed when declaring a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberOption {
    Visibility(Visibility),
    Mutability(Mutability),
    Scope(Scope),
}

pub const PUBLIC: MemberOption = MemberOption::Visibility(Visibility::Public);
pub const PROTECTED: MemberOption = MemberOption::Visibility(Visibility::Protected);
pub const PACKAGE: MemberOption = MemberOption::Visibility(Visibility::Package);
pub const PRIVATE: MemberOption = MemberOption::Visibility(Visibility::Private);
pub const FINAL: MemberOption = MemberOption::Mutability(Mutability::Final);
pub const NON_FINAL: MemberOption = MemberOption::Mutability(Mutability::NonFinal);
pub const STATIC: MemberOption = MemberOption::Scope(Scope::Static);
pub const NON_STATIC: MemberOption = MemberOption::Scope(Scope::NonStatic);

impl fmt::Display for MemberOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberOption::Visibility(v) => write!(f, "{}", v),
            MemberOption::Mutability(m) => write!(f, "{}", m),
            MemberOption::Scope(s) => write!(f, "{}", s),
        }
    }
}
