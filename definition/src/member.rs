//! Member definitions: a locator plus the options the member must have.

use crate::{DefinitionError, DefinitionResult};
use std::fmt;
use std::rc::Rc;
use vet_core::{MemberOption, Mutability, Scope, Visibility};
use vet_locator::{FieldLocator, GetterLocator, SetterLocator};

/// Expected options of a member. Absent options are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    pub visibility: Option<Visibility>,
    pub mutability: Option<Mutability>,
    pub scope: Option<Scope>,
}

impl Constraints {
    /// At most one option of each kind may be given; repeats are fine.
    pub fn from_options(options: &[MemberOption]) -> DefinitionResult<Self> {
        let mut distinct: Vec<MemberOption> = Vec::new();
        for option in options {
            if !distinct.contains(option) {
                distinct.push(*option);
            }
        }
        Ok(Self {
            visibility: pick(&distinct, "visibility", |o| match o {
                MemberOption::Visibility(v) => Some(*v),
                _ => None,
            })?,
            mutability: pick(&distinct, "mutability", |o| match o {
                MemberOption::Mutability(m) => Some(*m),
                _ => None,
            })?,
            scope: pick(&distinct, "scope", |o| match o {
                MemberOption::Scope(s) => Some(*s),
                _ => None,
            })?,
        })
    }
}

fn pick<T: Copy + fmt::Display>(
    options: &[MemberOption],
    kind: &'static str,
    select: impl Fn(&MemberOption) -> Option<T>,
) -> DefinitionResult<Option<T>> {
    let found: Vec<T> = options.iter().filter_map(select).collect();
    match found.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        many => Err(DefinitionError::ConflictingOptions {
            kind,
            options: many
                .iter()
                .map(|o| o.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

/// A member the subject must declare, with its expected options.
#[derive(Debug)]
pub struct MemberDefinition<L> {
    locator: Rc<L>,
    constraints: Constraints,
}

pub type FieldDefinition = MemberDefinition<FieldLocator>;
pub type GetterDefinition = MemberDefinition<GetterLocator>;
pub type SetterDefinition = MemberDefinition<SetterLocator>;

impl<L> MemberDefinition<L> {
    pub fn new(locator: L, options: &[MemberOption]) -> DefinitionResult<Self> {
        Ok(Self {
            locator: Rc::new(locator),
            constraints: Constraints::from_options(options)?,
        })
    }

    pub fn locator(&self) -> &Rc<L> {
        &self.locator
    }

    pub fn constraints(&self) -> Constraints {
        self.constraints
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.constraints.visibility
    }

    pub fn mutability(&self) -> Option<Mutability> {
        self.constraints.mutability
    }

    pub fn scope(&self) -> Option<Scope> {
        self.constraints.scope
    }
}
