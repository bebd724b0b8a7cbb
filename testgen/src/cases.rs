//! Test case generation.

use crate::{definition_items, Argument, DefinitionItem, Fact};
use log::debug;
use std::fmt;
use vet_core::{CheckError, CheckResult};
use vet_definition::PojoDefinition;

/// Arguments for one run of a test, in the order its facts were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    arguments: Vec<Argument>,
}

impl TestCase {
    pub fn new(arguments: Vec<Argument>) -> Self {
        Self { arguments }
    }

    /// A case with no arguments, for tests that request no facts.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn get(&self, index: usize) -> CheckResult<&Argument> {
        self.arguments.get(index).ok_or_else(|| {
            CheckError::internal(format!(
                "No argument at position {}, the case has {}",
                index,
                self.arguments.len()
            ))
        })
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

/// Lazily yields the distinct cases of a definition for a list of facts.
pub struct TestCases<'d> {
    items: std::vec::IntoIter<DefinitionItem<'d>>,
    facts: Vec<Fact>,
    seen: Vec<TestCase>,
}

impl<'d> Iterator for TestCases<'d> {
    type Item = TestCase;

    fn next(&mut self) -> Option<TestCase> {
        for item in self.items.by_ref() {
            let arguments: Option<Vec<Argument>> =
                self.facts.iter().map(|fact| fact.extract(&item)).collect();
            let Some(arguments) = arguments else {
                continue;
            };
            let case = TestCase::new(arguments);
            if self.seen.contains(&case) {
                continue;
            }
            self.seen.push(case.clone());
            return Some(case);
        }
        None
    }
}

/// Cases for `facts`: one per definition item providing every fact, with
/// duplicates dropped and item order kept.
pub fn generate<'d>(definition: &'d PojoDefinition, facts: &[Fact]) -> TestCases<'d> {
    let items = definition_items(definition);
    debug!(
        "{}: {} definition items for {:?}",
        definition.class(),
        items.len(),
        facts
    );
    TestCases {
        items: items.into_iter(),
        facts: facts.to_vec(),
        seen: Vec::new(),
    }
}
