//! Specificity ordering of tests.
//!
//! Tests that only check the subject class come first, then tests about
//! constructors, then tests about fields, getters and setters in growing
//! combinations. Within a category fewer facts come first, then facts
//! earlier in the catalog, then the test name.

use crate::Fact;
use std::cmp::Ordering;
use vet_core::{Cache, CheckError, CheckResult};

/// Coarse specificity classes, least specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    PojoClass,
    ConstructorOnly,
    ConstructorWithField,
    ConstructorWithGetter,
    ConstructorWithFieldAndGetter,
    FieldOnly,
    GetterOnly,
    FieldAndGetter,
    SetterOnly,
    FieldAndSetter,
    GetterAndSetter,
    FieldGetterAndSetter,
}

impl Category {
    /// The first category whose predicate `facts` satisfy.
    pub fn of(facts: &[Fact]) -> CheckResult<Category> {
        let has = |fact: Fact| facts.contains(&fact);
        let constructor = has(Fact::Constructor) || has(Fact::DefaultConstructor);
        let field = has(Fact::Field) || has(Fact::MutableField);
        let getter = has(Fact::Getter);
        let setter = has(Fact::Setter);

        let category = if has(Fact::PojoClass) {
            Category::PojoClass
        } else if constructor {
            match (field, getter) {
                (false, false) => Category::ConstructorOnly,
                (true, false) => Category::ConstructorWithField,
                (false, true) => Category::ConstructorWithGetter,
                (true, true) => Category::ConstructorWithFieldAndGetter,
            }
        } else {
            match (field, getter, setter) {
                (true, false, false) => Category::FieldOnly,
                (false, true, false) => Category::GetterOnly,
                (true, true, false) => Category::FieldAndGetter,
                (false, false, true) => Category::SetterOnly,
                (true, false, true) => Category::FieldAndSetter,
                (false, true, true) => Category::GetterAndSetter,
                (true, true, true) => Category::FieldGetterAndSetter,
                (false, false, false) => {
                    return Err(CheckError::internal(format!(
                        "Situation not considered for test specificity: {:?}",
                        facts
                    )))
                }
            }
        };
        Ok(category)
    }
}

/// Anything that can be ordered by specificity.
pub trait Specific {
    fn test_name(&self) -> &str;

    /// Requested facts, or `None` for tests that take no generated cases.
    fn facts(&self) -> Option<&[Fact]>;
}

impl<T: Specific + ?Sized> Specific for &T {
    fn test_name(&self) -> &str {
        (**self).test_name()
    }

    fn facts(&self) -> Option<&[Fact]> {
        (**self).facts()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct FactsKey {
    category: Category,
    count: usize,
    priorities: Vec<usize>,
}

/// Compares tests by specificity, remembering what it derived for each
/// fact list.
pub struct SpecificityComparator {
    keys: Cache<Vec<Fact>, FactsKey>,
}

impl SpecificityComparator {
    pub fn new() -> Self {
        Self { keys: Cache::new() }
    }

    fn key(&self, facts: &[Fact]) -> CheckResult<FactsKey> {
        self.keys.try_get_or_insert_with(facts.to_vec(), || {
            let mut priorities: Vec<usize> = facts.iter().map(|f| f.priority()).collect();
            priorities.sort_unstable();
            Ok(FactsKey {
                category: Category::of(facts)?,
                count: facts.len(),
                priorities,
            })
        })
    }

    /// Order two fact lists, ignoring test names.
    pub fn compare_facts(&self, a: &[Fact], b: &[Fact]) -> CheckResult<Ordering> {
        Ok(self.key(a)?.cmp(&self.key(b)?))
    }

    /// Tests with facts come before tests without; names break ties.
    pub fn compare<T: Specific + ?Sized>(&self, a: &T, b: &T) -> CheckResult<Ordering> {
        let by_facts = match (a.facts(), b.facts()) {
            (Some(fa), Some(fb)) => self.compare_facts(fa, fb)?,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        Ok(by_facts.then_with(|| a.test_name().cmp(b.test_name())))
    }

    /// Sort `tests` in place. Every fact list is classified before sorting,
    /// so an unclassifiable test fails the whole sort.
    pub fn sort<T: Specific>(&self, tests: &mut [T]) -> CheckResult<()> {
        for test in tests.iter() {
            if let Some(facts) = test.facts() {
                self.key(facts)?;
            }
        }
        tests.sort_by(|a, b| self.compare(a, b).unwrap_or(Ordering::Equal));
        Ok(())
    }
}

impl Default for SpecificityComparator {
    fn default() -> Self {
        Self::new()
    }
}
