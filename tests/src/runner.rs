//! Runs declared tests against a definition.

use crate::{standard_tests, CaseReport, ContractTest, Failure, Outcome, RunConfig, RunReport};
use log::{debug, info, warn};
use std::rc::Rc;
use vet_core::{Cache, CheckError, CheckResult};
use vet_definition::PojoDefinition;
use vet_testgen::{generate, Fact, Specific, SpecificityComparator, TestCase};

/// Checks a definition against declared tests, one case at a time.
///
/// Tests run in specificity order, so the failures pointing at the
/// simplest mistakes come first. Cases are generated once per fact list
/// and shared between tests requesting the same facts.
pub struct Runner<'d> {
    definition: &'d PojoDefinition,
    tests: Vec<ContractTest>,
    config: RunConfig,
    comparator: SpecificityComparator,
    cases: Cache<Vec<Fact>, Rc<Vec<TestCase>>>,
}

impl<'d> Runner<'d> {
    /// A runner with the standard suite.
    pub fn new(definition: &'d PojoDefinition) -> Self {
        Self::with_tests(definition, standard_tests())
    }

    pub fn with_tests(definition: &'d PojoDefinition, tests: Vec<ContractTest>) -> Self {
        Self {
            definition,
            tests,
            config: RunConfig::default(),
            comparator: SpecificityComparator::new(),
            cases: Cache::new(),
        }
    }

    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_test(mut self, test: ContractTest) -> Self {
        self.tests.push(test);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Selected tests in execution order.
    pub fn ordered_tests(&self) -> CheckResult<Vec<&ContractTest>> {
        let mut tests: Vec<&ContractTest> = self
            .tests
            .iter()
            .filter(|t| self.config.selects(t.name()))
            .collect();
        self.comparator.sort(&mut tests)?;
        Ok(tests)
    }

    /// Cases of `test`; a test without facts gets a single empty case.
    pub fn cases_of(&self, test: &ContractTest) -> Rc<Vec<TestCase>> {
        match test.facts() {
            Some(facts) => self.cases.get_or_insert_with(facts.to_vec(), || {
                Rc::new(generate(self.definition, facts).collect())
            }),
            None => Rc::new(vec![TestCase::empty()]),
        }
    }

    /// Run every selected test. Only a test list that cannot be ordered
    /// fails the run itself; everything else ends up in the report.
    pub fn run(&self) -> CheckResult<RunReport> {
        let mut report = RunReport::new(self.definition.class().name());
        for test in self.ordered_tests()? {
            debug!("Running {}", test.name());
            let cases = self.cases_of(test);
            let results: Vec<(String, Outcome)> = if cases.is_empty() {
                vec![(test.name().to_string(), self.empty_outcome(test))]
            } else {
                cases
                    .iter()
                    .map(|case| (test.describe(case), self.execute(test, case)))
                    .collect()
            };
            for (description, outcome) in results {
                let stop = self.config.fail_fast && outcome.is_problem();
                report.record(CaseReport {
                    test: test.name().to_string(),
                    description,
                    outcome,
                });
                if stop {
                    info!("Stopping after first problem in {}", test.name());
                    return Ok(report);
                }
            }
        }
        info!(
            "{}: {} passed, {} with problems",
            report.subject,
            report.passed(),
            report.problems().count()
        );
        Ok(report)
    }

    fn empty_outcome(&self, test: &ContractTest) -> Outcome {
        info!("No case generated for {}", test.name());
        if self.config.skip_empty {
            Outcome::Skipped {
                reason: "No case generated".to_string(),
            }
        } else {
            Outcome::ConfigurationError {
                message: format!("No case generated for {}", test.name()),
                origin: None,
            }
        }
    }

    /// Run one case and translate its failure into an outcome attributed to
    /// the target argument.
    pub fn execute(&self, test: &ContractTest, case: &TestCase) -> Outcome {
        let failure = match test.run(case) {
            Ok(()) => return Outcome::Passed,
            Err(failure) => failure,
        };
        let target = test.target_argument(case);
        let subject = match target {
            Some(argument) => argument.to_string(),
            None => {
                warn!("Failure of {} cannot be attributed to a definition element", test.name());
                test.name().to_string()
            }
        };
        let origin = target
            .and_then(|argument| argument.origin())
            .map(|origin| origin.to_string());

        match failure {
            Failure::Assertion(message)
            | Failure::Check(CheckError::DefinitionUnfulfilled { message, .. }) => Outcome::Failed {
                message: format!("Definition of {} not fulfilled ==> {}", subject, message),
                origin,
            },
            Failure::Check(CheckError::IncompleteDefinition(message)) => {
                Outcome::ConfigurationError {
                    message: format!("Definition of {} incomplete ==> {}", subject, message),
                    origin,
                }
            }
            Failure::Check(CheckError::Internal(message)) => Outcome::FrameworkDefect {
                message: format!("Unexpected engine failure in {} ==> {}", test.name(), message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensure;
    use pretty_assertions::assert_eq;
    use vet_core::{Class, Modifiers, PRIVATE};

    fn point() -> PojoDefinition {
        let class = Class::builder("geo.Point")
            .field("x", &Class::int(), Modifiers::PUBLIC)
            .build();
        let mut pojo = PojoDefinition::new(&class);
        pojo.add_property_of(&Class::int(), "x")
            .unwrap()
            .with_field(&[PRIVATE])
            .unwrap();
        pojo
    }

    #[test]
    fn test_unfulfilled_is_attributed_to_target() {
        // GIVEN
        let pojo = point();
        let runner = Runner::new(&pojo).with_config(RunConfig::new().with_name_filter("field_"));

        // WHEN
        let report = runner.run().unwrap();

        // THEN
        let failure = report.cases_of("field_visibility").next().unwrap();
        assert_eq!(failure.description, "Field x is PRIVATE");
        match &failure.outcome {
            Outcome::Failed { message, origin } => {
                assert_eq!(
                    message,
                    "Definition of Field x not fulfilled ==> expected: <PRIVATE> but was: <PUBLIC>"
                );
                assert!(origin.as_deref().unwrap().contains("runner.rs"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_error_families() {
        let pojo = point();
        let runner = Runner::with_tests(&pojo, vec![]);
        let incomplete = ContractTest::standalone("incomplete", |_| {
            Err(CheckError::incomplete("No generator registered for key").into())
        });
        let internal =
            ContractTest::standalone("internal", |_| Err(CheckError::internal("broken").into()));

        assert_eq!(
            runner.execute(&incomplete, &TestCase::empty()),
            Outcome::ConfigurationError {
                message: "Definition of incomplete incomplete ==> No generator registered for key"
                    .to_string(),
                origin: None,
            }
        );
        assert!(matches!(
            runner.execute(&internal, &TestCase::empty()),
            Outcome::FrameworkDefect { .. }
        ));
    }

    #[test]
    fn test_empty_tests_are_skipped_or_reported() {
        let pojo = point();
        let setter_only = || {
            ContractTest::new("setters", &[Fact::Setter], |_| ensure(false, "unreachable"))
        };

        let report = Runner::with_tests(&pojo, vec![setter_only()]).run().unwrap();
        assert_eq!(report.skipped(), 1);
        assert!(report.is_success());

        let report = Runner::with_tests(&pojo, vec![setter_only()])
            .with_config(RunConfig::new().with_skip_empty(false))
            .run()
            .unwrap();
        assert_eq!(report.configuration_errors(), 1);
    }

    #[test]
    fn test_fail_fast_stops_at_first_problem() {
        let pojo = point();
        let report = Runner::new(&pojo)
            .with_config(RunConfig::new().with_fail_fast(true))
            .run()
            .unwrap();
        assert_eq!(report.problems().count(), 1);
        assert_eq!(report.cases.last().unwrap().test, "field_visibility");
    }

    #[test]
    fn test_cases_are_shared_between_tests() {
        let pojo = point();
        let runner = Runner::new(&pojo);
        let a = ContractTest::new("a", &[Fact::Field], |_| Ok(()));
        let b = ContractTest::new("b", &[Fact::Field], |_| Ok(()));
        assert!(Rc::ptr_eq(&runner.cases_of(&a), &runner.cases_of(&b)));
    }
}
