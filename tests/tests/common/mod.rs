//! Sample subjects shared by the integration tests.

#![allow(dead_code)]

use vet_tests::prelude::*;

/// A well-behaved bean: private fields, public accessors, a no-argument
/// constructor and one assigning every field.
pub fn point_class() -> Class {
    Class::builder("geo.Point")
        .field("x", &Class::int(), Modifiers::PRIVATE)
        .field("y", &Class::int(), Modifiers::PRIVATE)
        .getter("getX", "x", &Class::int(), Modifiers::PUBLIC)
        .getter("getY", "y", &Class::int(), Modifiers::PUBLIC)
        .setter("setX", "x", &Class::int(), Modifiers::PUBLIC)
        .setter("setY", "y", &Class::int(), Modifiers::PUBLIC)
        .constructor(&[], Modifiers::PUBLIC, |_, _| Ok(()))
        .assigning_constructor(&[("x", Class::int()), ("y", Class::int())], Modifiers::PUBLIC)
        .build()
}

/// The full expectation on [`point_class`].
pub fn point_definition() -> PojoDefinition {
    let mut pojo = PojoDefinition::new(&point_class());
    let x = coordinate(&mut pojo, "x");
    let y = coordinate(&mut pojo, "y");
    pojo.add_constructor_with(Visibility::Public, &[]).unwrap();
    pojo.add_constructor_with(Visibility::Public, &[x, y]).unwrap();
    pojo
}

fn coordinate(pojo: &mut PojoDefinition, name: &str) -> Property {
    pojo.add_property_of(&Class::int(), name)
        .unwrap()
        .with_field(&[PRIVATE, NON_FINAL])
        .unwrap()
        .with_getter(&[PUBLIC])
        .unwrap()
        .with_setter(&[PUBLIC])
        .unwrap()
        .with_default_value(0)
}

/// Names of the tests that did not pass, in execution order.
pub fn problems(report: &RunReport) -> Vec<String> {
    report.problems().map(|case| case.test.clone()).collect()
}

/// Message of the first case of `test`.
pub fn message_of(report: &RunReport, test: &str) -> String {
    report
        .cases_of(test)
        .find_map(|case| case.outcome.message().map(str::to_string))
        .unwrap_or_default()
}
