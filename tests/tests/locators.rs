//! Locator integration tests.
//!
//! Ambiguous, missing and misbehaving members, reached through the
//! locators a definition declares.

use vet_locator::{GetterLocator, MemberLocator, Namer, SetterLocator};
use vet_tests::prelude::*;

mod ambiguity {
    use super::*;

    fn overloaded() -> Class {
        Class::builder("box.Box")
            .field("value", &Class::object(), Modifiers::PRIVATE)
            .setter("setValue", "value", &Class::int(), Modifiers::PUBLIC)
            .setter("setValue", "value", &Class::string(), Modifiers::PUBLIC)
            .getter("value", "value", &Class::object(), Modifiers::PUBLIC)
            .getter("getValue", "value", &Class::object(), Modifiers::PUBLIC)
            .build()
    }

    const SETTERS: &str = "More than one setter found, consider constraining type: \
        [public void box.Box.setValue(String), public void box.Box.setValue(int)]";

    #[test]
    fn test_unconstrained_setter_reports_every_candidate() {
        // GIVEN
        let factory = Factory::new();
        let class = overloaded();
        let setter = SetterLocator::new(&class, Namer::exact("setValue"), &factory.types().named("value"));
        let target = ObjectRef::allocate(&class);

        // THEN
        assert_eq!(setter.is_present().unwrap_err().to_string(), SETTERS);
        assert_eq!(setter.parameter_class().unwrap_err().to_string(), SETTERS);
        assert_eq!(setter.visibility().unwrap_err().to_string(), SETTERS);
        let error = setter.set_to(&target, Value::Int(1)).unwrap_err();
        assert!(error.is_unfulfilled());
        assert_eq!(error.to_string(), SETTERS);
    }

    #[test]
    fn test_constrained_setter_picks_the_overload() {
        let factory = Factory::new();
        let class = overloaded();
        let setter = SetterLocator::new(&class, Namer::exact("setValue"), &factory.types().from(&Class::string()));
        let target = ObjectRef::allocate(&class);

        setter.set_to(&target, Value::from("boxed")).unwrap();

        assert_eq!(setter.parameter_class().unwrap(), Class::string());
        assert_eq!(target.get("value"), Value::from("boxed"));
    }

    #[test]
    fn test_conventional_getter_names_can_collide() {
        // GIVEN
        let mut pojo = PojoDefinition::new(&overloaded());
        let value = pojo
            .add_property_of(&Class::object(), "value")
            .unwrap()
            .with_getter(&[])
            .unwrap();

        // WHEN
        let getter = value.getter().unwrap();
        let error = getter.locator().is_present().unwrap_err();

        // THEN
        assert_eq!(
            error.to_string(),
            "More than one getter found, consider constraining type: \
             [public Object box.Box.getValue(), public Object box.Box.value()]"
        );
    }
}

mod naming {
    use super::*;

    fn account() -> Class {
        Class::builder("bank.Account")
            .field("active", &Class::boolean(), Modifiers::PRIVATE)
            .field("owner", &Class::string(), Modifiers::PRIVATE)
            .getter("isActive", "active", &Class::boolean(), Modifiers::PUBLIC)
            .getter("fetchOwner", "owner", &Class::string(), Modifiers::PUBLIC)
            .setter("withOwner", "owner", &Class::string(), Modifiers::PUBLIC)
            .build()
    }

    #[test]
    fn test_boolean_getters_may_start_with_is() {
        let mut pojo = PojoDefinition::new(&account());
        let active = pojo
            .add_property_of(&Class::boolean(), "active")
            .unwrap()
            .with_getter(&[PUBLIC])
            .unwrap();
        assert!(active.getter().unwrap().locator().is_present().unwrap());
    }

    #[test]
    fn test_is_prefix_is_reserved_to_booleans() {
        let class = Class::builder("bank.Account")
            .getter("isOwner", "owner", &Class::string(), Modifiers::PUBLIC)
            .build();
        let mut pojo = PojoDefinition::new(&class);
        let owner = pojo
            .add_property_of(&Class::string(), "owner")
            .unwrap()
            .with_getter(&[])
            .unwrap();
        assert!(!owner.getter().unwrap().locator().is_present().unwrap());
    }

    #[test]
    fn test_explicit_and_pattern_names() {
        // GIVEN
        let mut pojo = PojoDefinition::new(&account());
        let owner = pojo
            .add_property_of(&Class::string(), "owner")
            .unwrap()
            .with_getter_matching("fetch.*", &[])
            .unwrap()
            .with_setter_named("withOwner", &[])
            .unwrap();
        let target = ObjectRef::allocate(pojo.class());

        // WHEN
        let setter = owner.setter().unwrap();
        let getter = owner.getter().unwrap();
        setter.locator().set_to(&target, Value::from("ada")).unwrap();

        // THEN
        assert_eq!(getter.locator().get_from(&target).unwrap(), Value::from("ada"));
        assert_eq!(getter.locator().to_string(), "getter matching fetch.*");
        assert_eq!(setter.locator().to_string(), "withOwner(String)");
    }

    #[test]
    fn test_partial_pattern_match_is_not_enough() {
        let getter = GetterLocator::new(&account(), Namer::pattern("owner", "Owner").unwrap());
        assert!(!getter.is_present().unwrap());
    }
}

mod failures {
    use super::*;

    fn fragile() -> Class {
        Class::builder("io.Fragile")
            .field("size", &Class::int(), Modifiers::PRIVATE)
            .method("getSize", &[], &Class::int(), Modifiers::PUBLIC, |_, _| {
                Err(Thrown::new("closed"))
            })
            .setter("setSize", "size", &Class::int(), Modifiers::PUBLIC)
            .build()
    }

    #[test]
    fn test_throwing_getter_keeps_its_cause() {
        // GIVEN
        let getter = GetterLocator::new(&fragile(), Namer::exact("getSize"));
        let target = ObjectRef::allocate(&fragile());

        // WHEN
        let error = getter.get_from(&target).unwrap_err();

        // THEN
        assert_eq!(error.to_string(), "getSize() throws an exception");
        match error {
            CheckError::DefinitionUnfulfilled { cause, .. } => {
                assert_eq!(cause.unwrap().message(), "closed")
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_setter_rejects_values_of_another_kind() {
        let factory = Factory::new();
        let setter = SetterLocator::new(&fragile(), Namer::exact("setSize"), &factory.types().from(&Class::int()));
        let target = ObjectRef::allocate(&fragile());
        assert_eq!(
            setter.set_to(&target, Value::from("big")).unwrap_err().to_string(),
            "setSize(int) does not accept 'big'"
        );
    }

    #[test]
    fn test_missing_members() {
        let factory = Factory::new();
        let getter = GetterLocator::new(&fragile(), Namer::exact("getWeight"));
        let setter = SetterLocator::new(&fragile(), Namer::exact("setSize"), &factory.types().from(&Class::long()));
        assert!(!getter.is_present().unwrap());
        assert_eq!(getter.return_class().unwrap_err().to_string(), "getWeight() not found");
        assert!(!setter.is_present().unwrap());
    }
}
