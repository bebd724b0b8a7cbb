//! Generation integration tests.
//!
//! Types, generators and modifiers of the factory, and the cases generated
//! from the cross product of a definition.

mod common;

use vet_tests::prelude::*;

mod type_identity {
    use super::*;

    #[test]
    fn test_class_types_are_shared_and_named_types_are_not() {
        // GIVEN
        let factory = Factory::new();
        let point = common::point_class();

        // THEN
        assert_eq!(factory.types().from(&point), factory.types().from(&point));
        assert_eq!(
            factory.types().from(&Class::int()),
            factory.types().from(&Class::int())
        );
        assert_ne!(factory.types().named("id"), factory.types().named("id"));
    }

    #[test]
    fn test_definitions_sharing_a_factory_share_types() {
        let factory = Factory::new();
        let a = PojoDefinition::with_factory(&common::point_class(), factory.clone());
        let b = PojoDefinition::with_factory(&Class::builder("geo.Line").build(), factory);
        assert_eq!(a.types().from(&Class::long()), b.types().from(&Class::long()));
    }
}

mod modifiers {
    use super::*;

    fn basic_classes() -> Vec<Class> {
        let mut classes: Vec<Class> = ValueKind::ALL
            .iter()
            .flat_map(|kind| [Class::primitive(*kind), Class::boxed(*kind)])
            .collect();
        classes.push(Class::string());
        classes.push(Class::object());
        classes
    }

    #[test]
    fn test_no_builtin_modifier_has_a_fixpoint() {
        let factory = Factory::new();
        for class in basic_classes() {
            // GIVEN
            let ty = factory.types().from(&class);
            let modifier = ty.modifier().unwrap();
            let mut value = ty.generator().unwrap().create().unwrap();

            for _ in 0..100 {
                // WHEN
                let next = modifier.modify(&value).unwrap();

                // THEN
                assert_ne!(next, value, "{} modifier is stuck on {}", class, value);
                value = next;
            }
        }
    }

    #[test]
    fn test_no_container_modifier_has_a_fixpoint() {
        let factory = Factory::new();
        let generators = factory.generator();
        let modifiers = factory.modifier();
        let boolean_array = factory.types().from(&Class::array_of(&Class::boolean()));
        let containers: Vec<(&str, Generator, Modifier)> = vec![
            (
                "List<int>",
                generators.of_lists_of(&Class::int()),
                modifiers.of_lists_of(&Class::int()),
            ),
            (
                "Set<boolean>",
                generators.of_sets_of(&Class::boolean()),
                modifiers.of_sets_of(&Class::boolean()),
            ),
            (
                "Set<String>",
                generators.of_sets_of(&Class::string()),
                modifiers.of_sets_of(&Class::string()),
            ),
            (
                "Map<boolean, boolean>",
                generators.of_maps_of(&Class::boolean(), &Class::boolean()),
                modifiers.of_maps_of(&Class::boolean(), &Class::boolean()),
            ),
            (
                "Map<boolean, String>",
                generators.of_maps_of(&Class::boolean(), &Class::string()),
                modifiers.of_maps_of(&Class::boolean(), &Class::string()),
            ),
            (
                "boolean[]",
                boolean_array.generator().unwrap(),
                boolean_array.modifier().unwrap(),
            ),
        ];

        for (label, generator, modifier) in containers {
            // GIVEN
            let mut value = generator.create().unwrap();

            for _ in 0..100 {
                // WHEN
                let next = modifier.modify(&value).unwrap();

                // THEN
                assert_ne!(next, value, "{} modifier is stuck on {}", label, value);
                value = next;
            }
        }
    }

    #[test]
    fn test_integers_cycle_back_to_the_seed() {
        // GIVEN
        let factory = Factory::new();
        let ty = factory.types().from(&Class::int());
        let seed = ty.generator().unwrap().create().unwrap();
        let modifier = ty.modifier().unwrap();

        // WHEN
        let mut value = seed.clone();
        let mut visited = Vec::new();
        for _ in 0..10 {
            value = modifier.modify(&value).unwrap();
            visited.push(value.clone());
        }

        // THEN
        assert_eq!(seed, Value::Int(0));
        assert_eq!(value, seed);
        assert_eq!(visited[..9].to_vec(), (1..10).map(Value::Int).collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_generator_is_an_incomplete_definition() {
        let factory = Factory::new();
        let ty = factory.types().named("token");
        let error = ty.generator().unwrap_err();
        assert!(error.is_incomplete());
        assert_eq!(error.to_string(), "No generator registered for token");
    }
}

mod cross_product {
    use super::*;

    fn definition(constructors: usize, interfaces: usize) -> PojoDefinition {
        let mut class = Class::builder("inventory.Item");
        let mut interface_classes = Vec::new();
        for i in 0..interfaces {
            let interface = Class::interface(format!("inventory.Tagged{}", i)).build();
            class = class.implements(&interface);
            interface_classes.push(interface);
        }
        let mut pojo = PojoDefinition::new(&class.build());
        pojo.set_parent_class(&Class::object()).unwrap();
        pojo.add_interfaces(&interface_classes).unwrap();

        let mut properties = Vec::new();
        for name in ["a", "b", "c", "d"] {
            properties.push(pojo.add_property_of(&Class::int(), name).unwrap());
        }
        properties[0].with_field(&[PRIVATE]).unwrap();
        properties[1].with_field(&[PUBLIC]).unwrap();
        properties[2].with_field(&[]).unwrap();
        properties[3].with_getter(&[PUBLIC]).unwrap();

        for arity in 0..constructors {
            pojo.add_constructor(&properties[..arity]).unwrap();
        }
        pojo
    }

    #[test]
    fn test_rows_count_matching_properties_only() {
        for constructors in 0..3 {
            for interfaces in 0..3 {
                // GIVEN
                let pojo = definition(constructors, interfaces);

                // WHEN
                let with_visibility = generate(&pojo, &[Fact::Field, Fact::FieldVisibility]).count();
                let with_field = generate(&pojo, &[Fact::Field]).count();
                let with_name = generate(&pojo, &[Fact::Property]).count();

                // THEN
                assert_eq!(with_visibility, 2, "{} constructors, {} interfaces", constructors, interfaces);
                assert_eq!(with_field, 3);
                assert_eq!(with_name, 4);
            }
        }
    }

    #[test]
    fn test_interfaces_multiply_interface_facts_only() {
        let pojo = definition(2, 3);
        assert_eq!(generate(&pojo, &[Fact::PojoClass, Fact::PojoInterface]).count(), 3);
        assert_eq!(generate(&pojo, &[Fact::PojoClass, Fact::PojoParentClass]).count(), 1);
        assert_eq!(generate(&pojo, &[Fact::Constructor]).count(), 2);
    }

    #[test]
    fn test_generation_is_repeatable() {
        // GIVEN
        let pojo = common::point_definition();
        let facts = [
            Fact::Getter,
            Fact::Setter,
            Fact::PojoGenerator,
            Fact::ValueGenerator,
            Fact::ValueModifier,
        ];

        // WHEN
        let first: Vec<TestCase> = generate(&pojo, &facts).collect();
        let second: Vec<TestCase> = generate(&pojo, &facts).collect();

        // THEN
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }
}

mod correlation {
    use super::*;

    #[test]
    fn test_parameter_index_requires_the_constructor_to_take_the_property() {
        // GIVEN
        let class = Class::builder("shop.Order")
            .field("a", &Class::int(), Modifiers::PRIVATE)
            .field("b", &Class::string(), Modifiers::PRIVATE)
            .field("c", &Class::long(), Modifiers::PRIVATE)
            .build();
        let mut pojo = PojoDefinition::new(&class);
        let a = pojo.add_property_of(&Class::int(), "a").unwrap();
        let b = pojo.add_property_of(&Class::string(), "b").unwrap();
        pojo.add_property_of(&Class::long(), "c").unwrap();
        pojo.add_constructor(&[a, b]).unwrap();

        // WHEN
        let indexes: Vec<(String, usize)> =
            generate(&pojo, &[Fact::Property, Fact::ConstructorParameterIndex])
                .map(|case| {
                    (
                        case.get(0).unwrap().as_name().unwrap().clone(),
                        *case.get(1).unwrap().as_index().unwrap(),
                    )
                })
                .collect();

        // THEN
        assert_eq!(indexes, vec![("a".to_string(), 0), ("b".to_string(), 1)]);
    }

    #[test]
    fn test_constructor_parameters_vary_together() {
        let pojo = common::point_definition();
        let constructor = &pojo.constructors()[1];
        let parameters = constructor.parameters_generator().create().unwrap();
        let modified = constructor.parameters_modifier().modify(&parameters).unwrap();
        assert_eq!(parameters, Value::List(vec![Value::Int(0), Value::Int(0)]));
        assert_eq!(modified, Value::List(vec![Value::Int(1), Value::Int(1)]));
    }
}
