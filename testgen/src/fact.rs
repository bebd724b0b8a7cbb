//! Facts: the catalog of things a test can ask a definition item for.

use crate::{Argument, DefinitionItem};
use std::fmt;
use vet_core::Mutability;

/// One kind of fact. The declaration order is the priority order used when
/// comparing tests of equal specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fact {
    Constructor,
    ConstructorVisibility,
    DefaultConstructor,
    /// Position of the item's property among the constructor parameters.
    ConstructorParameterIndex,
    /// Field of a property the constructor takes.
    ConstructorField,
    /// Getter of a property the constructor takes.
    ConstructorGetter,
    ConstructorParametersGenerator,
    ConstructorParametersModifier,
    Field,
    /// Field expected to be non-final.
    MutableField,
    FieldScope,
    FieldMutability,
    FieldVisibility,
    Getter,
    GetterScope,
    GetterMutability,
    GetterVisibility,
    Setter,
    SetterScope,
    SetterMutability,
    SetterVisibility,
    Property,
    Class,
    DefaultValue,
    PojoClass,
    PojoParentClass,
    PojoInterface,
    PojoGenerator,
    ValueGenerator,
    ValueModifier,
}

impl Fact {
    /// Every fact, in priority order.
    pub const ALL: [Fact; 30] = [
        Fact::Constructor,
        Fact::ConstructorVisibility,
        Fact::DefaultConstructor,
        Fact::ConstructorParameterIndex,
        Fact::ConstructorField,
        Fact::ConstructorGetter,
        Fact::ConstructorParametersGenerator,
        Fact::ConstructorParametersModifier,
        Fact::Field,
        Fact::MutableField,
        Fact::FieldScope,
        Fact::FieldMutability,
        Fact::FieldVisibility,
        Fact::Getter,
        Fact::GetterScope,
        Fact::GetterMutability,
        Fact::GetterVisibility,
        Fact::Setter,
        Fact::SetterScope,
        Fact::SetterMutability,
        Fact::SetterVisibility,
        Fact::Property,
        Fact::Class,
        Fact::DefaultValue,
        Fact::PojoClass,
        Fact::PojoParentClass,
        Fact::PojoInterface,
        Fact::PojoGenerator,
        Fact::ValueGenerator,
        Fact::ValueModifier,
    ];

    /// Position in the catalog; lower comes first.
    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Fact::Constructor => "CONSTRUCTOR",
            Fact::ConstructorVisibility => "CONSTRUCTOR_VISIBILITY",
            Fact::DefaultConstructor => "DEFAULT_CONSTRUCTOR",
            Fact::ConstructorParameterIndex => "CONSTRUCTOR_PARAMETER_INDEX",
            Fact::ConstructorField => "CONSTRUCTOR_FIELD",
            Fact::ConstructorGetter => "CONSTRUCTOR_GETTER",
            Fact::ConstructorParametersGenerator => "CONSTRUCTOR_PARAMETERS_GENERATOR",
            Fact::ConstructorParametersModifier => "CONSTRUCTOR_PARAMETERS_MODIFIER",
            Fact::Field => "FIELD",
            Fact::MutableField => "MUTABLE_FIELD",
            Fact::FieldScope => "FIELD_SCOPE",
            Fact::FieldMutability => "FIELD_MUTABILITY",
            Fact::FieldVisibility => "FIELD_VISIBILITY",
            Fact::Getter => "GETTER",
            Fact::GetterScope => "GETTER_SCOPE",
            Fact::GetterMutability => "GETTER_MUTABILITY",
            Fact::GetterVisibility => "GETTER_VISIBILITY",
            Fact::Setter => "SETTER",
            Fact::SetterScope => "SETTER_SCOPE",
            Fact::SetterMutability => "SETTER_MUTABILITY",
            Fact::SetterVisibility => "SETTER_VISIBILITY",
            Fact::Property => "PROPERTY",
            Fact::Class => "CLASS",
            Fact::DefaultValue => "DEFAULT_VALUE",
            Fact::PojoClass => "POJO_CLASS",
            Fact::PojoParentClass => "POJO_PARENT_CLASS",
            Fact::PojoInterface => "POJO_INTERFACE",
            Fact::PojoGenerator => "POJO_GENERATOR",
            Fact::ValueGenerator => "VALUE_GENERATOR",
            Fact::ValueModifier => "VALUE_MODIFIER",
        }
    }

    /// The argument this fact yields for `item`, if the item has it.
    pub fn extract(self, item: &DefinitionItem<'_>) -> Option<Argument> {
        let constructor = item.constructor;
        let property = item.property;
        let field = property.and_then(|p| p.field());
        let getter = property.and_then(|p| p.getter());
        let setter = property.and_then(|p| p.setter());

        match self {
            Fact::Constructor => constructor.map(|c| Argument::Constructor(c.locator().clone())),
            Fact::ConstructorVisibility => {
                constructor.and_then(|c| c.visibility()).map(Argument::Visibility)
            }
            Fact::DefaultConstructor => constructor
                .filter(|c| c.is_default())
                .map(|c| Argument::Constructor(c.locator().clone())),
            Fact::ConstructorParameterIndex => item
                .correlated()
                .and_then(|(c, p)| c.parameter_index(p))
                .map(Argument::Index),
            Fact::ConstructorField => item
                .correlated()
                .and_then(|(_, p)| p.field())
                .map(|f| Argument::Field(f.locator().clone())),
            Fact::ConstructorGetter => item
                .correlated()
                .and_then(|(_, p)| p.getter())
                .map(|g| Argument::Getter(g.locator().clone())),
            Fact::ConstructorParametersGenerator => {
                constructor.map(|c| Argument::Generator(c.parameters_generator().clone()))
            }
            Fact::ConstructorParametersModifier => {
                constructor.map(|c| Argument::Modifier(c.parameters_modifier().clone()))
            }
            Fact::Field => field.map(|f| Argument::Field(f.locator().clone())),
            Fact::MutableField => field
                .filter(|f| f.mutability() == Some(Mutability::NonFinal))
                .map(|f| Argument::Field(f.locator().clone())),
            Fact::FieldScope => field.and_then(|f| f.scope()).map(Argument::Scope),
            Fact::FieldMutability => field.and_then(|f| f.mutability()).map(Argument::Mutability),
            Fact::FieldVisibility => field.and_then(|f| f.visibility()).map(Argument::Visibility),
            Fact::Getter => getter.map(|g| Argument::Getter(g.locator().clone())),
            Fact::GetterScope => getter.and_then(|g| g.scope()).map(Argument::Scope),
            Fact::GetterMutability => getter.and_then(|g| g.mutability()).map(Argument::Mutability),
            Fact::GetterVisibility => getter.and_then(|g| g.visibility()).map(Argument::Visibility),
            Fact::Setter => setter.map(|s| Argument::Setter(s.locator().clone())),
            Fact::SetterScope => setter.and_then(|s| s.scope()).map(Argument::Scope),
            Fact::SetterMutability => setter.and_then(|s| s.mutability()).map(Argument::Mutability),
            Fact::SetterVisibility => setter.and_then(|s| s.visibility()).map(Argument::Visibility),
            Fact::Property => property.map(|p| Argument::Name(p.name().to_string())),
            Fact::Class => property
                .and_then(|p| p.value_type().class().cloned())
                .map(Argument::Class),
            Fact::DefaultValue => property.and_then(|p| p.default_value()).map(Argument::Value),
            Fact::PojoClass => Some(Argument::Class(item.pojo.class().clone())),
            Fact::PojoParentClass => item.parent.cloned().map(Argument::Class),
            Fact::PojoInterface => item.interface.cloned().map(Argument::Class),
            Fact::PojoGenerator => Some(Argument::Generator(item.pojo.pojo_generator())),
            Fact::ValueGenerator => property.map(|p| Argument::Generator(p.generator())),
            Fact::ValueModifier => property.map(|p| Argument::Modifier(p.modifier())),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
