//! Definition items: one point of the definition's cross product.

use std::rc::Rc;
use vet_core::Class;
use vet_definition::{ConstructorDefinition, PojoDefinition, Property};

/// A combination of definition elements. Absent elements are `None`.
#[derive(Clone, Copy)]
pub struct DefinitionItem<'d> {
    pub pojo: &'d PojoDefinition,
    pub parent: Option<&'d Class>,
    pub interface: Option<&'d Class>,
    pub constructor: Option<&'d Rc<ConstructorDefinition>>,
    pub property: Option<&'d Property>,
}

impl<'d> DefinitionItem<'d> {
    /// Constructor and property, when the constructor takes the property.
    pub fn correlated(&self) -> Option<(&'d Rc<ConstructorDefinition>, &'d Property)> {
        let constructor = self.constructor?;
        let property = self.property?;
        constructor.takes(property).then_some((constructor, property))
    }
}

/// Every combination of parent, interface, constructor and property, in
/// that nesting order. An empty dimension contributes a single `None`.
pub fn definition_items(pojo: &PojoDefinition) -> Vec<DefinitionItem<'_>> {
    fn or_none<T>(items: impl Iterator<Item = T>) -> Vec<Option<T>> {
        let items: Vec<Option<T>> = items.map(Some).collect();
        if items.is_empty() {
            vec![None]
        } else {
            items
        }
    }

    let parents = vec![pojo.parent_class()];
    let interfaces = or_none(pojo.interfaces().iter());
    let constructors = or_none(pojo.constructors().iter());
    let properties = or_none(pojo.properties().iter());

    let mut items = Vec::with_capacity(
        parents.len() * interfaces.len() * constructors.len() * properties.len(),
    );
    for &parent in &parents {
        for &interface in &interfaces {
            for &constructor in &constructors {
                for &property in &properties {
                    items.push(DefinitionItem {
                        pojo,
                        parent,
                        interface,
                        constructor,
                        property,
                    });
                }
            }
        }
    }
    items
}
