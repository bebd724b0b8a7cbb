//! Constructor definitions.

use crate::Property;
use std::fmt;
use std::rc::Rc;
use vet_core::{CheckError, Class, Value, Visibility};
use vet_locator::ConstructorLocator;
use vet_registry::{Generator, Modifier, Type};

/// A constructor taking the given properties, in order.
///
/// Its parameters generator yields a list with one generated value per
/// parameter; its modifier modifies each value with the parameter's modifier.
pub struct ConstructorDefinition {
    locator: Rc<ConstructorLocator>,
    visibility: Option<Visibility>,
    parameters: Vec<Property>,
    parameters_generator: Generator,
    parameters_modifier: Modifier,
}

impl ConstructorDefinition {
    #[track_caller]
    pub(crate) fn new(
        subject: &Class,
        parameters: Vec<Property>,
        visibility: Option<Visibility>,
    ) -> Self {
        let types = Self::signature_of(&parameters);
        let locator = ConstructorLocator::new(subject, types);
        let parameters_generator = {
            let parameters = parameters.clone();
            Generator::new(move || {
                let values = parameters
                    .iter()
                    .map(|p| p.generator().create())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::List(values))
            })
        };
        let parameters_modifier = {
            let parameters = parameters.clone();
            let start = parameters_generator.clone();
            Modifier::new(move |value| {
                if value.is_null() {
                    return start.create();
                }
                let values = match value.as_items() {
                    Some(values) if values.len() == parameters.len() => values,
                    _ => {
                        return Err(CheckError::internal(format!(
                            "Constructor arguments '{}' do not match {} parameters",
                            value,
                            parameters.len()
                        )))
                    }
                };
                let modified = parameters
                    .iter()
                    .zip(values)
                    .map(|(p, v)| p.modifier().modify(v))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::List(modified))
            })
        };
        Self {
            locator: Rc::new(locator),
            visibility,
            parameters,
            parameters_generator,
            parameters_modifier,
        }
    }

    /// Parameter types, the key that tells constructors apart.
    pub(crate) fn signature_of(parameters: &[Property]) -> Vec<Type> {
        parameters.iter().map(|p| p.value_type().clone()).collect()
    }

    pub fn locator(&self) -> &Rc<ConstructorLocator> {
        &self.locator
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    pub fn parameters(&self) -> &[Property] {
        &self.parameters
    }

    /// Returns true for the no-argument constructor.
    pub fn is_default(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Position of `property` among the parameters, by identity.
    pub fn parameter_index(&self, property: &Property) -> Option<usize> {
        self.parameters.iter().position(|p| Rc::ptr_eq(p, property))
    }

    pub fn takes(&self, property: &Property) -> bool {
        self.parameter_index(property).is_some()
    }

    pub fn parameters_generator(&self) -> &Generator {
        &self.parameters_generator
    }

    pub fn parameters_modifier(&self) -> &Modifier {
        &self.parameters_modifier
    }
}

impl fmt::Debug for ConstructorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDefinition")
            .field("locator", &self.locator)
            .field("visibility", &self.visibility)
            .finish()
    }
}
