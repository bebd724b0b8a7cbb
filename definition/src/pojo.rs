//! Subject definitions.

use crate::{ConstructorDefinition, DefinitionError, DefinitionResult, Property, PropertyDefinition};
use log::{debug, warn};
use std::collections::HashMap;
use std::rc::Rc;
use vet_core::{Cache, CheckError, Class, Value, Visibility};
use vet_registry::{Factory, Generator, Type, TypeRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Derived {
    SubjectGenerator,
}

/// Everything a subject class is expected to provide.
pub struct PojoDefinition {
    factory: Factory,
    class: Class,
    parent: Option<Class>,
    interfaces: Vec<Class>,
    generator: Option<Generator>,
    properties: Vec<Property>,
    property_index: HashMap<String, usize>,
    constructors: Vec<Rc<ConstructorDefinition>>,
    unnamed: usize,
    derived: Cache<Derived, Generator>,
}

impl PojoDefinition {
    /// Definition for `class` with a fresh factory.
    pub fn new(class: &Class) -> Self {
        Self::with_factory(class, Factory::new())
    }

    /// Definition for `class` sharing an existing factory.
    pub fn with_factory(class: &Class, factory: Factory) -> Self {
        Self {
            factory,
            class: class.clone(),
            parent: None,
            interfaces: Vec::new(),
            generator: None,
            properties: Vec::new(),
            property_index: HashMap::new(),
            constructors: Vec::new(),
            unnamed: 0,
            derived: Cache::new(),
        }
    }

    /// Definition whose subject class is that of the objects `generator`
    /// produces. The generator also becomes the subject generator.
    pub fn from_generator(generator: Generator) -> DefinitionResult<Self> {
        let sample = generator.create()?;
        let class = match &sample {
            Value::Object(object) => object.class().clone(),
            other => return Err(DefinitionError::NotAnObject(other.to_string())),
        };
        let mut definition = Self::new(&class);
        definition.set_generator(generator);
        Ok(definition)
    }

    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    pub fn types(&self) -> &TypeRegistry {
        self.factory.types()
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    // ==================== Hierarchy ====================

    pub fn set_parent_class(&mut self, parent: &Class) -> DefinitionResult<()> {
        if parent.is_interface() {
            return Err(DefinitionError::ParentIsInterface(parent.name().to_string()));
        }
        self.parent = Some(parent.clone());
        Ok(())
    }

    pub fn parent_class(&self) -> Option<&Class> {
        self.parent.as_ref()
    }

    /// Add interfaces, ignoring ones already present. Nothing is added when
    /// any of them is not an interface.
    pub fn add_interfaces(&mut self, interfaces: &[Class]) -> DefinitionResult<()> {
        if let Some(class) = interfaces.iter().find(|i| !i.is_interface()) {
            return Err(DefinitionError::NotAnInterface(class.name().to_string()));
        }
        for interface in interfaces {
            if !self.interfaces.contains(interface) {
                self.interfaces.push(interface.clone());
            }
        }
        Ok(())
    }

    pub fn interfaces(&self) -> &[Class] {
        &self.interfaces
    }

    // ==================== Properties ====================

    /// Declare a property, or return the existing one of the same name and
    /// type.
    pub fn add_property(&mut self, ty: &Type, name: impl Into<String>) -> DefinitionResult<Property> {
        let name = name.into();
        if let Some(&index) = self.property_index.get(&name) {
            let existing = &self.properties[index];
            if !existing.is_named() {
                return Err(DefinitionError::NameOfUnnamedProperty(name));
            }
            if existing.value_type() == ty {
                warn!("{}: property {} declared twice, reusing it", self.class, name);
                return Ok(existing.clone());
            }
            return Err(DefinitionError::PropertyTypeConflict {
                name,
                existing: existing.value_type().to_string(),
                requested: ty.to_string(),
            });
        }
        Ok(self.insert_property(PropertyDefinition::new(&self.class, name, true, ty)))
    }

    /// [`PojoDefinition::add_property`] with the type of `class`.
    pub fn add_property_of(
        &mut self,
        class: &Class,
        name: impl Into<String>,
    ) -> DefinitionResult<Property> {
        let ty = self.types().from(class);
        self.add_property(&ty, name)
    }

    /// Declare a property with no name of its own, such as a constructor
    /// argument the subject does not expose.
    pub fn add_unnamed_property(&mut self, ty: &Type) -> Property {
        let name = loop {
            self.unnamed += 1;
            let candidate = format!("?{}", self.unnamed);
            if !self.property_index.contains_key(&candidate) {
                break candidate;
            }
        };
        self.insert_property(PropertyDefinition::new(&self.class, name, false, ty))
    }

    pub fn add_unnamed_property_of(&mut self, class: &Class) -> Property {
        let ty = self.types().from(class);
        self.add_unnamed_property(&ty)
    }

    fn insert_property(&mut self, property: Property) -> Property {
        debug!(
            "{}: property {} of type {}",
            self.class,
            property.name(),
            property.value_type()
        );
        self.property_index
            .insert(property.name().to_string(), self.properties.len());
        self.properties.push(property.clone());
        property
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.property_index.get(name).map(|&i| &self.properties[i])
    }

    // ==================== Constructors ====================

    /// Declare a constructor taking `parameters` in order.
    #[track_caller]
    pub fn add_constructor(
        &mut self,
        parameters: &[Property],
    ) -> DefinitionResult<Rc<ConstructorDefinition>> {
        self.insert_constructor(None, parameters)
    }

    /// Declare a constructor that must also have the given visibility.
    #[track_caller]
    pub fn add_constructor_with(
        &mut self,
        visibility: Visibility,
        parameters: &[Property],
    ) -> DefinitionResult<Rc<ConstructorDefinition>> {
        self.insert_constructor(Some(visibility), parameters)
    }

    #[track_caller]
    fn insert_constructor(
        &mut self,
        visibility: Option<Visibility>,
        parameters: &[Property],
    ) -> DefinitionResult<Rc<ConstructorDefinition>> {
        let signature = ConstructorDefinition::signature_of(parameters);
        let duplicate = self
            .constructors
            .iter()
            .any(|c| c.locator().parameters() == signature.as_slice());
        let constructor = ConstructorDefinition::new(&self.class, parameters.to_vec(), visibility);
        if duplicate {
            return Err(DefinitionError::DuplicateConstructor(
                constructor.locator().to_string(),
            ));
        }
        debug!("{}: constructor {}", self.class, constructor.locator());
        let constructor = Rc::new(constructor);
        self.constructors.push(constructor.clone());
        self.derived = Cache::new();
        Ok(constructor)
    }

    pub fn constructors(&self) -> &[Rc<ConstructorDefinition>] {
        &self.constructors
    }

    // ==================== Subject generator ====================

    pub fn set_generator(&mut self, generator: Generator) {
        self.generator = Some(generator);
    }

    /// The explicit subject generator, or one that builds subjects through
    /// the declared constructors, fewest parameters first.
    pub fn pojo_generator(&self) -> Generator {
        if let Some(generator) = &self.generator {
            return generator.clone();
        }
        self.derived
            .get_or_insert_with(Derived::SubjectGenerator, || self.constructor_generator())
    }

    fn constructor_generator(&self) -> Generator {
        let mut constructors = self.constructors.clone();
        constructors.sort_by_key(|c| c.parameters().len());
        Generator::new(move || {
            let mut generator_failure: Option<CheckError> = None;
            let mut constructor_failure: Option<CheckError> = None;
            for constructor in &constructors {
                let arguments = match constructor.parameters_generator().create() {
                    Ok(arguments) => arguments,
                    Err(e) => {
                        generator_failure.get_or_insert(e);
                        continue;
                    }
                };
                let arguments = arguments.as_items().unwrap_or_default();
                match constructor.locator().invoke(arguments) {
                    Ok(object) => return Ok(Value::Object(object)),
                    Err(e) => {
                        constructor_failure.get_or_insert(e);
                    }
                }
            }
            Err(generator_failure
                .or(constructor_failure)
                .map(|e| e.context("No subject could be built"))
                .unwrap_or_else(|| {
                    CheckError::incomplete(
                        "No subject generator set, set one or add constructors",
                    )
                }))
        })
    }
}
