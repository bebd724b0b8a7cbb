//! Property definitions.
//!
//! A property is a named value of the subject, backed by any mix of field,
//! getter and setter. Accessors found by convention follow the usual names:
//! `x`, `getX` (and `isX` for booleans) for getters, and `x`, `setX`,
//! `withX` for setters.

use crate::{
    DefinitionError, DefinitionResult, FieldDefinition, GetterDefinition, MemberDefinition,
    SetterDefinition,
};
use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::Rc;
use vet_core::{Class, MemberOption, Value};
use vet_locator::{FieldLocator, GetterLocator, Namer, SetterLocator};
use vet_registry::{Generator, Modifier, Type};

/// Shared handle to a property definition. Constructors refer to the same
/// handles, so identity decides whether a constructor takes a property.
pub type Property = Rc<PropertyDefinition>;

pub struct PropertyDefinition {
    subject: Class,
    name: String,
    named: bool,
    ty: Type,
    field: RefCell<Option<Rc<FieldDefinition>>>,
    getter: RefCell<Option<Rc<GetterDefinition>>>,
    setter: RefCell<Option<Rc<SetterDefinition>>>,
    default_value: RefCell<Option<Value>>,
    generator: RefCell<Option<Generator>>,
    modifier: RefCell<Option<Modifier>>,
    fallback_generator: OnceCell<Generator>,
    fallback_modifier: OnceCell<Modifier>,
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl PropertyDefinition {
    pub(crate) fn new(subject: &Class, name: impl Into<String>, named: bool, ty: &Type) -> Property {
        Rc::new(Self {
            subject: subject.clone(),
            name: name.into(),
            named,
            ty: ty.clone(),
            field: RefCell::new(None),
            getter: RefCell::new(None),
            setter: RefCell::new(None),
            default_value: RefCell::new(None),
            generator: RefCell::new(None),
            modifier: RefCell::new(None),
            fallback_generator: OnceCell::new(),
            fallback_modifier: OnceCell::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// False for properties that only exist as constructor parameters.
    pub fn is_named(&self) -> bool {
        self.named
    }

    pub fn value_type(&self) -> &Type {
        &self.ty
    }

    pub fn subject(&self) -> &Class {
        &self.subject
    }

    fn member_name(&self, member: &'static str) -> DefinitionResult<&str> {
        if self.named {
            Ok(&self.name)
        } else {
            Err(DefinitionError::UnnamedMember {
                property: self.name.clone(),
                member,
            })
        }
    }

    fn pattern_namer(description: String, pattern: &str) -> DefinitionResult<Namer> {
        Namer::pattern(description, pattern).map_err(|e| DefinitionError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
    }

    // ==================== Field ====================

    /// Expect a field named after the property.
    #[track_caller]
    pub fn with_field(self: &Rc<Self>, options: &[MemberOption]) -> DefinitionResult<Property> {
        let name = self.member_name("field")?.to_string();
        self.with_field_named(name, options)
    }

    #[track_caller]
    pub fn with_field_named(
        self: &Rc<Self>,
        name: impl Into<String>,
        options: &[MemberOption],
    ) -> DefinitionResult<Property> {
        let locator = FieldLocator::new(&self.subject, name);
        *self.field.borrow_mut() = Some(Rc::new(MemberDefinition::new(locator, options)?));
        Ok(Rc::clone(self))
    }

    // ==================== Getter ====================

    /// Expect a getter with one of the conventional names.
    #[track_caller]
    pub fn with_getter(self: &Rc<Self>, options: &[MemberOption]) -> DefinitionResult<Property> {
        let name = self.member_name("getter")?;
        let capitalized = capitalize(name);
        let mut names = vec![name.to_string(), format!("get{}", capitalized)];
        if self.ty.is_boolean() {
            names.push(format!("is{}", capitalized));
        }
        let namer = Namer::candidates(format!("getter for {}", name), names);
        self.install_getter(GetterLocator::new(&self.subject, namer), options)
    }

    #[track_caller]
    pub fn with_getter_named(
        self: &Rc<Self>,
        name: impl Into<String>,
        options: &[MemberOption],
    ) -> DefinitionResult<Property> {
        let locator = GetterLocator::new(&self.subject, Namer::exact(name));
        self.install_getter(locator, options)
    }

    /// Expect a getter whose whole name matches `pattern`.
    #[track_caller]
    pub fn with_getter_matching(
        self: &Rc<Self>,
        pattern: &str,
        options: &[MemberOption],
    ) -> DefinitionResult<Property> {
        let namer = Self::pattern_namer(format!("getter matching {}", pattern), pattern)?;
        self.install_getter(GetterLocator::new(&self.subject, namer), options)
    }

    fn install_getter(
        self: &Rc<Self>,
        locator: GetterLocator,
        options: &[MemberOption],
    ) -> DefinitionResult<Property> {
        *self.getter.borrow_mut() = Some(Rc::new(MemberDefinition::new(locator, options)?));
        Ok(Rc::clone(self))
    }

    // ==================== Setter ====================

    /// Expect a setter with one of the conventional names.
    #[track_caller]
    pub fn with_setter(self: &Rc<Self>, options: &[MemberOption]) -> DefinitionResult<Property> {
        let name = self.member_name("setter")?;
        let capitalized = capitalize(name);
        let names = vec![
            name.to_string(),
            format!("set{}", capitalized),
            format!("with{}", capitalized),
        ];
        let namer = Namer::candidates(format!("setter for {}", name), names);
        self.install_setter(SetterLocator::new(&self.subject, namer, &self.ty), options)
    }

    #[track_caller]
    pub fn with_setter_named(
        self: &Rc<Self>,
        name: impl Into<String>,
        options: &[MemberOption],
    ) -> DefinitionResult<Property> {
        let locator = SetterLocator::new(&self.subject, Namer::exact(name), &self.ty);
        self.install_setter(locator, options)
    }

    /// Expect a setter whose whole name matches `pattern`.
    #[track_caller]
    pub fn with_setter_matching(
        self: &Rc<Self>,
        pattern: &str,
        options: &[MemberOption],
    ) -> DefinitionResult<Property> {
        let namer = Self::pattern_namer(format!("setter matching {}", pattern), pattern)?;
        self.install_setter(SetterLocator::new(&self.subject, namer, &self.ty), options)
    }

    fn install_setter(
        self: &Rc<Self>,
        locator: SetterLocator,
        options: &[MemberOption],
    ) -> DefinitionResult<Property> {
        *self.setter.borrow_mut() = Some(Rc::new(MemberDefinition::new(locator, options)?));
        Ok(Rc::clone(self))
    }

    // ==================== Values ====================

    /// Value the property holds right after default construction. Null is
    /// a valid default.
    pub fn with_default_value(self: &Rc<Self>, value: impl Into<Value>) -> Property {
        *self.default_value.borrow_mut() = Some(value.into());
        Rc::clone(self)
    }

    /// Generator used for this property instead of its type's.
    pub fn with_generator(self: &Rc<Self>, generator: Generator) -> Property {
        *self.generator.borrow_mut() = Some(generator);
        Rc::clone(self)
    }

    /// Modifier used for this property instead of its type's.
    pub fn with_modifier(self: &Rc<Self>, modifier: Modifier) -> Property {
        *self.modifier.borrow_mut() = Some(modifier);
        Rc::clone(self)
    }

    pub fn field(&self) -> Option<Rc<FieldDefinition>> {
        self.field.borrow().clone()
    }

    pub fn getter(&self) -> Option<Rc<GetterDefinition>> {
        self.getter.borrow().clone()
    }

    pub fn setter(&self) -> Option<Rc<SetterDefinition>> {
        self.setter.borrow().clone()
    }

    pub fn default_value(&self) -> Option<Value> {
        self.default_value.borrow().clone()
    }

    /// The explicit generator, else the type's, else one that resolves the
    /// type's generator when called. The last is built once, so repeated
    /// calls return the same generator.
    pub fn generator(&self) -> Generator {
        if let Some(generator) = self.generator.borrow().as_ref() {
            return generator.clone();
        }
        if let Ok(generator) = self.ty.generator() {
            return generator;
        }
        self.fallback_generator
            .get_or_init(|| {
                let ty = self.ty.clone();
                Generator::new(move || ty.generator()?.create())
            })
            .clone()
    }

    /// Same resolution as [`PropertyDefinition::generator`], for modifiers.
    pub fn modifier(&self) -> Modifier {
        if let Some(modifier) = self.modifier.borrow().as_ref() {
            return modifier.clone();
        }
        if let Ok(modifier) = self.ty.modifier() {
            return modifier;
        }
        self.fallback_modifier
            .get_or_init(|| {
                let ty = self.ty.clone();
                Modifier::new(move |value| ty.modifier()?.modify(value))
            })
            .clone()
    }
}

impl fmt::Debug for PropertyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDefinition")
            .field("name", &self.name)
            .field("type", &self.ty)
            .finish()
    }
}

impl fmt::Display for PropertyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
