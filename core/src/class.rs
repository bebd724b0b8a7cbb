//! Class descriptors.
//!
//! A [`Class`] is the runtime shape a subject exposes: its name, kind,
//! parent, interfaces and declared members. Locators inspect and invoke
//! members through these descriptors, so a class built here plays the part
//! a compiled class plays for a reflective checker.
//!
//! Classes compare by name. Builtin classes (primitives, their boxed
//! counterparts, String, Object and the erased containers) can be created
//! on demand; user classes are declared with a [`ClassBuilder`].

use crate::{InvokeError, Thrown, Value, ValueKind};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::BitOr;
use std::rc::Rc;

// ==================== Modifiers ====================

/// Modifier bits declared on a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const PUBLIC: Modifiers = Modifiers(1);
    pub const PROTECTED: Modifiers = Modifiers(1 << 1);
    pub const PRIVATE: Modifiers = Modifiers(1 << 2);
    pub const STATIC: Modifiers = Modifiers(1 << 3);
    pub const FINAL: Modifiers = Modifiers(1 << 4);

    /// Returns true if every bit of `other` is set.
    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_public(self) -> bool {
        self.contains(Modifiers::PUBLIC)
    }

    pub fn is_protected(self) -> bool {
        self.contains(Modifiers::PROTECTED)
    }

    pub fn is_private(self) -> bool {
        self.contains(Modifiers::PRIVATE)
    }

    pub fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    pub fn is_final(self) -> bool {
        self.contains(Modifiers::FINAL)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = [
            (Modifiers::PUBLIC, "public"),
            (Modifiers::PROTECTED, "protected"),
            (Modifiers::PRIVATE, "private"),
            (Modifiers::STATIC, "static"),
            (Modifiers::FINAL, "final"),
        ];
        let present: Vec<&str> = words
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, word)| *word)
            .collect();
        write!(f, "{}", present.join(" "))
    }
}

// ==================== Class ====================

/// What sort of class a descriptor stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassKind {
    /// No value, used as the return class of setters.
    Void,
    Primitive(ValueKind),
    Boxed(ValueKind),
    String,
    Object,
    List,
    Set,
    Map,
    /// Array of the given component class.
    Array(Class),
    /// A concrete user class.
    Class,
    Interface,
}

/// Shared handle to a class descriptor.
#[derive(Clone)]
pub struct Class(Rc<ClassInfo>);

struct ClassInfo {
    name: String,
    kind: ClassKind,
    parent: Option<Class>,
    interfaces: Vec<Class>,
    fields: Vec<FieldInfo>,
    methods: Vec<MethodInfo>,
    constructors: Vec<ConstructorInfo>,
}

impl Class {
    fn builtin(name: impl Into<String>, kind: ClassKind) -> Self {
        Class(Rc::new(ClassInfo {
            name: name.into(),
            kind,
            parent: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }))
    }

    /// Start declaring a concrete class.
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name, ClassKind::Class)
    }

    /// Start declaring an interface.
    pub fn interface(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name, ClassKind::Interface)
    }

    pub fn void() -> Self {
        Class::builtin("void", ClassKind::Void)
    }

    pub fn primitive(kind: ValueKind) -> Self {
        Class::builtin(kind.primitive_name(), ClassKind::Primitive(kind))
    }

    pub fn boxed(kind: ValueKind) -> Self {
        Class::builtin(kind.boxed_name(), ClassKind::Boxed(kind))
    }

    pub fn boolean() -> Self {
        Class::primitive(ValueKind::Bool)
    }

    pub fn byte() -> Self {
        Class::primitive(ValueKind::Byte)
    }

    pub fn short() -> Self {
        Class::primitive(ValueKind::Short)
    }

    pub fn int() -> Self {
        Class::primitive(ValueKind::Int)
    }

    pub fn long() -> Self {
        Class::primitive(ValueKind::Long)
    }

    pub fn float() -> Self {
        Class::primitive(ValueKind::Float)
    }

    pub fn double() -> Self {
        Class::primitive(ValueKind::Double)
    }

    pub fn char() -> Self {
        Class::primitive(ValueKind::Char)
    }

    pub fn string() -> Self {
        Class::builtin("String", ClassKind::String)
    }

    pub fn object() -> Self {
        Class::builtin("Object", ClassKind::Object)
    }

    pub fn list() -> Self {
        Class::builtin("List", ClassKind::List)
    }

    pub fn set() -> Self {
        Class::builtin("Set", ClassKind::Set)
    }

    pub fn map() -> Self {
        Class::builtin("Map", ClassKind::Map)
    }

    /// Array class whose items are of `component`.
    pub fn array_of(component: &Class) -> Self {
        Class::builtin(
            format!("{}[]", component.name()),
            ClassKind::Array(component.clone()),
        )
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Name without any leading package path.
    pub fn simple_name(&self) -> &str {
        self.0.name.rsplit('.').next().unwrap_or(&self.0.name)
    }

    pub fn kind(&self) -> &ClassKind {
        &self.0.kind
    }

    /// Primitive kind of a primitive or boxed class.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self.0.kind {
            ClassKind::Primitive(kind) | ClassKind::Boxed(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_interface(&self) -> bool {
        self.0.kind == ClassKind::Interface
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.0.kind, ClassKind::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.0.kind, ClassKind::Array(_))
    }

    /// Component class of an array class.
    pub fn component(&self) -> Option<&Class> {
        match &self.0.kind {
            ClassKind::Array(component) => Some(component),
            _ => None,
        }
    }

    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    pub fn interfaces(&self) -> &[Class] {
        &self.0.interfaces
    }

    /// Fields declared by this class, excluding inherited ones.
    pub fn fields(&self) -> &[FieldInfo] {
        &self.0.fields
    }

    /// Methods declared by this class, excluding inherited ones.
    pub fn methods(&self) -> &[MethodInfo] {
        &self.0.methods
    }

    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.0.constructors
    }

    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.0.fields.iter().find(|f| f.name == name)
    }

    /// Value a freshly allocated field of this class holds.
    pub fn default_value(&self) -> Value {
        match self.0.kind {
            ClassKind::Primitive(kind) => kind.zero(),
            _ => Value::Null,
        }
    }

    /// Returns true if `value` may be stored in a slot of this class.
    pub fn accepts(&self, value: &Value) -> bool {
        match (&self.0.kind, value) {
            (ClassKind::Void, _) => false,
            (ClassKind::Primitive(kind), v) => v.kind() == Some(*kind),
            (_, Value::Null) => true,
            (ClassKind::Object, _) => true,
            (ClassKind::Boxed(kind), v) => v.kind() == Some(*kind),
            (ClassKind::String, Value::String(_)) => true,
            (ClassKind::List, Value::List(_)) => true,
            (ClassKind::Set, Value::Set(_)) => true,
            (ClassKind::Map, Value::Map(_)) => true,
            (ClassKind::Array(component), Value::Array(actual, _)) => component == actual,
            (ClassKind::Class | ClassKind::Interface, Value::Object(object)) => {
                self.is_assignable_from(object.class())
            }
            _ => false,
        }
    }

    /// Returns true if `other` is this class or one of its descendants.
    pub fn is_assignable_from(&self, other: &Class) -> bool {
        if self == other {
            return true;
        }
        if self.0.kind == ClassKind::Object {
            return !other.is_primitive() && other.0.kind != ClassKind::Void;
        }
        other
            .parent()
            .map_or(false, |parent| self.is_assignable_from(parent))
            || other
                .interfaces()
                .iter()
                .any(|interface| self.is_assignable_from(interface))
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
    }
}

impl Eq for Class {}

impl Hash for Class {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.0.name)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name)
    }
}

// ==================== Members ====================

/// Body of a method: receives the target object and the arguments.
pub type MethodBody = Rc<dyn Fn(&ObjectRef, &[Value]) -> Result<Value, Thrown>>;

/// Body of a constructor: receives the freshly allocated object.
pub type ConstructorBody = Rc<dyn Fn(&ObjectRef, &[Value]) -> Result<(), Thrown>>;

fn check_arguments(parameters: &[Class], arguments: &[Value]) -> Result<(), InvokeError> {
    if parameters.len() != arguments.len() {
        return Err(InvokeError::Arity {
            expected: parameters.len(),
            actual: arguments.len(),
        });
    }
    match parameters
        .iter()
        .zip(arguments)
        .position(|(class, value)| !class.accepts(value))
    {
        Some(index) => Err(InvokeError::ArgumentMismatch { index }),
        None => Ok(()),
    }
}

fn join_classes(classes: &[Class]) -> String {
    classes
        .iter()
        .map(|c| c.name().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn prefixed(modifiers: Modifiers) -> String {
    let words = modifiers.to_string();
    if words.is_empty() {
        words
    } else {
        format!("{} ", words)
    }
}

/// A declared field.
#[derive(Clone)]
pub struct FieldInfo {
    owner: String,
    name: String,
    class: Class,
    modifiers: Modifiers,
    static_value: Option<Rc<RefCell<Value>>>,
}

impl FieldInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Read the field on `target`, or the shared slot of a static field.
    pub fn get(&self, target: &ObjectRef) -> Result<Value, InvokeError> {
        if let Some(slot) = &self.static_value {
            return Ok(slot.borrow().clone());
        }
        target
            .try_get(&self.name)
            .ok_or_else(|| InvokeError::TargetMismatch(self.owner.clone()))
    }

    /// Write the field on `target`, or the shared slot of a static field.
    pub fn set(&self, target: &ObjectRef, value: Value) -> Result<(), InvokeError> {
        if !self.class.accepts(&value) {
            return Err(InvokeError::ArgumentMismatch { index: 0 });
        }
        if let Some(slot) = &self.static_value {
            if self.modifiers.is_final() {
                return Err(InvokeError::IllegalAccess(format!(
                    "cannot set static final field {}.{}",
                    self.owner, self.name
                )));
            }
            *slot.borrow_mut() = value;
            return Ok(());
        }
        if target.try_get(&self.name).is_none() {
            return Err(InvokeError::TargetMismatch(self.owner.clone()));
        }
        target.set(&self.name, value);
        Ok(())
    }
}

impl fmt::Display for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}.{}",
            prefixed(self.modifiers),
            self.class,
            self.owner,
            self.name
        )
    }
}

/// A declared method.
#[derive(Clone)]
pub struct MethodInfo {
    owner: String,
    name: String,
    parameters: Vec<Class>,
    return_class: Class,
    modifiers: Modifiers,
    body: MethodBody,
}

impl MethodInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Class] {
        &self.parameters
    }

    pub fn return_class(&self) -> &Class {
        &self.return_class
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Invoke the method on `target` after checking the arguments.
    pub fn invoke(&self, target: &ObjectRef, arguments: &[Value]) -> Result<Value, InvokeError> {
        check_arguments(&self.parameters, arguments)?;
        (self.body)(target, arguments).map_err(InvokeError::Thrown)
    }
}

impl fmt::Display for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}.{}({})",
            prefixed(self.modifiers),
            self.return_class,
            self.owner,
            self.name,
            join_classes(&self.parameters)
        )
    }
}

/// A declared constructor.
#[derive(Clone)]
pub struct ConstructorInfo {
    owner: String,
    parameters: Vec<Class>,
    modifiers: Modifiers,
    body: ConstructorBody,
}

impl ConstructorInfo {
    pub fn parameters(&self) -> &[Class] {
        &self.parameters
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Allocate an instance of `class` and run the constructor body on it.
    pub fn invoke(&self, class: &Class, arguments: &[Value]) -> Result<ObjectRef, InvokeError> {
        if class.name() != self.owner {
            return Err(InvokeError::TargetMismatch(self.owner.clone()));
        }
        check_arguments(&self.parameters, arguments)?;
        let object = ObjectRef::allocate(class);
        (self.body)(&object, arguments).map_err(InvokeError::Thrown)?;
        Ok(object)
    }
}

impl fmt::Display for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}({})",
            prefixed(self.modifiers),
            self.owner,
            join_classes(&self.parameters)
        )
    }
}

// ==================== Builder ====================

/// Declares a user class member by member.
pub struct ClassBuilder {
    name: String,
    kind: ClassKind,
    parent: Option<Class>,
    interfaces: Vec<Class>,
    fields: Vec<FieldInfo>,
    methods: Vec<MethodInfo>,
    constructors: Vec<ConstructorInfo>,
}

impl ClassBuilder {
    fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    pub fn extends(mut self, parent: &Class) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    pub fn implements(mut self, interface: &Class) -> Self {
        self.interfaces.push(interface.clone());
        self
    }

    /// Declare a field. Static fields share one slot across instances.
    pub fn field(mut self, name: impl Into<String>, class: &Class, modifiers: Modifiers) -> Self {
        let static_value = modifiers
            .is_static()
            .then(|| Rc::new(RefCell::new(class.default_value())));
        self.fields.push(FieldInfo {
            owner: self.name.clone(),
            name: name.into(),
            class: class.clone(),
            modifiers,
            static_value,
        });
        self
    }

    /// Declare a method with an arbitrary body.
    pub fn method<F>(
        mut self,
        name: impl Into<String>,
        parameters: &[Class],
        return_class: &Class,
        modifiers: Modifiers,
        body: F,
    ) -> Self
    where
        F: Fn(&ObjectRef, &[Value]) -> Result<Value, Thrown> + 'static,
    {
        self.methods.push(MethodInfo {
            owner: self.name.clone(),
            name: name.into(),
            parameters: parameters.to_vec(),
            return_class: return_class.clone(),
            modifiers,
            body: Rc::new(body),
        });
        self
    }

    /// Declare a no-argument method returning the named instance field.
    pub fn getter(
        self,
        name: impl Into<String>,
        field: impl Into<String>,
        class: &Class,
        modifiers: Modifiers,
    ) -> Self {
        let field = field.into();
        self.method(name, &[], class, modifiers, move |this, _| Ok(this.get(&field)))
    }

    /// Declare a one-argument method storing its argument in the named field.
    pub fn setter(
        self,
        name: impl Into<String>,
        field: impl Into<String>,
        class: &Class,
        modifiers: Modifiers,
    ) -> Self {
        let field = field.into();
        self.method(
            name,
            std::slice::from_ref(class),
            &Class::void(),
            modifiers,
            move |this, args| {
                this.set(&field, args[0].clone());
                Ok(Value::Null)
            },
        )
    }

    /// Declare a constructor with an arbitrary body.
    pub fn constructor<F>(mut self, parameters: &[Class], modifiers: Modifiers, body: F) -> Self
    where
        F: Fn(&ObjectRef, &[Value]) -> Result<(), Thrown> + 'static,
    {
        self.constructors.push(ConstructorInfo {
            owner: self.name.clone(),
            parameters: parameters.to_vec(),
            modifiers,
            body: Rc::new(body),
        });
        self
    }

    /// Declare a constructor assigning each argument to the matching field.
    pub fn assigning_constructor(self, fields: &[(&str, Class)], modifiers: Modifiers) -> Self {
        let names: Vec<String> = fields.iter().map(|(name, _)| name.to_string()).collect();
        let parameters: Vec<Class> = fields.iter().map(|(_, class)| class.clone()).collect();
        self.constructor(&parameters, modifiers, move |this, args| {
            for (name, value) in names.iter().zip(args) {
                this.set(name, value.clone());
            }
            Ok(())
        })
    }

    pub fn build(self) -> Class {
        Class(Rc::new(ClassInfo {
            name: self.name,
            kind: self.kind,
            parent: self.parent,
            interfaces: self.interfaces,
            fields: self.fields,
            methods: self.methods,
            constructors: self.constructors,
        }))
    }
}

// ==================== Instances ====================

struct Instance {
    class: Class,
    fields: RefCell<BTreeMap<String, Value>>,
}

/// Shared reference to an object instance. Equality is identity.
#[derive(Clone)]
pub struct ObjectRef(Rc<Instance>);

impl ObjectRef {
    /// Allocate an instance with every instance field, inherited ones
    /// included, set to its class default.
    pub fn allocate(class: &Class) -> Self {
        fn collect(class: &Class, fields: &mut BTreeMap<String, Value>) {
            if let Some(parent) = class.parent() {
                collect(parent, fields);
            }
            for field in class.fields().iter().filter(|f| !f.modifiers.is_static()) {
                fields.insert(field.name.clone(), field.class.default_value());
            }
        }

        let mut fields = BTreeMap::new();
        collect(class, &mut fields);
        ObjectRef(Rc::new(Instance {
            class: class.clone(),
            fields: RefCell::new(fields),
        }))
    }

    /// A plain object with no fields.
    pub fn new_object() -> Self {
        ObjectRef::allocate(&Class::object())
    }

    pub fn class(&self) -> &Class {
        &self.0.class
    }

    /// Read a field; unknown fields read as null.
    pub fn get(&self, name: &str) -> Value {
        self.try_get(name).unwrap_or(Value::Null)
    }

    pub fn try_get(&self, name: &str) -> Option<Value> {
        self.0.fields.borrow().get(name).cloned()
    }

    /// Write a field without any class check.
    pub fn set(&self, name: &str, value: Value) {
        self.0.fields.borrow_mut().insert(name.to_string(), value);
    }

    fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ObjectRef {}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:x}", self.0.class.simple_name(), self.address())
    }
}
