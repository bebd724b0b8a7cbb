//! Types and the registry that hands them out.

use crate::{Generator, Modifier, TypeError, TypeResult};
use log::{debug, warn};
use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use vet_core::{Cache, CheckError, CheckResult, Class, ValueKind};

/// A named source of values, optionally bound to a class.
///
/// Types compare by identity: two types built for the same name are still
/// different types. Generator and modifier can each be set once.
#[derive(Clone)]
pub struct Type(Rc<TypeInner>);

struct TypeInner {
    name: String,
    class: Option<Class>,
    generator: OnceCell<Generator>,
    modifier: OnceCell<Modifier>,
}

impl Type {
    fn new(name: impl Into<String>, class: Option<Class>) -> Self {
        Type(Rc::new(TypeInner {
            name: name.into(),
            class,
            generator: OnceCell::new(),
            modifier: OnceCell::new(),
        }))
    }

    fn preset(class: &Class, generator: Generator, modifier: Modifier) -> Self {
        Type(Rc::new(TypeInner {
            name: class.name().to_string(),
            class: Some(class.clone()),
            generator: OnceCell::from(generator),
            modifier: OnceCell::from(modifier),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn class(&self) -> Option<&Class> {
        self.0.class.as_ref()
    }

    /// Returns true if the bound class is boolean, primitive or boxed.
    pub fn is_boolean(&self) -> bool {
        self.class().and_then(Class::value_kind) == Some(ValueKind::Bool)
    }

    pub fn with_generator(&self, generator: Generator) -> TypeResult<Type> {
        self.0
            .generator
            .set(generator)
            .map_err(|_| TypeError::GeneratorAlreadySet(self.0.name.clone()))?;
        Ok(self.clone())
    }

    pub fn with_modifier(&self, modifier: Modifier) -> TypeResult<Type> {
        self.0
            .modifier
            .set(modifier)
            .map_err(|_| TypeError::ModifierAlreadySet(self.0.name.clone()))?;
        Ok(self.clone())
    }

    pub fn has_generator(&self) -> bool {
        self.0.generator.get().is_some()
    }

    pub fn has_modifier(&self) -> bool {
        self.0.modifier.get().is_some()
    }

    pub fn generator(&self) -> CheckResult<Generator> {
        self.0.generator.get().cloned().ok_or_else(|| {
            CheckError::incomplete(format!("No generator registered for {}", self.0.name))
        })
    }

    pub fn modifier(&self) -> CheckResult<Modifier> {
        self.0.modifier.get().cloned().ok_or_else(|| {
            CheckError::incomplete(format!("No modifier registered for {}", self.0.name))
        })
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.0.name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name)
    }
}

/// Hook run once for every class-bound type the registry creates.
pub trait TypeExtension {
    fn extend_type(&self, registry: &TypeRegistry, class: &Class, ty: &Type) -> TypeResult<()>;
}

/// Hands out one type per class and fresh named types on request.
pub struct TypeRegistry {
    types: Cache<Class, Type>,
    extensions: RefCell<Vec<Rc<dyn TypeExtension>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            types: Cache::new(),
            extensions: RefCell::new(Vec::new()),
        }
    }

    /// Register an extension. It applies to types created from now on.
    pub fn add_extension(&self, extension: impl TypeExtension + 'static) {
        self.extensions.borrow_mut().push(Rc::new(extension));
    }

    /// The type bound to `class`, created and extended on first request.
    pub fn from(&self, class: &Class) -> Type {
        self.types.get_or_insert_with(class.clone(), || {
            let ty = Type::new(class.name(), Some(class.clone()));
            let extensions = self.extensions.borrow().clone();
            for extension in extensions {
                if let Err(e) = extension.extend_type(self, class, &ty) {
                    warn!("Type extension skipped for {}: {}", class, e);
                }
            }
            debug!("Registered type {}", ty);
            ty
        })
    }

    /// A fresh type with no class. Never cached.
    pub fn named(&self, name: impl Into<String>) -> Type {
        Type::new(name, None)
    }

    /// A fresh type carrying `class`. Never cached.
    pub fn named_with_class(&self, name: impl Into<String>, class: &Class) -> Type {
        Type::new(name, Some(class.clone()))
    }

    /// Install a fully configured type for `class` unless one exists.
    pub(crate) fn preset(&self, class: &Class, generator: Generator, modifier: Modifier) -> Type {
        self.types
            .get_or_insert_with(class.clone(), || Type::preset(class, generator, modifier))
    }

    /// Number of class-bound types created so far.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
