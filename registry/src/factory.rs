//! The preconfigured factory every definition starts from.

use crate::{
    GeneratorLibrary, ModifierLibrary, Type, TypeExtension, TypeRegistry, TypeResult,
};
use log::debug;
use std::rc::Rc;
use vet_core::{Class, ValueKind};

/// Gives array classes a generator and modifier built on their component.
pub struct ArrayExtension;

impl TypeExtension for ArrayExtension {
    fn extend_type(&self, registry: &TypeRegistry, class: &Class, ty: &Type) -> TypeResult<()> {
        let Some(component) = class.component() else {
            return Ok(());
        };
        let component = registry.from(component);
        ty.with_generator(GeneratorLibrary::new(registry).of_arrays(&component))?;
        ty.with_modifier(ModifierLibrary::new(registry).of_arrays(&component))?;
        Ok(())
    }
}

/// Type registry preloaded with the basic classes.
///
/// Primitive and boxed classes of every kind, String and Object come with a
/// generator and modifier; array classes get theirs on first use. Clones
/// share the same registry.
#[derive(Clone)]
pub struct Factory {
    types: Rc<TypeRegistry>,
}

impl Factory {
    pub fn new() -> Self {
        let types = TypeRegistry::new();
        register_basics(&types);
        types.add_extension(ArrayExtension);
        debug!("Factory ready with {} basic types", types.len());
        Self {
            types: Rc::new(types),
        }
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn generator(&self) -> GeneratorLibrary<'_> {
        GeneratorLibrary::new(&self.types)
    }

    pub fn modifier(&self) -> ModifierLibrary<'_> {
        ModifierLibrary::new(&self.types)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}

fn register_basics(types: &TypeRegistry) {
    let generators = GeneratorLibrary::new(types);
    let modifiers = ModifierLibrary::new(types);
    for kind in ValueKind::ALL {
        for class in [Class::primitive(kind), Class::boxed(kind)] {
            types.preset(&class, generators.of_kind(kind), modifiers.of_kind(kind));
        }
    }
    types.preset(&Class::string(), generators.of_strings(), modifiers.of_strings());
    types.preset(&Class::object(), generators.of_objects(), modifiers.of_objects());
}
