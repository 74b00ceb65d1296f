//! Type registry and property classification.
//!
//! The registry owns one [`TypeDescriptor`] per serializable type together
//! with the set of complex-marker capabilities. A property is complex when
//! the type it declares (the element type for collections) implements any
//! marker; everything else is simple and written as an attribute. The split
//! is computed on first use and cached in the descriptor.

use std::collections::HashMap;

use tracing::debug;

use crate::component::{Capabilities, Component};
use crate::descriptor::{DeclaredType, PropertyDescriptor, TypeDescriptor};
use crate::error::{RegistrationError, ResolutionError};
use crate::resolve::{LegacyAliasTable, TypeResolver};

/// Simple/complex split of a type's serializable properties.
///
/// Holds indexes into [`TypeDescriptor::properties`], in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySplit {
    pub simple: Vec<usize>,
    pub complex: Vec<usize>,
}

/// Catalog of serializable types.
#[derive(Debug)]
pub struct TypeRegistry {
    markers: Capabilities,
    types: Vec<TypeDescriptor>,
    by_name: HashMap<&'static str, usize>,
    aliases: LegacyAliasTable,
}

impl TypeRegistry {
    /// Empty registry with the given complex-marker capabilities.
    pub fn new(markers: Capabilities) -> Self {
        Self {
            markers,
            types: Vec::new(),
            by_name: HashMap::new(),
            aliases: LegacyAliasTable::default(),
        }
    }

    pub fn markers(&self) -> Capabilities {
        self.markers
    }

    /// Add a type.
    ///
    /// Fails if the name is taken, or if the type would write more than one
    /// complex property as untagged direct children: such children are told
    /// apart by their own type name only, so two of them cannot be routed
    /// back to the right property on load. A single direct-child property
    /// needs an implicit slot that accepts its element kind.
    pub fn register(&mut self, desc: TypeDescriptor) -> Result<(), RegistrationError> {
        let name = desc.name();
        if self.by_name.contains_key(name) {
            return Err(RegistrationError::DuplicateType { type_name: name });
        }

        let direct: Vec<_> = desc
            .properties()
            .iter()
            .filter(|p| p.is_serializable() && self.writes_direct_children(p))
            .collect();
        if let [first, second, ..] = direct.as_slice() {
            return Err(RegistrationError::AmbiguousChildren {
                type_name: name,
                first: first.name(),
                second: second.name(),
            });
        }
        // Direct children are read back through the implicit slot only.
        if let Some(property) = direct.first() {
            let placeable = match (property.declared().object_info(), desc.implicit_slot()) {
                (Some(info), Some(slot)) => info.is_assignable_to(slot.accepts()),
                _ => false,
            };
            if !placeable {
                return Err(RegistrationError::UnplaceableChildren {
                    type_name: name,
                    property: property.name(),
                    kind: property.declared().name(),
                });
            }
        }

        debug!(
            type_name = name,
            properties = desc.properties().len(),
            structural = desc.is_structural(),
            "registered type"
        );
        self.by_name.insert(name, self.types.len());
        self.types.push(desc);
        Ok(())
    }

    /// Map an obsolete tag onto a registered type.
    pub fn register_alias(
        &mut self,
        legacy: &'static str,
        target: &'static str,
    ) -> Result<(), RegistrationError> {
        if !self.by_name.contains_key(target) {
            return Err(RegistrationError::UnknownAliasTarget { legacy, target });
        }
        self.aliases.insert(legacy, target);
        Ok(())
    }

    pub fn aliases(&self) -> &LegacyAliasTable {
        &self.aliases
    }

    pub fn descriptor(&self, name: &str) -> Option<&TypeDescriptor> {
        self.by_name.get(name).map(|&index| &self.types[index])
    }

    /// Descriptor for an object's runtime type.
    pub fn descriptor_of(&self, obj: &dyn Component) -> Result<&TypeDescriptor, ResolutionError> {
        let type_name = obj.type_info().name;
        self.descriptor(type_name)
            .ok_or(ResolutionError::Unregistered { type_name })
    }

    /// Registered types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    pub fn resolver(&self) -> TypeResolver<'_> {
        TypeResolver::new(self)
    }

    /// Whether a property is serialized as nested elements.
    pub fn is_complex(&self, property: &PropertyDescriptor) -> bool {
        property
            .declared()
            .object_info()
            .is_some_and(|info| info.capabilities.intersects(self.markers))
    }

    /// Complex properties written without a wrapper or property-name tag.
    fn writes_direct_children(&self, property: &PropertyDescriptor) -> bool {
        if !self.is_complex(property) {
            return false;
        }
        match property.declared() {
            DeclaredType::Kind(_) if !property.is_collection() => true,
            declared if property.is_collection() => {
                declared.object_info().is_some_and(|info| info.has_identity())
            }
            _ => false,
        }
    }

    /// Simple/complex split of `desc`, computed once.
    pub fn classify<'d>(&self, desc: &'d TypeDescriptor) -> &'d PropertySplit {
        desc.classified.get_or_init(|| {
            let mut split = PropertySplit::default();
            for (index, property) in desc.properties().iter().enumerate() {
                if !property.is_serializable() {
                    continue;
                }
                if self.is_complex(property) {
                    split.complex.push(index);
                } else {
                    split.simple.push(index);
                }
            }
            split
        })
    }

    pub fn simple_properties<'d>(
        &self,
        desc: &'d TypeDescriptor,
    ) -> impl Iterator<Item = &'d PropertyDescriptor> {
        let properties = desc.properties();
        self.classify(desc)
            .simple
            .iter()
            .map(move |&index| &properties[index])
    }

    pub fn complex_properties<'d>(
        &self,
        desc: &'d TypeDescriptor,
    ) -> impl Iterator<Item = &'d PropertyDescriptor> {
        let properties = desc.properties();
        self.classify(desc)
            .complex
            .iter()
            .map(move |&index| &properties[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::TypeInfo;
    use crate::container::ContainerRole;
    use crate::descriptor::TypeBuilder;

    const ITEM: Capabilities = Capabilities::custom(4);
    const SETTINGS: Capabilities = Capabilities::custom(5);

    static ITEM_KIND: TypeInfo = TypeInfo::new("Item", Capabilities::IDENTITY.union(ITEM));

    #[derive(Debug, Default)]
    struct Shelf {
        title: String,
        items: Vec<Box<dyn Component>>,
        extras: Vec<Box<dyn Component>>,
        settings: Settings,
        notes: Notes,
    }

    #[derive(Debug, Default)]
    struct Book;

    #[derive(Debug, Default)]
    struct Settings;

    #[derive(Debug, Default)]
    struct Notes;

    crate::component!(Shelf => TypeInfo::new("Shelf", Capabilities::empty()));
    crate::component!(Book => TypeInfo::new("Book", Capabilities::IDENTITY.union(ITEM)));
    crate::component!(Settings => TypeInfo::new("Settings", SETTINGS));
    crate::component!(Notes => TypeInfo::new("Notes", Capabilities::empty()));

    #[derive(Debug, Default)]
    struct Library {
        books: Vec<Book>,
    }

    crate::component!(Library => TypeInfo::new("Library", Capabilities::empty()));

    fn shelf() -> TypeBuilder<Shelf> {
        TypeBuilder::<Shelf>::new(Shelf::default)
            .property("Title", |s| s.title.clone(), |s, v| s.title = v)
            .polymorphic_list("Items", &ITEM_KIND, |s| &s.items, |s, c| s.items.push(c))
            .accepts(ContainerRole::Widgets, &ITEM_KIND, |s, c| s.items.push(c))
            .object_in_place::<Settings>("Settings", |s| &s.settings, |s| &mut s.settings)
            .object_in_place::<Notes>("Notes", |s| &s.notes, |s| &mut s.notes)
    }

    fn registry() -> TypeRegistry {
        TypeRegistry::new(Capabilities::IDENTITY | SETTINGS)
    }

    #[test]
    fn test_classification_by_capability() {
        let mut reg = registry();
        reg.register(shelf().build()).unwrap();
        let desc = reg.descriptor("Shelf").unwrap();

        let simple: Vec<_> = reg.simple_properties(desc).map(|p| p.name()).collect();
        let complex: Vec<_> = reg.complex_properties(desc).map(|p| p.name()).collect();
        assert_eq!(simple, ["Title", "Notes"]);
        assert_eq!(complex, ["Items", "Settings"]);
    }

    #[test]
    fn test_classification_is_cached() {
        let mut reg = registry();
        reg.register(shelf().build()).unwrap();
        let desc = reg.descriptor("Shelf").unwrap();
        let first = reg.classify(desc) as *const PropertySplit;
        let second = reg.classify(desc) as *const PropertySplit;
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut reg = registry();
        reg.register(TypeBuilder::<Book>::new(|| Book).build()).unwrap();
        let err = reg
            .register(TypeBuilder::<Book>::new(|| Book).build())
            .unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateType { type_name: "Book" });
    }

    #[test]
    fn test_two_identity_collections_rejected() {
        let mut reg = registry();
        let desc = shelf()
            .polymorphic_list("Extras", &ITEM_KIND, |s| &s.extras, |s, c| s.extras.push(c))
            .build();
        let err = reg.register(desc).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::AmbiguousChildren {
                type_name: "Shelf",
                first: "Items",
                second: "Extras",
            }
        );
    }

    #[test]
    fn test_direct_children_need_implicit_slot() {
        let mut reg = registry();
        let desc = TypeBuilder::<Library>::new(Library::default)
            .list::<Book>("Books", |l| &l.books, |l, b| l.books.push(b))
            .build();
        let err = reg.register(desc).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::UnplaceableChildren {
                type_name: "Library",
                property: "Books",
                kind: "Book",
            }
        );
    }

    #[test]
    fn test_direct_children_need_matching_slot_kind() {
        let mut reg = registry();
        let desc = TypeBuilder::<Library>::new(Library::default)
            .list::<Book>("Books", |l| &l.books, |l, b| l.books.push(b))
            .accepts_exact::<Settings>(ContainerRole::Content, |_, _| {})
            .build();
        assert!(matches!(
            reg.register(desc),
            Err(RegistrationError::UnplaceableChildren { property: "Books", .. })
        ));

        let desc = TypeBuilder::<Library>::new(Library::default)
            .list::<Book>("Books", |l| &l.books, |l, b| l.books.push(b))
            .accepts_exact::<Book>(ContainerRole::ListBoxItems, |l, b| l.books.push(b))
            .build();
        reg.register(desc).unwrap();
    }

    #[test]
    fn test_alias_needs_registered_target() {
        let mut reg = registry();
        assert!(reg.register_alias("Tome", "Book").is_err());
        reg.register(TypeBuilder::<Book>::new(|| Book).build()).unwrap();
        reg.register_alias("Tome", "Book").unwrap();
        assert_eq!(reg.aliases().target("Tome"), Some("Book"));
    }

    #[test]
    fn test_unregistered_object() {
        let reg = registry();
        let err = reg.descriptor_of(&Book).unwrap_err();
        assert_eq!(err, ResolutionError::Unregistered { type_name: "Book" });
    }
}
