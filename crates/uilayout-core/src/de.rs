//! Element tree to object graph.

use tracing::{debug, trace};

use crate::codec;
use crate::component::Component;
use crate::descriptor::{Access, DeclaredType, PropertyDescriptor, TypeDescriptor};
use crate::error::{ConversionError, Error, ResolutionError, Result};
use crate::node::Element;
use crate::registry::TypeRegistry;
use crate::style::Stylesheet;

/// Populates objects from an element tree.
///
/// Every object the deserializer constructs receives the same style sheet;
/// nothing is read from shared state.
#[derive(Debug, Clone, Copy)]
pub struct TreeDeserializer<'a> {
    registry: &'a TypeRegistry,
    sheet: &'a Stylesheet,
}

impl<'a> TreeDeserializer<'a> {
    pub fn new(registry: &'a TypeRegistry, sheet: &'a Stylesheet) -> Self {
        Self { registry, sheet }
    }

    /// Construct the object named by the root tag and populate it.
    pub fn load(&self, node: &Element) -> Result<Box<dyn Component>> {
        let (desc, mut obj) = self.registry.resolver().create(&node.name, self.sheet)?;
        self.populate(desc, obj.as_mut(), node)?;
        Ok(obj)
    }

    /// Populate an existing object from `node`; the tag itself is not checked.
    pub fn deserialize(&self, target: &mut dyn Component, node: &Element) -> Result<()> {
        let desc = self.registry.descriptor_of(target)?;
        self.populate(desc, target, node)
    }

    fn populate(
        &self,
        desc: &TypeDescriptor,
        target: &mut dyn Component,
        node: &Element,
    ) -> Result<()> {
        trace!(tag = %node.name, type_name = desc.name(), "loading element");
        self.apply_style(desc, target, node);
        self.read_attributes(desc, target, node)?;

        for child in &node.children {
            let property = self
                .registry
                .complex_properties(desc)
                .find(|p| p.name() == child.name);
            match property {
                Some(property) => self.read_property(desc, property, target, child)?,
                None => self.read_implicit(desc, target, child)?,
            }
        }
        Ok(())
    }

    /// Named styles are applied before explicit attributes so that the
    /// attributes override them.
    fn apply_style(&self, desc: &TypeDescriptor, target: &mut dyn Component, node: &Element) {
        let Some(binding) = desc.style_binding() else {
            return;
        };
        if let Some(style_name) = node
            .attribute(binding.style_property())
            .filter(|name| !name.is_empty())
        {
            trace!(type_name = desc.name(), style_name, "applying style");
            binding.apply(target, self.sheet, style_name);
        }
    }

    fn read_attributes(
        &self,
        desc: &TypeDescriptor,
        target: &mut dyn Component,
        node: &Element,
    ) -> Result<()> {
        for (name, text) in &node.attributes {
            let Some(property) = self
                .registry
                .simple_properties(desc)
                .find(|p| p.name() == name.as_str())
            else {
                debug!(type_name = desc.name(), attribute = %name, "ignoring unknown attribute");
                continue;
            };

            let DeclaredType::Scalar(value_type) = property.declared() else {
                return Err(Error::conversion(
                    desc.name(),
                    property.name(),
                    ConversionError::Unsupported {
                        type_name: property.declared().name(),
                    },
                ));
            };
            if property.is_read_only() {
                debug!(
                    type_name = desc.name(),
                    attribute = %name,
                    "skipping read-only attribute"
                );
                continue;
            }

            let value = codec::decode(text, value_type)
                .map_err(|source| Error::conversion(desc.name(), property.name(), source))?;
            property
                .set_scalar(target, value)
                .map_err(|source| Error::conversion(desc.name(), property.name(), source))?;
        }
        Ok(())
    }

    fn read_property(
        &self,
        desc: &TypeDescriptor,
        property: &PropertyDescriptor,
        target: &mut dyn Component,
        node: &Element,
    ) -> Result<()> {
        match &property.access {
            Access::List { push, .. } => {
                for item_node in &node.children {
                    let item = self.build(desc, property, item_node)?;
                    push(&mut *target, item)?;
                }
            }
            Access::Object { set: Some(set), .. } => {
                let value = match property.declared() {
                    DeclaredType::Kind(_) => {
                        let inner = node.children.first().ok_or(ResolutionError::MissingTarget {
                            container: desc.name(),
                            property: property.name(),
                        })?;
                        self.build(desc, property, inner)?
                    }
                    _ => self.build(desc, property, node)?,
                };
                set(target, value)?;
            }
            Access::Object {
                get_mut: Some(get_mut),
                ..
            } => {
                let existing = get_mut(target).ok_or(ResolutionError::MissingTarget {
                    container: desc.name(),
                    property: property.name(),
                })?;
                self.deserialize(existing, node)?;
            }
            Access::Object { .. } | Access::Scalar { .. } => {
                return Err(ResolutionError::MissingTarget {
                    container: desc.name(),
                    property: property.name(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Construct and populate a value for `property`.
    ///
    /// Exact declarations always build the declared type; kinds resolve the
    /// node's own tag and check it against the kind.
    fn build(
        &self,
        owner: &TypeDescriptor,
        property: &PropertyDescriptor,
        node: &Element,
    ) -> Result<Box<dyn Component>> {
        let declared = property.declared();
        let desc = match declared {
            DeclaredType::Exact(info) => self
                .registry
                .descriptor(info.name)
                .ok_or(ResolutionError::Unregistered {
                    type_name: info.name,
                })?,
            DeclaredType::Kind(kind) => {
                let desc = self.registry.resolver().resolve(&node.name)?;
                if !declared.accepts(desc.info()) {
                    return Err(ResolutionError::Misplaced {
                        container: owner.name(),
                        child: desc.name(),
                        expected: kind.name,
                    }
                    .into());
                }
                desc
            }
            DeclaredType::Scalar(_) => {
                return Err(Error::conversion(
                    owner.name(),
                    property.name(),
                    ConversionError::Unsupported {
                        type_name: declared.name(),
                    },
                ));
            }
        };
        let mut obj = desc.create(self.sheet);
        self.populate(desc, obj.as_mut(), node)?;
        Ok(obj)
    }

    /// Route a child whose tag names no property into the target's container slot.
    fn read_implicit(
        &self,
        desc: &TypeDescriptor,
        target: &mut dyn Component,
        node: &Element,
    ) -> Result<()> {
        let (child_desc, mut child) = self.registry.resolver().create(&node.name, self.sheet)?;
        let Some(slot) = desc.implicit_slot() else {
            return Err(ResolutionError::NoContainerRole {
                container: desc.name(),
                child: child_desc.name(),
            }
            .into());
        };
        self.populate(child_desc, child.as_mut(), node)?;
        trace!(
            container = desc.name(),
            child = child_desc.name(),
            role = %slot.role(),
            "implicit child"
        );
        slot.insert(target, child)?;
        Ok(())
    }
}
