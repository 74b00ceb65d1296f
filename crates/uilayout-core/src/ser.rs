//! Object graph to element tree.

use tracing::trace;

use crate::codec;
use crate::component::{Component, TypeInfo};
use crate::descriptor::{Access, DeclaredType, PropertyDescriptor, TypeDescriptor};
use crate::error::{ConversionError, Error, Result};
use crate::node::Element;
use crate::registry::TypeRegistry;
use crate::style::Stylesheet;
use crate::suppress::DefaultSuppressor;

/// Walks an object graph and builds its element tree.
///
/// Simple properties become attributes unless the suppressor finds them
/// redundant; complex properties become nested elements.
#[derive(Debug, Clone, Copy)]
pub struct TreeSerializer<'a> {
    registry: &'a TypeRegistry,
    suppressor: DefaultSuppressor<'a>,
}

impl<'a> TreeSerializer<'a> {
    pub fn new(registry: &'a TypeRegistry, sheet: Option<&'a Stylesheet>) -> Self {
        Self {
            registry,
            suppressor: DefaultSuppressor::new(sheet),
        }
    }

    /// Serialize `obj`; with `skip_complex` only its own attributes are written.
    pub fn serialize(&self, obj: &dyn Component, skip_complex: bool) -> Result<Element> {
        let desc = self.registry.descriptor_of(obj)?;
        let mut element = Element::new(desc.name());
        self.write_attributes(obj, desc, &mut element)?;
        if !skip_complex {
            for property in self.registry.complex_properties(desc) {
                self.write_complex(obj, property, &mut element)?;
            }
        }
        Ok(element)
    }

    fn write_attributes(
        &self,
        obj: &dyn Component,
        desc: &TypeDescriptor,
        element: &mut Element,
    ) -> Result<()> {
        for property in self.registry.simple_properties(desc) {
            if property.is_obsolete() {
                continue;
            }

            let Some(value) = property.scalar(obj) else {
                // An object-typed property whose type carries no complex
                // marker has no text form.
                if property.has_object_value(obj) {
                    return Err(Error::conversion(
                        desc.name(),
                        property.name(),
                        ConversionError::Unsupported {
                            type_name: property.declared().name(),
                        },
                    ));
                }
                continue;
            };

            if self.suppressor.should_omit(obj, desc, property, &value) {
                trace!(type_name = desc.name(), property = property.name(), "omitted");
                continue;
            }
            if let Some(text) = codec::encode(&value) {
                element.push_attribute(property.name(), text);
            }
        }
        Ok(())
    }

    fn write_complex(
        &self,
        obj: &dyn Component,
        property: &PropertyDescriptor,
        element: &mut Element,
    ) -> Result<()> {
        match &property.access {
            Access::Object { get, .. } => {
                let Some(value) = get(obj) else {
                    return Ok(());
                };
                let mut child = self.serialize(value, false)?;
                // Abstract kinds keep the runtime type name so the value can
                // be resolved again. Exact types are tagged by property, as
                // one owner may hold several of the same type (a grid's
                // default column and row proportions) and the tag is the
                // only thing telling them apart on load.
                if let DeclaredType::Exact(_) = property.declared() {
                    child.name = property.name().to_string();
                }
                element.children.push(child);
            }
            Access::List { items, .. } => {
                let items = items(obj);
                let identity = property
                    .declared()
                    .object_info()
                    .is_some_and(TypeInfo::has_identity);
                if identity {
                    for item in items {
                        element.children.push(self.serialize(item, false)?);
                    }
                } else if !items.is_empty() {
                    let mut wrapper = Element::new(property.name());
                    for item in items {
                        wrapper.children.push(self.serialize(item, false)?);
                    }
                    element.children.push(wrapper);
                }
            }
            Access::Scalar { .. } => {}
        }
        Ok(())
    }
}
