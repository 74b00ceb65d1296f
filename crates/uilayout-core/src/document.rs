//! Text-level save and load operations.

use tracing::debug;

use crate::component::Component;
use crate::de::TreeDeserializer;
use crate::error::Result;
use crate::node::{self, WriteOptions};
use crate::registry::TypeRegistry;
use crate::ser::TreeSerializer;
use crate::style::Stylesheet;

/// Save a full object graph.
///
/// Attributes implied by `sheet` are left out; with no sheet only declared
/// defaults are.
pub fn save(
    registry: &TypeRegistry,
    root: &dyn Component,
    sheet: Option<&Stylesheet>,
    options: &WriteOptions,
) -> Result<String> {
    let element = TreeSerializer::new(registry, sheet).serialize(root, false)?;
    debug!(
        root = root.type_info().name,
        elements = element.count(),
        "saved document"
    );
    node::write(&element, options)
}

/// Save one object's own attributes, without nested elements.
pub fn save_object(
    registry: &TypeRegistry,
    obj: &dyn Component,
    sheet: Option<&Stylesheet>,
    options: &WriteOptions,
) -> Result<String> {
    let element = TreeSerializer::new(registry, sheet).serialize(obj, true)?;
    node::write(&element, options)
}

/// Load an object whose type is given by the root tag.
///
/// Nothing is returned unless the whole document loads.
pub fn load(registry: &TypeRegistry, xml: &str, sheet: &Stylesheet) -> Result<Box<dyn Component>> {
    let element = node::parse(xml)?;
    let obj = TreeDeserializer::new(registry, sheet).load(&element)?;
    debug!(
        root = obj.type_info().name,
        elements = element.count(),
        "loaded document"
    );
    Ok(obj)
}

/// Populate `target` from a document whose root element describes it.
///
/// On error `target` may be partially populated and should be discarded.
pub fn load_into(
    registry: &TypeRegistry,
    target: &mut dyn Component,
    xml: &str,
    sheet: &Stylesheet,
) -> Result<()> {
    let element = node::parse(xml)?;
    TreeDeserializer::new(registry, sheet).deserialize(target, &element)?;
    debug!(
        root = target.type_info().name,
        elements = element.count(),
        "loaded document"
    );
    Ok(())
}
