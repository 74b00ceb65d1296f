//! Tag-to-type resolution.

use std::collections::BTreeMap;

use tracing::trace;

use crate::component::Component;
use crate::descriptor::TypeDescriptor;
use crate::error::ResolutionError;
use crate::registry::TypeRegistry;
use crate::style::Stylesheet;

/// Obsolete tag names and the types that replaced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyAliasTable {
    entries: BTreeMap<&'static str, &'static str>,
}

impl LegacyAliasTable {
    pub(crate) fn insert(&mut self, legacy: &'static str, target: &'static str) {
        self.entries.insert(legacy, target);
    }

    pub fn target(&self, tag: &str) -> Option<&'static str> {
        self.entries.get(tag).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(legacy, target)| (*legacy, *target))
    }
}

/// Maps element tags to registered types.
///
/// Structural records match their fixed tag directly. Any other tag goes
/// through legacy alias substitution and is then looked up by type name.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> TypeResolver<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(&self, tag: &str) -> Result<&'r TypeDescriptor, ResolutionError> {
        if let Some(desc) = self.registry.descriptor(tag).filter(|d| d.is_structural()) {
            return Ok(desc);
        }

        let name = self.registry.aliases().target(tag).unwrap_or(tag);
        if name != tag {
            trace!(tag, replacement = name, "legacy tag");
        }
        self.registry
            .descriptor(name)
            .ok_or_else(|| ResolutionError::UnknownTag {
                tag: tag.to_string(),
            })
    }

    /// Resolve `tag` and construct a fresh instance with `sheet`.
    pub fn create(
        &self,
        tag: &str,
        sheet: &Stylesheet,
    ) -> Result<(&'r TypeDescriptor, Box<dyn Component>), ResolutionError> {
        let desc = self.resolve(tag)?;
        Ok((desc, desc.create(sheet)))
    }
}
