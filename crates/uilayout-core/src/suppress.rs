//! Save-time redundancy check for simple properties.

use tracing::trace;

use crate::component::Component;
use crate::descriptor::{PropertyDescriptor, TypeDescriptor};
use crate::style::Stylesheet;
use crate::value::Value;

/// Decides whether an attribute can be left out of the saved document.
///
/// A value is redundant when it is null, equals the property's declared
/// default, or equals what the active style sheet gives the owner's
/// style. Any failed style lookup keeps the attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSuppressor<'a> {
    sheet: Option<&'a Stylesheet>,
}

impl<'a> DefaultSuppressor<'a> {
    pub fn new(sheet: Option<&'a Stylesheet>) -> Self {
        Self { sheet }
    }

    pub fn should_omit(
        &self,
        owner: &dyn Component,
        owner_desc: &TypeDescriptor,
        property: &PropertyDescriptor,
        value: &Value,
    ) -> bool {
        if value.is_null() || property.default_value() == Some(value) {
            return true;
        }

        match self.style_value(owner, owner_desc, property) {
            Some(style_value) => style_value == value,
            None => false,
        }
    }

    /// Value the style sheet implies for `property` on `owner`.
    pub fn style_value(
        &self,
        owner: &dyn Component,
        owner_desc: &TypeDescriptor,
        property: &PropertyDescriptor,
    ) -> Option<&'a Value> {
        let sheet = self.sheet?;
        let binding = owner_desc.style_binding()?;
        let style_name = owner
            .style_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(sheet.default_style_name());

        let Some(style) = sheet.style(binding.dictionary(), style_name) else {
            trace!(
                dictionary = binding.dictionary(),
                style_name,
                "no style record; keeping attribute"
            );
            return None;
        };

        let found = match property.style_path() {
            None => style.value(property.name()),
            Some(path) => {
                let start = if path.from_root() { sheet.root() } else { style };
                let (last, parents) = path.segments().split_last()?;
                parents
                    .iter()
                    .try_fold(start, |record, segment| record.record(segment))
                    .and_then(|record| record.value(last))
            }
        };

        if found.is_none() {
            trace!(
                type_name = owner_desc.name(),
                property = property.name(),
                style_name,
                "style lookup missed; keeping attribute"
            );
        }
        found
    }
}
