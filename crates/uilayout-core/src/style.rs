//! Style sheet value store and the per-type style bindings.
//!
//! The engine treats a style sheet as a read-only tree: the root record
//! holds scalar values, nested records and named style dictionaries
//! (`"LabelStyles"` -> `"default"` -> record). Widgets read their initial
//! look from it at construction; the serializer only compares against it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::value::{PropertyValue, Value};

/// A node in the style tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    Value(Value),
    Record(StyleRecord),
    /// Styles keyed by style name.
    Dictionary(BTreeMap<String, StyleRecord>),
}

/// Named members of one style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRecord {
    members: BTreeMap<String, StyleEntry>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleRecord::set_value`].
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl PropertyValue) -> Self {
        self.set_value(name, value);
        self
    }

    #[must_use]
    pub fn with_record(mut self, name: impl Into<String>, record: StyleRecord) -> Self {
        self.members.insert(name.into(), StyleEntry::Record(record));
        self
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl PropertyValue) {
        self.members
            .insert(name.into(), StyleEntry::Value(value.into_value()));
    }

    pub fn entry(&self, name: &str) -> Option<&StyleEntry> {
        self.members.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.members.get(name)? {
            StyleEntry::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn record(&self, name: &str) -> Option<&StyleRecord> {
        match self.members.get(name)? {
            StyleEntry::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Typed read of a scalar member.
    pub fn get<V: PropertyValue>(&self, name: &str) -> Option<V> {
        self.value(name).cloned().and_then(V::from_value)
    }
}

/// Read-only catalog of named visual styles.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    default_style_name: String,
    root: StyleRecord,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Stylesheet {
    /// Style name used when an object has none assigned.
    pub const DEFAULT_STYLE_NAME: &'static str = "default";

    pub fn new() -> Self {
        Self {
            default_style_name: Self::DEFAULT_STYLE_NAME.to_string(),
            root: StyleRecord::new(),
        }
    }

    #[must_use]
    pub fn with_default_style_name(mut self, name: impl Into<String>) -> Self {
        self.default_style_name = name.into();
        self
    }

    pub fn default_style_name(&self) -> &str {
        &self.default_style_name
    }

    pub fn root(&self) -> &StyleRecord {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut StyleRecord {
        &mut self.root
    }

    /// Insert or replace `dictionary[style_name]`.
    pub fn add_style(
        &mut self,
        dictionary: impl Into<String>,
        style_name: impl Into<String>,
        record: StyleRecord,
    ) {
        let entry = self
            .root
            .members
            .entry(dictionary.into())
            .or_insert_with(|| StyleEntry::Dictionary(BTreeMap::new()));
        if !matches!(entry, StyleEntry::Dictionary(_)) {
            *entry = StyleEntry::Dictionary(BTreeMap::new());
        }
        if let StyleEntry::Dictionary(styles) = entry {
            styles.insert(style_name.into(), record);
        }
    }

    /// Look up `dictionary[style_name]`.
    pub fn style(&self, dictionary: &str, style_name: &str) -> Option<&StyleRecord> {
        match self.root.entry(dictionary)? {
            StyleEntry::Dictionary(styles) => styles.get(style_name),
            _ => None,
        }
    }

    /// Names of the styles in a dictionary.
    pub fn style_names(&self, dictionary: &str) -> Vec<&str> {
        match self.root.entry(dictionary) {
            Some(StyleEntry::Dictionary(styles)) => styles.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

/// Explicit lookup path from a property to its style value.
///
/// `"LabelStyle/TextColor"` starts at the owner's selected style;
/// `"/ModalBackground"` starts at the style-sheet root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePath {
    from_root: bool,
    segments: Vec<String>,
}

impl StylePath {
    pub fn from_root(&self) -> bool {
        self.from_root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for StylePath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from_root, rest) = match s.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let segments: Vec<String> = rest.split('/').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(format!("invalid style path: '{s}'"));
        }
        Ok(Self {
            from_root,
            segments,
        })
    }
}

impl fmt::Display for StylePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from_root {
            f.write_str("/")?;
        }
        f.write_str(&self.segments.join("/"))
    }
}

pub(crate) type StyleApplier = Box<dyn Fn(&mut dyn Component, &Stylesheet, &str) + Send + Sync>;

/// Links a concrete type to the style dictionary it reads from.
///
/// Several types may share a dictionary (all button variants read
/// `"ButtonStyles"`).
pub struct StyleBinding {
    dictionary: String,
    style_property: &'static str,
    apply: Option<StyleApplier>,
}

impl StyleBinding {
    pub(crate) fn new(
        dictionary: String,
        style_property: &'static str,
        apply: Option<StyleApplier>,
    ) -> Self {
        Self {
            dictionary,
            style_property,
            apply,
        }
    }

    pub fn dictionary(&self) -> &str {
        &self.dictionary
    }

    /// Attribute holding the object's style name.
    pub fn style_property(&self) -> &'static str {
        self.style_property
    }

    /// Run the type's own style application for `style_name`.
    pub fn apply(&self, target: &mut dyn Component, sheet: &Stylesheet, style_name: &str) {
        if let Some(apply) = &self.apply {
            apply(target, sheet, style_name);
        }
    }
}

impl fmt::Debug for StyleBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleBinding")
            .field("dictionary", &self.dictionary)
            .field("style_property", &self.style_property)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Color;

    #[test]
    fn test_style_path_parsing() {
        let relative: StylePath = "LabelStyle/TextColor".parse().unwrap();
        assert!(!relative.from_root());
        assert_eq!(relative.segments(), ["LabelStyle", "TextColor"]);

        let rooted: StylePath = "/ModalBackground".parse().unwrap();
        assert!(rooted.from_root());
        assert_eq!(rooted.to_string(), "/ModalBackground");

        assert!("Label//TextColor".parse::<StylePath>().is_err());
        assert!("".parse::<StylePath>().is_err());
    }

    #[test]
    fn test_dictionary_lookup() {
        let mut sheet = Stylesheet::new();
        sheet.add_style(
            "LabelStyles",
            "default",
            StyleRecord::new().with_value("TextColor", Color::WHITE),
        );
        let style = sheet.style("LabelStyles", "default").unwrap();
        assert_eq!(style.get::<Color>("TextColor"), Some(Color::WHITE));
        assert!(sheet.style("LabelStyles", "blue").is_none());
        assert!(sheet.style("ButtonStyles", "default").is_none());
        assert_eq!(sheet.style_names("LabelStyles"), ["default"]);
    }
}
