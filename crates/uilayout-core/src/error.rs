//! Layout engine error types.
//!
//! Loading is all-or-nothing: any resolution or conversion failure aborts
//! the whole call and no partially built object graph is handed back.
//! Style-lookup misses are not errors at all; they only disable
//! suppression for the property concerned.

use thiserror::Error;

/// Failure converting between attribute text and a property value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Text is not a valid number for the target type.
    #[error("'{text}' is not a valid {type_name}")]
    InvalidNumber {
        type_name: &'static str,
        text: String,
    },

    /// Text is not a boolean literal.
    #[error("'{text}' is not a valid Boolean")]
    InvalidBool { text: String },

    /// Text is neither a hex color nor a known color name.
    #[error("'{text}' is not a valid color")]
    InvalidColor { text: String },

    /// Text does not name a member of the target enum.
    #[error("'{text}' is not a member of {enum_name}")]
    UnknownEnumMember {
        enum_name: &'static str,
        text: String,
    },

    /// A value of the wrong shape reached a typed setter.
    #[error("expected a {expected} value")]
    TypeMismatch { expected: &'static str },

    /// The property type has no text form.
    #[error("type {type_name} cannot be converted to or from text")]
    Unsupported { type_name: &'static str },
}

/// Failure mapping a tag or child element onto the type catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The tag is neither a legacy alias, a structural tag nor a registered type.
    #[error("Could not resolve tag '{tag}'")]
    UnknownTag { tag: String },

    /// The target exposes no container role for implicit children.
    #[error("'{container}' cannot hold implicit child '{child}'")]
    NoContainerRole {
        container: &'static str,
        child: &'static str,
    },

    /// The container role exists but holds a different kind of item.
    #[error("'{container}' expects {expected} items, found '{child}'")]
    Misplaced {
        container: &'static str,
        child: &'static str,
        expected: &'static str,
    },

    /// A read-only complex property had no existing value to load into.
    #[error("'{container}.{property}' has no value to load into")]
    MissingTarget {
        container: &'static str,
        property: &'static str,
    },

    /// An object of a type missing from the registry reached the engine.
    #[error("type '{type_name}' is not registered")]
    Unregistered { type_name: &'static str },
}

/// Inconsistent type registration; caught when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("type '{type_name}' is registered twice")]
    DuplicateType { type_name: &'static str },

    /// Two complex properties would both be written as untagged direct children.
    #[error(
        "type '{type_name}' has more than one direct-child property ('{first}' and '{second}'); \
         declare one of them with a wrapper element"
    )]
    AmbiguousChildren {
        type_name: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// A direct-child property the type's implicit slot cannot take back on load.
    #[error(
        "type '{type_name}' writes '{property}' as direct {kind} children but has no \
         container role accepting them"
    )]
    UnplaceableChildren {
        type_name: &'static str,
        property: &'static str,
        kind: &'static str,
    },

    #[error("legacy tag '{legacy}' points at unregistered type '{target}'")]
    UnknownAliasTarget {
        legacy: &'static str,
        target: &'static str,
    },
}

/// Top-level error for save and load operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Tag or child placement could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Attribute text could not be converted for a property.
    #[error("invalid value for {type_name}.{property}")]
    Conversion {
        type_name: &'static str,
        property: &'static str,
        #[source]
        source: ConversionError,
    },

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Malformed XML.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("xml attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("utf8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The document contains no root element, or more than one.
    #[error("document structure error: {0}")]
    Structure(String),
}

impl Error {
    /// Build a conversion error for `type_name.property`.
    pub fn conversion(
        type_name: &'static str,
        property: &'static str,
        source: ConversionError,
    ) -> Self {
        Self::Conversion {
            type_name,
            property,
            source,
        }
    }

    /// Returns true for failures that come from the document content rather
    /// than from the XML syntax or the type catalog.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Resolution(_) | Self::Conversion { .. })
    }
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, Error>;
