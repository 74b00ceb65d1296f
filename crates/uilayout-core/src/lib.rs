//! Stylesheet-aware serialization of UI layout trees.
//!
//! Objects are persisted as an XML element tree: one element per object,
//! simple properties as attributes and complex properties as nested
//! elements. On save, attributes whose value is already implied by the
//! property's declared default or by the active style sheet are left out.
//!
//! # Type registry
//!
//! There is no runtime reflection. Every serializable type registers a
//! [`TypeDescriptor`] built with [`TypeBuilder`]: its factory, its ordered
//! properties with typed accessors, the container slot it offers implicit
//! children and the style dictionary it reads from.
//!
//! ```ignore
//! let mut registry = TypeRegistry::new(Capabilities::IDENTITY | PROPORTION);
//! registry.register(
//!     TypeBuilder::<Label>::with_stylesheet(Label::new)
//!         .property("Text", |l| l.text.clone(), |l, v| l.text = v)
//!         .styled("LabelStyles", "StyleName", Label::apply_style)
//!         .build(),
//! )?;
//! let xml = uilayout_core::save(&registry, &label, Some(&sheet), &WriteOptions::default())?;
//! ```
//!
//! # Architecture
//!
//! - `value.rs` / `codec.rs` - scalar values and their text form
//! - `component.rs` - the object model (`Component`, `TypeInfo`, capabilities)
//! - `descriptor.rs` / `registry.rs` - type registration and property classification
//! - `resolve.rs` - tag to type resolution with legacy aliases
//! - `container.rs` - implicit-child container roles
//! - `style.rs` / `suppress.rs` - style sheet lookup and redundancy checks
//! - `ser.rs` / `de.rs` - tree serializer and deserializer
//! - `node.rs` - element tree and XML reading/writing
//! - `document.rs` - text-level save/load entry points

mod codec;
mod component;
mod container;
mod de;
mod descriptor;
mod document;
mod error;
mod node;
mod registry;
mod resolve;
mod ser;
mod style;
mod suppress;
mod value;

pub use codec::{decode, encode};
pub use component::{Capabilities, Component, TypeInfo, Typed};
pub use container::{ContainerRole, ImplicitSlot};
pub use de::TreeDeserializer;
pub use descriptor::{DeclaredType, Factory, PropertyDescriptor, TypeBuilder, TypeDescriptor};
pub use document::{load, load_into, save, save_object};
pub use error::{ConversionError, Error, RegistrationError, ResolutionError, Result};
pub use node::{Element, WriteOptions, parse, write, write_to};
pub use registry::{PropertySplit, TypeRegistry};
pub use resolve::{LegacyAliasTable, TypeResolver};
pub use ser::TreeSerializer;
pub use style::{StyleBinding, StyleEntry, StylePath, StyleRecord, Stylesheet};
pub use suppress::DefaultSuppressor;
pub use value::{Color, EnumInfo, EnumValue, PropertyValue, ScalarKind, Value, ValueType};
