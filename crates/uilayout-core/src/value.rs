//! Scalar property values.
//!
//! Every simple property reads and writes a [`Value`]. The declared
//! [`ValueType`] of a property tells the codec how to turn attribute text
//! back into a value; [`PropertyValue`] bridges typed Rust fields and the
//! untyped [`Value`] used by the engine.

use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;

/// RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Case-insensitive color names accepted on load.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("Transparent", Color::TRANSPARENT),
    ("Black", Color::BLACK),
    ("White", Color::WHITE),
    ("Red", Color::RED),
    ("Green", Color::GREEN),
    ("Lime", Color::rgb(0, 255, 0)),
    ("Blue", Color::BLUE),
    ("Yellow", Color::rgb(255, 255, 0)),
    ("Orange", Color::rgb(255, 165, 0)),
    ("Gray", Color::rgb(128, 128, 128)),
    ("DarkGray", Color::rgb(169, 169, 169)),
    ("LightGray", Color::rgb(211, 211, 211)),
    ("CornflowerBlue", Color::rgb(100, 149, 237)),
];

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Uppercase `#RRGGBBAA` form used when saving.
    pub fn to_hex_string(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }

    /// Look up a color by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Color> {
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    fn from_hex(digits: &str) -> Option<Color> {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::new(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ConversionError;

    /// Parse `#RRGGBBAA`, `#RRGGBB` or a color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parsed = match text.strip_prefix('#') {
            Some(digits) => Color::from_hex(digits),
            None => Color::from_name(text),
        };
        parsed.ok_or_else(|| ConversionError::InvalidColor {
            text: s.to_string(),
        })
    }
}

/// Static description of an enum usable as a property type.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumInfo {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl EnumInfo {
    /// Returns the canonical member name when `text` is a declared member.
    pub fn member(&self, text: &str) -> Option<&'static str> {
        self.members.iter().copied().find(|member| *member == text)
    }
}

/// Enum types whose values are persisted by member name.
pub trait EnumValue: Copy + 'static {
    const INFO: &'static EnumInfo;

    fn as_str(&self) -> &'static str;

    fn from_member(name: &str) -> Option<Self>;
}

/// Scalar shape of a simple property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Int,
    Float,
    String,
    Color,
    Enum(&'static EnumInfo),
}

impl ScalarKind {
    /// Type name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "Boolean",
            ScalarKind::Int => "Int32",
            ScalarKind::Float => "Single",
            ScalarKind::String => "String",
            ScalarKind::Color => "Color",
            ScalarKind::Enum(info) => info.name,
        }
    }
}

/// Declared type of a simple property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    pub kind: ScalarKind,
    /// Whether the property accepts `Value::Null`.
    pub nullable: bool,
}

impl ValueType {
    pub const fn of(kind: ScalarKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub const fn nullable(self) -> Self {
        Self {
            kind: self.kind,
            nullable: true,
        }
    }
}

/// Untyped property value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(String),
    Color(Color),
    /// Enum member name.
    Enum(&'static str),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Rust types that can back a simple property.
pub trait PropertyValue: Sized + 'static {
    fn value_type() -> ValueType;

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> Option<Self>;
}

impl PropertyValue for bool {
    fn value_type() -> ValueType {
        ValueType::of(ScalarKind::Bool)
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl PropertyValue for i32 {
    fn value_type() -> ValueType {
        ValueType::of(ScalarKind::Int)
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl PropertyValue for f32 {
    fn value_type() -> ValueType {
        ValueType::of(ScalarKind::Float)
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl PropertyValue for String {
    fn value_type() -> ValueType {
        ValueType::of(ScalarKind::String)
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl PropertyValue for Color {
    fn value_type() -> ValueType {
        ValueType::of(ScalarKind::Color)
    }

    fn into_value(self) -> Value {
        Value::Color(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }
}

impl<E: EnumValue> PropertyValue for E {
    fn value_type() -> ValueType {
        ValueType::of(ScalarKind::Enum(E::INFO))
    }

    fn into_value(self) -> Value {
        Value::Enum(self.as_str())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Enum(name) => E::from_member(name),
            _ => None,
        }
    }
}

/// Nullable primitives: `None` maps to `Value::Null`.
impl<T: PropertyValue> PropertyValue for Option<T> {
    fn value_type() -> ValueType {
        T::value_type().nullable()
    }

    fn into_value(self) -> Value {
        self.map_or(Value::Null, PropertyValue::into_value)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}
