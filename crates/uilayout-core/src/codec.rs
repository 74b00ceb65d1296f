//! Attribute text encoding for scalar values.
//!
//! The format is fixed and locale-independent: numbers use Rust's shortest
//! round-trip formatting with a `.` decimal separator, booleans are written
//! `True`/`False`, enums by member name and colors as `#RRGGBBAA`.

use crate::error::ConversionError;
use crate::value::{Color, ScalarKind, Value, ValueType};

/// Encode a value as attribute text. `Value::Null` has no text form.
pub fn encode(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Str(s) => Some(s.clone()),
        Value::Color(c) => Some(c.to_hex_string()),
        Value::Enum(name) => Some((*name).to_string()),
    }
}

/// Decode attribute text into a value of the declared type.
///
/// Nullable types decode through their underlying scalar kind; an attribute
/// that is present always carries a value.
pub fn decode(text: &str, ty: ValueType) -> Result<Value, ConversionError> {
    match ty.kind {
        ScalarKind::Bool => decode_bool(text),
        ScalarKind::Int => text
            .trim()
            .parse::<i32>()
            .map(Value::Int)
            .map_err(|_| ConversionError::InvalidNumber {
                type_name: ty.kind.name(),
                text: text.to_string(),
            }),
        ScalarKind::Float => decode_float(text, ty.kind),
        ScalarKind::String => Ok(Value::Str(text.to_string())),
        ScalarKind::Color => text.parse::<Color>().map(Value::Color),
        ScalarKind::Enum(info) => info.member(text.trim()).map(Value::Enum).ok_or_else(|| {
            ConversionError::UnknownEnumMember {
                enum_name: info.name,
                text: text.to_string(),
            }
        }),
    }
}

fn decode_bool(text: &str) -> Result<Value, ConversionError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(Value::Bool(true))
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(Value::Bool(false))
    } else {
        Err(ConversionError::InvalidBool {
            text: text.to_string(),
        })
    }
}

fn decode_float(text: &str, kind: ScalarKind) -> Result<Value, ConversionError> {
    let invalid = || ConversionError::InvalidNumber {
        type_name: kind.name(),
        text: text.to_string(),
    };
    let parsed = text.trim().parse::<f32>().map_err(|_| invalid())?;
    // Rust accepts "inf" and "NaN"; layout files never contain them.
    if !parsed.is_finite() {
        return Err(invalid());
    }
    Ok(Value::Float(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{EnumInfo, EnumValue, PropertyValue};
    use proptest::prelude::*;

    const SIDE: EnumInfo = EnumInfo {
        name: "Side",
        members: &["Left", "Center", "Right"],
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Side {
        Left,
        Center,
        Right,
    }

    impl EnumValue for Side {
        const INFO: &'static EnumInfo = &SIDE;

        fn as_str(&self) -> &'static str {
            match self {
                Side::Left => "Left",
                Side::Center => "Center",
                Side::Right => "Right",
            }
        }

        fn from_member(name: &str) -> Option<Self> {
            match name {
                "Left" => Some(Side::Left),
                "Center" => Some(Side::Center),
                "Right" => Some(Side::Right),
                _ => None,
            }
        }
    }

    #[test]
    fn test_scalars_use_invariant_format() {
        assert_eq!(encode(&Value::Float(100.0)).as_deref(), Some("100"));
        assert_eq!(encode(&Value::Float(0.25)).as_deref(), Some("0.25"));
        assert_eq!(encode(&Value::Bool(true)).as_deref(), Some("True"));
        assert_eq!(encode(&Value::Int(-7)).as_deref(), Some("-7"));
        assert_eq!(encode(&Value::Null), None);
    }

    #[test]
    fn test_decode_bool_ignores_case() {
        let ty = bool::value_type();
        assert_eq!(decode("True", ty).unwrap(), Value::Bool(true));
        assert_eq!(decode("false", ty).unwrap(), Value::Bool(false));
        assert!(matches!(
            decode("yes", ty),
            Err(ConversionError::InvalidBool { .. })
        ));
    }

    #[test]
    fn test_nullable_decodes_underlying_kind() {
        let ty = <Option<i32>>::value_type();
        assert_eq!(decode("42", ty).unwrap(), Value::Int(42));
        assert!(matches!(
            decode("4.5", ty),
            Err(ConversionError::InvalidNumber { type_name: "Int32", .. })
        ));
    }

    #[test]
    fn test_float_rejects_non_finite() {
        let ty = f32::value_type();
        assert!(decode("NaN", ty).is_err());
        assert!(decode("inf", ty).is_err());
        assert_eq!(decode(" 1.5 ", ty).unwrap(), Value::Float(1.5));
    }

    #[test]
    fn test_enum_non_member_fails() {
        let err = decode("Middle", Side::value_type()).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownEnumMember {
                enum_name: "Side",
                text: "Middle".to_string(),
            }
        );
        // Member names are case-sensitive.
        assert!(decode("left", Side::value_type()).is_err());
    }

    #[test]
    fn test_enum_round_trip_all_members() {
        for member in [Side::Left, Side::Center, Side::Right] {
            let text = encode(&member.into_value()).unwrap();
            let decoded = decode(&text, Side::value_type()).unwrap();
            assert_eq!(Side::from_value(decoded), Some(member));
        }
    }

    proptest! {
        #[test]
        fn color_round_trips(r: u8, g: u8, b: u8, a: u8) {
            let color = Color::new(r, g, b, a);
            let text = encode(&Value::Color(color)).unwrap();
            prop_assert_eq!(decode(&text, Color::value_type()).unwrap(), Value::Color(color));
        }

        #[test]
        fn int_round_trips(i: i32) {
            let text = encode(&Value::Int(i)).unwrap();
            prop_assert_eq!(decode(&text, i32::value_type()).unwrap(), Value::Int(i));
        }

        #[test]
        fn finite_float_round_trips(f in proptest::num::f32::NORMAL | proptest::num::f32::ZERO) {
            let text = encode(&Value::Float(f)).unwrap();
            prop_assert_eq!(decode(&text, f32::value_type()).unwrap(), Value::Float(f));
        }
    }
}
