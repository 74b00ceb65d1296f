//! Enumerations used by widget properties.

use std::fmt;

use uilayout_core::{EnumInfo, EnumValue};

/// Declares a property enum persisted by member name.
macro_rules! layout_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident),+ $(,)? } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl EnumValue for $name {
            const INFO: &'static EnumInfo = &EnumInfo {
                name: stringify!($name),
                members: &[$(stringify!($variant)),+],
            };

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            fn from_member(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(EnumValue::as_str(self))
            }
        }
    };
}

layout_enum! {
    /// Horizontal placement inside the parent's cell.
    HorizontalAlignment { Left, Center, Right, Stretch } default Left
}

layout_enum! {
    /// Vertical placement inside the parent's cell.
    VerticalAlignment { Top, Center, Bottom, Stretch } default Top
}

layout_enum! {
    Orientation { Horizontal, Vertical } default Horizontal
}

layout_enum! {
    /// How a grid row or column is sized.
    ProportionType { Auto, Part, Fill, Pixels } default Auto
}
