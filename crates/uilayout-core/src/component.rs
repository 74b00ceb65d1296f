//! Serializable object model.
//!
//! Objects in a layout tree are handled as `dyn Component`. Each concrete
//! type carries a static [`TypeInfo`] naming it and listing the
//! [`Capabilities`] it implements; declared property types use the same
//! structure, so "is assignable to" is a capability check rather than a
//! name comparison.

use std::any::Any;
use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Capability markers a type implements.
    ///
    /// Only [`Capabilities::IDENTITY`] has meaning to the engine itself; the
    /// remaining bits are free for a type catalog to assign.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u32 {
        /// Instances are recognized as items by their own tag, so collections
        /// of them need no wrapper element.
        const IDENTITY = 1 << 0;

        const _ = !0;
    }
}

impl Capabilities {
    /// Catalog-defined capability bit (1..=31).
    pub const fn custom(bit: u32) -> Self {
        Self::from_bits_retain(1 << bit)
    }
}

/// Static description of a concrete type or an abstract kind.
#[derive(Debug, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: &'static str,
    pub capabilities: Capabilities,
}

impl TypeInfo {
    pub const fn new(name: &'static str, capabilities: Capabilities) -> Self {
        Self { name, capabilities }
    }

    /// Whether a value of this type may be stored where `declared` is expected.
    ///
    /// Exact type match, or every capability of `declared` is implemented.
    pub fn is_assignable_to(&self, declared: &TypeInfo) -> bool {
        self.name == declared.name
            || (!declared.capabilities.is_empty()
                && self.capabilities.contains(declared.capabilities))
    }

    pub fn has_identity(&self) -> bool {
        self.capabilities.contains(Capabilities::IDENTITY)
    }
}

/// An object that can appear in a layout tree.
///
/// Implement with [`component!`](crate::component).
pub trait Component: Any + fmt::Debug {
    fn type_info(&self) -> &'static TypeInfo;

    /// Style assigned to this object, if any.
    fn style_name(&self) -> Option<&str> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Concrete component types with a statically known [`TypeInfo`].
pub trait Typed: Component + Sized {
    const INFO: &'static TypeInfo;
}

impl dyn Component {
    pub fn type_name(&self) -> &'static str {
        self.type_info().name
    }

    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Implements [`Typed`] and [`Component`] for a struct.
///
/// ```ignore
/// component!(Label => TypeInfo::new("Label", WIDGET_CAPS), |this| this.style.as_deref());
/// component!(Proportion => TypeInfo::new("Proportion", PROPORTION));
/// ```
#[macro_export]
macro_rules! component {
    ($ty:ty => $info:expr) => {
        $crate::component!($ty => $info, |_this| None);
    };
    ($ty:ty => $info:expr, |$this:ident| $style:expr) => {
        impl $crate::Typed for $ty {
            const INFO: &'static $crate::TypeInfo = {
                const INFO: $crate::TypeInfo = $info;
                &INFO
            };
        }

        impl $crate::Component for $ty {
            fn type_info(&self) -> &'static $crate::TypeInfo {
                <Self as $crate::Typed>::INFO
            }

            fn style_name(&self) -> Option<&str> {
                let $this = self;
                $style
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }
    };
}
