//! Capability bits and abstract kinds of the widget catalog.

use uilayout_core::{Capabilities, TypeInfo};

pub const WIDGET: Capabilities = Capabilities::custom(1);
pub const EXPORT_OPTIONS: Capabilities = Capabilities::custom(2);
pub const PROPORTION: Capabilities = Capabilities::custom(3);
pub const LIST_ITEM: Capabilities = Capabilities::custom(4);
pub const TAB_ITEM: Capabilities = Capabilities::custom(5);
pub const MENU_ITEM: Capabilities = Capabilities::custom(6);

/// Capabilities shared by every widget type.
pub const WIDGET_CAPS: Capabilities = Capabilities::IDENTITY.union(WIDGET);

/// Types whose properties are serialized as nested elements.
pub const COMPLEX_MARKERS: Capabilities = Capabilities::IDENTITY
    .union(EXPORT_OPTIONS)
    .union(PROPORTION);

/// Any widget.
pub static WIDGET_KIND: TypeInfo = TypeInfo::new("Widget", WIDGET_CAPS);

/// Anything that can sit in a menu.
pub static MENU_ITEM_KIND: TypeInfo =
    TypeInfo::new("IMenuItem", Capabilities::IDENTITY.union(MENU_ITEM));
