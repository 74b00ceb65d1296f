//! Item lists: combo boxes and list boxes.

use uilayout_core::{
    Capabilities, Color, ContainerRole, RegistrationError, Stylesheet, TypeBuilder, TypeInfo,
    TypeRegistry,
};

use crate::kinds::LIST_ITEM;
use crate::widget::{WidgetBase, base_properties, widget};

/// One entry of a combo box or list box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    pub id: Option<String>,
    pub text: Option<String>,
    pub color: Option<Color>,
    pub is_separator: bool,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

uilayout_core::component!(
    ListItem => TypeInfo::new("ListItem", Capabilities::IDENTITY.union(LIST_ITEM))
);

macro_rules! item_list {
    ($(#[$meta:meta])* $ty:ident, $styles:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $ty {
            pub base: WidgetBase,
            pub items: Vec<ListItem>,
            pub selected_index: Option<i32>,
        }

        widget!($ty);

        impl $ty {
            pub const STYLES: &'static str = $styles;

            pub fn new(sheet: &Stylesheet) -> Self {
                let mut list = Self {
                    base: WidgetBase::default(),
                    items: Vec::new(),
                    selected_index: None,
                };
                list.apply_style(sheet, sheet.default_style_name());
                list
            }

            pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
                if let Some(style) = sheet.style(Self::STYLES, style_name) {
                    self.base.apply_style(style);
                }
            }
        }
    };
}

item_list!(
    /// Drop-down list with one selected item.
    ComboBox,
    "ComboBoxStyles"
);
item_list!(
    /// Scrollable list of selectable items.
    ListBox,
    "ListBoxStyles"
);

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    registry.register(
        TypeBuilder::<ListItem>::new(ListItem::default)
            .property("Id", |i| i.id.clone(), |i, v| i.id = v)
            .property("Text", |i| i.text.clone(), |i, v| i.text = v)
            .property("Color", |i| i.color, |i, v| i.color = v)
            .property("IsSeparator", |i| i.is_separator, |i, v| i.is_separator = v)
            .default_value(false)
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<ComboBox>::with_stylesheet(ComboBox::new))
            .property("SelectedIndex", |c| c.selected_index, |c, v| c.selected_index = v)
            .list::<ListItem>("Items", |c| &c.items, |c, i| c.items.push(i))
            .accepts_exact::<ListItem>(ContainerRole::SelectableItems, |c, i| c.items.push(i))
            .styled(ComboBox::STYLES, "StyleName", ComboBox::apply_style)
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<ListBox>::with_stylesheet(ListBox::new))
            .property("SelectedIndex", |l| l.selected_index, |l, v| l.selected_index = v)
            .list::<ListItem>("Items", |l| &l.items, |l, i| l.items.push(i))
            .accepts_exact::<ListItem>(ContainerRole::ListBoxItems, |l, i| l.items.push(i))
            .styled(ListBox::STYLES, "StyleName", ListBox::apply_style)
            .build(),
    )
}
