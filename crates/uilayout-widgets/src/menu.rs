//! Menu bars and their items.

use uilayout_core::{
    Capabilities, Color, Component, ContainerRole, RegistrationError, Stylesheet, TypeBuilder,
    TypeInfo, TypeRegistry,
};

use crate::kinds::{MENU_ITEM, MENU_ITEM_KIND};
use crate::widget::{WidgetBase, base_properties, widget};

const MENU_ITEM_CAPS: Capabilities = Capabilities::IDENTITY.union(MENU_ITEM);

/// Menu entry; a non-empty `items` list makes it a submenu.
#[derive(Debug, Default)]
pub struct MenuItem {
    pub id: Option<String>,
    pub text: Option<String>,
    pub color: Option<Color>,
    pub shortcut_text: Option<String>,
    pub items: Vec<Box<dyn Component>>,
}

uilayout_core::component!(MenuItem => TypeInfo::new("MenuItem", MENU_ITEM_CAPS));

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSeparator {
    pub id: Option<String>,
}

uilayout_core::component!(MenuSeparator => TypeInfo::new("MenuSeparator", MENU_ITEM_CAPS));

macro_rules! menu {
    ($ty:ident, $styles:literal) => {
        #[derive(Debug)]
        pub struct $ty {
            pub base: WidgetBase,
            pub items: Vec<Box<dyn Component>>,
        }

        widget!($ty);

        impl $ty {
            pub const STYLES: &'static str = $styles;

            pub fn new(sheet: &Stylesheet) -> Self {
                let mut menu = Self {
                    base: WidgetBase::default(),
                    items: Vec::new(),
                };
                menu.apply_style(sheet, sheet.default_style_name());
                menu
            }

            pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
                if let Some(style) = sheet.style(Self::STYLES, style_name) {
                    self.base.apply_style(style);
                }
            }
        }
    };
}

menu!(HorizontalMenu, "HorizontalMenuStyles");
menu!(VerticalMenu, "VerticalMenuStyles");

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    registry.register(
        TypeBuilder::<MenuItem>::new(MenuItem::default)
            .property("Id", |m| m.id.clone(), |m, v| m.id = v)
            .property("Text", |m| m.text.clone(), |m, v| m.text = v)
            .property("Color", |m| m.color, |m, v| m.color = v)
            .property(
                "ShortcutText",
                |m| m.shortcut_text.clone(),
                |m, v| m.shortcut_text = v,
            )
            .polymorphic_list("Items", &MENU_ITEM_KIND, |m| &m.items, |m, i| m.items.push(i))
            .accepts(ContainerRole::MenuItems, &MENU_ITEM_KIND, |m, i| m.items.push(i))
            .build(),
    )?;

    registry.register(
        TypeBuilder::<MenuSeparator>::new(MenuSeparator::default)
            .property("Id", |m| m.id.clone(), |m, v| m.id = v)
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<HorizontalMenu>::with_stylesheet(
            HorizontalMenu::new,
        ))
        .polymorphic_list("Items", &MENU_ITEM_KIND, |m| &m.items, |m, i| m.items.push(i))
        .accepts(ContainerRole::MenuItems, &MENU_ITEM_KIND, |m, i| m.items.push(i))
        .styled(HorizontalMenu::STYLES, "StyleName", HorizontalMenu::apply_style)
        .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<VerticalMenu>::with_stylesheet(VerticalMenu::new))
            .polymorphic_list("Items", &MENU_ITEM_KIND, |m| &m.items, |m, i| m.items.push(i))
            .accepts(ContainerRole::MenuItems, &MENU_ITEM_KIND, |m, i| m.items.push(i))
            .styled(VerticalMenu::STYLES, "StyleName", VerticalMenu::apply_style)
            .build(),
    )
}
