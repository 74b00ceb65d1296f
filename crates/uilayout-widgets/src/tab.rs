//! Tab controls.

use uilayout_core::{
    Capabilities, Color, Component, ContainerRole, RegistrationError, Stylesheet, TypeBuilder,
    TypeInfo, TypeRegistry,
};

use crate::kinds::{TAB_ITEM, WIDGET_KIND};
use crate::widget::{WidgetBase, base_properties, widget};

/// One page of a [`TabControl`].
#[derive(Debug, Default)]
pub struct TabItem {
    pub id: Option<String>,
    pub text: Option<String>,
    pub text_color: Option<Color>,
    pub content: Option<Box<dyn Component>>,
}

uilayout_core::component!(
    TabItem => TypeInfo::new("TabItem", Capabilities::IDENTITY.union(TAB_ITEM))
);

#[derive(Debug)]
pub struct TabControl {
    pub base: WidgetBase,
    pub items: Vec<TabItem>,
    pub selected_index: Option<i32>,
}

widget!(TabControl);

impl TabControl {
    pub const STYLES: &'static str = "TabControlStyles";

    pub fn new(sheet: &Stylesheet) -> Self {
        let mut tabs = Self {
            base: WidgetBase::default(),
            items: Vec::new(),
            selected_index: None,
        };
        tabs.apply_style(sheet, sheet.default_style_name());
        tabs
    }

    pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
        if let Some(style) = sheet.style(Self::STYLES, style_name) {
            self.base.apply_style(style);
        }
    }
}

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    registry.register(
        TypeBuilder::<TabItem>::new(TabItem::default)
            .property("Id", |t| t.id.clone(), |t, v| t.id = v)
            .property("Text", |t| t.text.clone(), |t, v| t.text = v)
            .property("TextColor", |t| t.text_color, |t, v| t.text_color = v)
            .polymorphic(
                "Content",
                &WIDGET_KIND,
                |t| t.content.as_deref(),
                |t, c| t.content = Some(c),
            )
            .accepts(ContainerRole::Content, &WIDGET_KIND, |t, c| t.content = Some(c))
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<TabControl>::with_stylesheet(TabControl::new))
            .property("SelectedIndex", |t| t.selected_index, |t, v| t.selected_index = v)
            .list::<TabItem>("Items", |t| &t.items, |t, i| t.items.push(i))
            .accepts_exact::<TabItem>(ContainerRole::Tabs, |t, i| t.items.push(i))
            .styled(TabControl::STYLES, "StyleName", TabControl::apply_style)
            .build(),
    )
}
