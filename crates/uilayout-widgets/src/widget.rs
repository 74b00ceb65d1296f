//! Properties shared by all widgets.

use uilayout_core::{Color, StyleRecord, TypeBuilder, Typed};

use crate::enums::{HorizontalAlignment, VerticalAlignment};

/// Layout and appearance state every widget carries.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetBase {
    pub id: Option<String>,
    pub style_name: Option<String>,
    pub left: i32,
    pub top: i32,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub grid_column: i32,
    pub grid_row: i32,
    pub visible: bool,
    pub enabled: bool,
    pub background: Option<Color>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self {
            id: None,
            style_name: None,
            left: 0,
            top: 0,
            width: None,
            height: None,
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            grid_column: 0,
            grid_row: 0,
            visible: true,
            enabled: true,
            background: None,
        }
    }
}

impl WidgetBase {
    /// Take the common members of a widget style.
    pub fn apply_style(&mut self, style: &StyleRecord) {
        if let Some(background) = style.get::<Color>("Background") {
            self.background = Some(background);
        }
    }
}

/// A concrete widget type.
pub trait Widget: Typed {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;
}

/// Implements `Component`, `Typed` and [`Widget`] for a struct with a
/// `base: WidgetBase` field.
macro_rules! widget {
    ($ty:ident) => {
        uilayout_core::component!(
            $ty => uilayout_core::TypeInfo::new(stringify!($ty), $crate::kinds::WIDGET_CAPS),
            |this| this.base.style_name.as_deref()
        );

        impl $crate::widget::Widget for $ty {
            fn base(&self) -> &$crate::widget::WidgetBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::widget::WidgetBase {
                &mut self.base
            }
        }
    };
}

pub(crate) use widget;

/// Register the [`WidgetBase`] properties on a widget type.
pub(crate) fn base_properties<T: Widget>(builder: TypeBuilder<T>) -> TypeBuilder<T> {
    builder
        .property("Id", |w| w.base().id.clone(), |w, v| w.base_mut().id = v)
        .property(
            "StyleName",
            |w| w.base().style_name.clone(),
            |w, v| w.base_mut().style_name = v,
        )
        .property("Left", |w| w.base().left, |w, v| w.base_mut().left = v)
        .default_value(0)
        .property("Top", |w| w.base().top, |w, v| w.base_mut().top = v)
        .default_value(0)
        .property("Width", |w| w.base().width, |w, v| w.base_mut().width = v)
        .property("Height", |w| w.base().height, |w, v| w.base_mut().height = v)
        .property(
            "HorizontalAlignment",
            |w| w.base().horizontal_alignment,
            |w, v| w.base_mut().horizontal_alignment = v,
        )
        .default_value(HorizontalAlignment::Left)
        .property(
            "VerticalAlignment",
            |w| w.base().vertical_alignment,
            |w, v| w.base_mut().vertical_alignment = v,
        )
        .default_value(VerticalAlignment::Top)
        .property(
            "GridColumn",
            |w| w.base().grid_column,
            |w, v| w.base_mut().grid_column = v,
        )
        .default_value(0)
        .property("GridRow", |w| w.base().grid_row, |w, v| w.base_mut().grid_row = v)
        .default_value(0)
        .property(
            "GridPositionX",
            |w| w.base().grid_column,
            |w, v| w.base_mut().grid_column = v,
        )
        .obsolete()
        .property(
            "GridPositionY",
            |w| w.base().grid_row,
            |w, v| w.base_mut().grid_row = v,
        )
        .obsolete()
        .property("Visible", |w| w.base().visible, |w, v| w.base_mut().visible = v)
        .default_value(true)
        .property("Enabled", |w| w.base().enabled, |w, v| w.base_mut().enabled = v)
        .default_value(true)
        .property(
            "Background",
            |w| w.base().background,
            |w, v| w.base_mut().background = v,
        )
}
