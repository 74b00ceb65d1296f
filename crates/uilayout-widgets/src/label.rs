//! Text label.

use uilayout_core::{Color, RegistrationError, Stylesheet, TypeBuilder, TypeRegistry};

use crate::widget::{WidgetBase, base_properties, widget};

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub base: WidgetBase,
    pub text: Option<String>,
    pub text_color: Color,
    pub wrap: bool,
    pub font: Option<String>,
}

widget!(Label);

impl Label {
    pub const STYLES: &'static str = "LabelStyles";

    pub fn new(sheet: &Stylesheet) -> Self {
        let mut label = Self {
            base: WidgetBase::default(),
            text: None,
            text_color: Color::WHITE,
            wrap: false,
            font: None,
        };
        label.apply_style(sheet, sheet.default_style_name());
        label
    }

    pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
        let Some(style) = sheet.style(Self::STYLES, style_name) else {
            return;
        };
        self.base.apply_style(style);
        if let Some(color) = style.get::<Color>("TextColor") {
            self.text_color = color;
        }
        if let Some(font) = style.get::<String>("Font") {
            self.font = Some(font);
        }
    }
}

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    registry.register(
        base_properties(TypeBuilder::<Label>::with_stylesheet(Label::new))
            .property("Text", |l| l.text.clone(), |l, v| l.text = v)
            .property("TextColor", |l| l.text_color, |l, v| l.text_color = v)
            .property("Wrap", |l| l.wrap, |l, v| l.wrap = v)
            .default_value(false)
            .property("Font", |l| l.font.clone(), |l, v| l.font = v)
            .styled(Label::STYLES, "StyleName", Label::apply_style)
            .build(),
    )
}
