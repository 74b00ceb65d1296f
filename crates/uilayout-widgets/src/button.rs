//! Button variants.
//!
//! The three plain button types read one shared `ButtonStyles`
//! dictionary; radio buttons have their own.

use uilayout_core::{Color, RegistrationError, StyleRecord, Stylesheet, TypeBuilder, TypeRegistry};

use crate::widget::{WidgetBase, base_properties, widget};

pub const BUTTON_STYLES: &str = "ButtonStyles";
pub const RADIO_BUTTON_STYLES: &str = "RadioButtonStyles";

/// Text color of a button's label style.
fn label_text_color(style: &StyleRecord) -> Option<Color> {
    style.record("LabelStyle")?.get::<Color>("TextColor")
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageTextButton {
    pub base: WidgetBase,
    pub text: Option<String>,
    pub text_color: Color,
    pub image: Option<String>,
    pub is_toggle: bool,
}

widget!(ImageTextButton);

impl ImageTextButton {
    pub fn new(sheet: &Stylesheet) -> Self {
        let mut button = Self {
            base: WidgetBase::default(),
            text: None,
            text_color: Color::WHITE,
            image: None,
            is_toggle: false,
        };
        button.apply_style(sheet, sheet.default_style_name());
        button
    }

    pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
        let Some(style) = sheet.style(BUTTON_STYLES, style_name) else {
            return;
        };
        self.base.apply_style(style);
        if let Some(color) = label_text_color(style) {
            self.text_color = color;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextButton {
    pub base: WidgetBase,
    pub text: Option<String>,
    pub text_color: Color,
}

widget!(TextButton);

impl TextButton {
    pub fn new(sheet: &Stylesheet) -> Self {
        let mut button = Self {
            base: WidgetBase::default(),
            text: None,
            text_color: Color::WHITE,
        };
        button.apply_style(sheet, sheet.default_style_name());
        button
    }

    pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
        let Some(style) = sheet.style(BUTTON_STYLES, style_name) else {
            return;
        };
        self.base.apply_style(style);
        if let Some(color) = label_text_color(style) {
            self.text_color = color;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageButton {
    pub base: WidgetBase,
    pub image: Option<String>,
}

widget!(ImageButton);

impl ImageButton {
    pub fn new(sheet: &Stylesheet) -> Self {
        let mut button = Self {
            base: WidgetBase::default(),
            image: None,
        };
        button.apply_style(sheet, sheet.default_style_name());
        button
    }

    pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
        if let Some(style) = sheet.style(BUTTON_STYLES, style_name) {
            self.base.apply_style(style);
        }
    }
}

/// Toggle button; always toggleable, so that flag is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioButton {
    pub base: WidgetBase,
    pub text: Option<String>,
    pub text_color: Color,
    pub is_pressed: bool,
    toggleable: bool,
}

widget!(RadioButton);

impl RadioButton {
    pub fn new(sheet: &Stylesheet) -> Self {
        let mut button = Self {
            base: WidgetBase::default(),
            text: None,
            text_color: Color::WHITE,
            is_pressed: false,
            toggleable: true,
        };
        button.apply_style(sheet, sheet.default_style_name());
        button
    }

    pub fn toggleable(&self) -> bool {
        self.toggleable
    }

    pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
        let Some(style) = sheet.style(RADIO_BUTTON_STYLES, style_name) else {
            return;
        };
        self.base.apply_style(style);
        if let Some(color) = label_text_color(style) {
            self.text_color = color;
        }
    }
}

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    registry.register(
        base_properties(TypeBuilder::<ImageTextButton>::with_stylesheet(
            ImageTextButton::new,
        ))
        .property("Text", |b| b.text.clone(), |b, v| b.text = v)
        .property("TextColor", |b| b.text_color, |b, v| b.text_color = v)
        .style_path("LabelStyle/TextColor")
        .property("Image", |b| b.image.clone(), |b, v| b.image = v)
        .property("IsToggle", |b| b.is_toggle, |b, v| b.is_toggle = v)
        .default_value(false)
        .styled(BUTTON_STYLES, "StyleName", ImageTextButton::apply_style)
        .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<TextButton>::with_stylesheet(TextButton::new))
            .property("Text", |b| b.text.clone(), |b, v| b.text = v)
            .property("TextColor", |b| b.text_color, |b, v| b.text_color = v)
            .style_path("LabelStyle/TextColor")
            .styled(BUTTON_STYLES, "StyleName", TextButton::apply_style)
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<ImageButton>::with_stylesheet(ImageButton::new))
            .property("Image", |b| b.image.clone(), |b, v| b.image = v)
            .styled(BUTTON_STYLES, "StyleName", ImageButton::apply_style)
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<RadioButton>::with_stylesheet(RadioButton::new))
            .property("Text", |b| b.text.clone(), |b, v| b.text = v)
            .property("TextColor", |b| b.text_color, |b, v| b.text_color = v)
            .style_path("LabelStyle/TextColor")
            .property("IsPressed", |b| b.is_pressed, |b, v| b.is_pressed = v)
            .default_value(false)
            .read_only("Toggleable", RadioButton::toggleable)
            .not_serialized()
            .styled(RADIO_BUTTON_STYLES, "StyleName", RadioButton::apply_style)
            .build(),
    )
}
