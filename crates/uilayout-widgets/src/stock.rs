//! Built-in style sheet.

use uilayout_core::{Color, StyleRecord, Stylesheet};

use crate::button::{BUTTON_STYLES, RADIO_BUTTON_STYLES};
use crate::label::Label;
use crate::list::{ComboBox, ListBox};
use crate::menu::{HorizontalMenu, VerticalMenu};
use crate::pane::{HorizontalSplitPane, ScrollPane, VerticalSplitPane, Window};
use crate::slider::{HorizontalSlider, Slider, VerticalSlider};
use crate::tab::TabControl;

/// Name of the alternative style every styled dictionary carries.
pub const BLUE: &str = "blue";

const PANEL_GRAY: Color = Color::rgb(64, 64, 64);
const DEEP_BLUE: Color = Color::rgb(32, 48, 96);
const LIGHT_BLUE: Color = Color::rgb(160, 200, 255);

/// Dictionaries whose styles only set the common widget members.
const PLAIN_DICTIONARIES: &[&str] = &[
    HorizontalSlider::STYLES,
    VerticalSlider::STYLES,
    ScrollPane::STYLES,
    HorizontalSplitPane::STYLES,
    VerticalSplitPane::STYLES,
    ComboBox::STYLES,
    ListBox::STYLES,
    TabControl::STYLES,
    HorizontalMenu::STYLES,
    VerticalMenu::STYLES,
];

fn background(color: Color) -> StyleRecord {
    StyleRecord::new().with_value("Background", color)
}

fn text_style(color: Color) -> StyleRecord {
    StyleRecord::new().with_value("TextColor", color)
}

/// A sheet with a `default` and a `blue` style for every styled widget kind.
pub fn default_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new();
    let default = sheet.default_style_name().to_string();

    sheet
        .root_mut()
        .set_value("ModalBackground", Color::new(0, 0, 0, 128));

    sheet.add_style(Label::STYLES, &default, text_style(Color::WHITE));
    sheet.add_style(Label::STYLES, BLUE, text_style(LIGHT_BLUE));

    for dictionary in [BUTTON_STYLES, RADIO_BUTTON_STYLES] {
        sheet.add_style(
            dictionary,
            &default,
            background(PANEL_GRAY).with_record("LabelStyle", text_style(Color::WHITE)),
        );
        sheet.add_style(
            dictionary,
            BLUE,
            background(DEEP_BLUE).with_record("LabelStyle", text_style(LIGHT_BLUE)),
        );
    }

    sheet.add_style(
        Window::STYLES,
        &default,
        background(PANEL_GRAY).with_record("TitleStyle", text_style(Color::WHITE)),
    );
    sheet.add_style(
        Window::STYLES,
        BLUE,
        background(DEEP_BLUE).with_record("TitleStyle", text_style(LIGHT_BLUE)),
    );

    for &dictionary in PLAIN_DICTIONARIES {
        sheet.add_style(dictionary, &default, background(PANEL_GRAY));
        sheet.add_style(dictionary, BLUE, background(DEEP_BLUE));
    }

    sheet
}
