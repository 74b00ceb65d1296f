//! Integration tests for default and style-based attribute suppression.

use proptest::prelude::*;
use uilayout_core::{Color, Component, ConversionError, Error, Stylesheet, WriteOptions};
use uilayout_widgets::{
    BLUE, HorizontalAlignment, HorizontalSlider, Label, RadioButton, VerticalSlider, Window,
    default_stylesheet, load_object_from_xml, registry, save_object_to_xml,
};

fn save(obj: &dyn Component, sheet: Option<&Stylesheet>) -> String {
    uilayout_core::save(registry().unwrap(), obj, sheet, &WriteOptions::compact()).unwrap()
}

fn blue_label_color(sheet: &Stylesheet) -> Color {
    sheet
        .style(Label::STYLES, BLUE)
        .and_then(|style| style.get::<Color>("TextColor"))
        .unwrap()
}

#[test]
fn test_fresh_widgets_write_no_attributes() {
    let sheet = default_stylesheet();
    assert_eq!(save(&Label::new(&sheet), Some(&sheet)), "<Label/>");
    assert_eq!(save(&RadioButton::new(&sheet), Some(&sheet)), "<RadioButton/>");
    assert_eq!(save(&VerticalSlider::new(&sheet), Some(&sheet)), "<VerticalSlider/>");
    assert_eq!(save(&Window::new(&sheet), Some(&sheet)), "<Window/>");
}

#[test]
fn test_without_stylesheet_only_declared_defaults_are_omitted() {
    let sheet = default_stylesheet();
    let label = Label::new(&sheet);
    assert_eq!(save(&label, None), r##"<Label TextColor="#FFFFFFFF"/>"##);
}

#[test]
fn test_style_suppression_follows_assigned_style() {
    let sheet = default_stylesheet();
    let mut label = Label::new(&sheet);
    label.apply_style(&sheet, BLUE);
    label.base.style_name = Some(BLUE.to_string());
    assert_eq!(save(&label, Some(&sheet)), r#"<Label StyleName="blue"/>"#);

    label.text_color = Color::RED;
    assert_eq!(
        save(&label, Some(&sheet)),
        r##"<Label StyleName="blue" TextColor="#FF0000FF"/>"##
    );

    // The default style's value is not redundant under the blue style.
    label.text_color = Color::WHITE;
    assert_eq!(
        save(&label, Some(&sheet)),
        r##"<Label StyleName="blue" TextColor="#FFFFFFFF"/>"##
    );
}

#[test]
fn test_named_style_is_applied_on_load() {
    let sheet = default_stylesheet();
    let loaded = load_object_from_xml(r#"<Label StyleName="blue" Text="x"/>"#, &sheet).unwrap();
    let label = loaded.downcast_ref::<Label>().unwrap();
    assert_eq!(label.text_color, blue_label_color(&sheet));

    // Explicit attributes win over the style.
    let loaded =
        load_object_from_xml(r##"<Label StyleName="blue" TextColor="Red"/>"##, &sheet).unwrap();
    assert_eq!(loaded.downcast_ref::<Label>().unwrap().text_color, Color::RED);
}

#[test]
fn test_style_paths() {
    let sheet = default_stylesheet();
    let mut window = Window::new(&sheet);
    window.title = Some("Settings".to_string());
    assert_eq!(save(&window, Some(&sheet)), r#"<Window Title="Settings"/>"#);

    window.title_text_color = Color::GREEN;
    window.modal_background = Some(Color::BLACK);
    assert_eq!(
        save(&window, Some(&sheet)),
        r##"<Window Title="Settings" TitleTextColor="#008000FF" ModalBackground="#000000FF"/>"##
    );
}

#[test]
fn test_unknown_style_keeps_attributes() {
    let sheet = default_stylesheet();
    let mut label = Label::new(&sheet);
    label.base.style_name = Some("missing".to_string());
    assert_eq!(
        save(&label, Some(&sheet)),
        r##"<Label StyleName="missing" TextColor="#FFFFFFFF"/>"##
    );
}

#[test]
fn test_obsolete_grid_position_loads_but_is_not_written() {
    let sheet = default_stylesheet();
    let loaded =
        load_object_from_xml(r#"<Label GridPositionX="2" GridPositionY="3"/>"#, &sheet).unwrap();
    let label = loaded.downcast_ref::<Label>().unwrap();
    assert_eq!((label.base.grid_column, label.base.grid_row), (2, 3));
    assert_eq!(
        save_object_to_xml(label, Some(&sheet)).unwrap(),
        r#"<Label GridColumn="2" GridRow="3"/>"#
    );
}

#[test]
fn test_read_only_and_unserialized_attributes_are_ignored_on_load() {
    let sheet = default_stylesheet();
    let loaded = load_object_from_xml(
        r#"<HorizontalSlider Orientation="Vertical" Maximum="500" Value="300"/>"#,
        &sheet,
    )
    .unwrap();
    let slider = loaded.downcast_ref::<HorizontalSlider>().unwrap();
    assert_eq!(slider.range.value(), 300.0);

    let loaded = load_object_from_xml(r#"<RadioButton Toggleable="False"/>"#, &sheet).unwrap();
    assert!(loaded.downcast_ref::<RadioButton>().unwrap().toggleable());
}

#[test]
fn test_invalid_attribute_names_type_and_property() {
    let sheet = default_stylesheet();
    let err = load_object_from_xml(r#"<Label HorizontalAlignment="Middle"/>"#, &sheet).unwrap_err();
    match err {
        Error::Conversion {
            type_name,
            property,
            source,
        } => {
            assert_eq!((type_name, property), ("Label", "HorizontalAlignment"));
            assert!(matches!(source, ConversionError::UnknownEnumMember { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn alignment() -> impl Strategy<Value = HorizontalAlignment> {
    proptest::sample::select(HorizontalAlignment::ALL)
}

proptest! {
    #[test]
    fn declared_defaults_are_omitted_and_reload(
        left in -50i32..50,
        align in alignment(),
        wrap in any::<bool>(),
    ) {
        let sheet = default_stylesheet();
        let mut label = Label::new(&sheet);
        label.base.left = left;
        label.base.horizontal_alignment = align;
        label.wrap = wrap;

        let xml = save(&label, Some(&sheet));
        prop_assert_eq!(xml.contains("Left="), left != 0);
        prop_assert_eq!(
            xml.contains("HorizontalAlignment="),
            align != HorizontalAlignment::Left
        );
        prop_assert_eq!(xml.contains("Wrap="), wrap);

        let loaded = load_object_from_xml(&xml, &sheet).unwrap();
        let loaded = loaded.downcast_ref::<Label>().unwrap();
        prop_assert_eq!(loaded.base.left, left);
        prop_assert_eq!(loaded.base.horizontal_alignment, align);
        prop_assert_eq!(loaded.wrap, wrap);
    }

    #[test]
    fn slider_value_survives_round_trip(value in 0.0f32..100.0) {
        let sheet = default_stylesheet();
        let mut slider = HorizontalSlider::new(&sheet);
        slider.range.set_value(value);
        let xml = save(&slider, Some(&sheet));
        let loaded = load_object_from_xml(&xml, &sheet).unwrap();
        let loaded = loaded.downcast_ref::<HorizontalSlider>().unwrap();
        prop_assert_eq!(loaded.range.value(), value);
    }
}
