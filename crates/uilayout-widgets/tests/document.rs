//! Integration tests for saving and loading widget documents.

use std::sync::Arc;

use uilayout_core::{Component, Error, ResolutionError, Stylesheet, WriteOptions};
use uilayout_widgets::{
    ComboBox, Grid, HorizontalMenu, HorizontalSlider, ImageTextButton, Label, ListItem, MenuItem,
    MenuSeparator, Panel, Project, Proportion, ProportionType, RadioButton, ScrollPane, TabControl,
    TabItem, TextButton, VerticalSplitPane, default_stylesheet, load_object_from_xml, registry,
    save_object_to_xml,
};

fn sheet() -> Arc<Stylesheet> {
    Arc::new(default_stylesheet())
}

fn save(root: &dyn Component, sheet: &Stylesheet) -> String {
    uilayout_core::save(registry().unwrap(), root, Some(sheet), &WriteOptions::compact()).unwrap()
}

fn load(xml: &str, sheet: &Stylesheet) -> Box<dyn Component> {
    load_object_from_xml(xml, sheet).unwrap()
}

fn labeled(sheet: &Stylesheet, text: &str) -> Label {
    let mut label = Label::new(sheet);
    label.text = Some(text.to_string());
    label
}

#[test]
fn test_project_snapshot() {
    let sheet = sheet();

    let mut grid = Grid::default();
    grid.column_spacing = 4;
    grid.columns_proportions = vec![
        Proportion::new(ProportionType::Pixels, 120.0),
        Proportion::new(ProportionType::Fill, 1.0),
    ];
    grid.widgets.push(Box::new(labeled(&sheet, "Name:")));

    let mut ok = TextButton::new(&sheet);
    ok.apply_style(&sheet, "blue");
    ok.base.style_name = Some("blue".to_string());
    ok.base.grid_column = 1;
    ok.text = Some("OK".to_string());
    grid.widgets.push(Box::new(ok));

    let mut project = Project::with_root(grid);
    project.stylesheet_path = Some("stock".to_string());
    project.export_options_mut().namespace = Some("Demo".to_string());
    project.export_options_mut().class = Some("MainForm".to_string());
    project.stylesheet = Some(sheet);

    let xml = project.save().unwrap();
    insta::assert_snapshot!(xml, @r#"
    <Project StylesheetPath="stock">
      <ExportOptions Namespace="Demo" Class="MainForm"/>
      <Grid ColumnSpacing="4">
        <ColumnsProportions>
          <Proportion Type="Pixels" Value="120"/>
          <Proportion Type="Fill"/>
        </ColumnsProportions>
        <Label Text="Name:"/>
        <TextButton StyleName="blue" GridColumn="1" Text="OK"/>
      </Grid>
    </Project>
    "#);
}

#[test]
fn test_project_round_trip() {
    let sheet = sheet();
    let xml = r#"<Project StylesheetPath="stock">
  <ExportOptions Namespace="Demo" OutputPath="gen"/>
  <Grid RowSpacing="2">
    <DefaultRowProportion Type="Part" Value="2"/>
    <RowsProportions><Proportion Type="Fill"/></RowsProportions>
    <Label Text="Hello" GridRow="1"/>
  </Grid>
</Project>"#;

    let project = Project::load_from_xml(xml, sheet.clone()).unwrap();
    assert_eq!(project.stylesheet_path.as_deref(), Some("stock"));
    assert_eq!(project.export_options().namespace.as_deref(), Some("Demo"));
    assert_eq!(project.export_options().output_path.as_deref(), Some("gen"));
    assert!(Arc::ptr_eq(project.stylesheet.as_ref().unwrap(), &sheet));

    let grid = project.root.as_ref().unwrap().downcast_ref::<Grid>().unwrap();
    assert_eq!(grid.row_spacing, 2);
    assert_eq!(
        grid.default_row_proportion,
        Some(Proportion::new(ProportionType::Part, 2.0))
    );
    assert_eq!(
        grid.rows_proportions,
        [Proportion::new(ProportionType::Fill, 1.0)]
    );
    let label = grid.widgets[0].downcast_ref::<Label>().unwrap();
    assert_eq!(label.text.as_deref(), Some("Hello"));
    assert_eq!(label.base.grid_row, 1);

    let again = Project::load_from_xml(&project.save().unwrap(), sheet).unwrap();
    assert_eq!(again.save().unwrap(), project.save().unwrap());
}

#[test]
fn test_project_requires_project_root() {
    let err = Project::load_from_xml("<Label/>", sheet()).unwrap_err();
    assert!(matches!(err, Error::Structure(_)));
}

#[test]
fn test_legacy_button_tag_at_root() {
    let sheet = sheet();
    let loaded = load(r#"<Button Text="Go"/>"#, &sheet);
    let button = loaded.downcast_ref::<ImageTextButton>().unwrap();
    assert_eq!(button.text.as_deref(), Some("Go"));
}

#[test]
fn test_legacy_button_tag_as_implicit_child() {
    let sheet = sheet();
    let loaded = load(r#"<Panel><Label/><Button Image="go.png"/></Panel>"#, &sheet);
    let panel = loaded.downcast_ref::<Panel>().unwrap();
    let button = panel.widgets[1].downcast_ref::<ImageTextButton>().unwrap();
    assert_eq!(button.image.as_deref(), Some("go.png"));

    // Written back under the current name.
    assert_eq!(
        save(panel, &sheet),
        r#"<Panel><Label/><ImageTextButton Image="go.png"/></Panel>"#
    );
}

#[test]
fn test_unresolvable_tag_fails_whole_load() {
    let sheet = sheet();
    let err = load_object_from_xml(r#"<Panel><Label/><Gizmo Size="3"/></Panel>"#, &sheet)
        .unwrap_err();
    assert!(matches!(
        &err,
        Error::Resolution(ResolutionError::UnknownTag { tag }) if tag == "Gizmo"
    ));
    assert_eq!(err.to_string(), "Could not resolve tag 'Gizmo'");

    let err = Project::load_from_xml(r#"<Project><Widget/></Project>"#, sheet).unwrap_err();
    assert!(matches!(
        err,
        Error::Resolution(ResolutionError::UnknownTag { tag }) if tag == "Widget"
    ));
}

#[test]
fn test_heterogeneous_collection_round_trip() {
    let sheet = sheet();
    let mut panel = Panel::default();
    panel.widgets.push(Box::new(labeled(&sheet, "first")));

    let mut slider = HorizontalSlider::new(&sheet);
    slider.range.set_value(30.0);
    panel.widgets.push(Box::new(slider));

    let mut radio = RadioButton::new(&sheet);
    radio.is_pressed = true;
    panel.widgets.push(Box::new(radio));

    let mut nested = Grid::default();
    nested.widgets.push(Box::new(labeled(&sheet, "inner")));
    panel.widgets.push(Box::new(nested));

    let xml = save(&panel, &sheet);
    let loaded = load(&xml, &sheet);
    let loaded = loaded.downcast_ref::<Panel>().unwrap();

    let names: Vec<_> = loaded.widgets.iter().map(|w| w.type_name()).collect();
    assert_eq!(names, ["Label", "HorizontalSlider", "RadioButton", "Grid"]);
    assert_eq!(
        loaded.widgets[0].downcast_ref::<Label>().unwrap().text.as_deref(),
        Some("first")
    );
    assert_eq!(
        loaded.widgets[1]
            .downcast_ref::<HorizontalSlider>()
            .unwrap()
            .range
            .value(),
        30.0
    );
    let radio = loaded.widgets[2].downcast_ref::<RadioButton>().unwrap();
    assert!(radio.is_pressed);
    assert!(radio.toggleable());
    let inner = loaded.widgets[3].downcast_ref::<Grid>().unwrap();
    assert_eq!(
        inner.widgets[0].downcast_ref::<Label>().unwrap().text.as_deref(),
        Some("inner")
    );
}

#[test]
fn test_read_only_collection_is_appended_to() {
    let sheet = sheet();
    let mut combo = ComboBox::new(&sheet);
    combo.items.push(ListItem::new("existing"));

    uilayout_core::load_into(
        registry().unwrap(),
        &mut combo,
        r#"<ComboBox SelectedIndex="1"><ListItem Text="a"/><ListItem Text="b" IsSeparator="True"/></ComboBox>"#,
        &sheet,
    )
    .unwrap();

    let texts: Vec<_> = combo.items.iter().map(|i| i.text.as_deref()).collect();
    assert_eq!(texts, [Some("existing"), Some("a"), Some("b")]);
    assert!(combo.items[2].is_separator);
    assert_eq!(combo.selected_index, Some(1));
}

#[test]
fn test_tabs_and_content_round_trip() {
    let sheet = sheet();
    let mut tabs = TabControl::new(&sheet);
    tabs.items.push(TabItem {
        text: Some("General".to_string()),
        content: Some(Box::new(labeled(&sheet, "page"))),
        ..TabItem::default()
    });
    tabs.items.push(TabItem {
        text: Some("Empty".to_string()),
        ..TabItem::default()
    });

    let xml = save(&tabs, &sheet);
    assert_eq!(
        xml,
        r#"<TabControl><TabItem Text="General"><Label Text="page"/></TabItem><TabItem Text="Empty"/></TabControl>"#
    );

    let loaded = load(&xml, &sheet);
    let loaded = loaded.downcast_ref::<TabControl>().unwrap();
    assert_eq!(loaded.items.len(), 2);
    let content = loaded.items[0].content.as_ref().unwrap();
    assert_eq!(
        content.downcast_ref::<Label>().unwrap().text.as_deref(),
        Some("page")
    );
    assert!(loaded.items[1].content.is_none());
}

#[test]
fn test_nested_menus_round_trip() {
    let sheet = sheet();
    let mut file = MenuItem::new("File");
    file.items.push(Box::new(MenuItem::new("Open")));
    file.items.push(Box::new(MenuSeparator::default()));
    file.items.push(Box::new(MenuItem::new("Quit")));
    let mut menu = HorizontalMenu::new(&sheet);
    menu.items.push(Box::new(file));

    let xml = save(&menu, &sheet);
    assert_eq!(
        xml,
        r#"<HorizontalMenu><MenuItem Text="File"><MenuItem Text="Open"/><MenuSeparator/><MenuItem Text="Quit"/></MenuItem></HorizontalMenu>"#
    );

    let loaded = load(&xml, &sheet);
    let file = loaded.downcast_ref::<HorizontalMenu>().unwrap().items[0]
        .downcast_ref::<MenuItem>()
        .unwrap();
    let names: Vec<_> = file.items.iter().map(|i| i.type_name()).collect();
    assert_eq!(names, ["MenuItem", "MenuSeparator", "MenuItem"]);
}

#[test]
fn test_split_pane_slots() {
    let sheet = sheet();
    let loaded = load(
        r#"<VerticalSplitPane><Label Text="top"/><Label Text="bottom"/></VerticalSplitPane>"#,
        &sheet,
    );
    let pane = loaded.downcast_ref::<VerticalSplitPane>().unwrap();
    assert_eq!(pane.widgets.len(), 2);
}

#[test]
fn test_child_of_wrong_kind_is_rejected() {
    let sheet = sheet();
    let err = load_object_from_xml(r#"<ScrollPane><ListItem Text="x"/></ScrollPane>"#, &sheet)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Resolution(ResolutionError::Misplaced {
            container: "ScrollPane",
            child: "ListItem",
            ..
        })
    ));

    let err = load_object_from_xml(r#"<Label><Label/></Label>"#, &sheet).unwrap_err();
    assert!(matches!(
        err,
        Error::Resolution(ResolutionError::NoContainerRole {
            container: "Label",
            ..
        })
    ));
}

#[test]
fn test_scroll_pane_content_is_replaced_by_last_child() {
    let sheet = sheet();
    let loaded = load(
        r#"<ScrollPane><Label Text="a"/><Label Text="b"/></ScrollPane>"#,
        &sheet,
    );
    let pane = loaded.downcast_ref::<ScrollPane>().unwrap();
    let content = pane.content.as_ref().unwrap().downcast_ref::<Label>().unwrap();
    assert_eq!(content.text.as_deref(), Some("b"));
}

#[test]
fn test_save_object_skips_children() {
    let sheet = sheet();
    let mut grid = Grid::default();
    grid.show_grid_lines = true;
    grid.widgets.push(Box::new(labeled(&sheet, "hidden")));

    let xml = save_object_to_xml(&grid, Some(&sheet)).unwrap();
    assert_eq!(xml, r#"<Grid ShowGridLines="True"/>"#);

    let project = Project::new();
    assert_eq!(project.save_object_to_xml(&grid).unwrap(), xml);
}
