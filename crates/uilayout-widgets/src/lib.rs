//! Widget catalog for uilayout documents.
//!
//! This crate registers a concrete set of widgets with the
//! [`uilayout_core`] engine and provides the document-level entry points.
//!
//! # Features
//!
//! - **Widget types** with their property registrations and style bindings
//! - **Document root** ([`Project`]) with export metadata
//! - **Legacy tags** (`Button` loads as `ImageTextButton`)
//! - **Stock style sheet** with a `default` and a `blue` style per widget kind
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use uilayout_widgets::{Grid, Label, Project, default_stylesheet};
//!
//! let sheet = Arc::new(default_stylesheet());
//! let mut grid = Grid::default();
//! grid.widgets.push(Box::new(Label::new(&sheet)));
//!
//! let mut project = Project::with_root(grid);
//! project.stylesheet = Some(sheet.clone());
//! let xml = project.save()?;
//!
//! let loaded = Project::load_from_xml(&xml, sheet)?;
//! ```
//!
//! # Architecture
//!
//! - `widget.rs` - properties shared by every widget
//! - `label.rs`, `button.rs`, `slider.rs` - leaf widgets
//! - `layout.rs`, `pane.rs` - containers and grid sizing records
//! - `list.rs`, `tab.rs`, `menu.rs` - item-holding widgets
//! - `project.rs` - document root and save/load entry points
//! - `catalog.rs` - the shared registry and legacy aliases
//! - `stock.rs` - built-in style sheet

mod button;
mod catalog;
mod enums;
mod kinds;
mod label;
mod layout;
mod list;
mod menu;
mod pane;
mod project;
mod slider;
mod stock;
mod tab;
mod widget;

pub use button::{
    BUTTON_STYLES, ImageButton, ImageTextButton, RADIO_BUTTON_STYLES, RadioButton, TextButton,
};
pub use catalog::{LEGACY_ALIASES, registry};
pub use enums::{HorizontalAlignment, Orientation, ProportionType, VerticalAlignment};
pub use kinds::{
    COMPLEX_MARKERS, EXPORT_OPTIONS, LIST_ITEM, MENU_ITEM, MENU_ITEM_KIND, PROPORTION, TAB_ITEM,
    WIDGET, WIDGET_CAPS, WIDGET_KIND,
};
pub use label::Label;
pub use layout::{Grid, Panel, Proportion};
pub use list::{ComboBox, ListBox, ListItem};
pub use menu::{HorizontalMenu, MenuItem, MenuSeparator, VerticalMenu};
pub use pane::{HorizontalSplitPane, ScrollPane, VerticalSplitPane, Window};
pub use project::{ExportOptions, Project, load_object_from_xml, save_object_to_xml};
pub use slider::{HorizontalSlider, Slider, SliderRange, VerticalSlider};
pub use stock::{BLUE, default_stylesheet};
pub use tab::{TabControl, TabItem};
pub use widget::{Widget, WidgetBase};
