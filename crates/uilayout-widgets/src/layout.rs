//! Layout containers: free panels and grids.

use uilayout_core::{
    Color, Component, ContainerRole, RegistrationError, TypeBuilder, TypeInfo, TypeRegistry,
};

use crate::enums::ProportionType;
use crate::kinds::{PROPORTION, WIDGET_KIND};
use crate::widget::{WidgetBase, base_properties, widget};

/// Sizing of one grid row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportion {
    pub kind: ProportionType,
    pub value: f32,
}

impl Default for Proportion {
    fn default() -> Self {
        Self {
            kind: ProportionType::Auto,
            value: 1.0,
        }
    }
}

impl Proportion {
    pub fn new(kind: ProportionType, value: f32) -> Self {
        Self { kind, value }
    }
}

uilayout_core::component!(Proportion => TypeInfo::new("Proportion", PROPORTION));

/// Widgets placed by their own coordinates.
#[derive(Debug, Default)]
pub struct Panel {
    pub base: WidgetBase,
    pub widgets: Vec<Box<dyn Component>>,
}

widget!(Panel);

/// Widgets placed in cells.
#[derive(Debug)]
pub struct Grid {
    pub base: WidgetBase,
    pub widgets: Vec<Box<dyn Component>>,
    pub columns_proportions: Vec<Proportion>,
    pub rows_proportions: Vec<Proportion>,
    pub default_column_proportion: Option<Proportion>,
    pub default_row_proportion: Option<Proportion>,
    pub column_spacing: i32,
    pub row_spacing: i32,
    pub show_grid_lines: bool,
    pub grid_lines_color: Color,
}

widget!(Grid);

impl Default for Grid {
    fn default() -> Self {
        Self {
            base: WidgetBase::default(),
            widgets: Vec::new(),
            columns_proportions: Vec::new(),
            rows_proportions: Vec::new(),
            default_column_proportion: None,
            default_row_proportion: None,
            column_spacing: 0,
            row_spacing: 0,
            show_grid_lines: false,
            grid_lines_color: Color::WHITE,
        }
    }
}

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    registry.register(
        TypeBuilder::<Proportion>::new(Proportion::default)
            .property("Type", |p| p.kind, |p, v| p.kind = v)
            .default_value(ProportionType::Auto)
            .property("Value", |p| p.value, |p, v| p.value = v)
            .default_value(1.0f32)
            .structural()
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<Panel>::new(Panel::default))
            .polymorphic_list("Widgets", &WIDGET_KIND, |p| &p.widgets, |p, w| p.widgets.push(w))
            .accepts(ContainerRole::Widgets, &WIDGET_KIND, |p, w| p.widgets.push(w))
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<Grid>::new(Grid::default))
            .property("ColumnSpacing", |g| g.column_spacing, |g, v| g.column_spacing = v)
            .default_value(0)
            .property("RowSpacing", |g| g.row_spacing, |g, v| g.row_spacing = v)
            .default_value(0)
            .property("ShowGridLines", |g| g.show_grid_lines, |g, v| g.show_grid_lines = v)
            .default_value(false)
            .property(
                "GridLinesColor",
                |g| g.grid_lines_color,
                |g, v| g.grid_lines_color = v,
            )
            .default_value(Color::WHITE)
            .object::<Proportion>(
                "DefaultColumnProportion",
                |g| g.default_column_proportion.as_ref(),
                |g, p| g.default_column_proportion = Some(p),
            )
            .object::<Proportion>(
                "DefaultRowProportion",
                |g| g.default_row_proportion.as_ref(),
                |g, p| g.default_row_proportion = Some(p),
            )
            .list::<Proportion>(
                "ColumnsProportions",
                |g| &g.columns_proportions,
                |g, p| g.columns_proportions.push(p),
            )
            .list::<Proportion>(
                "RowsProportions",
                |g| &g.rows_proportions,
                |g, p| g.rows_proportions.push(p),
            )
            .polymorphic_list("Widgets", &WIDGET_KIND, |g| &g.widgets, |g, w| g.widgets.push(w))
            .accepts(ContainerRole::Widgets, &WIDGET_KIND, |g, w| g.widgets.push(w))
            .build(),
    )
}
