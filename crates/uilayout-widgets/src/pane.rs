//! Single-content panes, windows and split panes.

use uilayout_core::{
    Color, Component, ContainerRole, RegistrationError, Stylesheet, TypeBuilder, TypeRegistry,
};

use crate::kinds::WIDGET_KIND;
use crate::widget::{WidgetBase, base_properties, widget};

/// Scrollable frame around one widget.
#[derive(Debug)]
pub struct ScrollPane {
    pub base: WidgetBase,
    pub content: Option<Box<dyn Component>>,
    pub show_horizontal_scrollbar: bool,
    pub show_vertical_scrollbar: bool,
}

widget!(ScrollPane);

impl ScrollPane {
    pub const STYLES: &'static str = "ScrollPaneStyles";

    pub fn new(sheet: &Stylesheet) -> Self {
        let mut pane = Self {
            base: WidgetBase::default(),
            content: None,
            show_horizontal_scrollbar: true,
            show_vertical_scrollbar: true,
        };
        pane.apply_style(sheet, sheet.default_style_name());
        pane
    }

    pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
        if let Some(style) = sheet.style(Self::STYLES, style_name) {
            self.base.apply_style(style);
        }
    }
}

/// Titled window with one content widget.
#[derive(Debug)]
pub struct Window {
    pub base: WidgetBase,
    pub title: Option<String>,
    pub title_text_color: Color,
    pub modal_background: Option<Color>,
    pub content: Option<Box<dyn Component>>,
}

widget!(Window);

impl Window {
    pub const STYLES: &'static str = "WindowStyles";

    pub fn new(sheet: &Stylesheet) -> Self {
        let mut window = Self {
            base: WidgetBase::default(),
            title: None,
            title_text_color: Color::WHITE,
            modal_background: sheet.root().get::<Color>("ModalBackground"),
            content: None,
        };
        window.apply_style(sheet, sheet.default_style_name());
        window
    }

    pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
        let Some(style) = sheet.style(Self::STYLES, style_name) else {
            return;
        };
        self.base.apply_style(style);
        if let Some(color) = style
            .record("TitleStyle")
            .and_then(|title| title.get::<Color>("TextColor"))
        {
            self.title_text_color = color;
        }
    }
}

macro_rules! split_pane {
    ($ty:ident, $styles:literal) => {
        /// Widgets laid out in resizable slots.
        #[derive(Debug)]
        pub struct $ty {
            pub base: WidgetBase,
            pub widgets: Vec<Box<dyn Component>>,
        }

        widget!($ty);

        impl $ty {
            pub const STYLES: &'static str = $styles;

            pub fn new(sheet: &Stylesheet) -> Self {
                let mut pane = Self {
                    base: WidgetBase::default(),
                    widgets: Vec::new(),
                };
                pane.apply_style(sheet, sheet.default_style_name());
                pane
            }

            pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
                if let Some(style) = sheet.style(Self::STYLES, style_name) {
                    self.base.apply_style(style);
                }
            }
        }
    };
}

split_pane!(HorizontalSplitPane, "HorizontalSplitPaneStyles");
split_pane!(VerticalSplitPane, "VerticalSplitPaneStyles");

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    registry.register(
        base_properties(TypeBuilder::<ScrollPane>::with_stylesheet(ScrollPane::new))
            .property(
                "ShowHorizontalScrollBar",
                |s| s.show_horizontal_scrollbar,
                |s, v| s.show_horizontal_scrollbar = v,
            )
            .default_value(true)
            .property(
                "ShowVerticalScrollBar",
                |s| s.show_vertical_scrollbar,
                |s, v| s.show_vertical_scrollbar = v,
            )
            .default_value(true)
            .polymorphic(
                "Content",
                &WIDGET_KIND,
                |s| s.content.as_deref(),
                |s, w| s.content = Some(w),
            )
            .accepts(ContainerRole::Content, &WIDGET_KIND, |s, w| s.content = Some(w))
            .styled(ScrollPane::STYLES, "StyleName", ScrollPane::apply_style)
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<Window>::with_stylesheet(Window::new))
            .property("Title", |w| w.title.clone(), |w, v| w.title = v)
            .property(
                "TitleTextColor",
                |w| w.title_text_color,
                |w, v| w.title_text_color = v,
            )
            .style_path("TitleStyle/TextColor")
            .property(
                "ModalBackground",
                |w| w.modal_background,
                |w, v| w.modal_background = v,
            )
            .style_path("/ModalBackground")
            .polymorphic(
                "Content",
                &WIDGET_KIND,
                |w| w.content.as_deref(),
                |w, c| w.content = Some(c),
            )
            .accepts(ContainerRole::Content, &WIDGET_KIND, |w, c| w.content = Some(c))
            .styled(Window::STYLES, "StyleName", Window::apply_style)
            .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<HorizontalSplitPane>::with_stylesheet(
            HorizontalSplitPane::new,
        ))
        .polymorphic_list("Widgets", &WIDGET_KIND, |s| &s.widgets, |s, w| s.widgets.push(w))
        .accepts(ContainerRole::SplitPaneSlots, &WIDGET_KIND, |s, w| {
            s.widgets.push(w);
        })
        .styled(
            HorizontalSplitPane::STYLES,
            "StyleName",
            HorizontalSplitPane::apply_style,
        )
        .build(),
    )?;

    registry.register(
        base_properties(TypeBuilder::<VerticalSplitPane>::with_stylesheet(
            VerticalSplitPane::new,
        ))
        .polymorphic_list("Widgets", &WIDGET_KIND, |s| &s.widgets, |s, w| s.widgets.push(w))
        .accepts(ContainerRole::SplitPaneSlots, &WIDGET_KIND, |s, w| {
            s.widgets.push(w);
        })
        .styled(
            VerticalSplitPane::STYLES,
            "StyleName",
            VerticalSplitPane::apply_style,
        )
        .build(),
    )
}
