//! Document root and the document-level save/load entry points.

use std::sync::Arc;

use tracing::debug;
use uilayout_core::{
    Capabilities, Component, ContainerRole, Element, Error, RegistrationError, Result, Stylesheet,
    TreeDeserializer, TypeBuilder, TypeInfo, TypeRegistry, Typed, WriteOptions,
};

use crate::catalog;
use crate::kinds::{EXPORT_OPTIONS, WIDGET_KIND};

/// Code-generation settings stored with a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    pub namespace: Option<String>,
    pub class: Option<String>,
    pub output_path: Option<String>,
}

uilayout_core::component!(ExportOptions => TypeInfo::new("ExportOptions", EXPORT_OPTIONS));

/// A saved layout: one root widget plus document metadata.
#[derive(Debug, Default)]
pub struct Project {
    pub root: Option<Box<dyn Component>>,
    export_options: ExportOptions,
    pub stylesheet_path: Option<String>,
    /// Sheet used to construct the widgets and to suppress redundant
    /// attributes on save. Not persisted.
    pub stylesheet: Option<Arc<Stylesheet>>,
}

uilayout_core::component!(Project => TypeInfo::new("Project", Capabilities::empty()));

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Component) -> Self {
        Self {
            root: Some(Box::new(root)),
            ..Self::default()
        }
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.export_options
    }

    pub fn export_options_mut(&mut self) -> &mut ExportOptions {
        &mut self.export_options
    }

    /// Save with the default (indented) output options.
    pub fn save(&self) -> Result<String> {
        self.save_with(&WriteOptions::default())
    }

    pub fn save_with(&self, options: &WriteOptions) -> Result<String> {
        let registry = catalog::registry()?;
        uilayout_core::save(registry, self, self.stylesheet.as_deref(), options)
    }

    /// Load a document, constructing every widget against `stylesheet`.
    pub fn load_from_xml(data: &str, stylesheet: Arc<Stylesheet>) -> Result<Project> {
        let element = uilayout_core::parse(data)?;
        Self::load_from_element(&element, stylesheet)
    }

    /// Load a document from an already parsed element tree.
    pub fn load_from_element(element: &Element, stylesheet: Arc<Stylesheet>) -> Result<Project> {
        let registry = catalog::registry()?;
        if element.name != Project::INFO.name {
            return Err(Error::Structure(format!(
                "expected a {} root element, found '{}'",
                Project::INFO.name,
                element.name
            )));
        }

        let mut project = Project::new();
        TreeDeserializer::new(registry, &stylesheet).deserialize(&mut project, element)?;
        debug!(
            root = project.root.as_deref().map(<dyn Component>::type_name),
            elements = element.count(),
            "loaded project"
        );
        project.stylesheet = Some(stylesheet);
        Ok(project)
    }

    /// Save the attributes of a single detached object.
    pub fn save_object_to_xml(&self, obj: &dyn Component) -> Result<String> {
        save_object_to_xml(obj, self.stylesheet.as_deref())
    }
}

/// Save the attributes of a single detached object, without its children.
pub fn save_object_to_xml(obj: &dyn Component, sheet: Option<&Stylesheet>) -> Result<String> {
    let registry = catalog::registry()?;
    uilayout_core::save_object(registry, obj, sheet, &WriteOptions::compact())
}

/// Load a single object of any registered type.
pub fn load_object_from_xml(data: &str, sheet: &Stylesheet) -> Result<Box<dyn Component>> {
    let registry = catalog::registry()?;
    uilayout_core::load(registry, data, sheet)
}

pub(crate) fn register(registry: &mut TypeRegistry) -> std::result::Result<(), RegistrationError> {
    registry.register(
        TypeBuilder::<ExportOptions>::new(ExportOptions::default)
            .property("Namespace", |e| e.namespace.clone(), |e, v| e.namespace = v)
            .property("Class", |e| e.class.clone(), |e, v| e.class = v)
            .property("OutputPath", |e| e.output_path.clone(), |e, v| e.output_path = v)
            .build(),
    )?;

    registry.register(
        TypeBuilder::<Project>::new(Project::new)
            .property(
                "StylesheetPath",
                |p| p.stylesheet_path.clone(),
                |p, v| p.stylesheet_path = v,
            )
            .object_in_place::<ExportOptions>(
                "ExportOptions",
                |p| &p.export_options,
                |p| &mut p.export_options,
            )
            .polymorphic("Root", &WIDGET_KIND, |p| p.root.as_deref(), |p, r| p.root = Some(r))
            .accepts(ContainerRole::DocumentRoot, &WIDGET_KIND, |p, r| p.root = Some(r))
            .build(),
    )
}
