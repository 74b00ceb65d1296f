//! Document-level operations behind the CLI commands.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};
use uilayout_core::{
    Component, Element, Factory, Stylesheet, TreeDeserializer, TreeSerializer, TypeRegistry,
    Typed, WriteOptions,
};
use uilayout_widgets::{Project, registry};

/// A loaded layout file: a full project or a single detached object.
#[derive(Debug)]
pub enum Document {
    Project(Project),
    Object(Box<dyn Component>),
}

impl Document {
    /// Load `xml`, constructing every object against `sheet`.
    pub fn load(xml: &str, sheet: Arc<Stylesheet>) -> Result<Self> {
        let root = uilayout_core::parse(xml).context("parse layout")?;
        Self::from_element(&root, sheet)
    }

    /// Load from a parsed element tree; the root tag picks the document kind.
    pub fn from_element(root: &Element, sheet: Arc<Stylesheet>) -> Result<Self> {
        if root.name == Project::INFO.name {
            let project = Project::load_from_element(root, sheet).context("load project")?;
            Ok(Document::Project(project))
        } else {
            let obj = TreeDeserializer::new(registry()?, &sheet)
                .load(root)
                .context("load layout object")?;
            Ok(Document::Object(obj))
        }
    }

    pub fn root(&self) -> &dyn Component {
        match self {
            Document::Project(project) => project,
            Document::Object(obj) => obj.as_ref(),
        }
    }

    /// Save the document, leaving out attributes implied by `sheet`.
    pub fn save(&self, sheet: Option<&Stylesheet>, options: &WriteOptions) -> Result<String> {
        let registry = registry()?;
        uilayout_core::save(registry, self.root(), sheet, options).context("save layout")
    }
}

/// Options for [`compact`].
#[derive(Debug, Clone)]
pub struct CompactOptions {
    /// Compare against the style sheet as well as declared defaults.
    pub use_stylesheet: bool,
    pub write: WriteOptions,
}

impl Default for CompactOptions {
    fn default() -> Self {
        Self {
            use_stylesheet: true,
            write: WriteOptions::default(),
        }
    }
}

/// Re-save a layout so only non-redundant attributes remain.
pub fn compact(xml: &str, sheet: Arc<Stylesheet>, options: &CompactOptions) -> Result<String> {
    let document = Document::load(xml, Arc::clone(&sheet))?;
    let suppress_with = options.use_stylesheet.then_some(sheet.as_ref());
    document.save(suppress_with, &options.write)
}

/// What a layout file contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub root_type: String,
    /// Objects per registered type.
    pub objects: BTreeMap<String, usize>,
    /// Attributes in the file as given.
    pub input_attributes: usize,
    /// Attributes left after a save against the style sheet.
    pub saved_attributes: usize,
    /// Legacy tags found and the types they load as.
    pub legacy_tags: Vec<(String, String)>,
}

impl LayoutReport {
    /// Attributes a compacting save would drop.
    pub fn redundant_attributes(&self) -> usize {
        self.input_attributes.saturating_sub(self.saved_attributes)
    }
}

/// Load a layout and summarize it.
pub fn inspect(xml: &str, sheet: Arc<Stylesheet>) -> Result<LayoutReport> {
    let registry = registry()?;
    let input = uilayout_core::parse(xml).context("parse layout")?;
    let document = Document::from_element(&input, Arc::clone(&sheet))?;
    let saved = TreeSerializer::new(registry, Some(sheet.as_ref()))
        .serialize(document.root(), false)
        .context("serialize layout")?;

    let mut report = LayoutReport {
        root_type: document.root().type_name().to_string(),
        ..LayoutReport::default()
    };
    walk(&input, &mut |element| {
        report.input_attributes += element.attributes.len();
        if let Some(target) = registry.aliases().target(&element.name) {
            report
                .legacy_tags
                .push((element.name.clone(), target.to_string()));
        }
    });
    walk(&saved, &mut |element| {
        report.saved_attributes += element.attributes.len();
    });
    count_objects(registry, document.root(), &mut report.objects)?;

    info!(
        root = %report.root_type,
        objects = report.objects.values().sum::<usize>(),
        redundant = report.redundant_attributes(),
        "inspected layout"
    );
    Ok(report)
}

/// Count `obj` and everything reachable through its complex properties.
fn count_objects(
    registry: &TypeRegistry,
    obj: &dyn Component,
    counts: &mut BTreeMap<String, usize>,
) -> Result<()> {
    let desc = registry.descriptor_of(obj)?;
    *counts.entry(desc.name().to_string()).or_default() += 1;
    for property in registry.complex_properties(desc) {
        for child in property.children(obj) {
            count_objects(registry, child, counts)?;
        }
    }
    Ok(())
}

fn walk(element: &Element, visit: &mut impl FnMut(&Element)) {
    visit(element);
    for child in &element.children {
        walk(child, visit);
    }
}

/// One registered type as listed by the `types` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRow {
    pub name: String,
    /// Whether the constructor takes the style sheet.
    pub styled: bool,
    pub style_dictionary: Option<String>,
    pub container_role: Option<String>,
    pub simple: Vec<String>,
    pub complex: Vec<String>,
}

/// Describe every registered type.
pub fn type_rows(registry: &TypeRegistry) -> Vec<TypeRow> {
    registry
        .types()
        .map(|desc| TypeRow {
            name: desc.name().to_string(),
            styled: matches!(desc.factory(), Factory::Styled(_)),
            style_dictionary: desc
                .style_binding()
                .map(|binding| binding.dictionary().to_string()),
            container_role: desc.implicit_slot().map(|slot| slot.role().to_string()),
            simple: registry
                .simple_properties(desc)
                .map(|p| p.name().to_string())
                .collect(),
            complex: registry
                .complex_properties(desc)
                .map(|p| p.name().to_string())
                .collect(),
        })
        .collect()
}

/// Read a layout file.
pub fn read_layout(path: &Path) -> Result<String> {
    let xml = fs::read_to_string(path)
        .with_context(|| format!("read layout file {}", path.display()))?;
    debug!(path = %path.display(), bytes = xml.len(), "read layout");
    Ok(xml)
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            debug!(path = %path.display(), bytes = text.len(), "wrote layout");
        }
        None => println!("{text}"),
    }
    Ok(())
}
