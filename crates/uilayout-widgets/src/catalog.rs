//! The process-wide widget type registry.

use std::sync::OnceLock;

use uilayout_core::{RegistrationError, TypeRegistry};

use crate::kinds::COMPLEX_MARKERS;
use crate::{button, label, layout, list, menu, pane, project, slider, tab};

/// Legacy tags and the types that replaced them.
pub const LEGACY_ALIASES: &[(&str, &str)] = &[("Button", "ImageTextButton")];

static REGISTRY: OnceLock<Result<TypeRegistry, RegistrationError>> = OnceLock::new();

/// Returns the registry holding every widget type.
///
/// Built on first access. A registration error means the catalog itself is
/// inconsistent and is returned on every call.
pub fn registry() -> Result<&'static TypeRegistry, RegistrationError> {
    REGISTRY
        .get_or_init(build_registry)
        .as_ref()
        .map_err(RegistrationError::clone)
}

/// Builds a fresh registry with all catalog types and legacy aliases.
fn build_registry() -> Result<TypeRegistry, RegistrationError> {
    let mut registry = TypeRegistry::new(COMPLEX_MARKERS);

    label::register(&mut registry)?;
    button::register(&mut registry)?;
    slider::register(&mut registry)?;
    layout::register(&mut registry)?;
    pane::register(&mut registry)?;
    list::register(&mut registry)?;
    tab::register(&mut registry)?;
    menu::register(&mut registry)?;
    project::register(&mut registry)?;

    for &(legacy, target) in LEGACY_ALIASES {
        registry.register_alias(legacy, target)?;
    }
    Ok(registry)
}
