//! Templates compiled into the binary from the crate's `templates/` directory.

use super::source::TemplateSource;
use crate::error::Result;
use crate::stack::TechnologyId;

/// Built-in templates, sorted by technology.
const BUNDLED: &[(&str, &str)] = &[
    ("css", include_str!("../../templates/css.md")),
    ("html", include_str!("../../templates/html.md")),
    ("python", include_str!("../../templates/python.md")),
    ("react", include_str!("../../templates/react.md")),
    ("rust", include_str!("../../templates/rust.md")),
    ("typescript", include_str!("../../templates/typescript.md")),
    ("vue", include_str!("../../templates/vue.md")),
];

/// The built-in template set, used when no template directory is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplates;

impl BundledTemplates {
    pub fn available(&self) -> Vec<String> {
        BUNDLED.iter().map(|(name, _)| name.to_string()).collect()
    }
}

impl TemplateSource for BundledTemplates {
    fn lookup(&self, id: &TechnologyId) -> Result<Option<String>> {
        Ok(BUNDLED
            .iter()
            .find(|(name, _)| *name == id.as_str())
            .map(|(_, content)| content.to_string()))
    }
}
