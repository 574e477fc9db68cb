use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const VUE_TEMPLATE: &str = "## Vue.js\n\n- Use the Composition API with `<script setup>`.";
pub(crate) const HTML_TEMPLATE: &str = "## HTML\n\n- Prefer semantic elements over generic containers.";

/// A temporary workspace with a `templates/` directory inside it.
pub(crate) struct TemplateFixture {
    pub(crate) root: TempDir,
}

impl TemplateFixture {
    /// Workspace seeded with `vue.md` and `html.md`.
    pub(crate) fn new() -> Self {
        Self::with_templates(&[("vue", VUE_TEMPLATE), ("html", HTML_TEMPLATE)])
    }

    pub(crate) fn with_templates(templates: &[(&str, &str)]) -> Self {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("templates");
        std::fs::create_dir_all(&dir).unwrap();
        for (name, content) in templates {
            std::fs::write(dir.join(format!("{}.md", name)), content).unwrap();
        }
        Self { root }
    }

    pub(crate) fn path(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn templates_dir(&self) -> PathBuf {
        self.root.path().join("templates")
    }

    pub(crate) fn output_path(&self) -> PathBuf {
        self.root.path().join(".airc")
    }
}
