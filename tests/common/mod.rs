//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{TempDir, tempdir};

pub const VUE_TEMPLATE: &str = "## Vue.js\n\n\
- Use the Composition API with `<script setup>` in single-file components.\n\
- Keep components small and prefer props down, events up.";

pub const HTML_TEMPLATE: &str = "## HTML\n\n\
- Use semantic elements (`<main>`, `<nav>`, `<article>`) before generic `<div>`s.\n\
- Every image needs meaningful `alt` text.";

/// A temporary working directory with its own `templates/` directory.
pub struct TestContext {
    pub temp_dir: TempDir,
    pub templates_dir: PathBuf,
}

impl TestContext {
    /// Working directory seeded with `vue.md` and `html.md`.
    pub fn new() -> Self {
        Self::empty()
            .with_template("vue", VUE_TEMPLATE)
            .with_template("html", HTML_TEMPLATE)
    }

    /// Working directory whose template directory does not exist yet.
    pub fn empty() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let templates_dir = temp_dir.path().join("templates");

        Self {
            temp_dir,
            templates_dir,
        }
    }

    pub fn with_template(self, name: &str, content: &str) -> Self {
        std::fs::create_dir_all(&self.templates_dir).expect("Failed to create templates dir");
        std::fs::write(self.templates_dir.join(format!("{name}.md")), content)
            .expect("Failed to write template");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_path(&self) -> PathBuf {
        self.path().join(".airc")
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("Failed to read .airc")
    }

    /// Command running in the temp directory against its templates.
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.env("DOTAIRC_TEMPLATES", &self.templates_dir);
        cmd
    }

    /// Command running in the temp directory with no template override.
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dotairc").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("DOTAIRC_TEMPLATES")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
