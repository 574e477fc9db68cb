//! Template sources.

use super::bundled::BundledTemplates;
use crate::error::{AircError, Result};
use crate::stack::TechnologyId;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension of template files, without the leading dot.
pub const TEMPLATE_EXTENSION: &str = "md";

/// A lookup capability mapping a technology to its template text.
///
/// `Ok(None)` means the technology has no template. `Err` is reserved for
/// templates that exist but cannot be read.
pub trait TemplateSource {
    fn lookup(&self, id: &TechnologyId) -> Result<Option<String>>;
}

impl TemplateSource for HashMap<String, String> {
    fn lookup(&self, id: &TechnologyId) -> Result<Option<String>> {
        Ok(self.get(id.as_str()).cloned())
    }
}

/// Templates stored as `<technology>.md` files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the template directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AircError::Io(format!(
                "failed to create template directory '{}': {}",
                self.dir.display(),
                e
            ))
        })
    }

    /// Path of the template file for a technology.
    pub fn template_path(&self, id: &TechnologyId) -> PathBuf {
        self.dir.join(format!("{}.{}", id.as_str(), TEMPLATE_EXTENSION))
    }

    /// List available technologies (file stems of `*.md` files), sorted.
    pub fn available(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            AircError::Io(format!(
                "failed to read template directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                AircError::Io(format!(
                    "failed to read template directory '{}': {}",
                    self.dir.display(),
                    e
                ))
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

impl TemplateSource for DirectoryTemplates {
    fn lookup(&self, id: &TechnologyId) -> Result<Option<String>> {
        if !id.is_file_safe() {
            debug!(technology = %id, "identifier cannot name a template file");
            return Ok(None);
        }

        let path = self.template_path(id);
        match fs::read(&path) {
            Ok(bytes) => {
                // Invalid UTF-8 is replaced with U+FFFD rather than failing the run.
                let content = String::from_utf8_lossy(&bytes).into_owned();
                debug!(path = %path.display(), bytes = bytes.len(), "read template");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "template file not found");
                Ok(None)
            }
            // A directory named `<id>.md` is not a template either.
            Err(_) if path.is_dir() => Ok(None),
            Err(e) => Err(AircError::Io(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}

/// The template source for a run: a directory on disk, or the templates
/// compiled into the binary when no directory was configured.
#[derive(Debug, Clone)]
pub enum Templates {
    Directory(DirectoryTemplates),
    Bundled(BundledTemplates),
}

impl Templates {
    pub fn select(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Templates::Directory(DirectoryTemplates::new(dir)),
            None => Templates::Bundled(BundledTemplates),
        }
    }

    /// Make the source ready for lookups. Creates a missing directory.
    pub fn prepare(&self) -> Result<()> {
        match self {
            Templates::Directory(dir) => dir.ensure_dir(),
            Templates::Bundled(_) => Ok(()),
        }
    }

    /// Available technologies, sorted.
    pub fn available(&self) -> Result<Vec<String>> {
        match self {
            Templates::Directory(dir) => dir.available(),
            Templates::Bundled(bundled) => Ok(bundled.available()),
        }
    }
}

impl TemplateSource for Templates {
    fn lookup(&self, id: &TechnologyId) -> Result<Option<String>> {
        match self {
            Templates::Directory(dir) => dir.lookup(id),
            Templates::Bundled(bundled) => bundled.lookup(id),
        }
    }
}
