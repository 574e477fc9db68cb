//! Technology stack parsing.
//!
//! A stack is the raw `--stack` value: a comma-separated list of technology
//! names. Each name is normalized into a [`TechnologyId`], the key used to
//! look up a template.

use std::fmt;

/// A normalized technology identifier (trimmed and lower-cased).
///
/// Normalization never fails. An empty token stays empty and simply does not
/// resolve to a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TechnologyId(String);

impl TechnologyId {
    /// Normalize a raw token from the stack list.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier can name a file inside the template directory.
    ///
    /// Empty identifiers, `.`/`..`, and anything with a path separator are
    /// rejected so a lookup can never leave the template directory.
    pub fn is_file_safe(&self) -> bool {
        !self.0.is_empty()
            && self.0 != "."
            && self.0 != ".."
            && !self.0.contains(['/', '\\'])
            && !self.0.contains('\0')
    }
}

impl fmt::Display for TechnologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a raw `--stack` value into normalized identifiers.
///
/// Order and duplicates are preserved.
pub fn parse_stack(raw: &str) -> Vec<TechnologyId> {
    raw.split(',').map(TechnologyId::new).collect()
}

/// Whether a raw `--stack` value carries anything at all.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}
