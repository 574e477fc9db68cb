//! Aggregation of templates into a single document.

use super::source::TemplateSource;
use crate::error::Result;
use crate::stack::TechnologyId;

/// Fixed first line of every generated document.
pub const HEADER: &str = "# AI Agent Instructions";

/// Outcome of looking up one technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(TechnologyId),
    NotFound(TechnologyId),
}

impl Resolution {
    pub fn technology(&self) -> &TechnologyId {
        match self {
            Resolution::Found(id) | Resolution::NotFound(id) => id,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// The combined document plus one resolution per input technology.
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub document: String,
    pub resolutions: Vec<Resolution>,
}

impl Aggregate {
    /// Technologies that had no template, in input order.
    pub fn missing(&self) -> impl Iterator<Item = &TechnologyId> {
        self.resolutions
            .iter()
            .filter(|r| !r.is_found())
            .map(Resolution::technology)
    }

    pub fn found_count(&self) -> usize {
        self.resolutions.iter().filter(|r| r.is_found()).count()
    }
}

/// Build the document for `technologies` from `source`.
///
/// Each found template is appended followed by a blank line, in input
/// order. Missing templates are recorded as [`Resolution::NotFound`] and
/// otherwise skipped; reporting them is up to the caller.
pub fn aggregate<S>(technologies: &[TechnologyId], source: &S) -> Result<Aggregate>
where
    S: TemplateSource + ?Sized,
{
    let mut document = format!("{}\n\n", HEADER);
    let mut resolutions = Vec::with_capacity(technologies.len());

    for id in technologies {
        match source.lookup(id)? {
            Some(content) => {
                document.push_str(&content);
                document.push_str("\n\n");
                resolutions.push(Resolution::Found(id.clone()));
            }
            None => resolutions.push(Resolution::NotFound(id.clone())),
        }
    }

    Ok(Aggregate {
        document,
        resolutions,
    })
}
