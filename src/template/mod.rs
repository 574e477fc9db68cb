//! Template lookup and aggregation.
//!
//! This module provides:
//!
//! - **Source**: the [`TemplateSource`] lookup capability, with a
//!   directory-backed implementation, the built-in set compiled into the
//!   binary, and an in-memory one for tests
//! - **Aggregate**: the single pass that turns a technology list into the
//!   combined `.airc` document
//!
//! # Document Layout
//!
//! ```text
//! # AI Agent Instructions
//!
//! <vue.md content>
//!
//! <html.md content>
//!
//! ```

mod aggregate;
mod bundled;
mod source;


pub use aggregate::{Aggregate, HEADER, Resolution, aggregate};
pub use bundled::BundledTemplates;
pub use source::{DirectoryTemplates, TEMPLATE_EXTENSION, TemplateSource, Templates};
