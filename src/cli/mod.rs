//! CLI argument parsing for dotairc.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module only defines the flags; the work happens in `commands`.

use clap::Parser;
use std::path::PathBuf;

/// Generate .airc files for your AI agents.
///
/// Looks up one markdown template per technology and concatenates them
/// into a single `.airc` file under a fixed header.
#[derive(Parser, Debug)]
#[command(name = "dotairc")]
#[command(version, about = "Generate .airc files for your AI agents", long_about = None)]
pub struct Cli {
    /// Comma-separated list of technologies
    #[arg(long, value_name = "technologies")]
    pub stack: Option<String>,

    /// Directory holding one `<technology>.md` template per technology.
    #[arg(long, value_name = "DIR", env = "DOTAIRC_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Output file path (default: .airc).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a YAML config file (default: .dotairc.yaml if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the available templates instead of generating.
    #[arg(long, conflicts_with = "stack")]
    pub list: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
