//! Run context resolution for dotairc.
//!
//! Every command works from a [`RunContext`]: the effective template source
//! and output path, resolved against a working directory. Commands never read
//! the process working directory themselves, so they can be driven from tests
//! with any directory.

use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::error::{AircError, Result};
use std::env;
use std::path::Path;
use tracing::debug;

/// Resolved paths for one dotairc run. All paths are absolute when the
/// working directory is.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub settings: Settings,
}

impl RunContext {
    /// Resolve the context from the process working directory.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            AircError::Io(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(cli, &cwd)
    }

    /// Resolve the context relative to a specific directory.
    pub fn resolve_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let (config, config_base) = Config::discover(cli.config.as_deref(), cwd)?;
        let settings = Settings::resolve(
            cli.templates.as_deref(),
            cli.output.as_deref(),
            &config,
            &config_base,
            cwd,
        )?;

        match &settings.templates_dir {
            Some(dir) => debug!(templates_dir = %dir.display(), "using template directory"),
            None => debug!("using built-in templates"),
        }
        debug!(output = %settings.output.display(), "resolved run context");

        Ok(Self { settings })
    }
}
