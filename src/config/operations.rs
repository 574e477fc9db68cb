//! Config loading, validation, and resolution into effective settings.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{AircError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AircError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AircError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `output` must name a file (non-empty, not ending in `..` or a root)
    /// - `templates_dir`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if !names_a_file(&self.output) {
            return Err(AircError::Config(format!(
                "config validation failed: output must name a file (found '{}')",
                self.output.display()
            )));
        }

        if let Some(dir) = &self.templates_dir
            && dir.as_os_str().is_empty()
        {
            return Err(AircError::Config(
                "config validation failed: templates_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Locate and load the config for a run.
    ///
    /// An explicit path must exist. Without one, `.dotairc.yaml` in `cwd` is
    /// used when present; otherwise defaults apply. Returns the config and the
    /// directory its relative paths are anchored to.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, PathBuf)> {
        let path = match explicit {
            Some(path) => cwd.join(path),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    debug!("no config file, using defaults");
                    return Ok((Self::default(), cwd.to_path_buf()));
                }
                candidate
            }
        };

        debug!(path = %path.display(), "loading config");
        let config = Self::load(&path)?;
        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        Ok((config, base))
    }
}

/// Effective paths for one run, after flags, config, and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Template directory, or `None` for the built-in templates.
    pub templates_dir: Option<PathBuf>,
    pub output: PathBuf,
}

impl Settings {
    /// Resolve settings. Flags win over config, config over built-in defaults.
    ///
    /// `config_base` anchors a relative `templates_dir` from the config file;
    /// flag paths and the output path are anchored to `cwd`.
    pub fn resolve(
        templates_flag: Option<&Path>,
        output_flag: Option<&Path>,
        config: &Config,
        config_base: &Path,
        cwd: &Path,
    ) -> Result<Self> {
        let templates_dir = match (templates_flag, &config.templates_dir) {
            (Some(flag), _) => Some(cwd.join(flag)),
            (None, Some(dir)) => Some(config_base.join(dir)),
            (None, None) => None,
        };

        let output = match output_flag {
            Some(flag) => {
                if !names_a_file(flag) {
                    return Err(AircError::Usage(format!(
                        "--output must name a file (found '{}')",
                        flag.display()
                    )));
                }
                cwd.join(flag)
            }
            None => cwd.join(&config.output),
        };

        Ok(Self {
            templates_dir,
            output,
        })
    }
}

fn names_a_file(path: &Path) -> bool {
    matches!(path.components().next_back(), Some(Component::Normal(_)))
}
