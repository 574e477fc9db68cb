//! Diagnostic logging.
//!
//! Tracing output goes to stderr and is quiet by default. User-facing
//! messages (warnings for missing templates, the success line) are printed
//! directly by the commands and do not depend on the log filter.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose` when `RUST_LOG` is not set.
const VERBOSE_FILTER: &str = "dotairc=debug";

/// Filter used when neither `RUST_LOG` nor `--verbose` is given.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
