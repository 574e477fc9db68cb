//! Command implementations for dotairc.
//!
//! The dispatcher checks arguments first, so a usage error is reported
//! before any config or template file is touched.

mod generate;
mod list;

use crate::cli::Cli;
use crate::context::RunContext;
use crate::error::{AircError, Result};
use crate::stack;

/// Message printed when `--stack` is missing or blank.
pub const MISSING_STACK_MESSAGE: &str = "Please provide a technology stack using --stack option";

/// Dispatch the parsed command line to the matching command.
pub fn dispatch(cli: &Cli) -> Result<()> {
    if cli.list {
        let ctx = RunContext::resolve(cli)?;
        return list::cmd_list(&ctx);
    }

    let raw_stack = match cli.stack.as_deref() {
        Some(raw) if !stack::is_blank(raw) => raw,
        _ => return Err(AircError::Usage(MISSING_STACK_MESSAGE.to_string())),
    };

    let ctx = RunContext::resolve(cli)?;
    generate::cmd_generate(raw_stack, &ctx)
}
