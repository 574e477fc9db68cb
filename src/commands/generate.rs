//! Implementation of the default `dotairc --stack ...` command.
//!
//! 1. Ensures the template directory exists (unless using built-in templates)
//! 2. Aggregates one template per technology, in input order
//! 3. Writes the document atomically to the output path
//! 4. Warns on stderr for every technology without a template

use crate::context::RunContext;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::stack::parse_stack;
use crate::template::{Aggregate, Templates, aggregate};
use tracing::info;

/// Execute the generate command and report the outcome.
pub fn cmd_generate(raw_stack: &str, ctx: &RunContext) -> Result<()> {
    let result = generate(raw_stack, ctx)?;

    for id in result.missing() {
        eprintln!("Warning: No template found for {}", id);
    }

    println!(".airc file generated successfully!");
    Ok(())
}

/// Build the document for `raw_stack` and write it to the configured output.
///
/// The returned [`Aggregate`] lists which technologies resolved.
pub fn generate(raw_stack: &str, ctx: &RunContext) -> Result<Aggregate> {
    let technologies = parse_stack(raw_stack);

    let templates = Templates::select(ctx.settings.templates_dir.as_deref());
    templates.prepare()?;

    let result = aggregate(&technologies, &templates)?;
    atomic_write_file(&ctx.settings.output, &result.document)?;

    info!(
        output = %ctx.settings.output.display(),
        found = result.found_count(),
        missing = result.missing().count(),
        "wrote aggregate document"
    );

    Ok(result)
}
