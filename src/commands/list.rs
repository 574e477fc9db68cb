//! Implementation of `dotairc --list`.

use crate::context::RunContext;
use crate::error::Result;
use crate::template::Templates;

/// Print every available technology, one per line.
pub fn cmd_list(ctx: &RunContext) -> Result<()> {
    for name in available_templates(ctx)? {
        println!("{}", name);
    }
    Ok(())
}

fn available_templates(ctx: &RunContext) -> Result<Vec<String>> {
    let templates = Templates::select(ctx.settings.templates_dir.as_deref());
    templates.prepare()?;
    templates.available()
}
