//! Messages command: list catalogue keys and templates.

use super::CommandContext;
use crate::cli::MessagesArgs;
use crate::error::Result;
use std::collections::BTreeMap;

/// Execute the messages command.
///
/// # Errors
///
/// Returns an error if the configured catalogue cannot be loaded or JSON
/// serialization fails.
pub fn execute(args: &MessagesArgs, ctx: &CommandContext) -> Result<()> {
    let catalog = ctx.catalog()?;
    let prefix = args.prefix.as_deref().unwrap_or("");
    let entries: BTreeMap<&str, &str> = catalog
        .entries()
        .filter(|(key, _)| key.starts_with(prefix))
        .collect();

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (key, template) in &entries {
        println!("{key}\n    {template}");
    }
    if !ctx.quiet {
        println!("\n{} message(s)", entries.len());
    }
    Ok(())
}
