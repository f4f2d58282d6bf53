//! Config command: show what the layered configuration resolved to.

use super::CommandContext;
use crate::cli::ConfigArgs;
use crate::error::Result;
use serde_json::json;
use std::collections::BTreeMap;

/// Execute the config command.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn execute(args: &ConfigArgs, ctx: &CommandContext) -> Result<()> {
    if args.raw {
        let values: BTreeMap<&str, &str> = ctx.layer.iter().collect();
        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&values)?);
        } else {
            for (key, value) in values {
                println!("{key} = {value}");
            }
        }
        return Ok(());
    }

    if ctx.json {
        let payload = json!({ "settings": ctx.settings });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", serde_yaml::to_string(&ctx.settings)?);
    }
    Ok(())
}
