//! Check command implementation.

use super::CommandContext;
use crate::bundle::ValidationBundle;
use crate::cli::CheckArgs;
use crate::error::{ImportCheckError, Result};
use crate::format::{JsonReport, TextFormatOptions, format_mapping_result};
use crate::i18n::Localizer;
use crate::pipeline::MappingResult;
use crate::validation::ProjectImportValidators;
use chrono::Utc;
use tracing::info;

/// Execute the check command.
///
/// Prints the report, then fails with `ImportBlocked` if any error was found.
///
/// # Errors
///
/// Returns an error if the bundle or catalogue cannot be loaded, output
/// serialization fails, or the import is blocked.
pub fn execute(args: &CheckArgs, ctx: &CommandContext) -> Result<()> {
    let bundle = ValidationBundle::load(&args.bundle)?;
    let catalog = ctx.catalog()?;
    let localizer = Localizer::new(&catalog);

    let validators = ProjectImportValidators::new(&ctx.settings);

    info!(
        bundle = %args.bundle.display(),
        project = bundle.backup.project_key(),
        "Checking import mappings"
    );
    let result = bundle.validate(&validators, &localizer);
    print_result(args, ctx, bundle.backup.project_key(), &result)?;

    if result.can_import() {
        Ok(())
    } else {
        Err(ImportCheckError::ImportBlocked {
            errors: result.error_count(),
        })
    }
}

fn print_result(
    args: &CheckArgs,
    ctx: &CommandContext,
    project: &str,
    result: &MappingResult,
) -> Result<()> {
    if ctx.json {
        let mut report = JsonReport::new(project, result);
        if args.timestamp {
            report = report.generated_at(Utc::now());
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if ctx.quiet {
        return Ok(());
    }

    let options = TextFormatOptions {
        use_color: ctx.use_color,
        show_clean: !args.hide_clean,
    };
    println!("{}", format_mapping_result(result, options));
    Ok(())
}
