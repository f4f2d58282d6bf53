use clap::Parser;
use import_mapping_check::cli::commands::{self, CommandContext};
use import_mapping_check::cli::{Cli, Commands};
use import_mapping_check::config::CliOverrides;
use import_mapping_check::logging::init_logging;
use import_mapping_check::{ImportCheckError, StructuredError};
use std::io::{self, IsTerminal};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet, None) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = run(&cli);
    if let Err(e) = result {
        handle_error(&e, cli.json);
    }
}

fn run(cli: &Cli) -> import_mapping_check::Result<()> {
    if matches!(cli.command, Commands::Version) {
        return commands::version::execute(cli.json);
    }

    let overrides = build_cli_overrides(cli);
    let ctx = CommandContext::load(
        Path::new("."),
        cli.config.as_deref(),
        &overrides,
        cli.quiet,
        cli.no_color,
    )?;

    match &cli.command {
        Commands::Check(args) => commands::check::execute(args, &ctx),
        Commands::Messages(args) => commands::messages::execute(args, &ctx),
        Commands::Config(args) => commands::config::execute(args, &ctx),
        Commands::Version => commands::version::execute(ctx.json),
    }
}

/// Handle errors with structured output support.
///
/// When --json is set or stdout is not a TTY, outputs structured JSON to stderr.
/// Otherwise, outputs human-readable error with optional color.
fn handle_error(err: &ImportCheckError, json_mode: bool) -> ! {
    let structured = StructuredError::from_error(err);
    let exit_code = err.exit_code();

    let use_json = json_mode || !io::stdout().is_terminal();

    if use_json {
        let json = structured.to_json();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        );
    } else {
        let use_color = io::stderr().is_terminal();
        eprintln!("{}", structured.to_human(use_color));
    }

    std::process::exit(exit_code);
}

fn build_cli_overrides(cli: &Cli) -> CliOverrides {
    let workflow_help = match &cli.command {
        Commands::Check(args) => args.workflow_help.clone(),
        _ => None,
    };
    CliOverrides {
        messages: cli.messages.clone(),
        json: cli.json.then_some(true),
        workflow_help,
    }
}
