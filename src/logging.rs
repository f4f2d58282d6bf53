//! `tracing` subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for reports. `RUST_LOG` wins over
//! the CLI verbosity flags.

use anyhow::anyhow;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `-v` enables debug, `-vv` trace, `-q` errors only; the default is warn.
/// An explicit `filter` directive takes precedence over the flags.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed or the filter
/// directive is invalid.
pub fn init_logging(verbose: u8, quiet: bool, filter: Option<&str>) -> anyhow::Result<()> {
    let env_filter = match filter {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::builder()
            .with_default_directive(level_from_flags(verbose, quiet).into())
            .from_env_lossy(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

/// Route logs to the test harness's captured output. Safe to call repeatedly.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

const fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
