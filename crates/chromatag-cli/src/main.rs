//! Chromatag — classify colors and emit catalog entries from the command line.
//!
//! Results go to stdout (plain text or JSON lines); logs go to stderr.

mod cli;
mod commands;
mod config;
mod error;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::cli::Command;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is set.
const DEFAULT_LOG_DIRECTIVE: &str = "chromatag=info";

/// `--log-level` wins over `RUST_LOG`; an unparsable or missing directive
/// falls back to [`DEFAULT_LOG_DIRECTIVE`].
fn log_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn init_logging(level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match args.command {
        Command::Classify(opts) => commands::classify(&opts, &mut out),
        Command::Generate(opts) => config::GeneratorConfig::resolve(&opts)
            .and_then(|config| commands::generate(&config, chrono::Utc::now, &mut out)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_flag_is_used_verbatim() {
        assert_eq!(log_filter(Some("chromatag=debug")).to_string(), "chromatag=debug");
    }

    #[test]
    fn test_bad_log_level_falls_back_to_default() {
        assert_eq!(
            log_filter(Some("chromatag=loudest")).to_string(),
            DEFAULT_LOG_DIRECTIVE
        );
    }
}
