//! Catalog normalizer CLI.

use std::io::{self, IsTerminal};

use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
use catalog_cli::summary::print_summary;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_fields, run_inspect, run_normalize};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Normalize(args) => run_normalize(args).map(|result| {
            print_summary(&result, args.preview);
        }),
        Command::Fields => run_fields(),
        Command::Inspect(args) => run_inspect(args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
///
/// `--log-level` beats `-v`/`-q`; either one disables the `RUST_LOG` override.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !explicit,
        with_ansi,
        format: LogFormat::from(cli.log_format),
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        ..LogConfig::default()
    }
}
