// SEA tools - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logger initialisation (exactly once per process)
// 4. Sample-ID resolution for each path argument
//
// Sample IDs go to stdout as `<path>\t<sample id>`; log records go to stderr
// and the rotating log file.

use clap::Parser;
use sea_tools::app::resolve::{resolve_paths, LoggingOverrides};
use sea_tools::platform::config::{load_config, PlatformPaths};
use sea_tools::util::{constants, logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// SEA tools - derive sample IDs from sequencing QC file paths.
///
/// Each PATH is reduced to its sample ID. Directories are expanded to the
/// files beneath them.
#[derive(Parser, Debug)]
#[command(name = "sea-tools", version, about)]
struct Cli {
    /// Files or directories to resolve.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Exit with status 2 if any path does not end in `.tsv`.
    #[arg(short = 's', long = "strict")]
    strict: bool,

    /// Base directory for `logs/` (overrides config and platform default).
    #[arg(short = 'l', long = "log-dir")]
    log_dir: Option<PathBuf>,

    /// Directory containing config.toml.
    #[arg(short = 'c', long = "config")]
    config_dir: Option<PathBuf>,

    /// Only print ERROR and above on the console.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .as_deref()
        .unwrap_or(&platform_paths.config_dir);
    let (app_config, config_warnings) = load_config(config_dir);

    let mut logging_config = app_config.logging_config(&platform_paths.data_dir);
    LoggingOverrides {
        log_dir: cli.log_dir.clone(),
        quiet: cli.quiet,
    }
    .apply(&mut logging_config);

    let logger = match logging::init(&logging_config) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for warning in &config_warnings {
        logger.warning(warning);
    }

    tracing::info!(
        target: constants::LOGGER_NAME,
        version = constants::APP_VERSION,
        paths = cli.paths.len(),
        "Resolving sample IDs"
    );

    let resolution = resolve_paths(&cli.paths, constants::DEFAULT_MAX_DEPTH);
    for (path, id) in &resolution.entries {
        println!("{}\t{id}", path.display());
    }

    match resolution.strict_failure(cli.strict) {
        Some(status) => {
            logger.error(format!(
                "{} path(s) had an unexpected file type",
                resolution.unexpected()
            ));
            ExitCode::from(status)
        }
        None => ExitCode::SUCCESS,
    }
}
