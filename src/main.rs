//! pkgstars - Rank Go packages by the attractiveness of their GitHub repository
//!
//! For each package name the tool:
//! - Looks up the importer count and repository URL on pkg.go.dev
//! - Fetches stars, forks and followers from the GitHub API
//! - Prints the combined score

use clap::{CommandFactory, Parser};
use pkgstars::cli::CliArgs;
use pkgstars::orchestrator::Orchestrator;
use pkgstars::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_tracing(args.verbose);

    // Nothing to resolve
    if args.packages.is_empty() {
        let mut stdout = io::stdout().lock();
        return match CliArgs::command().write_help(&mut stdout) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, honoring RUST_LOG when set
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = args.to_config();

    if args.verbose {
        eprintln!("pkgstars v{}", env!("CARGO_PKG_VERSION"));
        eprintln!(
            "GitHub access: {}",
            if config.credential.is_authenticated() {
                "authenticated"
            } else {
                "anonymous"
            }
        );
    }

    let orchestrator = Orchestrator::new(&config)?
        .with_keep_going(args.keep_going)
        .with_progress(!args.quiet && !args.json);
    let result = orchestrator.run(&args.packages).await;

    // Create output formatter based on CLI options
    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose, args.quiet));

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    // Quiet mode keeps stdout to scores only, so failures go to stderr
    if args.quiet {
        for error in &result.errors {
            eprintln!("Error: {}", error);
        }
    }

    if result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}
