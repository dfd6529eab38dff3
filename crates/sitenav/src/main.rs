//! sitenav CLI - multilingual navigation builder.
//!
//! Provides commands for:
//! - `build`: Compose the site config and write it as JSON
//! - `check`: Compose the site config and report problems only

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs};
use output::Output;

/// sitenav - navigation and sidebar config for multilingual docs sites.
#[derive(Parser)]
#[command(name = "sitenav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the site config and write it as JSON.
    Build(BuildArgs),
    /// Validate the site config without writing output.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose(),
        Commands::Check(args) => args.verbose(),
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_output_conflicts_with_stdout() {
        let result = Cli::try_parse_from(["sitenav", "build", "--stdout", "--output", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_parses_shared_args() {
        let cli = Cli::try_parse_from([
            "sitenav",
            "check",
            "--config",
            "docs/sitenav.toml",
            "--base-path",
            "/preview/",
            "--verbose",
        ])
        .unwrap();
        assert!(matches!(&cli.command, Commands::Check(args) if args.verbose()));
    }
}
