//! # regmap CLI entry point
//!
//! Parses arguments, loads configuration, initializes logging, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use regmap_cli::assess::{run_assess, AssessArgs};
use regmap_cli::config::Config;
use regmap_cli::init_tracing;
use regmap_cli::jurisdictions::{run_jurisdictions, JurisdictionsArgs};
use regmap_rules::builtin_registry;

/// Map an AI product against jurisdiction rule sets and build a single
/// prioritized action plan.
#[derive(Parser, Debug)]
#[command(name = "regmap", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./regmap.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess a product context and print the report and action plan.
    Assess(AssessArgs),

    /// List registered jurisdictions.
    Jurisdictions(JurisdictionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref());
    let log_format = config.as_ref().map(|c| c.log_format).unwrap_or_default();
    init_tracing(cli.verbose, log_format);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "regmap starting");

    let registry = builtin_registry();
    let result = config.and_then(|config| match &cli.command {
        Commands::Assess(args) => run_assess(args, &config, &registry),
        Commands::Jurisdictions(args) => run_jurisdictions(args, &registry),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_cli::assess::OutputFormat;

    #[test]
    fn cli_parse_assess_defaults() {
        let cli = Cli::try_parse_from(["regmap", "assess", "product.yaml"]).unwrap();
        let Commands::Assess(args) = cli.command else {
            panic!("expected assess");
        };
        assert_eq!(args.context, PathBuf::from("product.yaml"));
        assert!(args.jurisdictions.is_empty());
        assert_eq!(args.format, OutputFormat::Summary);
        assert!(!args.best_practices);
        assert!(args.as_of.is_none());
        assert!(args.out.is_none());
    }

    #[test]
    fn cli_parse_assess_full() {
        let cli = Cli::try_parse_from([
            "regmap",
            "-vv",
            "--config",
            "custom.yaml",
            "assess",
            "product.json",
            "-j",
            "eu-ai-act",
            "--jurisdiction",
            "uk",
            "--format",
            "json",
            "--best-practices",
            "--as-of",
            "2025-06-01",
            "--out",
            "report.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        let Commands::Assess(args) = cli.command else {
            panic!("expected assess");
        };
        assert_eq!(args.jurisdictions, vec!["eu-ai-act", "uk"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.best_practices);
        assert_eq!(args.as_of, chrono::NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(args.out, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn cli_parse_rejects_bad_date() {
        assert!(Cli::try_parse_from(["regmap", "assess", "p.yaml", "--as-of", "June"]).is_err());
    }

    #[test]
    fn cli_parse_jurisdictions() {
        let cli = Cli::try_parse_from(["regmap", "jurisdictions", "--json"]).unwrap();
        let Commands::Jurisdictions(args) = cli.command else {
            panic!("expected jurisdictions");
        };
        assert!(args.json);
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["regmap"]).is_err());
    }
}
