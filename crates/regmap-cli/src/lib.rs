//! # regmap-cli — Command-Line Interface
//!
//! Provides the `regmap` binary.
//!
//! ## Subcommands
//!
//! - `regmap assess <context-file>` — map a product context against target
//!   jurisdictions and print the report and action plan.
//! - `regmap jurisdictions` — list the registered rule modules.
//!
//! ```bash
//! regmap assess product.yaml -j eu-ai-act -j eu-gdpr --format json
//! regmap -vv --config regmap.yaml assess product.yaml
//! regmap jurisdictions
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; assessment logic lives in `regmap-engine`.
//! - Handlers return `anyhow::Result<u8>`; the binary turns that into the
//!   process exit code.

pub mod assess;
pub mod config;
pub mod jurisdictions;

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` repetitions pick the level.
/// Logs go to stderr so that reports on stdout stay machine-readable.
pub fn init_tracing(verbose: u8, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(verbosity_level(0), "warn");
        assert_eq!(verbosity_level(1), "info");
        assert_eq!(verbosity_level(2), "debug");
        assert_eq!(verbosity_level(9), "trace");
    }
}
