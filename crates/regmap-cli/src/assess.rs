//! # Assess CLI — Run an assessment for one product context.
//!
//! ```bash
//! regmap assess product.yaml --jurisdiction eu-ai-act --jurisdiction uk
//! regmap assess product.json --format json --out report.json
//! regmap assess product.yaml --best-practices --as-of 2025-06-01
//! ```
//!
//! Targets come from `--jurisdiction`, else from the context file's
//! `target_jurisdictions`, else from `default_jurisdictions` in the config.
//! Jurisdictions that fail to map are reported as warnings; the rest of the
//! report is still produced.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use regmap_core::{ActionItem, ProductContext};
use regmap_engine::{assess, AssessmentReport, PlanOptions, ReadinessStatus};
use regmap_rules::ModuleRegistry;

use crate::config::Config;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report as pretty-printed JSON.
    Json,
    /// Human-readable console summary.
    Summary,
}

/// Arguments for `regmap assess`.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Product-context file (YAML, or JSON with a `.json` extension).
    pub context: PathBuf,

    /// Target jurisdiction identifier. Repeatable.
    #[arg(short, long = "jurisdiction")]
    pub jurisdictions: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Add best-practice actions to the plan.
    #[arg(long)]
    pub best_practices: bool,

    /// Evaluation date (YYYY-MM-DD) for deadline classification.
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute `regmap assess`.
pub fn run_assess(args: &AssessArgs, config: &Config, registry: &ModuleRegistry) -> Result<u8> {
    let ctx = load_context(&args.context)?;
    let targets = resolve_targets(&args.jurisdictions, &ctx, config);
    if targets.is_empty() {
        let available: Vec<String> = registry.list().iter().map(|e| e.id.to_string()).collect();
        bail!(
            "no target jurisdictions: pass --jurisdiction, set target_jurisdictions in the \
             context file, or set default_jurisdictions in the config. Available: {}",
            available.join(", ")
        );
    }

    let as_of = args
        .as_of
        .or(config.as_of)
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let options = PlanOptions::new(as_of)
        .with_best_practices(args.best_practices || config.include_best_practices);

    tracing::info!(targets = ?targets, %as_of, "running assessment");
    let report = assess(registry, &ctx, &targets, &options);

    let rendered = match args.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        }
        OutputFormat::Summary => render_summary(&report).context("failed to render summary")?,
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(0)
}

/// Read a product context from YAML or JSON.
pub fn load_context(path: &Path) -> Result<ProductContext> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read product context: {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let ctx = if is_json {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid product context JSON: {}", path.display()))?
    } else {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid product context YAML: {}", path.display()))?
    };
    Ok(ctx)
}

/// First non-empty of: command line, context file, config.
pub fn resolve_targets(cli: &[String], ctx: &ProductContext, config: &Config) -> Vec<String> {
    [
        cli,
        ctx.target_jurisdictions.as_slice(),
        config.default_jurisdictions.as_slice(),
    ]
    .into_iter()
    .find(|targets| !targets.is_empty())
    .map(<[String]>::to_vec)
    .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Console summary
// ---------------------------------------------------------------------------

/// Render a report for the terminal.
pub fn render_summary(report: &AssessmentReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Assessment: {} (as of {})", report.product, report.as_of)?;
    writeln!(out)?;

    writeln!(out, "Market readiness:")?;
    for readiness in &report.summary.readiness {
        writeln!(
            out,
            "  {:<12} {:<13} {}",
            readiness.jurisdiction,
            readiness.risk_level.to_string(),
            readiness.status
        )?;
        if readiness.status == ReadinessStatus::Blocked {
            for blocker in &readiness.blockers {
                writeln!(out, "      blocked by: {blocker}")?;
            }
        }
    }
    writeln!(
        out,
        "  {} actions and {} artifacts across jurisdictions (before deduplication)",
        report.summary.total_actions, report.summary.total_artifacts
    )?;
    writeln!(out)?;

    let plan = &report.action_plan;
    writeln!(out, "Action plan ({} items):", plan.len())?;
    for (label, items) in [
        ("Critical", &plan.critical),
        ("Important", &plan.important),
        ("Recommended", &plan.recommended),
    ] {
        writeln!(out, "  {label} ({})", items.len())?;
        for item in items {
            writeln!(out, "    - {}", describe(item))?;
        }
    }

    if report.has_errors() {
        writeln!(out)?;
        writeln!(out, "Warnings:")?;
        for e in &report.errors {
            writeln!(out, "  {}: {} ({})", e.jurisdiction, e.message, e.kind)?;
        }
    }
    Ok(out)
}

fn describe(item: &ActionItem) -> String {
    let mut line = format!("{} [{}]", item.title, item.id);
    if !item.jurisdictions.is_empty() {
        line.push_str(&format!(" {}", item.jurisdictions.join(", ")));
    }
    if let Some(deadline) = &item.deadline {
        line.push_str(&format!(", due {deadline}"));
    }
    line.push_str(&format!(", {}", item.effort));
    line
}
