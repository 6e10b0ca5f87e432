//! # Built-in Assessment Test
//!
//! End-to-end runs over the shipped jurisdiction catalog:
//! - Hiring tool across EU AI Act, Colorado, and NYC
//! - Prohibited practice blocks the EU market
//! - CLI assess over a YAML context file
//! - Determinism of the whole report

use chrono::NaiveDate;
use regmap_cli::assess::{run_assess, AssessArgs, OutputFormat};
use regmap_cli::config::Config;
use regmap_core::{
    AutomationLevel, DecisionImpact, Priority, ProductCategory, ProductContext, RiskLevel, Sector,
    SectorContext, SensitivePractice, UserPopulation,
};
use regmap_engine::{assess, PlanOptions, ReadinessStatus};
use regmap_rules::builtin_registry;

fn options() -> PlanOptions {
    PlanOptions::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
}

fn hiring_tool() -> ProductContext {
    ProductContext::new("Resume ranking assistant", ProductCategory::DecisionSupport)
        .with_user_populations([UserPopulation::JobApplicants])
        .with_decision_impact(DecisionImpact::Significant)
        .with_automation_level(AutomationLevel::HumanOnTheLoop)
}

// ---------------------------------------------------------------------------
// 1. Hiring tool
// ---------------------------------------------------------------------------

#[test]
fn hiring_tool_bias_audit_is_merged_across_three_jurisdictions() {
    let registry = builtin_registry();
    let report = assess(
        &registry,
        &hiring_tool(),
        &["eu-ai-act", "us-colorado", "us-nyc"],
        &options(),
    );
    assert!(report.errors.is_empty());
    assert!(report
        .jurisdictions
        .iter()
        .all(|r| r.risk_classification.level == RiskLevel::High));

    let audit = report.action_plan.get("bias-audit").unwrap();
    // NYC declares it critical; the others declare it important.
    assert_eq!(audit.priority, Some(Priority::Critical));
    assert_eq!(audit.jurisdictions, vec!["us-nyc", "eu-ai-act", "us-colorado"]);
    assert!(report
        .action_plan
        .critical
        .iter()
        .any(|item| item.id == "bias-audit"));

    let occurrences = report.action_plan.iter().filter(|i| i.id == "bias-audit").count();
    assert_eq!(occurrences, 1);

    for readiness in &report.summary.readiness {
        assert_eq!(readiness.status, ReadinessStatus::ActionRequired, "{}", readiness.jurisdiction);
    }
}

#[test]
fn plan_ids_are_unique_and_criteria_non_empty() {
    let registry = builtin_registry();
    let ids: Vec<String> = registry.list().iter().map(|e| e.id.to_string()).collect();
    let report = assess(&registry, &hiring_tool(), &ids, &options().with_best_practices(true));

    let mut seen: Vec<&str> = report.action_plan.iter().map(|i| i.id.as_str()).collect();
    let total = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);
    assert!(report
        .action_plan
        .iter()
        .all(|i| !i.verification_criteria.is_empty()));
}

// ---------------------------------------------------------------------------
// 2. Prohibited practice
// ---------------------------------------------------------------------------

#[test]
fn social_scoring_blocks_the_eu_market() {
    let registry = builtin_registry();
    let ctx = ProductContext::new("Citizen trust score", ProductCategory::AutomatedDecision)
        .with_user_populations([UserPopulation::Public])
        .with_sector(SectorContext {
            sector: Sector::PublicServices,
            public_authority: true,
            practices: vec![SensitivePractice::SocialScoring],
        });
    let report = assess(&registry, &ctx, &["eu-ai-act"], &options());

    let readiness = &report.summary.readiness[0];
    assert_eq!(readiness.status, ReadinessStatus::Blocked);
    assert_eq!(readiness.risk_level, RiskLevel::Unacceptable);
    assert!(readiness.blockers.iter().any(|b| b.contains("social scoring")));

    assert_eq!(report.action_plan.critical[0].id, "cease-prohibited-practice");
}

// ---------------------------------------------------------------------------
// 3. CLI
// ---------------------------------------------------------------------------

#[test]
fn cli_assess_writes_summary_for_yaml_context() {
    let dir = tempfile::tempdir().unwrap();
    let context = dir.path().join("product.yaml");
    std::fs::write(
        &context,
        "description: Resume ranking assistant\n\
         product_category: decision-support\n\
         user_populations: [job-applicants]\n\
         decision_impact: significant\n\
         automation_level: human-on-the-loop\n",
    )
    .unwrap();
    let out = dir.path().join("summary.txt");

    let config = Config {
        default_jurisdictions: vec!["us-nyc".into(), "atlantis".into()],
        ..Config::default()
    };
    let args = AssessArgs {
        context,
        jurisdictions: Vec::new(),
        format: OutputFormat::Summary,
        best_practices: false,
        as_of: NaiveDate::from_ymd_opt(2025, 1, 1),
        out: Some(out.clone()),
    };

    let code = run_assess(&args, &config, &builtin_registry()).unwrap();
    assert_eq!(code, 0);

    let text = std::fs::read_to_string(out).unwrap();
    assert!(text.contains("us-nyc"));
    assert!(text.contains("[bias-audit]"));
    assert!(text.contains("Warnings:"));
    assert!(text.contains("atlantis"));
}

// ---------------------------------------------------------------------------
// 4. Determinism
// ---------------------------------------------------------------------------

#[test]
fn reports_are_identical_across_runs() {
    let registry = builtin_registry();
    let ids: Vec<String> = registry.list().iter().map(|e| e.id.to_string()).collect();
    let first = assess(&registry, &hiring_tool(), &ids, &options());
    let second = assess(&builtin_registry(), &hiring_tool(), &ids, &options());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
