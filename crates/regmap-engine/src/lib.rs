//! # regmap-engine — Mapping and Action Planning
//!
//! Turns one [`ProductContext`](regmap_core::ProductContext) and a list of
//! target jurisdictions into an assessment:
//!
//! ```text
//! ProductContext ──► RequirementMapper ──► JurisdictionResult[]
//!                        (registry)            │
//!                                ┌─────────────┴──────────────┐
//!                                ▼                            ▼
//!                           aggregate()              ActionAggregator (merge)
//!                      totals + readiness                     │
//!                                                   classifier + bucket()
//!                                                             ▼
//!                                                        ActionPlan
//! ```
//!
//! - [`mapper`]: per-jurisdiction evaluation with partial-failure recovery.
//! - [`aggregate`]: totals and market readiness.
//! - [`merge`]: order-independent merge of actions by identifier.
//! - [`classifier`]: content-only priority for items without a declared one.
//! - [`plan`]: comparator, bucketing, and deterministic plan generation.
//! - [`provider`]: external plan providers with deterministic fallback.
//! - [`report`]: the full pipeline in one call.
//!
//! Everything here is synchronous and pure; no I/O.

pub mod aggregate;
pub mod best_practice;
pub mod catalog;
pub mod classifier;
pub mod mapper;
pub mod merge;
pub mod plan;
pub mod provider;
pub mod report;

pub use aggregate::{aggregate, market_readiness, AggregateSummary, MarketReadiness, ReadinessStatus};
pub use best_practice::best_practice_actions;
pub use catalog::verification_criteria;
pub use classifier::{classify, effective_priority, CRITICAL_WINDOW_DAYS};
pub use mapper::{MappingOutcome, RequirementMapper};
pub use merge::{collect_actions, merge_requirements, ActionAggregator};
pub use plan::{
    bucket, compare, generate_deterministic, generate_plan, sort_actions, ActionPlan, PlanOptions,
};
pub use provider::{generate_with_provider, ActionPlanProvider, ProviderError, ProviderPlan};
pub use report::{assess, AssessmentReport};
