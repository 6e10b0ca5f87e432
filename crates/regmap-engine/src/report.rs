//! # Assessment Report
//!
//! One full pipeline run: map, aggregate, plan. The serialized form is the
//! JSON contract consumed by renderers.

use chrono::NaiveDate;
use regmap_core::{JurisdictionResult, MappingError, ProductContext};
use regmap_rules::ModuleRegistry;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, AggregateSummary};
use crate::mapper::RequirementMapper;
use crate::plan::{generate_plan, ActionPlan, PlanOptions};

/// Everything an assessment produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Product description, as assessed.
    pub product: String,
    /// Evaluation date used for deadline classification.
    pub as_of: NaiveDate,
    /// Successfully mapped jurisdictions, in request order.
    pub jurisdictions: Vec<JurisdictionResult>,
    /// Jurisdictions that could not be mapped.
    #[serde(default)]
    pub errors: Vec<MappingError>,
    pub summary: AggregateSummary,
    pub action_plan: ActionPlan,
}

impl AssessmentReport {
    /// At least one jurisdiction failed to map.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Run the deterministic pipeline for `targets`.
pub fn assess<S: AsRef<str>>(
    registry: &ModuleRegistry,
    ctx: &ProductContext,
    targets: &[S],
    options: &PlanOptions,
) -> AssessmentReport {
    let outcome = RequirementMapper::new(registry).map_all(ctx, targets);
    let summary = aggregate(&outcome.results);
    let action_plan = generate_plan(ctx, &outcome.results, options);

    tracing::info!(
        mapped = outcome.results.len(),
        failed = outcome.errors.len(),
        blocked = summary.blocked().count(),
        "assessment complete"
    );

    AssessmentReport {
        product: ctx.description.clone(),
        as_of: options.as_of,
        jurisdictions: outcome.results,
        errors: outcome.errors,
        summary,
        action_plan,
    }
}
