//! # Provider-Backed Plans
//!
//! An [`ActionPlanProvider`] is an external generator (typically a model
//! client) that proposes plan items from the same mapped results the
//! deterministic path consumes. Provider output is validated, completed
//! where it is merely sparse, and bucketed with the shared comparator.
//!
//! The deterministic plan is always available: when the provider fails or
//! returns something unusable, [`generate_with_provider`] falls back to
//! [`generate_deterministic`] and records why.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use regmap_core::{ActionItem, JurisdictionResult, ProductContext};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::verification_criteria;
use crate::plan::{bucket, generate_deterministic, ActionPlan};

/// Failure of an external action-plan provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not be reached or refused the request.
    #[error("provider {provider} unavailable: {reason}")]
    Unavailable { provider: String, reason: String },

    /// The provider answered with items that cannot form a plan.
    #[error("provider {provider} returned an invalid plan: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// External source of plan items.
pub trait ActionPlanProvider: Send + Sync {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Propose plan items for the mapped jurisdictions.
    fn generate(
        &self,
        ctx: &ProductContext,
        results: &[JurisdictionResult],
    ) -> Result<Vec<ActionItem>, ProviderError>;
}

/// A plan together with the provider errors that shaped it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderPlan {
    pub action_plan: ActionPlan,
    /// Empty when the provider's plan was used.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ProviderPlan {
    /// The deterministic fallback was used.
    pub fn is_fallback(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Ask `provider` for a plan, falling back to the deterministic one.
pub fn generate_with_provider(
    ctx: &ProductContext,
    results: &[JurisdictionResult],
    provider: &dyn ActionPlanProvider,
    as_of: NaiveDate,
) -> ProviderPlan {
    let proposed = provider
        .generate(ctx, results)
        .and_then(|items| validate(provider.name(), items));

    match proposed {
        Ok(items) => {
            tracing::debug!(provider = provider.name(), items = items.len(), "provider plan accepted");
            ProviderPlan {
                action_plan: bucket(items, as_of),
                errors: Vec::new(),
            }
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                error = %e,
                "provider failed, using deterministic plan"
            );
            ProviderPlan {
                action_plan: generate_deterministic(results, as_of),
                errors: vec![e.to_string()],
            }
        }
    }
}

/// Reject blank or duplicate identifiers and blank titles; fill empty
/// verification criteria from the catalog.
fn validate(provider: &str, items: Vec<ActionItem>) -> Result<Vec<ActionItem>, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidResponse {
        provider: provider.to_string(),
        reason,
    };

    let mut seen = BTreeSet::new();
    items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            if item.id.trim().is_empty() {
                return Err(invalid(format!("item {index} has no identifier")));
            }
            if item.title.trim().is_empty() {
                return Err(invalid(format!("item {} has no title", item.id)));
            }
            if !seen.insert(item.id.clone()) {
                return Err(invalid(format!("duplicate identifier {}", item.id)));
            }
            if item.verification_criteria.is_empty() {
                item.verification_criteria = verification_criteria(&item.id, &item.title);
            }
            Ok(item)
        })
        .collect()
}
