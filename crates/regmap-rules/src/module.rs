//! # Rule Module Contract
//!
//! Every operation is a pure function of the [`ProductContext`]:
//!
//! - no side effects and no I/O;
//! - equal inputs give equal outputs;
//! - absence of applicability is expressed with empty results and a
//!   `minimal` risk level, never with an error.
//!
//! Operations still return [`RuleResult`] so that a plug-in module can
//! report an internal fault; the mapper records it against the jurisdiction
//! and carries on with the others.

use std::fmt;

use regmap_core::{
    ActionSet, ArtifactRequirement, EnforcementPrecedent, GpaiClassification, Milestone,
    ProductContext, Provision, RiskClassification, RuleError,
};

/// Result alias for rule-module operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// One jurisdiction's legal logic.
pub trait RuleModule: Send + Sync + fmt::Debug {
    /// Identifier the module is normally registered under.
    ///
    /// Action scopes should name this id. When the module is registered
    /// under a different one, the mapper rewrites those scopes to the
    /// registered id.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Region tag, e.g. "EU" or "US".
    fn jurisdiction(&self) -> &str;

    /// Provisions that apply to the product.
    fn applicable_provisions(&self, ctx: &ProductContext) -> RuleResult<Vec<Provision>>;

    /// Documents and records the product must produce.
    fn required_artifacts(&self, ctx: &ProductContext) -> RuleResult<Vec<ArtifactRequirement>>;

    /// Required and recommended actions.
    fn required_actions(&self, ctx: &ProductContext) -> RuleResult<ActionSet>;

    /// Explainable risk classification.
    fn risk_level(&self, ctx: &ProductContext) -> RuleResult<RiskClassification>;

    /// Dated compliance milestones.
    fn timeline(&self, ctx: &ProductContext) -> RuleResult<Vec<Milestone>>;

    /// General-purpose model classification, for jurisdictions that have one.
    fn gpai_classification(&self, _ctx: &ProductContext) -> RuleResult<Option<GpaiClassification>> {
        Ok(None)
    }

    /// Enforcement actions relevant to the product.
    fn enforcement_precedents(
        &self,
        _ctx: &ProductContext,
    ) -> RuleResult<Vec<EnforcementPrecedent>> {
        Ok(Vec::new())
    }
}
