//! # Requirement Mapper
//!
//! Resolves target jurisdictions through a [`ModuleRegistry`] and evaluates
//! each module against one product context.
//!
//! ## Partial failure
//!
//! A jurisdiction either fully succeeds or is fully recorded as a
//! [`MappingError`]; there is no partial [`JurisdictionResult`]. An
//! unregistered identifier, a [`RuleError`] returned by any module
//! operation, and a panic inside a module are all recorded and the batch
//! continues, so that `results.len() + errors.len()` always equals the
//! number of distinct requested identifiers.
//!
//! Identifiers are compared after trimming surrounding whitespace, the same
//! way the registry resolves them; `" uk"` and `"uk"` are one jurisdiction,
//! and every result is tagged with the registered identifier.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use regmap_core::{ActionSet, ApplicableLaw, JurisdictionResult, MappingError, ProductContext};
use regmap_rules::{ModuleRegistry, RegistryEntry, RuleModule, RuleResult};
use serde::{Deserialize, Serialize};

/// Results and errors of a batch mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingOutcome {
    /// One result per successfully mapped jurisdiction, in request order.
    pub results: Vec<JurisdictionResult>,
    /// One error per failed jurisdiction, in request order.
    pub errors: Vec<MappingError>,
}

impl MappingOutcome {
    /// Number of jurisdictions accounted for.
    pub fn len(&self) -> usize {
        self.results.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.errors.is_empty()
    }
}

/// Evaluates registered rule modules against a product context.
#[derive(Debug, Clone, Copy)]
pub struct RequirementMapper<'r> {
    registry: &'r ModuleRegistry,
}

impl<'r> RequirementMapper<'r> {
    pub fn new(registry: &'r ModuleRegistry) -> Self {
        Self { registry }
    }

    /// Map a single jurisdiction.
    ///
    /// # Errors
    ///
    /// [`MappingError`] with kind `not_registered` or `module_fault`.
    pub fn map_one(
        &self,
        ctx: &ProductContext,
        jurisdiction: &str,
    ) -> Result<JurisdictionResult, MappingError> {
        let jurisdiction = jurisdiction.trim();
        let entry = self
            .registry
            .get(jurisdiction)
            .ok_or_else(|| MappingError::not_registered(jurisdiction))?;
        let jurisdiction = entry.id.as_str();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| evaluate(entry, jurisdiction, ctx)));
        match outcome {
            Ok(Ok(result)) => {
                tracing::debug!(
                    jurisdiction,
                    risk = %result.risk_classification.level,
                    actions = result.actions.len(),
                    artifacts = result.required_artifacts.len(),
                    "jurisdiction mapped"
                );
                Ok(result)
            }
            Ok(Err(e)) => Err(MappingError::from((jurisdiction, e))),
            Err(payload) => Err(MappingError::module_fault(
                jurisdiction,
                format!("rule module panicked: {}", panic_message(payload.as_ref())),
            )),
        }
    }

    /// Map every requested jurisdiction, continuing past failures.
    ///
    /// Duplicate identifiers, compared after trimming, are collapsed; the
    /// first occurrence fixes the position in the output.
    pub fn map_all<S: AsRef<str>>(&self, ctx: &ProductContext, jurisdictions: &[S]) -> MappingOutcome {
        let mut outcome = MappingOutcome::default();
        let mut seen: Vec<&str> = Vec::with_capacity(jurisdictions.len());

        for jurisdiction in jurisdictions.iter().map(|j| j.as_ref().trim()) {
            if seen.contains(&jurisdiction) {
                continue;
            }
            seen.push(jurisdiction);

            match self.map_one(ctx, jurisdiction) {
                Ok(result) => outcome.results.push(result),
                Err(e) => {
                    tracing::warn!(
                        jurisdiction,
                        kind = %e.kind,
                        error = %e.message,
                        "jurisdiction mapping failed"
                    );
                    outcome.errors.push(e);
                }
            }
        }
        outcome
    }
}

fn evaluate(
    entry: &RegistryEntry,
    jurisdiction: &str,
    ctx: &ProductContext,
) -> RuleResult<JurisdictionResult> {
    let module: &dyn RuleModule = entry.module().as_ref();
    let mut actions = module.required_actions(ctx)?;
    rescope(&mut actions, module.id(), jurisdiction);
    Ok(JurisdictionResult {
        jurisdiction: jurisdiction.to_string(),
        name: entry.name.clone(),
        applicable_laws: ApplicableLaw::group(module.applicable_provisions(ctx)?),
        risk_classification: module.risk_level(ctx)?,
        actions,
        required_artifacts: module.required_artifacts(ctx)?,
        timeline: module.timeline(ctx)?,
        enforcement_precedents: module.enforcement_precedents(ctx)?,
        gpai_classification: module.gpai_classification(ctx)?,
    })
}

/// Replace the module's own id with the registered one in action scopes.
fn rescope(actions: &mut ActionSet, module_id: &str, registered: &str) {
    if module_id == registered {
        return;
    }
    for action in actions.required.iter_mut().chain(actions.recommended.iter_mut()) {
        for scope in action.jurisdictions.iter_mut().filter(|j| j.as_str() == module_id) {
            *scope = registered.to_string();
        }
        let mut seen = Vec::with_capacity(action.jurisdictions.len());
        action.jurisdictions.retain(|j| {
            let fresh = !seen.contains(j);
            if fresh {
                seen.push(j.clone());
            }
            fresh
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
