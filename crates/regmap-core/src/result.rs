//! # Jurisdiction Results
//!
//! Types produced by evaluating one rule module against a product context.
//! These are consumed verbatim by renderers, so field names and nesting are
//! part of the report's wire format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::ActionSet;

// ---------------------------------------------------------------------------
// Provisions
// ---------------------------------------------------------------------------

/// A single applicable legal provision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provision {
    /// Stable identifier within the module.
    pub id: String,
    /// Name of the law the provision belongs to; used for grouping.
    pub law: String,
    /// Article or section reference.
    pub citation: String,
    pub title: String,
    pub summary: String,
}

/// Provisions grouped under the law that declares them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicableLaw {
    pub name: String,
    pub provisions: Vec<Provision>,
}

impl ApplicableLaw {
    /// Group provisions by law name, preserving first-appearance order of
    /// laws and the order of provisions within each law.
    pub fn group(provisions: Vec<Provision>) -> Vec<ApplicableLaw> {
        let mut laws: Vec<ApplicableLaw> = Vec::new();
        for provision in provisions {
            match laws.iter_mut().find(|l| l.name == provision.law) {
                Some(law) => law.provisions.push(provision),
                None => laws.push(ApplicableLaw {
                    name: provision.law.clone(),
                    provisions: vec![provision],
                }),
            }
        }
        laws
    }
}

/// A document or record a jurisdiction requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRequirement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub legal_basis: String,
}

// ---------------------------------------------------------------------------
// Risk classification
// ---------------------------------------------------------------------------

/// Risk tier, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Minimal,
    Limited,
    High,
    /// The most severe tier: the product cannot lawfully be placed on the market.
    Unacceptable,
}

impl RiskLevel {
    /// `true` for the most severe tier.
    pub fn is_most_severe(self) -> bool {
        self == Self::Unacceptable
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimal => write!(f, "minimal"),
            Self::Limited => write!(f, "limited"),
            Self::High => write!(f, "high"),
            Self::Unacceptable => write!(f, "unacceptable"),
        }
    }
}

/// A trigger that fired during risk classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedTrigger {
    pub id: String,
    pub description: String,
    pub citation: String,
    /// The trigger belongs to a prohibition group.
    pub prohibition: bool,
}

/// Explainable risk classification: every tier is traceable to the
/// triggers that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskClassification {
    pub level: RiskLevel,
    pub justification: String,
    pub matched_triggers: Vec<MatchedTrigger>,
}

impl RiskClassification {
    /// No trigger fired.
    pub fn minimal() -> Self {
        Self {
            level: RiskLevel::Minimal,
            justification: "No risk triggers matched".to_string(),
            matched_triggers: Vec::new(),
        }
    }

    /// At least one prohibition trigger fired.
    pub fn has_prohibition(&self) -> bool {
        self.matched_triggers.iter().any(|t| t.prohibition)
    }
}

// ---------------------------------------------------------------------------
// Timeline, precedent, GPAI
// ---------------------------------------------------------------------------

/// A dated compliance milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub description: String,
    pub citation: String,
}

/// A published enforcement action relevant to the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementPrecedent {
    pub authority: String,
    pub case: String,
    pub year: u16,
    pub summary: String,
}

/// General-purpose AI model classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpaiClassification {
    pub is_gpai: bool,
    pub systemic_risk: bool,
    /// Open-weights exemption from documentation duties applies.
    pub open_source_exemption: bool,
    pub obligations: Vec<String>,
    pub justification: String,
}

// ---------------------------------------------------------------------------
// JurisdictionResult
// ---------------------------------------------------------------------------

/// Complete output of evaluating one rule module.
///
/// Only ever built from a fully successful evaluation; a failing module
/// yields a mapping error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionResult {
    /// Matches the requested jurisdiction identifier.
    pub jurisdiction: String,
    pub name: String,
    pub applicable_laws: Vec<ApplicableLaw>,
    pub risk_classification: RiskClassification,
    pub actions: ActionSet,
    pub required_artifacts: Vec<ArtifactRequirement>,
    pub timeline: Vec<Milestone>,
    pub enforcement_precedents: Vec<EnforcementPrecedent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpai_classification: Option<GpaiClassification>,
}

impl JurisdictionResult {
    /// The module requires nothing of the product.
    pub fn has_outstanding_items(&self) -> bool {
        !self.actions.required.is_empty() || !self.required_artifacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provision(id: &str, law: &str) -> Provision {
        Provision {
            id: id.into(),
            law: law.into(),
            citation: format!("Art. {id}"),
            title: id.into(),
            summary: String::new(),
        }
    }

    #[test]
    fn group_preserves_first_appearance_order() {
        let laws = ApplicableLaw::group(vec![
            provision("1", "GDPR"),
            provision("2", "ePrivacy"),
            provision("3", "GDPR"),
        ]);
        assert_eq!(laws.len(), 2);
        assert_eq!(laws[0].name, "GDPR");
        assert_eq!(laws[0].provisions.len(), 2);
        assert_eq!(laws[0].provisions[1].id, "3");
        assert_eq!(laws[1].name, "ePrivacy");
    }

    #[test]
    fn group_of_nothing_is_empty() {
        assert!(ApplicableLaw::group(Vec::new()).is_empty());
    }

    #[test]
    fn risk_levels_order_by_severity() {
        assert!(RiskLevel::Minimal < RiskLevel::Limited);
        assert!(RiskLevel::High < RiskLevel::Unacceptable);
        assert!(RiskLevel::Unacceptable.is_most_severe());
        assert!(!RiskLevel::High.is_most_severe());
    }

    #[test]
    fn minimal_classification_has_no_triggers() {
        let c = RiskClassification::minimal();
        assert_eq!(c.level, RiskLevel::Minimal);
        assert!(!c.has_prohibition());
    }
}
