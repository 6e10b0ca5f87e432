//! # Requirement Aggregator
//!
//! Cross-jurisdiction summary: raw totals plus a market-readiness verdict
//! per jurisdiction. Totals are informational and count per jurisdiction
//! without deduplication; deduplication belongs to the action plan.
//!
//! ## Readiness
//!
//! | Status | Condition |
//! |--------|-----------|
//! | `blocked` | the risk tier is the most severe, or a prohibition trigger fired |
//! | `ready` | not blocked, and no required actions or artifacts |
//! | `action-required` | required items exist otherwise |
//!
//! A prohibited product is never ready, even when its module lists nothing
//! to do.

use regmap_core::{JurisdictionResult, RiskLevel};
use serde::{Deserialize, Serialize};

/// Market-readiness verdict for one jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessStatus {
    Ready,
    ActionRequired,
    Blocked,
}

impl std::fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::ActionRequired => write!(f, "action-required"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// Readiness of one jurisdiction with the reasons it is blocked, if it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketReadiness {
    pub jurisdiction: String,
    pub status: ReadinessStatus,
    pub risk_level: RiskLevel,
    /// Descriptions of the triggers behind a `blocked` verdict.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blockers: Vec<String>,
}

/// Aggregate over every successfully mapped jurisdiction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Sum of required artifacts across jurisdictions.
    pub total_artifacts: usize,
    /// Sum of required and recommended actions across jurisdictions.
    pub total_actions: usize,
    /// One entry per result, in result order.
    pub readiness: Vec<MarketReadiness>,
}

impl AggregateSummary {
    /// Jurisdictions whose status is `blocked`.
    pub fn blocked(&self) -> impl Iterator<Item = &MarketReadiness> {
        self.readiness
            .iter()
            .filter(|r| r.status == ReadinessStatus::Blocked)
    }
}

/// Fold results into totals and readiness verdicts.
pub fn aggregate(results: &[JurisdictionResult]) -> AggregateSummary {
    results.iter().fold(AggregateSummary::default(), |mut acc, result| {
        acc.total_artifacts += result.required_artifacts.len();
        acc.total_actions += result.actions.len();
        acc.readiness.push(market_readiness(result));
        acc
    })
}

/// Readiness verdict for a single jurisdiction.
pub fn market_readiness(result: &JurisdictionResult) -> MarketReadiness {
    let risk = &result.risk_classification;
    let status = if risk.level.is_most_severe() || risk.has_prohibition() {
        ReadinessStatus::Blocked
    } else if !result.has_outstanding_items() {
        ReadinessStatus::Ready
    } else {
        ReadinessStatus::ActionRequired
    };

    let blockers = if status == ReadinessStatus::Blocked {
        let prohibitions: Vec<String> = risk
            .matched_triggers
            .iter()
            .filter(|t| t.prohibition)
            .map(|t| t.description.clone())
            .collect();
        if prohibitions.is_empty() {
            risk.matched_triggers
                .iter()
                .map(|t| t.description.clone())
                .collect()
        } else {
            prohibitions
        }
    } else {
        Vec::new()
    };

    MarketReadiness {
        jurisdiction: result.jurisdiction.clone(),
        status,
        risk_level: risk.level,
        blockers,
    }
}
