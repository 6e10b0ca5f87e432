//! # Triggers and Risk Classification
//!
//! A [`Trigger`] is a named predicate over the product context carrying the
//! legal citation that makes it matter. Triggers are grouped by concern into
//! [`TriggerGroup`]s, each tied to one risk tier.
//!
//! ## Evaluation
//!
//! [`classify_risk`] walks the groups in table order (the module lists the
//! hardest obligations first: prohibitions, then high-risk use cases, then
//! data-sensitivity and transparency groups) and stops at the first group
//! with at least one matching trigger. Every matched trigger of that group
//! is reported and the justification is composed from them, so any tier can
//! be traced back to the predicates that fired.

use regmap_core::{MatchedTrigger, ProductContext, RiskClassification, RiskLevel};

use crate::table::Predicate;

/// A named predicate with a legal citation.
#[derive(Clone, Copy)]
pub struct Trigger {
    pub id: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub predicate: Predicate,
}

impl Trigger {
    pub fn fires(&self, ctx: &ProductContext) -> bool {
        (self.predicate)(ctx)
    }

    fn to_matched(self, prohibition: bool) -> MatchedTrigger {
        MatchedTrigger {
            id: self.id.to_string(),
            description: self.description.to_string(),
            citation: self.citation.to_string(),
            prohibition,
        }
    }
}

/// Triggers for one concern, all mapping to the same tier.
#[derive(Clone, Copy)]
pub struct TriggerGroup {
    /// Concern label used in the justification, e.g. "prohibited practice".
    pub concern: &'static str,
    pub level: RiskLevel,
    /// Matching any trigger in this group blocks market entry.
    pub prohibition: bool,
    pub triggers: &'static [Trigger],
}

impl TriggerGroup {
    /// Triggers in this group that fire, in table order.
    pub fn matches(&self, ctx: &ProductContext) -> Vec<Trigger> {
        self.triggers
            .iter()
            .copied()
            .filter(|t| t.fires(ctx))
            .collect()
    }
}

/// Classify risk by evaluating trigger groups in precedence order.
///
/// Returns the tier of the first group with a matching trigger, or
/// [`RiskClassification::minimal`] when nothing fires.
pub fn classify_risk(groups: &[TriggerGroup], ctx: &ProductContext) -> RiskClassification {
    for group in groups {
        let fired = group.matches(ctx);
        if fired.is_empty() {
            continue;
        }
        let reasons = fired
            .iter()
            .map(|t| format!("{} ({})", t.description, t.citation))
            .collect::<Vec<_>>()
            .join("; ");
        tracing::trace!(
            concern = group.concern,
            level = %group.level,
            matched = fired.len(),
            "risk trigger group matched"
        );
        return RiskClassification {
            level: group.level,
            justification: format!("{} risk, {}: {}", capitalize(group.level), group.concern, reasons),
            matched_triggers: fired
                .into_iter()
                .map(|t| t.to_matched(group.prohibition))
                .collect(),
        };
    }
    RiskClassification::minimal()
}

fn capitalize(level: RiskLevel) -> String {
    let name = level.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_core::{DataCategory, ProductCategory, SectorContext, SensitivePractice};

    static PROHIBITED: &[Trigger] = &[Trigger {
        id: "social-scoring",
        description: "Social scoring of natural persons",
        citation: "Art. 5(1)(c)",
        predicate: |ctx| ctx.uses_practice(SensitivePractice::SocialScoring),
    }];

    static SENSITIVE: &[Trigger] = &[
        Trigger {
            id: "health-data",
            description: "Processes health data",
            citation: "Art. 9",
            predicate: |ctx| ctx.processes(DataCategory::Health),
        },
        Trigger {
            id: "biometric-data",
            description: "Processes biometric data",
            citation: "Art. 9",
            predicate: |ctx| ctx.processes(DataCategory::Biometric),
        },
    ];

    static GROUPS: &[TriggerGroup] = &[
        TriggerGroup {
            concern: "prohibited practice",
            level: RiskLevel::Unacceptable,
            prohibition: true,
            triggers: PROHIBITED,
        },
        TriggerGroup {
            concern: "special-category data",
            level: RiskLevel::High,
            prohibition: false,
            triggers: SENSITIVE,
        },
    ];

    fn base() -> ProductContext {
        ProductContext::new("test", ProductCategory::Other)
    }

    #[test]
    fn nothing_fires_gives_minimal() {
        let c = classify_risk(GROUPS, &base());
        assert_eq!(c, RiskClassification::minimal());
    }

    #[test]
    fn first_matching_group_wins() {
        let ctx = base()
            .with_data_categories([DataCategory::Health])
            .with_sector(SectorContext {
                practices: vec![SensitivePractice::SocialScoring],
                ..SectorContext::default()
            });
        let c = classify_risk(GROUPS, &ctx);
        assert_eq!(c.level, RiskLevel::Unacceptable);
        assert!(c.has_prohibition());
        assert_eq!(c.matched_triggers.len(), 1);
        assert_eq!(c.matched_triggers[0].id, "social-scoring");
    }

    #[test]
    fn all_matches_in_group_are_reported() {
        let ctx = base().with_data_categories([DataCategory::Health, DataCategory::Biometric]);
        let c = classify_risk(GROUPS, &ctx);
        assert_eq!(c.level, RiskLevel::High);
        let ids: Vec<&str> = c.matched_triggers.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["health-data", "biometric-data"]);
        assert!(!c.has_prohibition());
    }

    #[test]
    fn justification_names_tier_concern_and_citations() {
        let ctx = base().with_data_categories([DataCategory::Health]);
        let c = classify_risk(GROUPS, &ctx);
        assert_eq!(
            c.justification,
            "High risk, special-category data: Processes health data (Art. 9)"
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let ctx = base().with_data_categories([DataCategory::Biometric]);
        assert_eq!(classify_risk(GROUPS, &ctx), classify_risk(GROUPS, &ctx));
    }
}
