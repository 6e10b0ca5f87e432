//! # Best-Practice Catalog
//!
//! Jurisdiction-neutral actions that are good practice for the product
//! shape in question. They carry no declared priority and no jurisdiction
//! scope; the classifier assigns their tier when the plan is bucketed.

use regmap_core::{ActionItem, ProductContext};

use crate::catalog::verification_criteria;

struct BestPractice {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    legal_basis: &'static str,
    effort: &'static str,
    applies: fn(&ProductContext) -> bool,
}

static CATALOG: &[BestPractice] = &[
    BestPractice {
        id: "model-documentation",
        title: "Maintain model documentation",
        description: "Best practice: keep a model card describing intended use, limitations, training data, and evaluation results.",
        legal_basis: "NIST AI RMF MAP 1.1; ISO/IEC 42001 A.6.2",
        effort: "1-2 weeks",
        applies: |_| true,
    },
    BestPractice {
        id: "ai-literacy",
        title: "Train staff on AI use",
        description: "Best practice: give people who operate or oversee the system role-appropriate AI training.",
        legal_basis: "NIST AI RMF GOVERN 2.2",
        effort: "1-2 weeks",
        applies: |_| true,
    },
    BestPractice {
        id: "incident-response-plan",
        title: "Prepare an AI incident response plan",
        description: "Best practice: define how harmful outputs, model failures, and misuse are detected, escalated, and remediated.",
        legal_basis: "NIST AI RMF MANAGE 4.3",
        effort: "2-4 weeks",
        applies: |ctx| ctx.influences_decisions() || ctx.is_generative() || ctx.is_agentic(),
    },
    BestPractice {
        id: "red-team-testing",
        title: "Red-team the system",
        description: "Best practice: run adversarial testing for jailbreaks, harmful content, and misuse before each major release.",
        legal_basis: "NIST AI 600-1 (Generative AI Profile)",
        effort: "2-4 weeks",
        applies: |ctx| ctx.is_generative() || ctx.is_agentic() || ctx.is_gpai_provider(),
    },
    BestPractice {
        id: "agent-guardrails",
        title: "Constrain agent permissions",
        description: "Best practice: scope the agent's tools to least privilege and require human approval before irreversible or financial actions.",
        legal_basis: "OWASP Top 10 for LLM Applications (LLM06 Excessive Agency)",
        effort: "2-4 weeks",
        applies: ProductContext::is_agentic,
    },
];

/// Best-practice actions that apply to `ctx` and are not already in
/// `existing`.
pub fn best_practice_actions(ctx: &ProductContext, existing: &[ActionItem]) -> Vec<ActionItem> {
    CATALOG
        .iter()
        .filter(|bp| (bp.applies)(ctx))
        .filter(|bp| !existing.iter().any(|item| item.id == bp.id))
        .map(|bp| ActionItem {
            id: bp.id.to_string(),
            title: bp.title.to_string(),
            description: bp.description.to_string(),
            priority: None,
            legal_basis: bp.legal_basis.to_string(),
            jurisdictions: Vec::new(),
            effort: bp.effort.to_string(),
            deadline: None,
            verification_criteria: verification_criteria(bp.id, bp.title),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use regmap_core::{AgenticContext, Priority, ProductCategory};

    use crate::classifier::classify;

    fn ids(items: &[ActionItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn analytics_tool_gets_the_baseline_only() {
        let ctx = ProductContext::new("Dashboard", ProductCategory::Analytics);
        assert_eq!(
            ids(&best_practice_actions(&ctx, &[])),
            vec!["model-documentation", "ai-literacy"]
        );
    }

    #[test]
    fn agent_gets_guardrails_and_red_teaming() {
        let ctx = ProductContext::new("Travel booking agent", ProductCategory::Chatbot).with_agentic(
            AgenticContext {
                takes_external_actions: true,
                executes_transactions: true,
                human_approval: false,
            },
        );
        let got = best_practice_actions(&ctx, &[]);
        assert!(ids(&got).contains(&"agent-guardrails"));
        assert!(ids(&got).contains(&"red-team-testing"));
        assert!(ids(&got).contains(&"incident-response-plan"));
    }

    #[test]
    fn existing_ids_are_not_duplicated() {
        let ctx = ProductContext::new("Dashboard", ProductCategory::Analytics);
        let mut existing = best_practice_actions(&ctx, &[]);
        existing.truncate(1);
        let got = best_practice_actions(&ctx, &existing);
        assert_eq!(ids(&got), vec!["ai-literacy"]);
    }

    #[test]
    fn catalog_items_are_undeclared_and_classify_as_recommended() {
        let ctx = ProductContext::new("Agent", ProductCategory::AutonomousAgent);
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for item in best_practice_actions(&ctx, &[]) {
            assert_eq!(item.priority, None);
            assert!(item.jurisdictions.is_empty());
            assert!(!item.verification_criteria.is_empty());
            assert_eq!(classify(&item, as_of), Priority::Recommended, "{}", item.id);
        }
    }
}
