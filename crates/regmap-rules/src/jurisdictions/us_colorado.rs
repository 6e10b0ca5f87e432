//! # Colorado Artificial Intelligence Act
//!
//! SB 24-205 (C.R.S. 6-1-1701 et seq.), effective 30 June 2026 after
//! SB 25B-004. A system is high-risk when it makes, or is a substantial
//! factor in making, a consequential decision about a consumer.

use regmap_core::{
    ActionSet, ArtifactRequirement, Milestone, Priority, ProductContext, Provision,
    RiskClassification, RiskLevel, Sector, UserPopulation,
};

use crate::module::{RuleModule, RuleResult};
use crate::table::{
    always, select_actions, select_artifacts, select_milestones, select_provisions, ActionRule,
    ArtifactRule, MilestoneRule, Obligation, ProvisionRule,
};
use crate::trigger::{classify_risk, Trigger, TriggerGroup};

pub const ID: &str = "us-colorado";
pub const NAME: &str = "Colorado Artificial Intelligence Act";
pub const REGION: &str = "US";
pub const DESCRIPTION: &str =
    "SB 24-205, consumer protections in interactions with artificial intelligence systems";

const LAW: &str = "Colorado AI Act";
const EFFECTIVE: &str = "2026-06-30";

static CONSEQUENTIAL_DECISIONS: &[Trigger] = &[
    Trigger {
        id: "employment",
        description: "Substantial factor in an employment decision",
        citation: "C.R.S. 6-1-1701(3)(b)",
        predicate: |ctx| {
            ctx.influences_decisions()
                && (ctx.in_sector(Sector::Employment) || ctx.serves(UserPopulation::JobApplicants))
        },
    },
    Trigger {
        id: "education",
        description: "Substantial factor in an education enrollment or opportunity decision",
        citation: "C.R.S. 6-1-1701(3)(a)",
        predicate: |ctx| ctx.influences_decisions() && ctx.in_sector(Sector::Education),
    },
    Trigger {
        id: "financial-service",
        description: "Substantial factor in a financial or lending decision",
        citation: "C.R.S. 6-1-1701(3)(c)",
        predicate: |ctx| {
            ctx.influences_decisions()
                && (ctx.in_sector(Sector::Finance) || ctx.serves(UserPopulation::Borrowers))
        },
    },
    Trigger {
        id: "essential-government-service",
        description: "Substantial factor in access to an essential government service",
        citation: "C.R.S. 6-1-1701(3)(d)",
        predicate: |ctx| ctx.influences_decisions() && ctx.in_sector(Sector::PublicServices),
    },
    Trigger {
        id: "health-care",
        description: "Substantial factor in a health-care service decision",
        citation: "C.R.S. 6-1-1701(3)(e)",
        predicate: |ctx| ctx.influences_decisions() && ctx.in_sector(Sector::Healthcare),
    },
    Trigger {
        id: "housing",
        description: "Substantial factor in a housing decision",
        citation: "C.R.S. 6-1-1701(3)(f)",
        predicate: |ctx| {
            ctx.influences_decisions()
                && (ctx.in_sector(Sector::Housing) || ctx.serves(UserPopulation::Tenants))
        },
    },
    Trigger {
        id: "insurance",
        description: "Substantial factor in an insurance decision",
        citation: "C.R.S. 6-1-1701(3)(g)",
        predicate: |ctx| ctx.influences_decisions() && ctx.in_sector(Sector::Insurance),
    },
    Trigger {
        id: "legal-service",
        description: "Substantial factor in a legal-service decision",
        citation: "C.R.S. 6-1-1701(3)(h)",
        predicate: |ctx| ctx.influences_decisions() && ctx.in_sector(Sector::Justice),
    },
];

static CONSUMER_INTERACTION: &[Trigger] = &[Trigger {
    id: "consumer-interaction",
    description: "AI system intended to interact with consumers",
    citation: "C.R.S. 6-1-1704",
    predicate: interacts_with_consumers,
}];

static RISK_GROUPS: &[TriggerGroup] = &[
    TriggerGroup {
        concern: "consequential decision",
        level: RiskLevel::High,
        prohibition: false,
        triggers: CONSEQUENTIAL_DECISIONS,
    },
    TriggerGroup {
        concern: "consumer interaction disclosure",
        level: RiskLevel::Limited,
        prohibition: false,
        triggers: CONSUMER_INTERACTION,
    },
];

fn is_high_risk(ctx: &ProductContext) -> bool {
    CONSEQUENTIAL_DECISIONS.iter().any(|t| t.fires(ctx))
}

fn interacts_with_consumers(ctx: &ProductContext) -> bool {
    ctx.interacts_with_people()
        && (ctx.user_populations.is_empty()
            || ctx.serves(UserPopulation::Consumers)
            || ctx.serves(UserPopulation::Public))
}

static PROVISIONS: &[ProvisionRule] = &[
    ProvisionRule {
        id: "6-1-1702",
        law: LAW,
        citation: "C.R.S. 6-1-1702",
        title: "Developer duty to avoid algorithmic discrimination",
        summary: "Developers use reasonable care and give deployers the documentation needed for impact assessments.",
        applies: is_high_risk,
    },
    ProvisionRule {
        id: "6-1-1703",
        law: LAW,
        citation: "C.R.S. 6-1-1703",
        title: "Deployer duty to avoid algorithmic discrimination",
        summary: "Deployers maintain a risk management program, complete impact assessments, notify consumers, and offer appeal.",
        applies: is_high_risk,
    },
    ProvisionRule {
        id: "6-1-1704",
        law: LAW,
        citation: "C.R.S. 6-1-1704",
        title: "Disclosure of AI interaction",
        summary: "Consumers interacting with an AI system are told so unless it would be obvious to a reasonable person.",
        applies: interacts_with_consumers,
    },
];

static ARTIFACTS: &[ArtifactRule] = &[
    ArtifactRule {
        id: "risk-management-policy",
        name: "Risk management policy and program",
        description: "Principles, processes, and personnel used to identify and mitigate algorithmic discrimination.",
        legal_basis: "C.R.S. 6-1-1703(2)",
        applies: is_high_risk,
    },
    ArtifactRule {
        id: "impact-assessment",
        name: "Annual impact assessment",
        description: "Purpose, known risks of discrimination, data categories, metrics, transparency and post-deployment monitoring.",
        legal_basis: "C.R.S. 6-1-1703(3)",
        applies: is_high_risk,
    },
    ArtifactRule {
        id: "public-statement",
        name: "Public website statement",
        description: "Summary of high-risk systems deployed and how discrimination risks are managed.",
        legal_basis: "C.R.S. 6-1-1703(5)",
        applies: is_high_risk,
    },
];

static ACTIONS: &[ActionRule] = &[
    ActionRule {
        id: "impact-assessment",
        title: "Complete an algorithmic impact assessment",
        description: "Complete an impact assessment before deployment, annually, and within 90 days of any intentional and substantial modification.",
        priority: Priority::Critical,
        legal_basis: "C.R.S. 6-1-1703(3)",
        effort: "3-4 weeks",
        deadline: Some(EFFECTIVE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "risk-management-system",
        title: "Implement a risk management program",
        description: "Adopt a risk management policy and program aligned with the NIST AI RMF or ISO/IEC 42001.",
        priority: Priority::Important,
        legal_basis: "C.R.S. 6-1-1703(2)",
        effort: "4-8 weeks",
        deadline: Some(EFFECTIVE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "bias-audit",
        title: "Test for algorithmic discrimination",
        description: "Evaluate outcomes across protected classes and mitigate known or reasonably foreseeable risks of algorithmic discrimination.",
        priority: Priority::Important,
        legal_basis: "C.R.S. 6-1-1703(1)",
        effort: "4-6 weeks",
        deadline: Some(EFFECTIVE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "consequential-decision-notice",
        title: "Notify consumers of AI use in consequential decisions",
        description: "Before the decision, tell the consumer that a high-risk system is used, its purpose, and how to opt out of profiling.",
        priority: Priority::Important,
        legal_basis: "C.R.S. 6-1-1703(4)(a)",
        effort: "1-2 weeks",
        deadline: Some(EFFECTIVE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "human-review-process",
        title: "Offer correction and appeal with human review",
        description: "After an adverse decision, explain the principal reasons, let the consumer correct data, and allow appeal with human review where feasible.",
        priority: Priority::Important,
        legal_basis: "C.R.S. 6-1-1703(4)(b)",
        effort: "2-4 weeks",
        deadline: Some(EFFECTIVE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "ai-interaction-disclosure",
        title: "Disclose that users are interacting with AI",
        description: "Tell each consumer who interacts with the system that it is an AI system.",
        priority: Priority::Important,
        legal_basis: "C.R.S. 6-1-1704",
        effort: "1-2 weeks",
        deadline: Some(EFFECTIVE),
        obligation: Obligation::Required,
        applies: interacts_with_consumers,
    },
    ActionRule {
        id: "nist-ai-rmf-alignment",
        title: "Align with the NIST AI Risk Management Framework",
        description: "Recommended: conformance with a recognised framework supports the affirmative defence in C.R.S. 6-1-1706(3).",
        priority: Priority::Recommended,
        legal_basis: "C.R.S. 6-1-1706(3)",
        effort: "6-12 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: is_high_risk,
    },
];

static MILESTONES: &[MilestoneRule] = &[MilestoneRule {
    date: EFFECTIVE,
    description: "Developer and deployer duties take effect",
    citation: "SB 25B-004",
    applies: always,
}];

/// Colorado AI Act rule module.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsColorado;

impl RuleModule for UsColorado {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        NAME
    }

    fn jurisdiction(&self) -> &str {
        REGION
    }

    fn applicable_provisions(&self, ctx: &ProductContext) -> RuleResult<Vec<Provision>> {
        Ok(select_provisions(PROVISIONS, ctx))
    }

    fn required_artifacts(&self, ctx: &ProductContext) -> RuleResult<Vec<ArtifactRequirement>> {
        Ok(select_artifacts(ARTIFACTS, ctx))
    }

    fn required_actions(&self, ctx: &ProductContext) -> RuleResult<ActionSet> {
        Ok(select_actions(ID, ACTIONS, ctx))
    }

    fn risk_level(&self, ctx: &ProductContext) -> RuleResult<RiskClassification> {
        Ok(classify_risk(RISK_GROUPS, ctx))
    }

    fn timeline(&self, ctx: &ProductContext) -> RuleResult<Vec<Milestone>> {
        Ok(select_milestones(MILESTONES, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_core::{DecisionImpact, ProductCategory, SectorContext};

    fn tenant_screening() -> ProductContext {
        ProductContext::new("Tenant screening", ProductCategory::DecisionSupport)
            .with_user_populations([UserPopulation::Tenants])
            .with_decision_impact(DecisionImpact::Material)
    }

    #[test]
    fn housing_decision_is_high_risk() {
        let c = UsColorado.risk_level(&tenant_screening()).unwrap();
        assert_eq!(c.level, RiskLevel::High);
        assert_eq!(c.matched_triggers[0].id, "housing");
        assert!(c.justification.contains("6-1-1701(3)(f)"));
    }

    #[test]
    fn high_risk_actions_carry_effective_date() {
        let actions = UsColorado.required_actions(&tenant_screening()).unwrap();
        assert_eq!(actions.required[0].id, "impact-assessment");
        assert!(actions
            .required
            .iter()
            .all(|a| a.deadline.as_deref() == Some(EFFECTIVE)));
        assert_eq!(actions.recommended.len(), 1);
    }

    #[test]
    fn informational_output_is_not_consequential() {
        let product = tenant_screening().with_decision_impact(DecisionImpact::Informational);
        assert_eq!(UsColorado.risk_level(&product).unwrap().level, RiskLevel::Minimal);
        assert!(UsColorado.required_artifacts(&product).unwrap().is_empty());
    }

    #[test]
    fn consumer_chatbot_needs_disclosure_only() {
        let product = ProductContext::new("Support bot", ProductCategory::Chatbot)
            .with_user_populations([UserPopulation::Consumers]);
        let c = UsColorado.risk_level(&product).unwrap();
        assert_eq!(c.level, RiskLevel::Limited);
        let ids: Vec<String> = UsColorado
            .required_actions(&product)
            .unwrap()
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(ids, vec!["ai-interaction-disclosure"]);
    }

    #[test]
    fn business_only_chatbot_has_no_disclosure_duty() {
        let product = ProductContext::new("B2B bot", ProductCategory::Chatbot)
            .with_user_populations([UserPopulation::Businesses])
            .with_sector(SectorContext::default());
        assert!(UsColorado.required_actions(&product).unwrap().is_empty());
    }

    #[test]
    fn tables_are_well_formed() {
        crate::jurisdictions::assert_well_formed(ACTIONS, MILESTONES);
    }
}
