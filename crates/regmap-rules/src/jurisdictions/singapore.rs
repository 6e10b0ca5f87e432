//! # Singapore
//!
//! The Personal Data Protection Act 2012 and the PDPC's Advisory Guidelines
//! on Use of Personal Data in AI Recommendation and Decision Systems. The
//! Model AI Governance Framework (including its generative AI edition) is
//! voluntary, so its measures surface as recommended actions.

use regmap_core::{
    ActionSet, ArtifactRequirement, Milestone, Priority, ProductContext, Provision,
    RiskClassification, RiskLevel,
};

use crate::module::{RuleModule, RuleResult};
use crate::table::{
    select_actions, select_artifacts, select_milestones, select_provisions, ActionRule,
    ArtifactRule, MilestoneRule, Obligation, ProvisionRule,
};
use crate::trigger::{classify_risk, Trigger, TriggerGroup};

pub const ID: &str = "singapore";
pub const NAME: &str = "Singapore";
pub const REGION: &str = "SG";
pub const DESCRIPTION: &str = "PDPA 2012 and the Model AI Governance Framework";

const PDPA: &str = "PDPA";
const FRAMEWORK: &str = "Model AI Governance Framework";

static DECISIONS: &[Trigger] = &[Trigger {
    id: "ai-decision-with-personal-data",
    description: "AI recommendation or decision system using personal data",
    citation: "PDPC Advisory Guidelines on AI Recommendation and Decision Systems",
    predicate: decides_with_personal_data,
}];

static PERSONAL: &[Trigger] = &[Trigger {
    id: "personal-data",
    description: "Collects, uses, or discloses personal data",
    citation: "PDPA s.13",
    predicate: |ctx| ctx.processes_personal_data(),
}];

static RISK_GROUPS: &[TriggerGroup] = &[
    TriggerGroup {
        concern: "AI decision system",
        level: RiskLevel::Limited,
        prohibition: false,
        triggers: DECISIONS,
    },
    TriggerGroup {
        concern: "personal data processing",
        level: RiskLevel::Limited,
        prohibition: false,
        triggers: PERSONAL,
    },
];

fn personal(ctx: &ProductContext) -> bool {
    ctx.processes_personal_data()
}

fn decides_with_personal_data(ctx: &ProductContext) -> bool {
    ctx.influences_decisions() && ctx.processes_personal_data()
}

static PROVISIONS: &[ProvisionRule] = &[
    ProvisionRule {
        id: "pdpa-13-20",
        law: PDPA,
        citation: "Sections 13-20",
        title: "Consent and notification obligations",
        summary: "Obtain consent and notify individuals of purposes before collecting, using, or disclosing personal data.",
        applies: personal,
    },
    ProvisionRule {
        id: "pdpa-12",
        law: PDPA,
        citation: "Section 12",
        title: "Accountability obligation",
        summary: "Develop and implement policies and practices, and make information about them available on request.",
        applies: personal,
    },
    ProvisionRule {
        id: "mgf-internal-governance",
        law: FRAMEWORK,
        citation: "Section 3.1",
        title: "Internal governance structures and measures",
        summary: "Clear roles, responsibilities, and risk controls for AI deployment.",
        applies: |ctx| ctx.influences_decisions() || ctx.is_generative(),
    },
];

static ARTIFACTS: &[ArtifactRule] = &[ArtifactRule {
    id: "data-protection-policy",
    name: "Data protection policies and practices",
    description: "Documented policies for personal data handled by the AI system, available on request.",
    legal_basis: "PDPA s.12",
    applies: personal,
}];

static ACTIONS: &[ActionRule] = &[
    ActionRule {
        id: "transparency-notice",
        title: "Publish a transparency notice",
        description: "Notify individuals of the purposes for which personal data is used in the AI system and how it affects them.",
        priority: Priority::Important,
        legal_basis: "PDPA s.20",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "consent-management",
        title: "Obtain consent or document an exception",
        description: "Obtain consent, or record the business improvement or research exception relied on for model training.",
        priority: Priority::Important,
        legal_basis: "PDPA s.13; First Schedule Part 5",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "ai-governance-framework",
        title: "Adopt Model AI Governance Framework practices",
        description: "Recommended: define human involvement level, operations management, and stakeholder communication for the AI system.",
        priority: Priority::Recommended,
        legal_basis: "Model AI Governance Framework, Second Edition",
        effort: "4-6 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: |ctx| ctx.influences_decisions() || ctx.is_generative(),
    },
    ActionRule {
        id: "ai-verify-testing",
        title: "Test the system with AI Verify",
        description: "Recommended: run the AI Verify testing toolkit against the governance principles and publish the report.",
        priority: Priority::Recommended,
        legal_basis: "AI Verify Foundation testing framework",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: decides_with_personal_data,
    },
];

static MILESTONES: &[MilestoneRule] = &[MilestoneRule {
    date: "2024-03-01",
    description: "PDPC Advisory Guidelines on AI Recommendation and Decision Systems published",
    citation: "PDPC Advisory Guidelines",
    applies: decides_with_personal_data,
}];

/// Singapore rule module.
#[derive(Debug, Clone, Copy, Default)]
pub struct Singapore;

impl RuleModule for Singapore {
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
