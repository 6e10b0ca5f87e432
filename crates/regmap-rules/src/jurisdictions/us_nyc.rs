//! # New York City Local Law 144
//!
//! Automated employment decision tools (NYC Admin. Code 20-870 to 20-874,
//! rules at 6 RCNY 5-300). Applies only to tools that substantially assist
//! or replace discretionary decisions on hiring or promotion.

use regmap_core::{
    ActionSet, ArtifactRequirement, DataCategory, Milestone, Priority, ProductContext, Provision,
    RiskClassification, RiskLevel, Sector, UserPopulation,
};

use crate::module::{RuleModule, RuleResult};
use crate::table::{
    select_actions, select_artifacts, select_milestones, select_provisions, ActionRule,
    ArtifactRule, MilestoneRule, Obligation, ProvisionRule,
};
use crate::trigger::{classify_risk, Trigger, TriggerGroup};

pub const ID: &str = "us-nyc";
pub const NAME: &str = "New York City Local Law 144";
pub const REGION: &str = "US";
pub const DESCRIPTION: &str = "Local Law 144 of 2021 on automated employment decision tools";

const LAW: &str = "NYC Local Law 144";

static AEDT: &[Trigger] = &[
    Trigger {
        id: "hiring-decision",
        description: "Substantially assists or replaces discretionary hiring decisions",
        citation: "Admin. Code 20-870",
        predicate: |ctx| ctx.influences_decisions() && ctx.serves(UserPopulation::JobApplicants),
    },
    Trigger {
        id: "promotion-decision",
        description: "Substantially assists or replaces discretionary promotion decisions",
        citation: "Admin. Code 20-870",
        predicate: |ctx| {
            ctx.influences_decisions()
                && ctx.serves(UserPopulation::Employees)
                && (ctx.in_sector(Sector::Employment) || ctx.processes(DataCategory::Employment))
        },
    },
];

static RISK_GROUPS: &[TriggerGroup] = &[TriggerGroup {
    concern: "automated employment decision tool",
    level: RiskLevel::High,
    prohibition: false,
    triggers: AEDT,
}];

fn is_aedt(ctx: &ProductContext) -> bool {
    AEDT.iter().any(|t| t.fires(ctx))
}

static PROVISIONS: &[ProvisionRule] = &[
    ProvisionRule {
        id: "20-871",
        law: LAW,
        citation: "Admin. Code 20-871",
        title: "Requirements for automated employment decision tools",
        summary: "An AEDT may not be used unless it had an independent bias audit within the past year and the results are public.",
        applies: is_aedt,
    },
    ProvisionRule {
        id: "20-871-b",
        law: LAW,
        citation: "Admin. Code 20-871(b)",
        title: "Notices to candidates and employees",
        summary: "Candidates residing in the city receive notice at least 10 business days before use.",
        applies: is_aedt,
    },
    ProvisionRule {
        id: "20-872",
        law: LAW,
        citation: "Admin. Code 20-872",
        title: "Penalties",
        summary: "Civil penalties of USD 500 for a first violation and up to USD 1,500 for each subsequent violation.",
        applies: is_aedt,
    },
];

static ARTIFACTS: &[ArtifactRule] = &[
    ArtifactRule {
        id: "bias-audit-report",
        name: "Independent bias audit",
        description: "Selection rates and impact ratios by sex, race/ethnicity, and intersectional categories.",
        legal_basis: "6 RCNY 5-301",
        applies: is_aedt,
    },
    ArtifactRule {
        id: "bias-audit-summary",
        name: "Published audit summary",
        description: "Date of the most recent audit, distribution date of the tool, and summary results on the employment website.",
        legal_basis: "6 RCNY 5-303",
        applies: is_aedt,
    },
];

static ACTIONS: &[ActionRule] = &[
    ActionRule {
        id: "bias-audit",
        title: "Commission an independent bias audit",
        description: "Have an independent auditor calculate selection rates and impact ratios no more than one year before use of the tool.",
        priority: Priority::Critical,
        legal_basis: "NYC Admin. Code 20-871(a)",
        effort: "4-6 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: is_aedt,
    },
    ActionRule {
        id: "publish-audit-results",
        title: "Publish bias audit results",
        description: "Post a summary of the most recent bias audit on the employment section of the website.",
        priority: Priority::Important,
        legal_basis: "NYC Admin. Code 20-871(a)(2)",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: is_aedt,
    },
    ActionRule {
        id: "candidate-notice",
        title: "Notify candidates about the AEDT",
        description: "Give notice of AEDT use, the job qualifications assessed, and how to request an alternative process at least 10 business days before use.",
        priority: Priority::Important,
        legal_basis: "NYC Admin. Code 20-871(b)",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: is_aedt,
    },
    ActionRule {
        id: "alternative-selection-process",
        title: "Offer an alternative selection process",
        description: "Recommended: provide a reasonable accommodation or alternative process for candidates who request one.",
        priority: Priority::Recommended,
        legal_basis: "6 RCNY 5-304",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: is_aedt,
    },
];

static MILESTONES: &[MilestoneRule] = &[MilestoneRule {
    date: "2023-07-05",
    description: "Enforcement of Local Law 144 begins",
    citation: "6 RCNY 5-300",
    applies: is_aedt,
}];

/// NYC Local Law 144 rule module.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsNyc;

impl RuleModule for UsNyc {
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
