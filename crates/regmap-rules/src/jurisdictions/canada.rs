//! # Canada
//!
//! Federal PIPEDA plus Quebec's Law 25 (Act respecting the protection of
//! personal information in the private sector, as amended). The proposed
//! federal Artificial Intelligence and Data Act died on the order paper
//! with Bill C-27, so obligations come from privacy law.

use regmap_core::{
    ActionSet, ArtifactRequirement, DataCategory, EnforcementPrecedent, Milestone, Priority,
    ProductContext, Provision, RiskClassification, RiskLevel,
};

use crate::module::{RuleModule, RuleResult};
use crate::table::{
    select_actions, select_artifacts, select_milestones, select_provisions, ActionRule,
    ArtifactRule, MilestoneRule, Obligation, ProvisionRule,
};
use crate::trigger::{classify_risk, Trigger, TriggerGroup};

pub const ID: &str = "canada";
pub const NAME: &str = "Canada";
pub const REGION: &str = "CA";
pub const DESCRIPTION: &str = "PIPEDA and Quebec Law 25";

const PIPEDA: &str = "PIPEDA";
const LAW_25: &str = "Quebec Law 25";

static HIGH_RISK: &[Trigger] = &[
    Trigger {
        id: "exclusively-automated-decision",
        description: "Decision based exclusively on automated processing of personal information",
        citation: "Law 25 s.12.1",
        predicate: |ctx| ctx.is_solely_automated_decision() && ctx.processes_personal_data(),
    },
    Trigger {
        id: "biometric-database",
        description: "Creates a database of biometric characteristics",
        citation: "Act to establish a legal framework for information technology ss.44-45",
        predicate: |ctx| ctx.processes(DataCategory::Biometric),
    },
    Trigger {
        id: "sensitive-information",
        description: "Processes sensitive personal information",
        citation: "PIPEDA Schedule 1, Principle 4.3.4",
        predicate: |ctx| ctx.processes_special_category_data() || ctx.processes(DataCategory::Financial),
    },
];

static PERSONAL: &[Trigger] = &[Trigger {
    id: "personal-information",
    description: "Collects, uses, or discloses personal information in commercial activity",
    citation: "PIPEDA s.4(1)",
    predicate: |ctx| ctx.processes_personal_data(),
}];

static RISK_GROUPS: &[TriggerGroup] = &[
    TriggerGroup {
        concern: "high-risk personal information processing",
        level: RiskLevel::High,
        prohibition: false,
        triggers: HIGH_RISK,
    },
    TriggerGroup {
        concern: "personal information processing",
        level: RiskLevel::Limited,
        prohibition: false,
        triggers: PERSONAL,
    },
];

fn personal(ctx: &ProductContext) -> bool {
    ctx.processes_personal_data()
}

fn automated_decision(ctx: &ProductContext) -> bool {
    ctx.is_solely_automated_decision() && ctx.processes_personal_data()
}

fn biometric(ctx: &ProductContext) -> bool {
    ctx.processes(DataCategory::Biometric)
}

fn needs_pia(ctx: &ProductContext) -> bool {
    HIGH_RISK.iter().any(|t| t.fires(ctx))
}

static PROVISIONS: &[ProvisionRule] = &[
    ProvisionRule {
        id: "pipeda-4-3",
        law: PIPEDA,
        citation: "Schedule 1, Principle 4.3",
        title: "Consent",
        summary: "Knowledge and meaningful consent are required for collection, use, or disclosure of personal information.",
        applies: personal,
    },
    ProvisionRule {
        id: "pipeda-4-8",
        law: PIPEDA,
        citation: "Schedule 1, Principle 4.8",
        title: "Openness",
        summary: "Policies and practices for managing personal information are made readily available.",
        applies: personal,
    },
    ProvisionRule {
        id: "law-25-3-3",
        law: LAW_25,
        citation: "s.3.3",
        title: "Privacy impact assessment",
        summary: "Assess privacy impacts of any project to acquire, develop, or overhaul an information system handling personal information.",
        applies: needs_pia,
    },
    ProvisionRule {
        id: "law-25-12-1",
        law: LAW_25,
        citation: "s.12.1",
        title: "Decisions based exclusively on automated processing",
        summary: "Inform the person, disclose the principal factors on request, and let them submit observations to a reviewer.",
        applies: automated_decision,
    },
];

static ARTIFACTS: &[ArtifactRule] = &[
    ArtifactRule {
        id: "privacy-policy",
        name: "Privacy policy",
        description: "Plain-language governance policy for personal information, published on the website.",
        legal_basis: "PIPEDA Principle 4.8; Law 25 s.3.2",
        applies: personal,
    },
    ArtifactRule {
        id: "privacy-impact-assessment-report",
        name: "Privacy impact assessment",
        description: "PIA proportionate to the sensitivity, purpose, quantity, distribution, and medium of the information.",
        legal_basis: "Law 25 s.3.3",
        applies: needs_pia,
    },
];

static ACTIONS: &[ActionRule] = &[
    ActionRule {
        id: "human-review-process",
        title: "Provide human review of automated decisions",
        description: "Inform individuals of exclusively automated decisions and let them submit observations to a staff member who can review the decision.",
        priority: Priority::Critical,
        legal_basis: "Law 25 s.12.1",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: automated_decision,
    },
    ActionRule {
        id: "biometric-database-disclosure",
        title: "Disclose the biometric database to the CAI",
        description: "Declare the creation of a biometric characteristics database to the Commission d'acces a l'information at least 60 days before it is put into service.",
        priority: Priority::Critical,
        legal_basis: "Act to establish a legal framework for information technology s.45",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: biometric,
    },
    ActionRule {
        id: "privacy-impact-assessment",
        title: "Conduct a privacy impact assessment",
        description: "Complete a PIA for the AI system before it is deployed.",
        priority: Priority::Important,
        legal_basis: "Law 25 s.3.3",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: needs_pia,
    },
    ActionRule {
        id: "meaningful-consent",
        title: "Obtain meaningful consent",
        description: "Obtain consent that individuals understand, separately and explicitly for sensitive information.",
        priority: Priority::Important,
        legal_basis: "PIPEDA Principle 4.3",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "transparency-notice",
        title: "Publish a transparency notice",
        description: "Publish how personal information is used by the AI system in plain language.",
        priority: Priority::Important,
        legal_basis: "PIPEDA Principle 4.8",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "voluntary-ai-code",
        title: "Sign the Voluntary Code of Conduct on generative AI",
        description: "Recommended: adopt the federal voluntary code's accountability, safety, and transparency measures.",
        priority: Priority::Recommended,
        legal_basis: "Voluntary Code of Conduct on the Responsible Development and Management of Advanced Generative AI Systems",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: |ctx| ctx.is_generative(),
    },
];

static MILESTONES: &[MilestoneRule] = &[MilestoneRule {
    date: "2023-09-22",
    description: "Law 25 automated-decision and privacy impact assessment duties in force",
    citation: "Law 25 s.180",
    applies: personal,
}];

/// Canadian rule module.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canada;

impl RuleModule for Canada {
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

    fn enforcement_precedents(&self, ctx: &ProductContext) -> RuleResult<Vec<EnforcementPrecedent>> {
        if !biometric(ctx) {
            return Ok(Vec::new());
        }
        Ok(vec![EnforcementPrecedent {
            authority: "Office of the Privacy Commissioner of Canada".to_string(),
            case: "Clearview AI (PIPEDA-2021-001)".to_string(),
            year: 2021,
            summary: "Joint investigation found mass collection of facial images without consent to be illegal surveillance.".to_string(),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_core::{AutomationLevel, DecisionImpact, ProductCategory};

    #[test]
    fn automated_credit_decision() {
        let product = ProductContext::new("Loan approval", ProductCategory::AutomatedDecision)
            .with_data_categories([DataCategory::Personal])
            .with_decision_impact(DecisionImpact::Significant)
            .with_automation_level(AutomationLevel::FullyAutomated);
        let c = Canada.risk_level(&product).unwrap();
        assert_eq!(c.level, RiskLevel::High);
        assert_eq!(c.matched_triggers[0].citation, "Law 25 s.12.1");
        let actions = Canada.required_actions(&product).unwrap();
        assert_eq!(actions.required[0].id, "human-review-process");
        assert!(actions.recommended.is_empty());
    }

    #[test]
    fn biometric_surfaces_opc_precedent() {
        let product = ProductContext::new("Face search", ProductCategory::BiometricIdentification)
            .with_data_categories([DataCategory::Biometric]);
        assert_eq!(Canada.enforcement_precedents(&product).unwrap()[0].year, 2021);
        assert!(Canada
            .required_actions(&product)
            .unwrap()
            .required
            .iter()
            .any(|a| a.id == "biometric-database-disclosure"));
    }

    #[test]
    fn ordinary_personal_data_is_limited() {
        let product = ProductContext::new("Recommender", ProductCategory::RecommenderSystem)
            .with_data_categories([DataCategory::Personal]);
        assert_eq!(Canada.risk_level(&product).unwrap().level, RiskLevel::Limited);
        assert!(Canada.enforcement_precedents(&product).unwrap().is_empty());
    }

    #[test]
    fn tables_are_well_formed() {
        crate::jurisdictions::assert_well_formed(ACTIONS, MILESTONES);
    }
}
