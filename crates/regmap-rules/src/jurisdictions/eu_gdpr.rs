//! # EU General Data Protection Regulation
//!
//! Regulation (EU) 2016/679 as it bears on AI systems: lawful basis,
//! special-category data, solely automated decisions (Article 22), and
//! the data protection impact assessment (Article 35).

use regmap_core::{
    ActionSet, ArtifactRequirement, DataCategory, EnforcementPrecedent, Milestone, Priority,
    ProductContext, Provision, RiskClassification, RiskLevel, UserPopulation,
};

use crate::module::{RuleModule, RuleResult};
use crate::table::{
    select_actions, select_artifacts, select_milestones, select_provisions, ActionRule,
    ArtifactRule, MilestoneRule, Obligation, ProvisionRule,
};
use crate::trigger::{classify_risk, Trigger, TriggerGroup};

pub const ID: &str = "eu-gdpr";
pub const NAME: &str = "General Data Protection Regulation";
pub const REGION: &str = "EU";
pub const DESCRIPTION: &str = "Regulation (EU) 2016/679 on the protection of personal data";

const LAW: &str = "GDPR";

static HIGH_RISK_PROCESSING: &[Trigger] = &[
    Trigger {
        id: "solely-automated-decision",
        description: "Solely automated decision with legal or similarly significant effects",
        citation: "Article 22(1)",
        predicate: |ctx| ctx.is_solely_automated_decision(),
    },
    Trigger {
        id: "special-category-data",
        description: "Processes special categories of personal data",
        citation: "Article 9(1)",
        predicate: |ctx| {
            ctx.processes(DataCategory::Sensitive)
                || ctx.processes(DataCategory::Biometric)
                || ctx.processes(DataCategory::Health)
        },
    },
    Trigger {
        id: "criminal-offence-data",
        description: "Processes personal data relating to criminal convictions",
        citation: "Article 10",
        predicate: |ctx| ctx.processes(DataCategory::CriminalRecord),
    },
    Trigger {
        id: "systematic-profiling",
        description: "Systematic evaluation of personal aspects based on profiling",
        citation: "Article 35(3)(a)",
        predicate: |ctx| ctx.influences_decisions() && ctx.processes(DataCategory::Behavioral),
    },
    Trigger {
        id: "public-monitoring",
        description: "Systematic monitoring of a publicly accessible area",
        citation: "Article 35(3)(c)",
        predicate: |ctx| {
            ctx.serves(UserPopulation::Public)
                && (ctx.processes(DataCategory::Biometric) || ctx.processes(DataCategory::Location))
        },
    },
];

static PERSONAL_DATA: &[Trigger] = &[
    Trigger {
        id: "childrens-data",
        description: "Processes personal data of children",
        citation: "Article 8",
        predicate: |ctx| ctx.involves_children(),
    },
    Trigger {
        id: "personal-data",
        description: "Processes personal data",
        citation: "Article 6",
        predicate: |ctx| ctx.processes_personal_data(),
    },
];

static RISK_GROUPS: &[TriggerGroup] = &[
    TriggerGroup {
        concern: "high-risk processing",
        level: RiskLevel::High,
        prohibition: false,
        triggers: HIGH_RISK_PROCESSING,
    },
    TriggerGroup {
        concern: "personal data processing",
        level: RiskLevel::Limited,
        prohibition: false,
        triggers: PERSONAL_DATA,
    },
];

fn personal(ctx: &ProductContext) -> bool {
    ctx.processes_personal_data()
}

fn needs_dpia(ctx: &ProductContext) -> bool {
    HIGH_RISK_PROCESSING.iter().any(|t| t.fires(ctx))
}

fn special_category(ctx: &ProductContext) -> bool {
    ctx.processes_special_category_data()
}

fn solely_automated(ctx: &ProductContext) -> bool {
    ctx.is_solely_automated_decision()
}

fn significant_with_personal_data(ctx: &ProductContext) -> bool {
    ctx.processes_personal_data() && ctx.has_significant_effects()
}

static PROVISIONS: &[ProvisionRule] = &[
    ProvisionRule {
        id: "art-5-6",
        law: LAW,
        citation: "Articles 5-6",
        title: "Principles and lawfulness of processing",
        summary: "Processing needs a lawful basis and must respect purpose limitation, minimisation, and accuracy.",
        applies: personal,
    },
    ProvisionRule {
        id: "art-8",
        law: LAW,
        citation: "Article 8",
        title: "Conditions applicable to a child's consent",
        summary: "Consent for information society services offered to children needs parental authorisation below the national age threshold.",
        applies: |ctx| ctx.involves_children(),
    },
    ProvisionRule {
        id: "art-9",
        law: LAW,
        citation: "Articles 9-10",
        title: "Special categories and criminal offence data",
        summary: "Processing is prohibited unless an Article 9(2) condition or Member State authorisation applies.",
        applies: special_category,
    },
    ProvisionRule {
        id: "art-12-14",
        law: LAW,
        citation: "Articles 12-14",
        title: "Transparent information",
        summary: "Data subjects are told about processing, including meaningful information about the logic of automated decisions.",
        applies: personal,
    },
    ProvisionRule {
        id: "art-22",
        law: LAW,
        citation: "Article 22",
        title: "Automated individual decision-making",
        summary: "Right not to be subject to solely automated decisions with significant effects, with a right to human intervention.",
        applies: significant_with_personal_data,
    },
    ProvisionRule {
        id: "art-25",
        law: LAW,
        citation: "Article 25",
        title: "Data protection by design and by default",
        summary: "Implement technical and organisational measures that give effect to the data protection principles.",
        applies: personal,
    },
    ProvisionRule {
        id: "art-30",
        law: LAW,
        citation: "Article 30",
        title: "Records of processing activities",
        summary: "Controllers maintain a record of processing activities under their responsibility.",
        applies: personal,
    },
    ProvisionRule {
        id: "art-35",
        law: LAW,
        citation: "Article 35",
        title: "Data protection impact assessment",
        summary: "Assess processing likely to result in a high risk to the rights and freedoms of natural persons.",
        applies: needs_dpia,
    },
];

static ARTIFACTS: &[ArtifactRule] = &[
    ArtifactRule {
        id: "record-of-processing",
        name: "Record of processing activities",
        description: "Purposes, categories of data subjects and data, recipients, transfers, retention periods.",
        legal_basis: "GDPR Article 30",
        applies: personal,
    },
    ArtifactRule {
        id: "privacy-notice",
        name: "Privacy notice",
        description: "Article 13-14 information, including the logic, significance, and consequences of automated decisions.",
        legal_basis: "GDPR Articles 13-14",
        applies: personal,
    },
    ArtifactRule {
        id: "dpia-report",
        name: "Data protection impact assessment",
        description: "Systematic description of the processing, necessity and proportionality, risks, and mitigating measures.",
        legal_basis: "GDPR Article 35(7)",
        applies: needs_dpia,
    },
    ArtifactRule {
        id: "automated-decision-safeguards",
        name: "Automated decision safeguards record",
        description: "Lawful exception relied on and the measures safeguarding the data subject's rights.",
        legal_basis: "GDPR Article 22(2)-(3)",
        applies: solely_automated,
    },
];

static ACTIONS: &[ActionRule] = &[
    ActionRule {
        id: "dpia",
        title: "Conduct a data protection impact assessment",
        description: "Carry out a DPIA before processing begins and consult the supervisory authority if residual risk remains high.",
        priority: Priority::Critical,
        legal_basis: "GDPR Article 35",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: needs_dpia,
    },
    ActionRule {
        id: "human-review-process",
        title: "Provide human review of automated decisions",
        description: "Give data subjects the right to obtain human intervention, express their view, and contest the decision.",
        priority: Priority::Critical,
        legal_basis: "GDPR Article 22(3)",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: solely_automated,
    },
    ActionRule {
        id: "special-category-condition",
        title: "Document an Article 9 processing condition",
        description: "Identify and record the Article 9(2) condition, such as explicit consent, for each special category processed.",
        priority: Priority::Critical,
        legal_basis: "GDPR Article 9(2)",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: special_category,
    },
    ActionRule {
        id: "lawful-basis",
        title: "Establish a lawful basis for processing",
        description: "Identify the Article 6 lawful basis for each processing purpose, including training and inference.",
        priority: Priority::Important,
        legal_basis: "GDPR Article 6",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "transparency-notice",
        title: "Publish a transparency notice",
        description: "Tell data subjects how their data is used by the AI system, including meaningful information about any automated decision logic.",
        priority: Priority::Important,
        legal_basis: "GDPR Articles 13-14",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "record-of-processing",
        title: "Maintain a record of processing activities",
        description: "Add the AI system's processing operations to the Article 30 record.",
        priority: Priority::Important,
        legal_basis: "GDPR Article 30",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "parental-consent",
        title: "Implement age verification and parental consent",
        description: "Verify age and obtain parental authorisation where consent is the lawful basis for children's data.",
        priority: Priority::Important,
        legal_basis: "GDPR Article 8",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: |ctx| ctx.involves_children(),
    },
    ActionRule {
        id: "data-subject-rights",
        title: "Support data subject rights requests",
        description: "Handle access, rectification, erasure, and objection requests for data used in training and inference.",
        priority: Priority::Important,
        legal_basis: "GDPR Articles 15-21",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "privacy-by-design",
        title: "Apply privacy-enhancing techniques",
        description: "Recommended: minimise training data, pseudonymise where possible, and test for memorisation of personal data.",
        priority: Priority::Recommended,
        legal_basis: "GDPR Article 25",
        effort: "4-6 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: personal,
    },
];

static MILESTONES: &[MilestoneRule] = &[MilestoneRule {
    date: "2018-05-25",
    description: "GDPR applies",
    citation: "Article 99(2)",
    applies: personal,
}];

/// GDPR rule module.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuGdpr;

impl RuleModule for EuGdpr {
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
        let mut precedents = Vec::new();
        if ctx.interacts_with_people() && ctx.processes_personal_data() {
            precedents.push(EnforcementPrecedent {
                authority: "Garante per la protezione dei dati personali (Italy)".to_string(),
                case: "OpenAI (ChatGPT)".to_string(),
                year: 2024,
                summary: "EUR 15 million fine for processing personal data to train a chatbot without an adequate legal basis and for lacking age verification.".to_string(),
            });
        }
        if ctx.processes(DataCategory::Biometric) {
            precedents.push(EnforcementPrecedent {
                authority: "Autoriteit Persoonsgegevens (Netherlands)".to_string(),
                case: "Clearview AI".to_string(),
                year: 2024,
                summary: "EUR 30.5 million fine for building an illegal database of biometric facial data scraped from the internet.".to_string(),
            });
        }
        Ok(precedents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_core::{AutomationLevel, DecisionImpact, ProductCategory};

    fn ctx() -> ProductContext {
        ProductContext::new("test", ProductCategory::DecisionSupport)
    }

    #[test]
    fn anonymous_data_is_out_of_scope() {
        let product = ctx().with_data_categories([DataCategory::Anonymous]);
        assert!(EuGdpr.applicable_provisions(&product).unwrap().is_empty());
        assert!(EuGdpr.required_actions(&product).unwrap().is_empty());
        assert!(EuGdpr.required_artifacts(&product).unwrap().is_empty());
        assert_eq!(EuGdpr.risk_level(&product).unwrap().level, RiskLevel::Minimal);
    }

    #[test]
    fn ordinary_personal_data_is_limited_risk() {
        let product = ctx().with_data_categories([DataCategory::Personal]);
        let c = EuGdpr.risk_level(&product).unwrap();
        assert_eq!(c.level, RiskLevel::Limited);
        let actions = EuGdpr.required_actions(&product).unwrap();
        assert!(actions.required.iter().any(|a| a.id == "transparency-notice"));
        assert!(!actions.required.iter().any(|a| a.id == "dpia"));
        assert_eq!(actions.recommended.len(), 1);
    }

    #[test]
    fn solely_automated_decision_needs_human_review_and_dpia() {
        let product = ctx()
            .with_data_categories([DataCategory::Personal, DataCategory::Financial])
            .with_decision_impact(DecisionImpact::Significant)
            .with_automation_level(AutomationLevel::FullyAutomated);
        let c = EuGdpr.risk_level(&product).unwrap();
        assert_eq!(c.level, RiskLevel::High);
        assert_eq!(c.matched_triggers[0].citation, "Article 22(1)");
        let ids: Vec<String> = EuGdpr
            .required_actions(&product)
            .unwrap()
            .required
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert!(ids.contains(&"dpia".to_string()));
        assert!(ids.contains(&"human-review-process".to_string()));
    }

    #[test]
    fn human_in_the_loop_avoids_article_22_actions() {
        let product = ctx()
            .with_data_categories([DataCategory::Personal])
            .with_decision_impact(DecisionImpact::Significant);
        let actions = EuGdpr.required_actions(&product).unwrap();
        assert!(!actions.iter().any(|a| a.id == "human-review-process"));
        // The provision still applies as a constraint on future automation.
        let provisions = EuGdpr.applicable_provisions(&product).unwrap();
        assert!(provisions.iter().any(|p| p.id == "art-22"));
    }

    #[test]
    fn biometric_data_surfaces_clearview_precedent() {
        let product = ctx().with_data_categories([DataCategory::Biometric]);
        let precedents = EuGdpr.enforcement_precedents(&product).unwrap();
        assert_eq!(precedents.len(), 1);
        assert_eq!(precedents[0].case, "Clearview AI");
    }

    #[test]
    fn tables_are_well_formed() {
        crate::jurisdictions::assert_well_formed(ACTIONS, MILESTONES);
    }
}
