//! # United Kingdom
//!
//! UK GDPR and the Data Protection Act 2018 as amended by the Data (Use and
//! Access) Act 2025, read with the ICO's guidance on AI and data protection.
//! The UK has no horizontal AI statute; obligations come from data
//! protection, equality, and sector regulators.

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

pub const ID: &str = "uk";
pub const NAME: &str = "United Kingdom";
pub const REGION: &str = "UK";
pub const DESCRIPTION: &str =
    "UK GDPR, Data Protection Act 2018, and ICO guidance on AI and data protection";

const UK_GDPR: &str = "UK GDPR";
const DPA: &str = "Data Protection Act 2018";
const EQUALITY: &str = "Equality Act 2010";

static HIGH_RISK_PROCESSING: &[Trigger] = &[
    Trigger {
        id: "significant-automated-decision",
        description: "Solely automated decision with legal or similarly significant effects",
        citation: "UK GDPR Article 22A",
        predicate: |ctx| ctx.is_solely_automated_decision(),
    },
    Trigger {
        id: "biometric-recognition",
        description: "Processes biometric data for recognition",
        citation: "UK GDPR Article 9; ICO DPIA list",
        predicate: |ctx| ctx.processes(DataCategory::Biometric),
    },
    Trigger {
        id: "special-category-data",
        description: "Processes special category or criminal offence data",
        citation: "UK GDPR Articles 9-10; DPA 2018 Schedule 1",
        predicate: |ctx| {
            ctx.processes(DataCategory::Sensitive)
                || ctx.processes(DataCategory::Health)
                || ctx.processes(DataCategory::CriminalRecord)
        },
    },
    Trigger {
        id: "childrens-services",
        description: "Online service likely to be accessed by children",
        citation: "Age Appropriate Design Code",
        predicate: |ctx| ctx.involves_children(),
    },
    Trigger {
        id: "innovative-technology",
        description: "Innovative technology used to make decisions about people",
        citation: "UK GDPR Article 35; ICO DPIA list",
        predicate: |ctx| ctx.influences_decisions() && ctx.processes_personal_data(),
    },
];

static PERSONAL_DATA: &[Trigger] = &[Trigger {
    id: "personal-data",
    description: "Processes personal data",
    citation: "UK GDPR Article 6",
    predicate: |ctx| ctx.processes_personal_data(),
}];

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

fn solely_automated(ctx: &ProductContext) -> bool {
    ctx.is_solely_automated_decision()
}

fn decides_about_people(ctx: &ProductContext) -> bool {
    ctx.influences_decisions() && ctx.processes_personal_data()
}

fn biometric_at_work(ctx: &ProductContext) -> bool {
    ctx.processes(DataCategory::Biometric) && ctx.serves(UserPopulation::Employees)
}

static PROVISIONS: &[ProvisionRule] = &[
    ProvisionRule {
        id: "uk-gdpr-art-5-6",
        law: UK_GDPR,
        citation: "Articles 5-6",
        title: "Principles and lawful basis",
        summary: "Processing must be lawful, fair, and transparent, with a documented lawful basis.",
        applies: personal,
    },
    ProvisionRule {
        id: "uk-gdpr-art-13-14",
        law: UK_GDPR,
        citation: "Articles 13-14",
        title: "Right to be informed",
        summary: "Individuals are told how their data is used, including in AI systems.",
        applies: personal,
    },
    ProvisionRule {
        id: "uk-gdpr-art-22a-d",
        law: UK_GDPR,
        citation: "Articles 22A-22D",
        title: "Automated decision-making",
        summary: "Significant automated decisions need safeguards: information, representations, human intervention, and contest.",
        applies: solely_automated,
    },
    ProvisionRule {
        id: "uk-gdpr-art-35",
        law: UK_GDPR,
        citation: "Article 35",
        title: "Data protection impact assessment",
        summary: "A DPIA is mandatory for processing likely to result in high risk, including the ICO's listed AI uses.",
        applies: needs_dpia,
    },
    ProvisionRule {
        id: "dpa-schedule-1",
        law: DPA,
        citation: "Schedule 1",
        title: "Special category and criminal offence data conditions",
        summary: "An appropriate policy document is required for most Schedule 1 conditions.",
        applies: |ctx| ctx.processes_special_category_data(),
    },
    ProvisionRule {
        id: "equality-act-s29",
        law: EQUALITY,
        citation: "Sections 19 and 29",
        title: "Indirect discrimination in the provision of services",
        summary: "Outcomes that disadvantage people with a protected characteristic must be objectively justified.",
        applies: decides_about_people,
    },
];

static ARTIFACTS: &[ArtifactRule] = &[
    ArtifactRule {
        id: "privacy-notice",
        name: "Privacy notice",
        description: "Information about AI processing in clear and plain language.",
        legal_basis: "UK GDPR Articles 13-14",
        applies: personal,
    },
    ArtifactRule {
        id: "dpia-report",
        name: "Data protection impact assessment",
        description: "DPIA covering the AI lifecycle, trade-offs, and residual risks.",
        legal_basis: "UK GDPR Article 35",
        applies: needs_dpia,
    },
    ArtifactRule {
        id: "appropriate-policy-document",
        name: "Appropriate policy document",
        description: "Procedures for complying with the principles and retention policies for Schedule 1 processing.",
        legal_basis: "DPA 2018 Schedule 1 Part 4",
        applies: |ctx| ctx.processes_special_category_data(),
    },
];

static ACTIONS: &[ActionRule] = &[
    ActionRule {
        id: "dpia",
        title: "Conduct a data protection impact assessment",
        description: "Complete a DPIA before deployment following the ICO's AI guidance and consult the ICO if high risk remains.",
        priority: Priority::Critical,
        legal_basis: "UK GDPR Article 35",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: needs_dpia,
    },
    ActionRule {
        id: "human-review-process",
        title: "Provide human review of automated decisions",
        description: "Let individuals make representations, obtain human intervention, and contest significant automated decisions.",
        priority: Priority::Critical,
        legal_basis: "UK GDPR Article 22C",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: solely_automated,
    },
    ActionRule {
        id: "transparency-notice",
        title: "Publish a transparency notice",
        description: "Explain how the AI system uses personal data and, where decisions are made, the rationale and who to contact.",
        priority: Priority::Important,
        legal_basis: "UK GDPR Articles 13-14",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "appropriate-policy-document",
        title: "Write an appropriate policy document",
        description: "Document the Schedule 1 condition relied on and the retention and erasure policy for special category data.",
        priority: Priority::Important,
        legal_basis: "DPA 2018 Schedule 1",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: |ctx| ctx.processes_special_category_data(),
    },
    ActionRule {
        id: "biometric-alternative",
        title: "Offer a non-biometric alternative",
        description: "Employees must be able to refuse biometric processing without detriment; provide an alternative method.",
        priority: Priority::Critical,
        legal_basis: "UK GDPR Articles 5(1)(a) and 9",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: biometric_at_work,
    },
    ActionRule {
        id: "explainability",
        title: "Prepare explanations of AI-assisted decisions",
        description: "Recommended: follow the ICO and Alan Turing Institute guidance on explaining decisions made with AI.",
        priority: Priority::Recommended,
        legal_basis: "ICO Explaining decisions made with AI",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: decides_about_people,
    },
    ActionRule {
        id: "equality-impact-review",
        title: "Review outcomes for discriminatory impact",
        description: "Recommended: test outcomes across protected characteristics and record the justification for any disparity.",
        priority: Priority::Recommended,
        legal_basis: "Equality Act 2010 Section 19",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: decides_about_people,
    },
];

static MILESTONES: &[MilestoneRule] = &[MilestoneRule {
    date: "2025-06-19",
    description: "Data (Use and Access) Act 2025 receives Royal Assent, replacing Article 22 with Articles 22A-22D",
    citation: "Data (Use and Access) Act 2025 s.80",
    applies: decides_about_people,
}];

/// UK rule module.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uk;

impl RuleModule for Uk {
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
        if ctx.processes(DataCategory::Biometric) {
            precedents.push(EnforcementPrecedent {
                authority: "Information Commissioner's Office".to_string(),
                case: "Clearview AI Inc".to_string(),
                year: 2022,
                summary: "GBP 7.5 million fine and enforcement notice for scraping facial images of UK residents without a lawful basis.".to_string(),
            });
        }
        if biometric_at_work(ctx) {
            precedents.push(EnforcementPrecedent {
                authority: "Information Commissioner's Office".to_string(),
                case: "Serco Leisure".to_string(),
                year: 2024,
                summary: "Enforcement notices ordering a stop to facial recognition and fingerprint attendance checks on employees.".to_string(),
            });
        }
        Ok(precedents)
    }
}
