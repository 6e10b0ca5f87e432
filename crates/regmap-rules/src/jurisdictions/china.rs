//! # People's Republic of China
//!
//! The CAC's algorithm regulations layered on the Personal Information
//! Protection Law:
//!
//! - Interim Measures for the Management of Generative AI Services (2023)
//! - Provisions on the Administration of Deep Synthesis (2023)
//! - Provisions on Algorithmic Recommendation (2022)
//! - Measures for Labeling AI-Generated Synthetic Content (2025)

use regmap_core::{
    ActionSet, ArtifactRequirement, Milestone, Priority, ProductCategory, ProductContext,
    Provision, RiskClassification, RiskLevel, UserPopulation,
};

use crate::module::{RuleModule, RuleResult};
use crate::table::{
    select_actions, select_artifacts, select_milestones, select_provisions, ActionRule,
    ArtifactRule, MilestoneRule, Obligation, ProvisionRule,
};
use crate::trigger::{classify_risk, Trigger, TriggerGroup};

pub const ID: &str = "china";
pub const NAME: &str = "China";
pub const REGION: &str = "CN";
pub const DESCRIPTION: &str =
    "Interim Measures for Generative AI, Deep Synthesis Provisions, and PIPL";

const GENAI: &str = "Interim Measures for Generative AI Services";
const DEEP_SYNTHESIS: &str = "Deep Synthesis Provisions";
const RECOMMENDATION: &str = "Algorithmic Recommendation Provisions";
const LABELING: &str = "AI-Generated Content Labeling Measures";
const PIPL: &str = "PIPL";

const LABELING_DEADLINE: &str = "2025-09-01";

static PUBLIC_OPINION: &[Trigger] = &[
    Trigger {
        id: "public-generative-service",
        description: "Generative AI service offered to the public",
        citation: "Interim Measures Article 17",
        predicate: |ctx| ctx.is_public_generative_service(),
    },
    Trigger {
        id: "deep-synthesis-of-likeness",
        description: "Deep synthesis that edits faces or voices of real people",
        citation: "Deep Synthesis Provisions Article 14",
        predicate: |ctx| ctx.generates_synthetic_likeness(),
    },
    Trigger {
        id: "public-recommendation",
        description: "Algorithmic recommendation service with public-opinion attributes",
        citation: "Algorithmic Recommendation Provisions Article 24",
        predicate: recommends_to_public,
    },
];

static PERSONAL: &[Trigger] = &[
    Trigger {
        id: "automated-decision-making",
        description: "Automated decision-making using personal information",
        citation: "PIPL Article 24",
        predicate: |ctx| ctx.influences_decisions() && ctx.processes_personal_data(),
    },
    Trigger {
        id: "sensitive-personal-information",
        description: "Processes sensitive personal information",
        citation: "PIPL Article 28",
        predicate: |ctx| ctx.processes_special_category_data() || ctx.involves_children(),
    },
    Trigger {
        id: "generative-content",
        description: "Generates synthetic content",
        citation: "Labeling Measures Article 4",
        predicate: |ctx| ctx.is_generative(),
    },
];

static RISK_GROUPS: &[TriggerGroup] = &[
    TriggerGroup {
        concern: "public-opinion service",
        level: RiskLevel::High,
        prohibition: false,
        triggers: PUBLIC_OPINION,
    },
    TriggerGroup {
        concern: "regulated processing",
        level: RiskLevel::Limited,
        prohibition: false,
        triggers: PERSONAL,
    },
];

fn recommends_to_public(ctx: &ProductContext) -> bool {
    ctx.product_category == ProductCategory::RecommenderSystem
        && (ctx.serves(UserPopulation::Consumers) || ctx.serves(UserPopulation::Public))
}

fn needs_filing(ctx: &ProductContext) -> bool {
    PUBLIC_OPINION.iter().any(|t| t.fires(ctx))
}

fn generative(ctx: &ProductContext) -> bool {
    ctx.is_generative()
}

fn personal(ctx: &ProductContext) -> bool {
    ctx.processes_personal_data()
}

fn needs_pi_impact_assessment(ctx: &ProductContext) -> bool {
    ctx.processes_personal_data()
        && (ctx.influences_decisions() || ctx.processes_special_category_data() || ctx.involves_children())
}

static PROVISIONS: &[ProvisionRule] = &[
    ProvisionRule {
        id: "genai-4-7",
        law: GENAI,
        citation: "Articles 4 and 7",
        title: "Content and training-data requirements",
        summary: "Generated content must uphold core socialist values; training data must come from lawful sources and respect IP.",
        applies: generative,
    },
    ProvisionRule {
        id: "genai-17",
        law: GENAI,
        citation: "Article 17",
        title: "Security assessment and algorithm filing",
        summary: "Services with public-opinion attributes or social mobilisation capacity undergo security assessment and algorithm filing.",
        applies: needs_filing,
    },
    ProvisionRule {
        id: "deep-synthesis-14",
        law: DEEP_SYNTHESIS,
        citation: "Article 14",
        title: "Separate consent for biometric editing",
        summary: "Editing biometric information such as faces and voices requires the separate consent of the individual.",
        applies: |ctx| ctx.generates_synthetic_likeness(),
    },
    ProvisionRule {
        id: "recommendation-17",
        law: RECOMMENDATION,
        citation: "Article 17",
        title: "User choice over recommendation",
        summary: "Users can switch off personalised recommendation and delete user tags.",
        applies: recommends_to_public,
    },
    ProvisionRule {
        id: "labeling-4-5",
        law: LABELING,
        citation: "Articles 4-5",
        title: "Explicit and implicit labels",
        summary: "AI-generated text, images, audio, video, and virtual scenes carry visible labels and embedded metadata.",
        applies: generative,
    },
    ProvisionRule {
        id: "pipl-24",
        law: PIPL,
        citation: "Article 24",
        title: "Automated decision-making",
        summary: "Ensure transparency and fairness, offer non-personalised options, and explain decisions with significant impact on request.",
        applies: |ctx| ctx.influences_decisions() && ctx.processes_personal_data(),
    },
    ProvisionRule {
        id: "pipl-55",
        law: PIPL,
        citation: "Article 55",
        title: "Personal information protection impact assessment",
        summary: "Assess in advance before processing sensitive information or using it for automated decision-making.",
        applies: needs_pi_impact_assessment,
    },
];

static ARTIFACTS: &[ArtifactRule] = &[
    ArtifactRule {
        id: "algorithm-filing-record",
        name: "Algorithm filing record",
        description: "Filing with the CAC algorithm registry including algorithm type, self-assessment report, and intended disclosures.",
        legal_basis: "Algorithmic Recommendation Provisions Article 24",
        applies: needs_filing,
    },
    ArtifactRule {
        id: "security-assessment-report",
        name: "Security self-assessment report",
        description: "Assessment of content security, training-data sources, and abuse prevention.",
        legal_basis: "Interim Measures Article 17",
        applies: needs_filing,
    },
    ArtifactRule {
        id: "pi-impact-assessment-report",
        name: "Personal information protection impact assessment",
        description: "Lawfulness, necessity, impact on rights, and adequacy of protective measures, retained for three years.",
        legal_basis: "PIPL Article 56",
        applies: needs_pi_impact_assessment,
    },
];

static ACTIONS: &[ActionRule] = &[
    ActionRule {
        id: "algorithm-filing",
        title: "File the algorithm with the CAC",
        description: "Complete algorithm filing within 10 working days of providing the service and display the filing number.",
        priority: Priority::Critical,
        legal_basis: "Algorithmic Recommendation Provisions Article 24",
        effort: "4-6 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: needs_filing,
    },
    ActionRule {
        id: "security-assessment",
        title: "Complete the generative AI security assessment",
        description: "Pass the security assessment for services with public-opinion attributes before launch.",
        priority: Priority::Critical,
        legal_basis: "Interim Measures Article 17",
        effort: "6-12 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: needs_filing,
    },
    ActionRule {
        id: "ai-content-labeling",
        title: "Label AI-generated content",
        description: "Add explicit labels and implicit metadata labels to generated text, images, audio, and video.",
        priority: Priority::Critical,
        legal_basis: "Labeling Measures Articles 4-5",
        effort: "2-4 weeks",
        deadline: Some(LABELING_DEADLINE),
        obligation: Obligation::Required,
        applies: generative,
    },
    ActionRule {
        id: "likeness-consent",
        title: "Obtain separate consent for face and voice editing",
        description: "Require the editing user to obtain the separate consent of the person whose biometric information is edited.",
        priority: Priority::Critical,
        legal_basis: "Deep Synthesis Provisions Article 14",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: |ctx| ctx.generates_synthetic_likeness(),
    },
    ActionRule {
        id: "dpia",
        title: "Conduct a personal information protection impact assessment",
        description: "Assess the processing in advance and keep the report and processing records for at least three years.",
        priority: Priority::Important,
        legal_basis: "PIPL Article 55",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: needs_pi_impact_assessment,
    },
    ActionRule {
        id: "transparency-notice",
        title: "Publish a transparency notice",
        description: "Inform individuals of the processor, purposes, methods, categories of information, and retention in clear language.",
        priority: Priority::Important,
        legal_basis: "PIPL Article 17",
        effort: "1-2 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: personal,
    },
    ActionRule {
        id: "recommendation-opt-out",
        title: "Offer a non-personalised option",
        description: "Provide an option not targeting personal characteristics and a convenient way to switch off recommendation.",
        priority: Priority::Important,
        legal_basis: "Algorithmic Recommendation Provisions Article 17",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Required,
        applies: recommends_to_public,
    },
    ActionRule {
        id: "training-data-provenance",
        title: "Document lawful training-data sources",
        description: "Recommended: record the provenance and licensing of training data and the measures taken to improve its quality.",
        priority: Priority::Recommended,
        legal_basis: "Interim Measures Article 7",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: generative,
    },
];

static MILESTONES: &[MilestoneRule] = &[
    MilestoneRule {
        date: "2023-01-10",
        description: "Deep Synthesis Provisions take effect",
        citation: "Deep Synthesis Provisions Article 25",
        applies: |ctx| ctx.generates_synthetic_likeness(),
    },
    MilestoneRule {
        date: "2023-08-15",
        description: "Interim Measures for Generative AI Services take effect",
        citation: "Interim Measures Article 24",
        applies: generative,
    },
    MilestoneRule {
        date: LABELING_DEADLINE,
        description: "Labeling Measures for AI-generated synthetic content take effect",
        citation: "Labeling Measures Article 14",
        applies: generative,
    },
];

/// Chinese rule module.
#[derive(Debug, Clone, Copy, Default)]
pub struct China;

impl RuleModule for China {
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
