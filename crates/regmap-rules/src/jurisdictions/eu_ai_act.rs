//! # EU Artificial Intelligence Act
//!
//! Regulation (EU) 2024/1689. Risk tiers follow the Act's own structure:
//!
//! | Tier | Source |
//! |------|--------|
//! | Unacceptable | Article 5 prohibited practices |
//! | High | Article 6(2) and Annex III use cases |
//! | Limited | Article 50 transparency obligations |
//! | Minimal | everything else |
//!
//! General-purpose model providers are classified separately under
//! Articles 51-55.

use regmap_core::{
    ActionSet, ArtifactRequirement, DataCategory, GpaiClassification,
    Milestone, Priority, ProductCategory, ProductContext, Provision, RiskClassification, RiskLevel,
    Sector, SensitivePractice, UserPopulation,
};

use crate::module::{RuleModule, RuleResult};
use crate::table::{
    always, select_actions, select_artifacts, select_milestones, select_provisions, ActionRule,
    ArtifactRule, MilestoneRule, Obligation, ProvisionRule,
};
use crate::trigger::{classify_risk, Trigger, TriggerGroup};

pub const ID: &str = "eu-ai-act";
pub const NAME: &str = "EU Artificial Intelligence Act";
pub const REGION: &str = "EU";
pub const DESCRIPTION: &str =
    "Regulation (EU) 2024/1689 laying down harmonised rules on artificial intelligence";

const LAW: &str = "EU AI Act";

/// Cumulative training compute above which a general-purpose model is
/// presumed to have high-impact capabilities (Article 51(2)).
pub const SYSTEMIC_RISK_FLOPS: f64 = 1e25;

const HIGH_RISK_DEADLINE: &str = "2026-08-02";
const TRANSPARENCY_DEADLINE: &str = "2026-08-02";
const PROHIBITION_DEADLINE: &str = "2025-02-02";
const GPAI_DEADLINE: &str = "2025-08-02";

// ---------------------------------------------------------------------------
// Triggers
// ---------------------------------------------------------------------------

static PROHIBITED_PRACTICES: &[Trigger] = &[
    Trigger {
        id: "subliminal-manipulation",
        description: "Deploys subliminal or purposefully manipulative techniques",
        citation: "Article 5(1)(a)",
        predicate: |ctx| ctx.uses_practice(SensitivePractice::SubliminalManipulation),
    },
    Trigger {
        id: "exploits-vulnerabilities",
        description: "Exploits vulnerabilities due to age, disability, or social situation",
        citation: "Article 5(1)(b)",
        predicate: |ctx| ctx.uses_practice(SensitivePractice::ExploitsVulnerabilities),
    },
    Trigger {
        id: "social-scoring",
        description: "Evaluates or classifies people by social behaviour (social scoring)",
        citation: "Article 5(1)(c)",
        predicate: |ctx| ctx.uses_practice(SensitivePractice::SocialScoring),
    },
    Trigger {
        id: "predictive-policing",
        description: "Predicts criminal offences based solely on profiling",
        citation: "Article 5(1)(d)",
        predicate: |ctx| ctx.uses_practice(SensitivePractice::PredictivePolicing),
    },
    Trigger {
        id: "untargeted-facial-scraping",
        description: "Builds facial recognition databases through untargeted scraping",
        citation: "Article 5(1)(e)",
        predicate: |ctx| ctx.uses_practice(SensitivePractice::UntargetedFacialScraping),
    },
    Trigger {
        id: "workplace-emotion-inference",
        description: "Infers emotions of people in the workplace or in education",
        citation: "Article 5(1)(f)",
        predicate: infers_emotions_at_work_or_school,
    },
    Trigger {
        id: "realtime-remote-biometric-id",
        description: "Real-time remote biometric identification in publicly accessible spaces",
        citation: "Article 5(1)(h)",
        predicate: |ctx| ctx.uses_practice(SensitivePractice::RealTimeRemoteBiometricId),
    },
];

static HIGH_RISK_USES: &[Trigger] = &[
    Trigger {
        id: "biometrics",
        description: "Remote biometric identification or emotion recognition",
        citation: "Annex III(1)",
        predicate: |ctx| {
            matches!(
                ctx.product_category,
                ProductCategory::BiometricIdentification | ProductCategory::EmotionRecognition
            )
        },
    },
    Trigger {
        id: "critical-infrastructure",
        description: "Safety component in the management of critical infrastructure",
        citation: "Annex III(2)",
        predicate: |ctx| ctx.in_sector(Sector::CriticalInfrastructure),
    },
    Trigger {
        id: "education",
        description: "Determines access to or assesses people in education",
        citation: "Annex III(3)",
        predicate: |ctx| ctx.in_sector(Sector::Education) && ctx.influences_decisions(),
    },
    Trigger {
        id: "employment",
        description: "Used for recruitment, promotion, termination, or task allocation",
        citation: "Annex III(4)",
        predicate: is_employment_decision,
    },
    Trigger {
        id: "essential-services",
        description: "Evaluates eligibility for credit, insurance, or public benefits",
        citation: "Annex III(5)",
        predicate: |ctx| {
            ctx.influences_decisions()
                && ((ctx.in_sector(Sector::Finance) && ctx.serves(UserPopulation::Borrowers))
                    || ctx.in_sector(Sector::Insurance)
                    || ctx.in_sector(Sector::PublicServices))
        },
    },
    Trigger {
        id: "law-enforcement",
        description: "Used by or on behalf of law-enforcement authorities",
        citation: "Annex III(6)",
        predicate: |ctx| {
            ctx.in_sector(Sector::LawEnforcement) || ctx.serves(UserPopulation::LawEnforcement)
        },
    },
    Trigger {
        id: "migration",
        description: "Used in migration, asylum, or border control management",
        citation: "Annex III(7)",
        predicate: |ctx| ctx.in_sector(Sector::Migration),
    },
    Trigger {
        id: "administration-of-justice",
        description: "Assists judicial authorities in researching or applying the law",
        citation: "Annex III(8)",
        predicate: |ctx| ctx.in_sector(Sector::Justice),
    },
];

static TRANSPARENCY: &[Trigger] = &[
    Trigger {
        id: "direct-interaction",
        description: "Interacts directly with natural persons",
        citation: "Article 50(1)",
        predicate: |ctx| ctx.interacts_with_people(),
    },
    Trigger {
        id: "synthetic-content",
        description: "Generates synthetic audio, image, video, or text content",
        citation: "Article 50(2)",
        predicate: |ctx| ctx.is_generative(),
    },
    Trigger {
        id: "deep-fake",
        description: "Generates or manipulates content depicting real people",
        citation: "Article 50(4)",
        predicate: |ctx| ctx.generates_synthetic_likeness(),
    },
];

static RISK_GROUPS: &[TriggerGroup] = &[
    TriggerGroup {
        concern: "prohibited practice",
        level: RiskLevel::Unacceptable,
        prohibition: true,
        triggers: PROHIBITED_PRACTICES,
    },
    TriggerGroup {
        concern: "high-risk use case",
        level: RiskLevel::High,
        prohibition: false,
        triggers: HIGH_RISK_USES,
    },
    TriggerGroup {
        concern: "transparency obligation",
        level: RiskLevel::Limited,
        prohibition: false,
        triggers: TRANSPARENCY,
    },
];

fn infers_emotions_at_work_or_school(ctx: &ProductContext) -> bool {
    ctx.uses_practice(SensitivePractice::WorkplaceEmotionInference)
        || (ctx.product_category == ProductCategory::EmotionRecognition
            && (ctx.serves(UserPopulation::Employees) || ctx.serves(UserPopulation::Students)))
}

fn is_employment_decision(ctx: &ProductContext) -> bool {
    ctx.influences_decisions()
        && (ctx.in_sector(Sector::Employment)
            || ctx.serves(UserPopulation::JobApplicants)
            || ctx.processes(DataCategory::Employment))
}

fn is_prohibited(ctx: &ProductContext) -> bool {
    PROHIBITED_PRACTICES.iter().any(|t| t.fires(ctx))
}

fn is_high_risk(ctx: &ProductContext) -> bool {
    !is_prohibited(ctx) && HIGH_RISK_USES.iter().any(|t| t.fires(ctx))
}

fn needs_fria(ctx: &ProductContext) -> bool {
    is_high_risk(ctx)
        && (ctx.is_public_authority()
            || ctx.in_sector(Sector::Finance)
            || ctx.in_sector(Sector::Insurance)
            || ctx.in_sector(Sector::PublicServices))
}

fn has_transparency_duty(ctx: &ProductContext) -> bool {
    TRANSPARENCY.iter().any(|t| t.fires(ctx))
}

fn is_systemic(ctx: &ProductContext) -> bool {
    ctx.gpai
        .as_ref()
        .and_then(|g| g.training_compute_flops)
        .is_some_and(|flops| flops >= SYSTEMIC_RISK_FLOPS)
}

fn is_gpai_provider(ctx: &ProductContext) -> bool {
    ctx.is_gpai_provider()
}

fn is_systemic_gpai_provider(ctx: &ProductContext) -> bool {
    ctx.is_gpai_provider() && is_systemic(ctx)
}

fn owes_gpai_documentation(ctx: &ProductContext) -> bool {
    ctx.is_gpai_provider()
        && (is_systemic(ctx) || !ctx.gpai.as_ref().is_some_and(|g| g.open_weights))
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

static PROVISIONS: &[ProvisionRule] = &[
    ProvisionRule {
        id: "art-4",
        law: LAW,
        citation: "Article 4",
        title: "AI literacy",
        summary: "Providers and deployers ensure a sufficient level of AI literacy of their staff.",
        applies: always,
    },
    ProvisionRule {
        id: "art-5",
        law: LAW,
        citation: "Article 5",
        title: "Prohibited AI practices",
        summary: "Listed practices may not be placed on the market, put into service, or used.",
        applies: is_prohibited,
    },
    ProvisionRule {
        id: "art-6",
        law: LAW,
        citation: "Article 6(2), Annex III",
        title: "Classification as high-risk",
        summary: "Systems in the Annex III areas are high-risk unless they pose no significant risk of harm.",
        applies: is_high_risk,
    },
    ProvisionRule {
        id: "art-9-15",
        law: LAW,
        citation: "Articles 9-15",
        title: "Requirements for high-risk AI systems",
        summary: "Risk management, data governance, technical documentation, logging, transparency, human oversight, accuracy and robustness.",
        applies: is_high_risk,
    },
    ProvisionRule {
        id: "art-26",
        law: LAW,
        citation: "Article 26",
        title: "Obligations of deployers of high-risk AI systems",
        summary: "Use in accordance with instructions, assign human oversight, monitor operation, keep logs.",
        applies: is_high_risk,
    },
    ProvisionRule {
        id: "art-27",
        law: LAW,
        citation: "Article 27",
        title: "Fundamental rights impact assessment",
        summary: "Public bodies and credit or insurance deployers assess impact on fundamental rights before first use.",
        applies: needs_fria,
    },
    ProvisionRule {
        id: "art-43",
        law: LAW,
        citation: "Articles 43 and 49",
        title: "Conformity assessment and registration",
        summary: "High-risk systems undergo conformity assessment and are registered in the EU database.",
        applies: is_high_risk,
    },
    ProvisionRule {
        id: "art-50",
        law: LAW,
        citation: "Article 50",
        title: "Transparency obligations",
        summary: "Disclose AI interaction, mark synthetic content in a machine-readable format, label deep fakes.",
        applies: has_transparency_duty,
    },
    ProvisionRule {
        id: "art-53",
        law: LAW,
        citation: "Article 53",
        title: "Obligations for providers of general-purpose AI models",
        summary: "Technical documentation, downstream information, copyright policy, and a public training-content summary.",
        applies: is_gpai_provider,
    },
    ProvisionRule {
        id: "art-55",
        law: LAW,
        citation: "Article 55",
        title: "General-purpose AI models with systemic risk",
        summary: "Model evaluation, adversarial testing, serious-incident reporting, and cybersecurity protection.",
        applies: is_systemic_gpai_provider,
    },
];

static ARTIFACTS: &[ArtifactRule] = &[
    ArtifactRule {
        id: "technical-documentation",
        name: "Technical documentation (Annex IV)",
        description: "System description, design specifications, data requirements, validation and testing results.",
        legal_basis: "EU AI Act Article 11, Annex IV",
        applies: is_high_risk,
    },
    ArtifactRule {
        id: "risk-management-file",
        name: "Risk management file",
        description: "Identified risks, estimation and evaluation, adopted risk-management measures.",
        legal_basis: "EU AI Act Article 9",
        applies: is_high_risk,
    },
    ArtifactRule {
        id: "instructions-for-use",
        name: "Instructions for use",
        description: "Capabilities, limitations, human oversight measures, and expected lifetime for deployers.",
        legal_basis: "EU AI Act Article 13",
        applies: is_high_risk,
    },
    ArtifactRule {
        id: "eu-declaration-of-conformity",
        name: "EU declaration of conformity",
        description: "Signed declaration that the system meets the requirements of Chapter III, Section 2.",
        legal_basis: "EU AI Act Article 47",
        applies: is_high_risk,
    },
    ArtifactRule {
        id: "fria-report",
        name: "Fundamental rights impact assessment",
        description: "Affected groups, specific risks of harm, oversight measures, and complaint mechanisms.",
        legal_basis: "EU AI Act Article 27",
        applies: needs_fria,
    },
    ArtifactRule {
        id: "gpai-technical-documentation",
        name: "General-purpose model technical documentation",
        description: "Training and testing process and evaluation results (Annex XI) plus downstream information (Annex XII).",
        legal_basis: "EU AI Act Article 53(1)(a)-(b)",
        applies: owes_gpai_documentation,
    },
    ArtifactRule {
        id: "gpai-training-content-summary",
        name: "Public summary of training content",
        description: "Sufficiently detailed summary of the content used for training, using the AI Office template.",
        legal_basis: "EU AI Act Article 53(1)(d)",
        applies: is_gpai_provider,
    },
    ArtifactRule {
        id: "gpai-copyright-policy",
        name: "Copyright compliance policy",
        description: "Policy to comply with Union copyright law, including text-and-data-mining opt-outs.",
        legal_basis: "EU AI Act Article 53(1)(c)",
        applies: is_gpai_provider,
    },
];

static ACTIONS: &[ActionRule] = &[
    ActionRule {
        id: "cease-prohibited-practice",
        title: "Do not deploy the prohibited functionality",
        description: "The system uses a practice prohibited by Article 5 and cannot be placed on the EU market or put into service. Remove the practice or withdraw the product from the EU.",
        priority: Priority::Critical,
        legal_basis: "EU AI Act Article 5",
        effort: "1-2 weeks",
        deadline: Some(PROHIBITION_DEADLINE),
        obligation: Obligation::Required,
        applies: is_prohibited,
    },
    ActionRule {
        id: "conformity-assessment",
        title: "Complete the conformity assessment",
        description: "Run the internal-control or notified-body conformity assessment before placing the high-risk system on the market, then affix the CE marking.",
        priority: Priority::Critical,
        legal_basis: "EU AI Act Article 43",
        effort: "6-12 weeks",
        deadline: Some(HIGH_RISK_DEADLINE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "risk-management-system",
        title: "Establish a risk management system",
        description: "Set up a continuous, iterative process to identify, evaluate, and mitigate risks across the system lifecycle.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 9",
        effort: "4-8 weeks",
        deadline: Some(HIGH_RISK_DEADLINE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "bias-audit",
        title: "Examine data and outputs for bias",
        description: "Examine training, validation, and testing data for possible biases likely to affect fundamental rights and put mitigation measures in place.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 10(2)(f)-(g)",
        effort: "4-6 weeks",
        deadline: Some(HIGH_RISK_DEADLINE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "technical-documentation",
        title: "Draw up Annex IV technical documentation",
        description: "Document the system's design, development, data, validation, and post-market monitoring before market placement and keep it current.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 11",
        effort: "4-6 weeks",
        deadline: Some(HIGH_RISK_DEADLINE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "record-keeping",
        title: "Implement automatic event logging",
        description: "Log events over the lifetime of the system to enable traceability and post-market monitoring.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 12",
        effort: "2-4 weeks",
        deadline: Some(HIGH_RISK_DEADLINE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "human-oversight-measures",
        title: "Design effective human oversight",
        description: "Build interfaces and procedures that let assigned people understand, monitor, override, and stop the system.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 14",
        effort: "2-4 weeks",
        deadline: Some(HIGH_RISK_DEADLINE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "eu-database-registration",
        title: "Register in the EU database",
        description: "Register the provider and the high-risk system in the EU database before placing it on the market.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 49",
        effort: "1-2 weeks",
        deadline: Some(HIGH_RISK_DEADLINE),
        obligation: Obligation::Required,
        applies: is_high_risk,
    },
    ActionRule {
        id: "fundamental-rights-impact-assessment",
        title: "Perform a fundamental rights impact assessment",
        description: "Assess the impact on fundamental rights before first use and notify the market surveillance authority of the results.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 27",
        effort: "2-4 weeks",
        deadline: Some(HIGH_RISK_DEADLINE),
        obligation: Obligation::Required,
        applies: needs_fria,
    },
    ActionRule {
        id: "ai-interaction-disclosure",
        title: "Disclose that users are interacting with AI",
        description: "Inform people at the latest at the first interaction that they are interacting with an AI system, unless obvious from context.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 50(1)",
        effort: "1-2 weeks",
        deadline: Some(TRANSPARENCY_DEADLINE),
        obligation: Obligation::Required,
        applies: |ctx| ctx.interacts_with_people(),
    },
    ActionRule {
        id: "ai-content-labeling",
        title: "Mark AI-generated content",
        description: "Mark synthetic outputs in a machine-readable format detectable as artificially generated, and visibly label deep fakes.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 50(2) and 50(4)",
        effort: "2-4 weeks",
        deadline: Some(TRANSPARENCY_DEADLINE),
        obligation: Obligation::Required,
        applies: |ctx| ctx.is_generative() || ctx.generates_synthetic_likeness(),
    },
    ActionRule {
        id: "gpai-technical-documentation",
        title: "Maintain general-purpose model documentation",
        description: "Keep Annex XI documentation for the AI Office and provide Annex XII information to downstream providers.",
        priority: Priority::Critical,
        legal_basis: "EU AI Act Article 53(1)(a)-(b)",
        effort: "4-6 weeks",
        deadline: Some(GPAI_DEADLINE),
        obligation: Obligation::Required,
        applies: owes_gpai_documentation,
    },
    ActionRule {
        id: "gpai-copyright-policy",
        title: "Adopt a copyright compliance policy",
        description: "Put in place a policy to respect Union copyright law, including machine-readable text-and-data-mining reservations.",
        priority: Priority::Critical,
        legal_basis: "EU AI Act Article 53(1)(c)",
        effort: "1-2 weeks",
        deadline: Some(GPAI_DEADLINE),
        obligation: Obligation::Required,
        applies: is_gpai_provider,
    },
    ActionRule {
        id: "gpai-training-summary",
        title: "Publish a training-content summary",
        description: "Publish a sufficiently detailed summary of training content using the AI Office template.",
        priority: Priority::Critical,
        legal_basis: "EU AI Act Article 53(1)(d)",
        effort: "2-4 weeks",
        deadline: Some(GPAI_DEADLINE),
        obligation: Obligation::Required,
        applies: is_gpai_provider,
    },
    ActionRule {
        id: "gpai-systemic-risk-evaluation",
        title: "Evaluate and mitigate systemic risk",
        description: "Perform state-of-the-art model evaluations including adversarial testing, track and report serious incidents, and ensure cybersecurity protection.",
        priority: Priority::Critical,
        legal_basis: "EU AI Act Article 55",
        effort: "6-12 weeks",
        deadline: Some(GPAI_DEADLINE),
        obligation: Obligation::Required,
        applies: is_systemic_gpai_provider,
    },
    ActionRule {
        id: "ai-literacy",
        title: "Run an AI literacy programme",
        description: "Ensure staff operating or using the system have sufficient AI literacy for their role.",
        priority: Priority::Important,
        legal_basis: "EU AI Act Article 4",
        effort: "2-4 weeks",
        deadline: Some(PROHIBITION_DEADLINE),
        obligation: Obligation::Required,
        applies: always,
    },
    ActionRule {
        id: "gpai-code-of-practice",
        title: "Sign the General-Purpose AI Code of Practice",
        description: "Adhering to the voluntary code of practice is a recommended way to demonstrate compliance with Articles 53 and 55.",
        priority: Priority::Recommended,
        legal_basis: "EU AI Act Article 56",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: is_gpai_provider,
    },
    ActionRule {
        id: "voluntary-code-of-conduct",
        title: "Apply a voluntary code of conduct",
        description: "Voluntarily apply selected high-risk requirements to a non-high-risk system as a best practice.",
        priority: Priority::Recommended,
        legal_basis: "EU AI Act Article 95",
        effort: "2-4 weeks",
        deadline: None,
        obligation: Obligation::Recommended,
        applies: |ctx| !is_prohibited(ctx) && !is_high_risk(ctx),
    },
];

static MILESTONES: &[MilestoneRule] = &[
    MilestoneRule {
        date: "2024-08-01",
        description: "Regulation enters into force",
        citation: "Article 113",
        applies: always,
    },
    MilestoneRule {
        date: PROHIBITION_DEADLINE,
        description: "Prohibitions and AI literacy obligations apply",
        citation: "Article 113(a)",
        applies: always,
    },
    MilestoneRule {
        date: GPAI_DEADLINE,
        description: "Obligations for general-purpose AI models apply",
        citation: "Article 113(b)",
        applies: is_gpai_provider,
    },
    MilestoneRule {
        date: HIGH_RISK_DEADLINE,
        description: "Annex III high-risk and Article 50 transparency obligations apply",
        citation: "Article 113",
        applies: always,
    },
    MilestoneRule {
        date: "2027-08-02",
        description: "General-purpose models placed on the market before 2 August 2025 must comply",
        citation: "Article 111(3)",
        applies: is_gpai_provider,
    },
];

// ---------------------------------------------------------------------------
// Module
// ---------------------------------------------------------------------------

/// EU AI Act rule module.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuAiAct;

impl RuleModule for EuAiAct {
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

    fn gpai_classification(&self, ctx: &ProductContext) -> RuleResult<Option<GpaiClassification>> {
        let Some(gpai) = ctx.gpai.as_ref() else {
            return Ok(None);
        };
        if !gpai.is_provider {
            return Ok(Some(GpaiClassification {
                is_gpai: false,
                systemic_risk: false,
                open_source_exemption: false,
                obligations: Vec::new(),
                justification: "Not a provider of a general-purpose AI model".to_string(),
            }));
        }

        let systemic = is_systemic(ctx);
        let open_source_exemption = gpai.open_weights && !systemic;
        let mut obligations = Vec::new();
        if !open_source_exemption {
            obligations.push("Article 53(1)(a)-(b): technical documentation".to_string());
        }
        obligations.push("Article 53(1)(c): copyright policy".to_string());
        obligations.push("Article 53(1)(d): training-content summary".to_string());
        if systemic {
            obligations.push("Article 55: systemic-risk evaluation and mitigation".to_string());
            obligations.push("Article 52: notify the Commission".to_string());
        }

        let justification = match (systemic, open_source_exemption) {
            (true, _) => format!(
                "General-purpose model trained with at least {SYSTEMIC_RISK_FLOPS:e} FLOPs is presumed to have systemic risk (Article 51(2))"
            ),
            (false, true) => {
                "General-purpose model released with open weights; documentation duties are exempt (Article 53(2))"
                    .to_string()
            }
            (false, false) => "Provider of a general-purpose AI model (Article 53)".to_string(),
        };

        Ok(Some(GpaiClassification {
            is_gpai: true,
            systemic_risk: systemic,
            open_source_exemption,
            obligations,
            justification,
        }))
    }
}
