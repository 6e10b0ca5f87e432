//! # Product Context
//!
//! [`ProductContext`] is the structured description of the AI product under
//! assessment. It is produced upstream (intake questionnaire or codebase
//! analysis), constructed once, and only ever borrowed by the engine.
//!
//! Every enumerated field draws from a closed vocabulary. Membership is the
//! producer's responsibility: serde rejects unknown strings at the file
//! boundary, and the engine performs no further validation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Closed vocabularies
// ---------------------------------------------------------------------------

/// What kind of AI product is being assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    /// Conversational assistant interacting directly with people.
    Chatbot,
    /// Generates text, images, audio, video, or code.
    ContentGenerator,
    /// Ranks or recommends content, products, or people.
    RecommenderSystem,
    /// Produces scores or recommendations a human acts on.
    DecisionSupport,
    /// Makes decisions without a human in the decision path.
    AutomatedDecision,
    /// Identifies or verifies natural persons from biometric data.
    BiometricIdentification,
    /// Infers emotions or intentions from biometric signals.
    EmotionRecognition,
    /// Plans and executes multi-step tasks with tool access.
    AutonomousAgent,
    /// General-purpose model offered to downstream providers.
    FoundationModel,
    /// Descriptive or predictive analytics without individual decisions.
    Analytics,
    /// Anything else.
    Other,
}

/// Category of data processed by the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataCategory {
    /// Ordinary personal data.
    Personal,
    /// Special-category data (ethnicity, religion, politics, sexuality, union membership).
    Sensitive,
    /// Biometric templates or raw biometric signals.
    Biometric,
    /// Health or medical data.
    Health,
    /// Financial account, credit, or transaction data.
    Financial,
    /// Data about children.
    Children,
    /// Precise geolocation.
    Location,
    /// Behavioral or profiling data.
    Behavioral,
    /// Employment records.
    Employment,
    /// Criminal convictions and offences.
    CriminalRecord,
    /// Anonymous or aggregate data only.
    Anonymous,
}

/// Population of people the product serves or affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserPopulation {
    /// Members of the public acting as consumers.
    Consumers,
    /// The deployer's own workforce.
    Employees,
    /// Candidates in a hiring process.
    JobApplicants,
    /// Learners in education or vocational training.
    Students,
    /// Minors.
    Children,
    /// Patients receiving care.
    Patients,
    /// Applicants for credit.
    Borrowers,
    /// Applicants for housing.
    Tenants,
    /// The general public in publicly accessible spaces.
    Public,
    /// Law-enforcement users.
    LawEnforcement,
    /// Business customers.
    Businesses,
    /// People vulnerable due to age, disability, or economic situation.
    VulnerableGroups,
}

/// How strongly the product's output affects the people it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionImpact {
    /// Output is informational only.
    #[default]
    Informational,
    /// Output materially influences decisions about people.
    Material,
    /// Output produces legal or similarly significant effects.
    Significant,
}

/// How much human involvement surrounds the product's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutomationLevel {
    /// A human makes every decision; the system assists.
    #[default]
    HumanInTheLoop,
    /// The system decides; a human monitors and can intervene.
    HumanOnTheLoop,
    /// The system decides with no human review.
    FullyAutomated,
}

/// Industry sector the product is deployed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    /// No regulated sector.
    #[default]
    General,
    /// Recruitment, promotion, termination, task allocation.
    Employment,
    /// Admission, assessment, proctoring.
    Education,
    /// Credit, banking, investment.
    Finance,
    /// Life and health insurance pricing and underwriting.
    Insurance,
    /// Clinical or care settings.
    Healthcare,
    /// Tenancy and housing allocation.
    Housing,
    /// Policing and investigations.
    LawEnforcement,
    /// Migration, asylum, and border control.
    Migration,
    /// Courts and alternative dispute resolution.
    Justice,
    /// Energy, water, transport, digital infrastructure.
    CriticalInfrastructure,
    /// Eligibility for public benefits and services.
    PublicServices,
}

/// Practices that several jurisdictions restrict or prohibit outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensitivePractice {
    /// Evaluating people by social behavior leading to detrimental treatment.
    SocialScoring,
    /// Subliminal or purposefully manipulative techniques.
    SubliminalManipulation,
    /// Exploiting vulnerabilities of age, disability, or social situation.
    ExploitsVulnerabilities,
    /// Real-time remote biometric identification in public spaces.
    RealTimeRemoteBiometricId,
    /// Untargeted scraping of facial images to build recognition databases.
    UntargetedFacialScraping,
    /// Predicting criminal offences from profiling alone.
    PredictivePolicing,
    /// Inferring emotions of employees or students.
    WorkplaceEmotionInference,
}

/// Output modality of a generative system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    /// Natural-language text.
    Text,
    /// Still images.
    Image,
    /// Speech or other audio.
    Audio,
    /// Moving images.
    Video,
    /// Source code.
    Code,
}

// ---------------------------------------------------------------------------
// Sub-contexts
// ---------------------------------------------------------------------------

/// Sector deployment details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectorContext {
    /// Deployment sector.
    #[serde(default)]
    pub sector: Sector,
    /// The deployer is a public authority or acts on its behalf.
    #[serde(default)]
    pub public_authority: bool,
    /// Restricted practices the product engages in.
    #[serde(default)]
    pub practices: Vec<SensitivePractice>,
}

/// Generative-AI details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenAiContext {
    /// Output modalities.
    #[serde(default)]
    pub modalities: Vec<Modality>,
    /// Output can depict real, identifiable people (deep fakes).
    #[serde(default)]
    pub synthetic_likeness: bool,
    /// The generative service is offered to the public.
    #[serde(default)]
    pub public_facing: bool,
    /// Outputs already carry machine-readable provenance marks.
    #[serde(default)]
    pub watermarking: bool,
}

/// Agentic-AI details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgenticContext {
    /// The agent acts on external systems (email, APIs, file systems).
    #[serde(default)]
    pub takes_external_actions: bool,
    /// The agent can move money or enter contracts.
    #[serde(default)]
    pub executes_transactions: bool,
    /// A human approves consequential actions before they execute.
    #[serde(default)]
    pub human_approval: bool,
}

/// General-purpose AI model details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GpaiContext {
    /// The organisation places a general-purpose model on the market.
    #[serde(default)]
    pub is_provider: bool,
    /// Cumulative training compute in floating-point operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_compute_flops: Option<f64>,
    /// Weights are released under a free and open-source licence.
    #[serde(default)]
    pub open_weights: bool,
}

// ---------------------------------------------------------------------------
// ProductContext
// ---------------------------------------------------------------------------

/// The AI product under assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductContext {
    /// Free-text description.
    pub description: String,
    /// Product category.
    pub product_category: ProductCategory,
    /// Data categories processed.
    #[serde(default)]
    pub data_categories: Vec<DataCategory>,
    /// Populations served or affected.
    #[serde(default)]
    pub user_populations: Vec<UserPopulation>,
    /// Decision-impact tier.
    #[serde(default)]
    pub decision_impact: DecisionImpact,
    /// Automation level.
    #[serde(default)]
    pub automation_level: AutomationLevel,
    /// Jurisdiction identifiers the product targets.
    #[serde(default)]
    pub target_jurisdictions: Vec<String>,
    /// Sector details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<SectorContext>,
    /// Generative-AI details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gen_ai: Option<GenAiContext>,
    /// Agentic details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agentic: Option<AgenticContext>,
    /// General-purpose model details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpai: Option<GpaiContext>,
}

impl ProductContext {
    /// Start a context with the two mandatory fields; everything else
    /// defaults to the least regulated value.
    pub fn new(description: impl Into<String>, product_category: ProductCategory) -> Self {
        Self {
            description: description.into(),
            product_category,
            data_categories: Vec::new(),
            user_populations: Vec::new(),
            decision_impact: DecisionImpact::default(),
            automation_level: AutomationLevel::default(),
            target_jurisdictions: Vec::new(),
            sector: None,
            gen_ai: None,
            agentic: None,
            gpai: None,
        }
    }

    pub fn with_data_categories(mut self, categories: impl IntoIterator<Item = DataCategory>) -> Self {
        self.data_categories = categories.into_iter().collect();
        self
    }

    pub fn with_user_populations(
        mut self,
        populations: impl IntoIterator<Item = UserPopulation>,
    ) -> Self {
        self.user_populations = populations.into_iter().collect();
        self
    }

    pub fn with_decision_impact(mut self, impact: DecisionImpact) -> Self {
        self.decision_impact = impact;
        self
    }

    pub fn with_automation_level(mut self, level: AutomationLevel) -> Self {
        self.automation_level = level;
        self
    }

    pub fn with_target_jurisdictions<S: Into<String>>(
        mut self,
        jurisdictions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.target_jurisdictions = jurisdictions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sector(mut self, sector: SectorContext) -> Self {
        self.sector = Some(sector);
        self
    }

    pub fn with_gen_ai(mut self, gen_ai: GenAiContext) -> Self {
        self.gen_ai = Some(gen_ai);
        self
    }

    pub fn with_agentic(mut self, agentic: AgenticContext) -> Self {
        self.agentic = Some(agentic);
        self
    }

    pub fn with_gpai(mut self, gpai: GpaiContext) -> Self {
        self.gpai = Some(gpai);
        self
    }

    // -- Predicates shared by rule tables -----------------------------------

    /// The product processes the given data category.
    pub fn processes(&self, category: DataCategory) -> bool {
        self.data_categories.contains(&category)
    }

    /// The product serves or affects the given population.
    pub fn serves(&self, population: UserPopulation) -> bool {
        self.user_populations.contains(&population)
    }

    /// Deployment sector, `General` when unspecified.
    pub fn sector(&self) -> Sector {
        self.sector.as_ref().map(|s| s.sector).unwrap_or_default()
    }

    /// The product is deployed in the given sector.
    pub fn in_sector(&self, sector: Sector) -> bool {
        self.sector() == sector
    }

    /// The product engages in the given restricted practice.
    pub fn uses_practice(&self, practice: SensitivePractice) -> bool {
        self.sector
            .as_ref()
            .is_some_and(|s| s.practices.contains(&practice))
    }

    /// The deployer is a public authority.
    pub fn is_public_authority(&self) -> bool {
        self.sector.as_ref().is_some_and(|s| s.public_authority)
    }

    /// Any data category other than anonymous data is processed.
    pub fn processes_personal_data(&self) -> bool {
        self.data_categories
            .iter()
            .any(|c| *c != DataCategory::Anonymous)
    }

    /// Special-category data under data-protection law.
    pub fn processes_special_category_data(&self) -> bool {
        self.data_categories.iter().any(|c| {
            matches!(
                c,
                DataCategory::Sensitive
                    | DataCategory::Biometric
                    | DataCategory::Health
                    | DataCategory::CriminalRecord
            )
        })
    }

    /// Data about, or services for, children.
    pub fn involves_children(&self) -> bool {
        self.processes(DataCategory::Children) || self.serves(UserPopulation::Children)
    }

    /// Output has legal or similarly significant effects.
    pub fn has_significant_effects(&self) -> bool {
        self.decision_impact == DecisionImpact::Significant
    }

    /// Significant decisions are taken with no human review.
    pub fn is_solely_automated_decision(&self) -> bool {
        self.has_significant_effects() && self.automation_level == AutomationLevel::FullyAutomated
    }

    /// Output materially or significantly influences decisions about people.
    pub fn influences_decisions(&self) -> bool {
        self.decision_impact >= DecisionImpact::Material
    }

    /// The product generates synthetic content.
    pub fn is_generative(&self) -> bool {
        self.product_category == ProductCategory::ContentGenerator
            || self
                .gen_ai
                .as_ref()
                .is_some_and(|g| !g.modalities.is_empty())
    }

    /// The product can depict real people synthetically.
    pub fn generates_synthetic_likeness(&self) -> bool {
        self.gen_ai.as_ref().is_some_and(|g| g.synthetic_likeness)
    }

    /// Generative output is offered to the public.
    pub fn is_public_generative_service(&self) -> bool {
        self.is_generative() && self.gen_ai.as_ref().is_some_and(|g| g.public_facing)
    }

    /// People interact with the system directly.
    pub fn interacts_with_people(&self) -> bool {
        matches!(
            self.product_category,
            ProductCategory::Chatbot | ProductCategory::AutonomousAgent
        ) || self.is_public_generative_service()
    }

    /// The agent acts on external systems.
    pub fn is_agentic(&self) -> bool {
        self.product_category == ProductCategory::AutonomousAgent
            || self
                .agentic
                .as_ref()
                .is_some_and(|a| a.takes_external_actions)
    }

    /// The organisation provides a general-purpose model.
    pub fn is_gpai_provider(&self) -> bool {
        self.gpai.as_ref().is_some_and(|g| g.is_provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiring_tool() -> ProductContext {
        ProductContext::new("Resume screening model", ProductCategory::DecisionSupport)
            .with_data_categories([DataCategory::Personal, DataCategory::Employment])
            .with_user_populations([UserPopulation::JobApplicants])
            .with_decision_impact(DecisionImpact::Significant)
            .with_automation_level(AutomationLevel::HumanOnTheLoop)
            .with_sector(SectorContext {
                sector: Sector::Employment,
                ..SectorContext::default()
            })
    }

    #[test]
    fn builder_sets_fields() {
        let ctx = hiring_tool().with_target_jurisdictions(["eu-ai-act", "us-nyc"]);
        assert_eq!(ctx.target_jurisdictions, vec!["eu-ai-act", "us-nyc"]);
        assert!(ctx.in_sector(Sector::Employment));
        assert!(ctx.serves(UserPopulation::JobApplicants));
    }

    #[test]
    fn defaults_are_least_regulated() {
        let ctx = ProductContext::new("Internal dashboard", ProductCategory::Analytics);
        assert_eq!(ctx.decision_impact, DecisionImpact::Informational);
        assert_eq!(ctx.automation_level, AutomationLevel::HumanInTheLoop);
        assert_eq!(ctx.sector(), Sector::General);
        assert!(!ctx.processes_personal_data());
        assert!(!ctx.is_generative());
    }

    #[test]
    fn special_category_detection() {
        let ctx = ProductContext::new("Triage", ProductCategory::DecisionSupport)
            .with_data_categories([DataCategory::Health]);
        assert!(ctx.processes_special_category_data());
        assert!(ctx.processes_personal_data());
    }

    #[test]
    fn anonymous_only_is_not_personal_data() {
        let ctx = ProductContext::new("Traffic model", ProductCategory::Analytics)
            .with_data_categories([DataCategory::Anonymous]);
        assert!(!ctx.processes_personal_data());
    }

    #[test]
    fn solely_automated_requires_significance_and_full_automation() {
        let ctx = hiring_tool();
        assert!(!ctx.is_solely_automated_decision());
        let ctx = ctx.with_automation_level(AutomationLevel::FullyAutomated);
        assert!(ctx.is_solely_automated_decision());
    }

    #[test]
    fn generative_detection_via_sub_context() {
        let ctx = ProductContext::new("Assistant", ProductCategory::Chatbot).with_gen_ai(GenAiContext {
            modalities: vec![Modality::Text],
            public_facing: true,
            ..GenAiContext::default()
        });
        assert!(ctx.is_generative());
        assert!(ctx.is_public_generative_service());
        assert!(ctx.interacts_with_people());
    }

    #[test]
    fn deserializes_kebab_case_vocabulary() {
        let yaml = r#"{
            "description": "Loan approval",
            "product_category": "automated-decision",
            "data_categories": ["financial", "criminal-record"],
            "user_populations": ["borrowers"],
            "decision_impact": "significant",
            "automation_level": "fully-automated",
            "sector": {"sector": "finance", "practices": ["social-scoring"]}
        }"#;
        let ctx: ProductContext = serde_json::from_str(yaml).unwrap();
        assert_eq!(ctx.product_category, ProductCategory::AutomatedDecision);
        assert!(ctx.processes(DataCategory::CriminalRecord));
        assert!(ctx.uses_practice(SensitivePractice::SocialScoring));
        assert!(ctx.is_solely_automated_decision());
    }

    #[test]
    fn unknown_vocabulary_is_rejected() {
        let json = r#"{"description": "x", "product_category": "time-machine"}"#;
        assert!(serde_json::from_str::<ProductContext>(json).is_err());
    }
}
