//! # regmap-core — Foundational Types
//!
//! Shared vocabulary for the regulatory requirement mapping engine. Every
//! other crate in the workspace depends on `regmap-core`; it depends on
//! nothing internal.
//!
//! ## Contents
//!
//! - [`ProductContext`] and its closed vocabularies: the immutable
//!   description of the AI product under assessment.
//! - [`JurisdictionId`]: validated newtype for rule-module identifiers.
//! - [`Priority`], [`ActionRequirement`], [`ActionItem`]: actions before and
//!   after cross-jurisdiction merging.
//! - [`JurisdictionResult`] and its parts: the output of one rule module.
//! - Error types for validation, rule evaluation, and jurisdiction mapping.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regmap-*` crates.
//! - No I/O.
//! - No `.unwrap()` outside tests.

pub mod action;
pub mod context;
pub mod error;
pub mod jurisdiction;
pub mod priority;
pub mod result;

pub use action::{
    effort_ordinal, is_known_effort, parse_deadline, ActionItem, ActionRequirement, ActionSet,
    DEFAULT_EFFORT_ORDINAL,
};
pub use context::{
    AgenticContext, AutomationLevel, DataCategory, DecisionImpact, GenAiContext, GpaiContext,
    Modality, ProductCategory, ProductContext, Sector, SectorContext, SensitivePractice,
    UserPopulation,
};
pub use error::{MappingError, MappingErrorKind, RuleError, ValidationError};
pub use jurisdiction::JurisdictionId;
pub use priority::Priority;
pub use result::{
    ApplicableLaw, ArtifactRequirement, EnforcementPrecedent, GpaiClassification,
    JurisdictionResult, MatchedTrigger, Milestone, Provision, RiskClassification, RiskLevel,
};
