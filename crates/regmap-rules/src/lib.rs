//! # regmap-rules — Rule Modules and Registry
//!
//! A rule module is one jurisdiction's legal logic behind a shared
//! contract ([`RuleModule`]). Modules are built from ordered, declarative
//! tables rather than branching code:
//!
//! - **Triggers** (`trigger.rs`): named predicates with legal citations,
//!   grouped by concern and evaluated in precedence order to produce an
//!   explainable [`RiskClassification`](regmap_core::RiskClassification).
//! - **Rule rows** (`table.rs`): provisions, artifacts, actions, and
//!   milestones, each gated by an `applies` predicate.
//! - **Registry** (`registry.rs`): an explicit, constructible table from
//!   jurisdiction identifier to module plus display metadata.
//! - **Jurisdictions** (`jurisdictions/`): the built-in catalog.
//!
//! Adding a jurisdiction means adding tables and a registry entry; the
//! engine is untouched.

pub mod jurisdictions;
pub mod module;
pub mod registry;
pub mod table;
pub mod trigger;

pub use module::{RuleModule, RuleResult};
pub use registry::{builtin_registry, ModuleRegistry, RegistryEntry, RegistryError};
pub use table::{ActionRule, ArtifactRule, MilestoneRule, Obligation, Predicate, ProvisionRule};
pub use trigger::{classify_risk, Trigger, TriggerGroup};
