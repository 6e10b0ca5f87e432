//! # Module Registry
//!
//! Table from jurisdiction identifier to a registered [`RuleModule`] plus
//! display metadata. The registry is an explicit value: it is populated
//! once at startup (or once per test fixture) and only read while mapping.
//! [`ModuleRegistry::clear`] exists to reset state between independent
//! test suites.
//!
//! Entries are kept in a `BTreeMap`, so [`ModuleRegistry::list`] is sorted
//! by identifier and stable across runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use regmap_core::{JurisdictionId, ValidationError};
use serde::Serialize;
use thiserror::Error;

use crate::jurisdictions;
use crate::module::RuleModule;

/// Registration failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The identifier is malformed.
    #[error("invalid jurisdiction identifier: {0}")]
    InvalidId(#[from] ValidationError),

    /// A module is already registered under this identifier.
    #[error("jurisdiction {0} is already registered")]
    Duplicate(String),
}

/// A registered module and its display metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryEntry {
    pub id: JurisdictionId,
    pub name: String,
    pub region: String,
    pub description: String,
    #[serde(skip)]
    module: Arc<dyn RuleModule>,
}

impl RegistryEntry {
    /// The registered module.
    pub fn module(&self) -> &Arc<dyn RuleModule> {
        &self.module
    }
}

/// Registry of rule modules keyed by jurisdiction identifier.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    entries: BTreeMap<JurisdictionId, RegistryEntry>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under `id`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidId`] for an empty identifier and
    /// [`RegistryError::Duplicate`] if `id` is taken.
    pub fn register(
        &mut self,
        id: &str,
        name: &str,
        region: &str,
        description: &str,
        module: Arc<dyn RuleModule>,
    ) -> Result<(), RegistryError> {
        let id = JurisdictionId::new(id)?;
        if self.entries.contains_key(&id) {
            return Err(RegistryError::Duplicate(id.to_string()));
        }
        tracing::debug!(jurisdiction = %id, module = module.name(), "registering rule module");
        self.entries.insert(
            id.clone(),
            RegistryEntry {
                id,
                name: name.to_string(),
                region: region.to_string(),
                description: description.to_string(),
                module,
            },
        );
        Ok(())
    }

    /// All entries, sorted by identifier.
    pub fn list(&self) -> Vec<&RegistryEntry> {
        self.entries.values().collect()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up an entry by identifier. Blank identifiers never match.
    pub fn get(&self, id: &str) -> Option<&RegistryEntry> {
        let id = JurisdictionId::new(id).ok()?;
        self.entries.get(&id)
    }

    /// Look up a module by identifier.
    pub fn module(&self, id: &str) -> Option<Arc<dyn RuleModule>> {
        self.get(id).map(|e| Arc::clone(&e.module))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A registry populated with every built-in jurisdiction.
pub fn builtin_registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    for builtin in jurisdictions::builtins() {
        if let Err(e) = registry.register(
            builtin.module.id(),
            builtin.module.name(),
            builtin.region,
            builtin.description,
            Arc::clone(&builtin.module),
        ) {
            tracing::error!(error = %e, "built-in rule module failed to register");
        }
    }
    registry
}
