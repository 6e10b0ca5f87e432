//! # Jurisdiction Identifiers
//!
//! A jurisdiction identifier names one registered rule module, e.g.
//! `"eu-ai-act"` or `"us-colorado"`. Identifiers are the addressing
//! primitive of the registry and the jurisdiction scope of every action.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for JurisdictionId --------------------------------

impl<'de> Deserialize<'de> for JurisdictionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A rule-module identifier.
///
/// # Validation
///
/// Must be non-empty after trimming. Identifiers are compared verbatim;
/// no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct JurisdictionId(String);

impl JurisdictionId {
    /// Create a jurisdiction identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionId`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidJurisdictionId);
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JurisdictionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for JurisdictionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_id_valid() {
        let jid = JurisdictionId::new("eu-ai-act").unwrap();
        assert_eq!(jid.as_str(), "eu-ai-act");
    }

    #[test]
    fn jurisdiction_id_trims_whitespace() {
        let jid = JurisdictionId::new("  uk ").unwrap();
        assert_eq!(jid.as_str(), "uk");
    }

    #[test]
    fn jurisdiction_id_rejects_empty() {
        assert!(JurisdictionId::new("").is_err());
        assert!(JurisdictionId::new("   ").is_err());
    }

    #[test]
    fn jurisdiction_id_display() {
        let jid = JurisdictionId::new("us-nyc").unwrap();
        assert_eq!(format!("{jid}"), "us-nyc");
    }

    #[test]
    fn jurisdiction_id_deserialize_rejects_empty() {
        let result: Result<JurisdictionId, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
        let ok: JurisdictionId = serde_json::from_str("\"canada\"").unwrap();
        assert_eq!(ok.as_str(), "canada");
    }

    #[test]
    fn jurisdiction_ids_order_lexicographically() {
        let a = JurisdictionId::new("eu-gdpr").unwrap();
        let b = JurisdictionId::new("uk").unwrap();
        assert!(a < b);
    }
}
