//! # Error Types
//!
//! The engine has exactly one runtime error kind of its own: a
//! jurisdiction-mapping error, recorded per jurisdiction and never
//! propagated as a fatal fault. The remaining types cover identifier
//! validation and faults raised from inside a rule module.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed identifier or input value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Jurisdiction identifiers must be non-empty.
    #[error("jurisdiction identifier must be a non-empty string")]
    InvalidJurisdictionId,

    /// A value outside a closed vocabulary.
    #[error("unknown {vocabulary} value: {value:?}")]
    UnknownVariant {
        /// Name of the vocabulary (e.g. "priority").
        vocabulary: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// A fault raised while a rule module evaluated a product context.
///
/// Built-in modules never produce this; it exists so that plug-in modules
/// can report a failure instead of panicking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Evaluation of a module operation failed.
    #[error("rule module {module} failed: {reason}")]
    Evaluation {
        /// Identifier of the failing module.
        module: String,
        /// Human-readable reason.
        reason: String,
    },
}

/// Why a jurisdiction could not be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingErrorKind {
    /// No module is registered under the requested identifier.
    NotRegistered,
    /// The module returned an error or panicked during evaluation.
    ModuleFault,
}

impl fmt::Display for MappingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRegistered => write!(f, "not_registered"),
            Self::ModuleFault => write!(f, "module_fault"),
        }
    }
}

/// A recorded jurisdiction-mapping failure.
///
/// Serialized as `{jurisdiction, kind, message}` alongside the successful
/// results so that a report can still be produced from the rest.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{jurisdiction}: {message}")]
pub struct MappingError {
    /// The requested jurisdiction identifier, verbatim.
    pub jurisdiction: String,
    /// Error category.
    pub kind: MappingErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl MappingError {
    /// The requested jurisdiction has no registered module.
    pub fn not_registered(jurisdiction: impl Into<String>) -> Self {
        Self {
            jurisdiction: jurisdiction.into(),
            kind: MappingErrorKind::NotRegistered,
            message: "not registered".to_string(),
        }
    }

    /// The module for the jurisdiction faulted during evaluation.
    pub fn module_fault(jurisdiction: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            jurisdiction: jurisdiction.into(),
            kind: MappingErrorKind::ModuleFault,
            message: message.into(),
        }
    }
}

impl From<(&str, RuleError)> for MappingError {
    fn from((jurisdiction, err): (&str, RuleError)) -> Self {
        Self::module_fault(jurisdiction, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_registered_shape() {
        let err = MappingError::not_registered("mars");
        assert_eq!(err.jurisdiction, "mars");
        assert_eq!(err.kind, MappingErrorKind::NotRegistered);
        assert_eq!(err.message, "not registered");
        assert_eq!(err.to_string(), "mars: not registered");
    }

    #[test]
    fn rule_error_converts_to_module_fault() {
        let rule = RuleError::Evaluation {
            module: "eu-gdpr".into(),
            reason: "table corrupted".into(),
        };
        let err = MappingError::from(("eu-gdpr", rule));
        assert_eq!(err.kind, MappingErrorKind::ModuleFault);
        assert!(err.message.contains("table corrupted"));
    }

    #[test]
    fn mapping_error_serializes_kind_snake_case() {
        let err = MappingError::module_fault("uk", "boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "module_fault");
        assert_eq!(json["jurisdiction"], "uk");
    }
}
