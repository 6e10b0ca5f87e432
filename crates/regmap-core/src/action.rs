//! # Actions
//!
//! An [`ActionRequirement`] is one jurisdiction's recommendation before
//! merging. An [`ActionItem`] is the merged, plan-ready form.
//!
//! Action identifiers are global: the same identifier emitted by two
//! jurisdictions denotes the same real-world action, and the merge relies on
//! that.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::priority::Priority;

/// Ordinal used for effort strings missing from the table.
pub const DEFAULT_EFFORT_ORDINAL: u8 = 3;

/// Effort estimates in ascending order of size.
const EFFORT_TABLE: &[(&str, u8)] = &[
    ("1-2 weeks", 1),
    ("2-4 weeks", 2),
    ("3-4 weeks", 3),
    ("4-6 weeks", 4),
    ("4-8 weeks", 5),
    ("6-12 weeks", 6),
];

/// Map an effort estimate to its sort ordinal.
///
/// Matching ignores surrounding whitespace and ASCII case. Unrecognised
/// strings sort at [`DEFAULT_EFFORT_ORDINAL`].
pub fn effort_ordinal(effort: &str) -> u8 {
    let normalized = effort.trim().to_ascii_lowercase();
    EFFORT_TABLE
        .iter()
        .find(|(label, _)| *label == normalized)
        .map(|(_, ordinal)| *ordinal)
        .unwrap_or(DEFAULT_EFFORT_ORDINAL)
}

/// The effort string is one of the tabulated estimates.
pub fn is_known_effort(effort: &str) -> bool {
    let normalized = effort.trim().to_ascii_lowercase();
    EFFORT_TABLE.iter().any(|(label, _)| *label == normalized)
}

/// Parse a deadline into a calendar date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (the date part is used).
/// Anything else is `None`; an unusable deadline means "no deadline",
/// never an error.
pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

// ---------------------------------------------------------------------------
// ActionRequirement
// ---------------------------------------------------------------------------

/// A single action as emitted by one jurisdiction's rule module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequirement {
    /// Globally meaningful action identifier.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Priority declared by the emitting jurisdiction.
    pub priority: Priority,
    /// Citation of the provision that creates the obligation.
    pub legal_basis: String,
    /// Jurisdictions this action satisfies (one or more).
    pub jurisdictions: Vec<String>,
    /// Effort estimate, e.g. "2-4 weeks".
    pub effort: String,
    /// Deadline as `YYYY-MM-DD`, if the obligation has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Actions produced by one module, split by obligation strength.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionSet {
    /// Legally required actions.
    pub required: Vec<ActionRequirement>,
    /// Recommended actions.
    pub recommended: Vec<ActionRequirement>,
}

impl ActionSet {
    /// Iterate required actions, then recommended ones.
    pub fn iter(&self) -> impl Iterator<Item = &ActionRequirement> {
        self.required.iter().chain(self.recommended.iter())
    }

    /// Total number of actions.
    pub fn len(&self) -> usize {
        self.required.len() + self.recommended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.recommended.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ActionItem
// ---------------------------------------------------------------------------

/// A merged, plan-ready action.
///
/// `priority` is `Some` when a jurisdiction declared it; such a priority is
/// authoritative. Items without a declared priority (best-practice catalog
/// entries, provider output) get one derived from their content when the
/// plan is bucketed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Identifier, unique within a plan.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Declared priority, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub legal_basis: String,
    /// Deduplicated union of every contributing jurisdiction.
    pub jurisdictions: Vec<String>,
    pub effort: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// "Definition of Done" checklist. Never empty.
    pub verification_criteria: Vec<String>,
}

impl ActionItem {
    /// Build a plan item from a (merged) requirement.
    pub fn from_requirement(req: ActionRequirement, verification_criteria: Vec<String>) -> Self {
        Self {
            id: req.id,
            title: req.title,
            description: req.description,
            priority: Some(req.priority),
            legal_basis: req.legal_basis,
            jurisdictions: req.jurisdictions,
            effort: req.effort,
            deadline: req.deadline,
            verification_criteria,
        }
    }

    /// Parsed deadline, `None` when absent or unparsable.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline.as_deref().and_then(parse_deadline)
    }

    /// Effort ordinal for sorting.
    pub fn effort_ordinal(&self) -> u8 {
        effort_ordinal(&self.effort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effort_table_is_ascending() {
        assert_eq!(effort_ordinal("1-2 weeks"), 1);
        assert_eq!(effort_ordinal("2-4 weeks"), 2);
        assert_eq!(effort_ordinal("4-6 weeks"), 4);
        assert_eq!(effort_ordinal("6-12 weeks"), 6);
    }

    #[test]
    fn effort_matching_is_lenient_on_case_and_whitespace() {
        assert_eq!(effort_ordinal("  1-2 Weeks "), 1);
    }

    #[test]
    fn unknown_effort_defaults_to_midpoint() {
        assert_eq!(effort_ordinal("a quarter"), DEFAULT_EFFORT_ORDINAL);
        assert_eq!(effort_ordinal(""), DEFAULT_EFFORT_ORDINAL);
        assert!(!is_known_effort("a quarter"));
        assert!(is_known_effort("3-4 weeks"));
    }

    #[test]
    fn parse_deadline_accepts_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();
        assert_eq!(parse_deadline("2026-08-02"), Some(expected));
        assert_eq!(parse_deadline("2026-08-02T00:00:00Z"), Some(expected));
    }

    #[test]
    fn parse_deadline_rejects_garbage() {
        assert_eq!(parse_deadline("next summer"), None);
        assert_eq!(parse_deadline("2026-13-45"), None);
        assert_eq!(parse_deadline(""), None);
    }

    #[test]
    fn action_set_iterates_required_first() {
        let make = |id: &str, priority| ActionRequirement {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            priority,
            legal_basis: String::new(),
            jurisdictions: vec!["uk".into()],
            effort: "1-2 weeks".into(),
            deadline: None,
        };
        let set = ActionSet {
            required: vec![make("a", Priority::Critical)],
            recommended: vec![make("b", Priority::Recommended)],
        };
        let ids: Vec<&str> = set.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn item_from_requirement_keeps_declared_priority() {
        let req = ActionRequirement {
            id: "dpia".into(),
            title: "Conduct a DPIA".into(),
            description: "Assess high-risk processing".into(),
            priority: Priority::Important,
            legal_basis: "GDPR Article 35".into(),
            jurisdictions: vec!["eu-gdpr".into()],
            effort: "2-4 weeks".into(),
            deadline: Some("not a date".into()),
        };
        let item = ActionItem::from_requirement(req, vec!["done".into()]);
        assert_eq!(item.priority, Some(Priority::Important));
        assert_eq!(item.deadline_date(), None);
        assert_eq!(item.effort_ordinal(), 2);
    }
}
