//! # Priority Classifier
//!
//! Derives a priority from an action's content alone. Used for items that
//! carry no declared priority (best-practice catalog entries, provider
//! output). A declared priority is authoritative and always wins; see
//! [`effective_priority`].
//!
//! Decision order, first match wins:
//!
//! 1. Prohibition language in title or description: critical.
//! 2. A parsable deadline: critical within [`CRITICAL_WINDOW_DAYS`] of the
//!    evaluation date (overdue included), important otherwise.
//! 3. A statutory citation in the legal basis: important, or recommended
//!    when the description signals a voluntary measure.
//! 4. Recommended.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use regmap_core::{ActionItem, Priority};

/// Deadlines this many days out, or fewer, are critical.
pub const CRITICAL_WINDOW_DAYS: i64 = 180;

static PROHIBITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)prohibited|cannot be placed on|do not deploy").expect("invalid prohibition pattern")
});

static VOLUNTARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)voluntary|recommended|best practice").expect("invalid voluntary pattern")
});

static STATUTORY_CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:article|section|regulation|act|directive|law|gdpr|ccpa|cpra|pipeda|pdpa|lgpd|pipl|hipaa|dpa)\b|\bart\.|§",
    )
    .expect("invalid citation pattern")
});

fn matches(pattern: &Lazy<Regex>, text: &str) -> bool {
    pattern.is_match(text)
}

/// Content-only priority of an action.
pub fn classify(item: &ActionItem, as_of: NaiveDate) -> Priority {
    if matches(&PROHIBITION, &item.title) || matches(&PROHIBITION, &item.description) {
        return Priority::Critical;
    }
    if let Some(deadline) = item.deadline_date() {
        return if deadline.signed_duration_since(as_of).num_days() <= CRITICAL_WINDOW_DAYS {
            Priority::Critical
        } else {
            Priority::Important
        };
    }
    if matches(&STATUTORY_CITATION, &item.legal_basis) {
        return if matches(&VOLUNTARY, &item.description) {
            Priority::Recommended
        } else {
            Priority::Important
        };
    }
    Priority::Recommended
}

/// Declared priority if present, else the classified one.
pub fn effective_priority(item: &ActionItem, as_of: NaiveDate) -> Priority {
    item.priority.unwrap_or_else(|| classify(item, as_of))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Classification is total and deterministic over arbitrary text.
        #[test]
        fn classify_is_total(
            title in ".{0,40}",
            description in ".{0,80}",
            legal_basis in ".{0,40}",
            deadline in prop::option::of(".{0,12}"),
            offset in -2000i64..2000,
        ) {
            let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(offset);
            let item = ActionItem {
                id: "p".into(),
                title,
                description,
                priority: None,
                legal_basis,
                jurisdictions: Vec::new(),
                effort: String::new(),
                deadline,
                verification_criteria: vec!["done".into()],
            };
            let first = classify(&item, as_of);
            prop_assert!(Priority::ALL.contains(&first));
            prop_assert_eq!(first, classify(&item, as_of));
        }
    }
}
