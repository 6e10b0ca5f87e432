//! # Action Plan
//!
//! Partitions merged actions into three priority tiers and orders them.
//!
//! ## Ordering
//!
//! [`compare`] sorts by, in order:
//!
//! 1. effective priority, most severe first;
//! 2. deadline, earliest first, with a missing or unparsable deadline last;
//! 3. effort ordinal, smallest first;
//! 4. title, byte-wise ascending;
//! 5. identifier, so that distinct items never compare equal.
//!
//! Every key is a total order on a derived value, so the lexicographic
//! combination is a strict weak ordering and sorting is idempotent.
//!
//! Bucketing and flat sorting both use [`effective_priority`]: a declared
//! priority is kept as is, and only items without one are classified.

use std::cmp::Ordering;

use chrono::NaiveDate;
use regmap_core::{ActionItem, JurisdictionResult, Priority, ProductContext};
use serde::{Deserialize, Serialize};

use crate::best_practice::best_practice_actions;
use crate::classifier::effective_priority;
use crate::merge::collect_actions;

/// Three disjoint, ordered priority tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub critical: Vec<ActionItem>,
    pub important: Vec<ActionItem>,
    pub recommended: Vec<ActionItem>,
}

impl ActionPlan {
    /// Items in one tier.
    pub fn tier(&self, priority: Priority) -> &[ActionItem] {
        match priority {
            Priority::Critical => &self.critical,
            Priority::Important => &self.important,
            Priority::Recommended => &self.recommended,
        }
    }

    /// Every item, critical tier first.
    pub fn iter(&self) -> impl Iterator<Item = &ActionItem> {
        self.critical
            .iter()
            .chain(self.important.iter())
            .chain(self.recommended.iter())
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.important.len() + self.recommended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find an item by identifier.
    pub fn get(&self, id: &str) -> Option<&ActionItem> {
        self.iter().find(|item| item.id == id)
    }
}

/// Knobs for plan generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Evaluation date for deadline classification.
    pub as_of: NaiveDate,
    /// Add context-gated best-practice actions to the plan.
    pub include_best_practices: bool,
}

impl PlanOptions {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            include_best_practices: false,
        }
    }

    pub fn with_best_practices(mut self, include: bool) -> Self {
        self.include_best_practices = include;
        self
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Plan order of two items.
pub fn compare(a: &ActionItem, b: &ActionItem, as_of: NaiveDate) -> Ordering {
    effective_priority(b, as_of)
        .cmp(&effective_priority(a, as_of))
        .then_with(|| compare_within_tier(a, b))
}

fn compare_within_tier(a: &ActionItem, b: &ActionItem) -> Ordering {
    deadline_key(a)
        .cmp(&deadline_key(b))
        .then_with(|| a.effort_ordinal().cmp(&b.effort_ordinal()))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

fn deadline_key(item: &ActionItem) -> NaiveDate {
    item.deadline_date().unwrap_or(NaiveDate::MAX)
}

/// Sort an unbucketed list with the full comparator.
pub fn sort_actions(mut items: Vec<ActionItem>, as_of: NaiveDate) -> Vec<ActionItem> {
    items.sort_by(|a, b| compare(a, b, as_of));
    items
}

/// Partition items by effective priority and order each tier.
pub fn bucket(items: Vec<ActionItem>, as_of: NaiveDate) -> ActionPlan {
    let mut plan = ActionPlan::default();
    for item in items {
        match effective_priority(&item, as_of) {
            Priority::Critical => plan.critical.push(item),
            Priority::Important => plan.important.push(item),
            Priority::Recommended => plan.recommended.push(item),
        }
    }
    plan.critical.sort_by(compare_within_tier);
    plan.important.sort_by(compare_within_tier);
    plan.recommended.sort_by(compare_within_tier);
    plan
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Merge and bucket every action of the mapped jurisdictions.
///
/// Needs nothing beyond the results themselves.
pub fn generate_deterministic(results: &[JurisdictionResult], as_of: NaiveDate) -> ActionPlan {
    let plan = bucket(collect_actions(results), as_of);
    log_plan(&plan, results.len());
    plan
}

/// Deterministic plan, optionally extended with best-practice actions.
pub fn generate_plan(
    ctx: &ProductContext,
    results: &[JurisdictionResult],
    options: &PlanOptions,
) -> ActionPlan {
    let mut items = collect_actions(results);
    if options.include_best_practices {
        let extra = best_practice_actions(ctx, &items);
        tracing::debug!(count = extra.len(), "best-practice actions added");
        items.extend(extra);
    }
    let plan = bucket(items, options.as_of);
    log_plan(&plan, results.len());
    plan
}

fn log_plan(plan: &ActionPlan, jurisdictions: usize) {
    tracing::info!(
        jurisdictions,
        critical = plan.critical.len(),
        important = plan.important.len(),
        recommended = plan.recommended.len(),
        "action plan generated"
    );
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_priority() -> impl Strategy<Value = Option<Priority>> {
        prop::option::of(prop::sample::select(Priority::ALL.to_vec()))
    }

    fn arb_item() -> impl Strategy<Value = ActionItem> {
        (
            "[a-e]{1,3}",
            arb_priority(),
            prop::option::of(prop::sample::select(vec![
                "2025-03-01",
                "2025-09-01",
                "2027-01-01",
                "not a date",
            ])),
            prop::sample::select(vec!["1-2 weeks", "4-6 weeks", "6-12 weeks", "whenever"]),
            "[A-C]{0,2}",
            prop::sample::select(vec!["", "Article 5", "do not deploy", "voluntary"]),
        )
            .prop_map(|(id, priority, deadline, effort, title, text)| ActionItem {
                id,
                title,
                description: text.to_string(),
                priority,
                legal_basis: text.to_string(),
                jurisdictions: vec!["uk".into()],
                effort: effort.to_string(),
                deadline: deadline.map(str::to_string),
                verification_criteria: vec!["done".into()],
            })
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    proptest! {
        #[test]
        fn sorting_is_idempotent(items in prop::collection::vec(arb_item(), 0..20)) {
            let once = sort_actions(items, as_of());
            let twice = sort_actions(once.clone(), as_of());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn comparator_is_transitive(a in arb_item(), b in arb_item(), c in arb_item()) {
            let d = as_of();
            if compare(&a, &b, d) == Ordering::Less && compare(&b, &c, d) == Ordering::Less {
                prop_assert_eq!(compare(&a, &c, d), Ordering::Less);
            }
            prop_assert_eq!(compare(&a, &b, d), compare(&b, &a, d).reverse());
        }

        #[test]
        fn bucketing_partitions_input(items in prop::collection::vec(arb_item(), 0..20)) {
            let mut items = items;
            items.sort_by(|a, b| a.id.cmp(&b.id));
            items.dedup_by(|a, b| a.id == b.id);

            let plan = bucket(items.clone(), as_of());
            let mut out: Vec<String> = plan.iter().map(|i| i.id.clone()).collect();
            out.sort();
            let expected: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
            prop_assert_eq!(out, expected);

            for (tier, priority) in [
                (&plan.critical, Priority::Critical),
                (&plan.important, Priority::Important),
                (&plan.recommended, Priority::Recommended),
            ] {
                prop_assert!(tier.iter().all(|i| effective_priority(i, as_of()) == priority));
            }
        }

        #[test]
        fn bucketed_order_matches_flat_order(items in prop::collection::vec(arb_item(), 0..20)) {
            let plan = bucket(items.clone(), as_of());
            let flat = sort_actions(items, as_of());
            let bucketed: Vec<ActionItem> = plan.iter().cloned().collect();
            prop_assert_eq!(bucketed, flat);
        }
    }
}
