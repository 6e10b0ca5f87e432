//! # Action Aggregator
//!
//! Merges every action emitted by every mapped jurisdiction into one item
//! per action identifier.
//!
//! ## Merge rule
//!
//! For each identifier the accumulator keeps one *winning* contribution
//! and the union of every contributor's jurisdiction scope:
//!
//! 1. Higher priority weight wins the content (title, description, legal
//!    basis, effort, deadline, priority).
//! 2. Among equal weights the canonically smallest contribution wins,
//!    ordered by (sorted scope, title, description, legal basis, effort,
//!    deadline, declared scope).
//! 3. Scope is never dropped. The output scope lists the winner's declared
//!    jurisdictions first, then every other contributor's in ascending order.
//!
//! The winner is the maximum of a total order and the scope is a set union,
//! so the reduction is commutative and associative: any evaluation order,
//! or any split of the input merged with [`ActionAggregator::merge`], gives
//! the same items. Output is sorted by identifier.

use std::collections::{BTreeMap, BTreeSet};

use regmap_core::{ActionItem, ActionRequirement, JurisdictionResult};

use crate::catalog::verification_criteria;

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Accumulator {
    winner: ActionRequirement,
    scope: BTreeSet<String>,
}

impl Accumulator {
    fn new(req: &ActionRequirement) -> Self {
        Self {
            winner: req.clone(),
            scope: req.jurisdictions.iter().cloned().collect(),
        }
    }

    fn absorb(&mut self, incoming: &ActionRequirement) {
        self.scope.extend(incoming.jurisdictions.iter().cloned());
        if outranks(incoming, &self.winner) {
            tracing::trace!(
                action = %incoming.id,
                winner = ?incoming.jurisdictions,
                loser = ?self.winner.jurisdictions,
                priority = %incoming.priority,
                "merge conflict resolved"
            );
            self.winner = incoming.clone();
        }
    }

    fn combine(&mut self, other: Accumulator) {
        self.scope.extend(other.scope);
        if outranks(&other.winner, &self.winner) {
            self.winner = other.winner;
        }
    }

    fn finish(self) -> ActionRequirement {
        let Accumulator { mut winner, scope } = self;
        let mut jurisdictions: Vec<String> = Vec::with_capacity(scope.len());
        for j in &winner.jurisdictions {
            if !jurisdictions.contains(j) {
                jurisdictions.push(j.clone());
            }
        }
        for j in scope {
            if !jurisdictions.contains(&j) {
                jurisdictions.push(j);
            }
        }
        winner.jurisdictions = jurisdictions;
        winner
    }
}

/// `a` beats `b`: higher weight, or equal weight and a smaller tie key.
fn outranks(a: &ActionRequirement, b: &ActionRequirement) -> bool {
    match a.priority.weight().cmp(&b.priority.weight()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => tie_key(a) < tie_key(b),
    }
}

type TieKey<'a> = (
    Vec<&'a str>,
    &'a str,
    &'a str,
    &'a str,
    &'a str,
    Option<&'a str>,
    &'a [String],
);

fn tie_key(req: &ActionRequirement) -> TieKey<'_> {
    let mut scope: Vec<&str> = req.jurisdictions.iter().map(String::as_str).collect();
    scope.sort_unstable();
    scope.dedup();
    (
        scope,
        &req.title,
        &req.description,
        &req.legal_basis,
        &req.effort,
        req.deadline.as_deref(),
        &req.jurisdictions,
    )
}

// ---------------------------------------------------------------------------
// ActionAggregator
// ---------------------------------------------------------------------------

/// Order-independent merge of action requirements keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct ActionAggregator {
    actions: BTreeMap<String, Accumulator>,
}

impl ActionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one contribution.
    pub fn add(&mut self, req: &ActionRequirement) {
        match self.actions.get_mut(&req.id) {
            Some(acc) => acc.absorb(req),
            None => {
                self.actions.insert(req.id.clone(), Accumulator::new(req));
            }
        }
    }

    /// Add every required and recommended action of a jurisdiction result.
    pub fn add_result(&mut self, result: &JurisdictionResult) {
        for req in result.actions.iter() {
            self.add(req);
        }
    }

    /// Combine two partial aggregations.
    pub fn merge(mut self, other: ActionAggregator) -> Self {
        for (id, acc) in other.actions {
            match self.actions.get_mut(&id) {
                Some(existing) => existing.combine(acc),
                None => {
                    self.actions.insert(id, acc);
                }
            }
        }
        self
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Merged requirements sorted by identifier.
    pub fn into_requirements(self) -> Vec<ActionRequirement> {
        self.actions.into_values().map(Accumulator::finish).collect()
    }

    /// Merged plan items with verification criteria, sorted by identifier.
    pub fn into_items(self) -> Vec<ActionItem> {
        self.into_requirements()
            .into_iter()
            .map(|req| {
                let criteria = verification_criteria(&req.id, &req.title);
                ActionItem::from_requirement(req, criteria)
            })
            .collect()
    }
}

impl<'a> FromIterator<&'a ActionRequirement> for ActionAggregator {
    fn from_iter<I: IntoIterator<Item = &'a ActionRequirement>>(iter: I) -> Self {
        let mut aggregator = Self::new();
        for req in iter {
            aggregator.add(req);
        }
        aggregator
    }
}

/// Merge requirements into one requirement per identifier.
pub fn merge_requirements<'a, I>(reqs: I) -> Vec<ActionRequirement>
where
    I: IntoIterator<Item = &'a ActionRequirement>,
{
    reqs.into_iter().collect::<ActionAggregator>().into_requirements()
}

/// Merge every action of every result into plan items.
pub fn collect_actions(results: &[JurisdictionResult]) -> Vec<ActionItem> {
    let mut aggregator = ActionAggregator::new();
    for result in results {
        aggregator.add_result(result);
    }
    aggregator.into_items()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_core::Priority;

    fn req(id: &str, priority: Priority, jurisdictions: &[&str], title: &str) -> ActionRequirement {
        ActionRequirement {
            id: id.into(),
            title: title.into(),
            description: format!("{title} description"),
            priority,
            legal_basis: "Article 1".into(),
            jurisdictions: jurisdictions.iter().map(|j| j.to_string()).collect(),
            effort: "1-2 weeks".into(),
            deadline: None,
        }
    }

    #[test]
    fn higher_priority_wins_content_and_scope_is_unioned() {
        let critical = req("x", Priority::Critical, &["eu-gdpr"], "Critical title");
        let recommended = req("x", Priority::Recommended, &["uk"], "Recommended title");
        let forward = merge_requirements([&critical, &recommended]);
        let backward = merge_requirements([&recommended, &critical]);
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].title, "Critical title");
        assert_eq!(forward[0].priority, Priority::Critical);
        assert_eq!(forward[0].jurisdictions, vec!["eu-gdpr", "uk"]);
    }

    #[test]
    fn equal_priority_tie_is_order_independent() {
        let a = req("x", Priority::Important, &["uk"], "Alpha");
        let b = req("x", Priority::Important, &["eu-gdpr"], "Beta");
        let ab = merge_requirements([&a, &b]);
        let ba = merge_requirements([&b, &a]);
        assert_eq!(ab, ba);
        // "eu-gdpr" sorts before "uk", so b is canonically first.
        assert_eq!(ab[0].title, "Beta");
        assert_eq!(ab[0].jurisdictions, vec!["eu-gdpr", "uk"]);
    }

    #[test]
    fn scope_is_deduplicated_and_never_dropped() {
        let a = req("x", Priority::Critical, &["eu-ai-act", "eu-gdpr", "eu-ai-act"], "A");
        let b = req("x", Priority::Important, &["uk", "eu-gdpr"], "B");
        let c = req("x", Priority::Recommended, &["canada"], "C");
        let merged = merge_requirements([&c, &b, &a]);
        assert_eq!(
            merged[0].jurisdictions,
            vec!["eu-ai-act", "eu-gdpr", "canada", "uk"]
        );
    }

    #[test]
    fn distinct_ids_stay_distinct_and_sorted() {
        let merged = merge_requirements([
            &req("zeta", Priority::Important, &["uk"], "Z"),
            &req("alpha", Priority::Important, &["uk"], "A"),
        ]);
        let ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn split_aggregation_equals_single_pass() {
        let reqs = [
            req("x", Priority::Recommended, &["uk"], "R"),
            req("x", Priority::Critical, &["eu-gdpr"], "C"),
            req("y", Priority::Important, &["canada"], "Y"),
            req("x", Priority::Important, &["china"], "I"),
        ];
        let whole = reqs.iter().collect::<ActionAggregator>().into_requirements();
        let left: ActionAggregator = reqs[..2].iter().collect();
        let right: ActionAggregator = reqs[2..].iter().collect();
        assert_eq!(right.merge(left).into_requirements(), whole);
    }

    #[test]
    fn items_get_catalog_or_fallback_criteria() {
        let aggregator: ActionAggregator = [
            req("dpia", Priority::Critical, &["eu-gdpr"], "Conduct a DPIA"),
            req("custom", Priority::Important, &["uk"], "Do the thing"),
        ]
        .iter()
        .collect();
        let items = aggregator.into_items();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| !i.verification_criteria.is_empty()));
        assert_eq!(items[0].priority, Some(Priority::Important));
        assert_eq!(
            items[0].verification_criteria,
            vec!["Do the thing is complete and evidence is filed".to_string()]
        );
    }

    #[test]
    fn empty_input_gives_nothing() {
        assert!(ActionAggregator::new().is_empty());
        assert!(collect_actions(&[]).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use regmap_core::Priority;

    fn priority() -> impl Strategy<Value = Priority> {
        prop::sample::select(Priority::ALL.to_vec())
    }

    fn requirement() -> impl Strategy<Value = ActionRequirement> {
        (
            prop::sample::select(vec!["dpia", "bias-audit", "transparency-notice"]),
            priority(),
            prop::collection::vec(
                prop::sample::select(vec!["eu-gdpr", "uk", "canada", "china"]),
                1..3,
            ),
            prop::sample::select(vec!["Alpha", "Beta", "Gamma"]),
            prop::option::of(prop::sample::select(vec!["2025-06-01", "2026-12-01"])),
        )
            .prop_map(|(id, priority, scope, title, deadline)| ActionRequirement {
                id: id.to_string(),
                title: title.to_string(),
                description: String::new(),
                priority,
                legal_basis: "Article 1".to_string(),
                jurisdictions: scope.into_iter().map(str::to_string).collect(),
                effort: "2-4 weeks".to_string(),
                deadline: deadline.map(str::to_string),
            })
    }

    fn reqs_and_shuffle() -> impl Strategy<Value = (Vec<ActionRequirement>, Vec<ActionRequirement>)> {
        prop::collection::vec(requirement(), 0..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    }

    proptest! {
        /// Any permutation of the input merges to the same items.
        #[test]
        fn merge_is_permutation_invariant((original, shuffled) in reqs_and_shuffle()) {
            prop_assert_eq!(merge_requirements(&original), merge_requirements(&shuffled));
        }

        /// The merged priority is the maximum contributed priority.
        #[test]
        fn merged_priority_is_maximum(reqs in prop::collection::vec(requirement(), 1..12)) {
            for merged in merge_requirements(&reqs) {
                let max = reqs
                    .iter()
                    .filter(|r| r.id == merged.id)
                    .map(|r| r.priority)
                    .max();
                prop_assert_eq!(Some(merged.priority), max);
            }
        }

        /// Every contributed jurisdiction appears exactly once in the scope.
        #[test]
        fn scope_is_exact_union(reqs in prop::collection::vec(requirement(), 1..12)) {
            for merged in merge_requirements(&reqs) {
                let expected: BTreeSet<&str> = reqs
                    .iter()
                    .filter(|r| r.id == merged.id)
                    .flat_map(|r| r.jurisdictions.iter().map(String::as_str))
                    .collect();
                let actual: Vec<&str> = merged.jurisdictions.iter().map(String::as_str).collect();
                prop_assert_eq!(actual.len(), expected.len());
                prop_assert_eq!(actual.into_iter().collect::<BTreeSet<_>>(), expected);
            }
        }

        /// Merging two halves equals merging everything at once.
        #[test]
        fn merge_is_associative(
            reqs in prop::collection::vec(requirement(), 0..12),
            split in 0usize..12,
        ) {
            let split = split.min(reqs.len());
            let whole = reqs.iter().collect::<ActionAggregator>().into_requirements();
            let left: ActionAggregator = reqs[..split].iter().collect();
            let right: ActionAggregator = reqs[split..].iter().collect();
            prop_assert_eq!(left.merge(right).into_requirements(), whole);
        }
    }
}
