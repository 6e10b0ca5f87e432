//! # Declarative Rule Rows
//!
//! Each jurisdiction describes its provisions, artifacts, actions, and
//! milestones as static rows gated by an `applies` predicate. The `select`
//! helpers evaluate rows in table order, so output order is the table order.

use regmap_core::{
    ActionRequirement, ActionSet, ArtifactRequirement, Milestone, Priority, ProductContext,
    Provision,
};

/// Predicate over the product context.
pub type Predicate = fn(&ProductContext) -> bool;

/// Predicate that always holds.
pub fn always(_: &ProductContext) -> bool {
    true
}

/// A provision row.
#[derive(Clone, Copy)]
pub struct ProvisionRule {
    pub id: &'static str,
    pub law: &'static str,
    pub citation: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub applies: Predicate,
}

/// An artifact row.
#[derive(Clone, Copy)]
pub struct ArtifactRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub legal_basis: &'static str,
    pub applies: Predicate,
}

/// Whether an action row is legally required or only recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obligation {
    Required,
    Recommended,
}

/// An action row.
#[derive(Clone, Copy)]
pub struct ActionRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub legal_basis: &'static str,
    pub effort: &'static str,
    pub deadline: Option<&'static str>,
    pub obligation: Obligation,
    pub applies: Predicate,
}

/// A milestone row.
#[derive(Clone, Copy)]
pub struct MilestoneRule {
    pub date: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub applies: Predicate,
}

pub fn select_provisions(rules: &[ProvisionRule], ctx: &ProductContext) -> Vec<Provision> {
    rules
        .iter()
        .filter(|r| (r.applies)(ctx))
        .map(|r| Provision {
            id: r.id.to_string(),
            law: r.law.to_string(),
            citation: r.citation.to_string(),
            title: r.title.to_string(),
            summary: r.summary.to_string(),
        })
        .collect()
}

pub fn select_artifacts(rules: &[ArtifactRule], ctx: &ProductContext) -> Vec<ArtifactRequirement> {
    rules
        .iter()
        .filter(|r| (r.applies)(ctx))
        .map(|r| ArtifactRequirement {
            id: r.id.to_string(),
            name: r.name.to_string(),
            description: r.description.to_string(),
            legal_basis: r.legal_basis.to_string(),
        })
        .collect()
}

/// Select applicable actions, scoping each to `jurisdiction`.
///
/// A row listed twice under the same id is emitted once (first row wins),
/// so a module never contributes duplicate identifiers.
pub fn select_actions(jurisdiction: &str, rules: &[ActionRule], ctx: &ProductContext) -> ActionSet {
    let mut set = ActionSet::default();
    let mut seen: Vec<&str> = Vec::new();
    for rule in rules.iter().filter(|r| (r.applies)(ctx)) {
        if seen.contains(&rule.id) {
            continue;
        }
        seen.push(rule.id);
        let action = ActionRequirement {
            id: rule.id.to_string(),
            title: rule.title.to_string(),
            description: rule.description.to_string(),
            priority: rule.priority,
            legal_basis: rule.legal_basis.to_string(),
            jurisdictions: vec![jurisdiction.to_string()],
            effort: rule.effort.to_string(),
            deadline: rule.deadline.map(str::to_string),
        };
        match rule.obligation {
            Obligation::Required => set.required.push(action),
            Obligation::Recommended => set.recommended.push(action),
        }
    }
    set
}

pub fn select_milestones(rules: &[MilestoneRule], ctx: &ProductContext) -> Vec<Milestone> {
    rules
        .iter()
        .filter(|r| (r.applies)(ctx))
        .map(|r| Milestone {
            date: r.date.to_string(),
            description: r.description.to_string(),
            citation: r.citation.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_core::{DataCategory, ProductCategory};

    static ACTIONS: &[ActionRule] = &[
        ActionRule {
            id: "dpia",
            title: "Conduct a DPIA",
            description: "Assess the processing",
            priority: Priority::Critical,
            legal_basis: "Article 35",
            effort: "2-4 weeks",
            deadline: None,
            obligation: Obligation::Required,
            applies: |ctx| ctx.processes(DataCategory::Health),
        },
        ActionRule {
            id: "dpia",
            title: "Conduct a DPIA (lighter)",
            description: "Assess the processing",
            priority: Priority::Important,
            legal_basis: "Article 35",
            effort: "1-2 weeks",
            deadline: None,
            obligation: Obligation::Required,
            applies: always,
        },
        ActionRule {
            id: "ai-policy",
            title: "Adopt an AI policy",
            description: "Write it down",
            priority: Priority::Recommended,
            legal_basis: "Guidance",
            effort: "1-2 weeks",
            deadline: Some("2026-01-01"),
            obligation: Obligation::Recommended,
            applies: always,
        },
    ];

    #[test]
    fn actions_are_split_and_scoped() {
        let ctx = ProductContext::new("x", ProductCategory::Other);
        let set = select_actions("uk", ACTIONS, &ctx);
        assert_eq!(set.required.len(), 1);
        assert_eq!(set.required[0].priority, Priority::Important);
        assert_eq!(set.recommended.len(), 1);
        assert_eq!(set.recommended[0].jurisdictions, vec!["uk".to_string()]);
        assert_eq!(set.recommended[0].deadline.as_deref(), Some("2026-01-01"));
    }

    #[test]
    fn first_applicable_row_wins_for_duplicate_ids() {
        let ctx = ProductContext::new("x", ProductCategory::Other)
            .with_data_categories([DataCategory::Health]);
        let set = select_actions("uk", ACTIONS, &ctx);
        assert_eq!(set.required.len(), 1);
        assert_eq!(set.required[0].priority, Priority::Critical);
    }

    #[test]
    fn provisions_follow_table_order() {
        static ROWS: &[ProvisionRule] = &[
            ProvisionRule {
                id: "a",
                law: "L",
                citation: "s.1",
                title: "A",
                summary: "",
                applies: always,
            },
            ProvisionRule {
                id: "b",
                law: "L",
                citation: "s.2",
                title: "B",
                summary: "",
                applies: |_| false,
            },
            ProvisionRule {
                id: "c",
                law: "M",
                citation: "s.3",
                title: "C",
                summary: "",
                applies: always,
            },
        ];
        let ctx = ProductContext::new("x", ProductCategory::Other);
        let ids: Vec<String> = select_provisions(ROWS, &ctx).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
