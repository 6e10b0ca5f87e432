//! # Built-in Jurisdictions
//!
//! One module per jurisdiction. Each is a unit struct implementing
//! [`RuleModule`] over static rule tables. Action identifiers are shared
//! where two regimes require the same real-world work, so the engine can
//! merge them:
//!
//! | Action id | Emitted by |
//! |-----------|------------|
//! | `transparency-notice` | eu-gdpr, uk, canada, singapore, china |
//! | `dpia` | eu-gdpr, uk, china |
//! | `human-review-process` | eu-gdpr, uk, us-colorado, canada |
//! | `bias-audit` | eu-ai-act, us-colorado, us-nyc |
//! | `ai-content-labeling` | eu-ai-act, china |
//! | `ai-interaction-disclosure` | eu-ai-act, us-colorado |

use std::sync::Arc;

use crate::module::RuleModule;

pub mod canada;
pub mod china;
pub mod eu_ai_act;
pub mod eu_gdpr;
pub mod singapore;
pub mod uk;
pub mod us_colorado;
pub mod us_nyc;

/// A built-in module with its registry metadata.
pub struct Builtin {
    pub module: Arc<dyn RuleModule>,
    pub region: &'static str,
    pub description: &'static str,
}

/// Every built-in module.
pub fn builtins() -> Vec<Builtin> {
    vec![
        Builtin {
            module: Arc::new(eu_ai_act::EuAiAct),
            region: eu_ai_act::REGION,
            description: eu_ai_act::DESCRIPTION,
        },
        Builtin {
            module: Arc::new(eu_gdpr::EuGdpr),
            region: eu_gdpr::REGION,
            description: eu_gdpr::DESCRIPTION,
        },
        Builtin {
            module: Arc::new(uk::Uk),
            region: uk::REGION,
            description: uk::DESCRIPTION,
        },
        Builtin {
            module: Arc::new(us_colorado::UsColorado),
            region: us_colorado::REGION,
            description: us_colorado::DESCRIPTION,
        },
        Builtin {
            module: Arc::new(us_nyc::UsNyc),
            region: us_nyc::REGION,
            description: us_nyc::DESCRIPTION,
        },
        Builtin {
            module: Arc::new(canada::Canada),
            region: canada::REGION,
            description: canada::DESCRIPTION,
        },
        Builtin {
            module: Arc::new(singapore::Singapore),
            region: singapore::REGION,
            description: singapore::DESCRIPTION,
        },
        Builtin {
            module: Arc::new(china::China),
            region: china::REGION,
            description: china::DESCRIPTION,
        },
    ]
}

/// Table sanity checks shared by every module's tests.
#[cfg(test)]
pub(crate) fn assert_well_formed(
    actions: &[crate::table::ActionRule],
    milestones: &[crate::table::MilestoneRule],
) {
    for rule in actions {
        assert!(
            regmap_core::is_known_effort(rule.effort),
            "{}: unknown effort {:?}",
            rule.id,
            rule.effort
        );
        if let Some(deadline) = rule.deadline {
            assert!(
                regmap_core::parse_deadline(deadline).is_some(),
                "{}: bad deadline {deadline}",
                rule.id
            );
        }
        assert!(!rule.legal_basis.is_empty(), "{}: missing legal basis", rule.id);
    }
    for milestone in milestones {
        assert!(
            regmap_core::parse_deadline(milestone.date).is_some(),
            "bad milestone date {}",
            milestone.date
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_core::{ProductCategory, ProductContext};

    #[test]
    fn builtin_ids_are_unique() {
        let mut ids: Vec<String> = builtins().iter().map(|b| b.module.id().to_string()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn every_builtin_evaluates_a_bare_context() {
        let ctx = ProductContext::new("Internal dashboard", ProductCategory::Analytics);
        for builtin in builtins() {
            let m = &builtin.module;
            assert!(m.applicable_provisions(&ctx).is_ok(), "{}", m.id());
            assert!(m.required_artifacts(&ctx).is_ok(), "{}", m.id());
            assert!(m.required_actions(&ctx).is_ok(), "{}", m.id());
            assert!(m.risk_level(&ctx).is_ok(), "{}", m.id());
            assert!(m.timeline(&ctx).is_ok(), "{}", m.id());
        }
    }

    #[test]
    fn actions_are_scoped_to_their_module() {
        let ctx = ProductContext::new("Chat assistant", ProductCategory::Chatbot)
            .with_data_categories([regmap_core::DataCategory::Personal]);
        for builtin in builtins() {
            let id = builtin.module.id().to_string();
            for action in builtin.module.required_actions(&ctx).unwrap().iter() {
                assert_eq!(action.jurisdictions, vec![id.clone()]);
            }
        }
    }
}
