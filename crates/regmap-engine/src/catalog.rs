//! # Verification Criteria
//!
//! "Definition of Done" checklists keyed by action identifier. Actions
//! without a catalog entry get a single criterion restating the title as a
//! completed-state check, so the list is never empty.

static CRITERIA: &[(&str, &[&str])] = &[
    (
        "cease-prohibited-practice",
        &[
            "The prohibited functionality is removed or disabled for the affected market",
            "Release notes and the technical file record the removal",
            "Product owners have signed off that no remaining feature relies on the practice",
        ],
    ),
    (
        "dpia",
        &[
            "A DPIA describing the processing, its necessity, and its proportionality is signed off by the DPO",
            "Every identified high risk has a documented mitigation or residual-risk acceptance",
            "The supervisory authority has been consulted where residual risk remains high",
        ],
    ),
    (
        "transparency-notice",
        &[
            "The notice is published where users encounter the AI system",
            "It names the purposes, legal basis, and retention of personal data",
            "It explains in plain language how automated outputs affect the user",
        ],
    ),
    (
        "human-review-process",
        &[
            "Affected people have a documented channel to request human review",
            "Reviewers have authority and information to change the outcome",
            "Review requests and outcomes are logged and monitored",
        ],
    ),
    (
        "bias-audit",
        &[
            "Selection rates and impact ratios are computed for each protected category",
            "Disparities beyond the agreed threshold have a mitigation plan",
            "The audit report is dated and retained with the model version it covers",
        ],
    ),
    (
        "ai-content-labeling",
        &[
            "Generated outputs carry a visible label where required",
            "Machine-readable provenance metadata is embedded in every output format",
            "Label detection is covered by automated tests",
        ],
    ),
    (
        "ai-interaction-disclosure",
        &[
            "Users are told they are interacting with AI at or before the first interaction",
            "The disclosure is shown in every channel where the system is available",
        ],
    ),
    (
        "conformity-assessment",
        &[
            "The applicable conformity assessment procedure is completed",
            "The EU declaration of conformity is signed",
            "CE marking is affixed to the system or its documentation",
        ],
    ),
    (
        "risk-management-system",
        &[
            "A risk register covers known and reasonably foreseeable risks",
            "Each risk has an owner, mitigation, and review date",
            "The process is re-run on every substantial modification",
        ],
    ),
    (
        "impact-assessment",
        &[
            "The impact assessment documents purpose, data, metrics, and known discrimination risks",
            "It is completed before deployment and scheduled for annual review",
        ],
    ),
    (
        "technical-documentation",
        &[
            "Every Annex IV section is filled in for the current model version",
            "The documentation is versioned alongside the model",
        ],
    ),
    (
        "algorithm-filing",
        &[
            "The filing is accepted by the regulator",
            "The filing number is displayed in the product",
        ],
    ),
    (
        "candidate-notice",
        &[
            "Candidates receive notice at least 10 business days before the tool is used",
            "The notice explains how to request an alternative process",
        ],
    ),
    (
        "ai-literacy",
        &[
            "Staff operating the system have completed role-appropriate AI training",
            "Training completion is recorded",
        ],
    ),
    (
        "model-documentation",
        &[
            "A model card covers intended use, limitations, and evaluation results",
            "The card is reviewed on every model release",
        ],
    ),
    (
        "incident-response-plan",
        &[
            "An AI incident runbook names owners and escalation paths",
            "The runbook has been exercised at least once",
        ],
    ),
    (
        "red-team-testing",
        &[
            "Adversarial testing covers misuse, jailbreaks, and harmful output",
            "Findings are triaged and tracked to closure",
        ],
    ),
];

/// Verification criteria for an action, never empty.
pub fn verification_criteria(id: &str, title: &str) -> Vec<String> {
    match CRITERIA.iter().find(|(key, _)| *key == id) {
        Some((_, criteria)) => criteria.iter().map(|c| c.to_string()).collect(),
        None => vec![fallback_criterion(id, title)],
    }
}

fn fallback_criterion(id: &str, title: &str) -> String {
    let subject = if title.trim().is_empty() { id } else { title.trim() };
    format!("{subject} is complete and evidence is filed")
}
