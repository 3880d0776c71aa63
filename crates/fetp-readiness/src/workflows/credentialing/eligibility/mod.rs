mod config;
mod policy;
mod rules;

pub use config::EligibilityThresholds;
pub use policy::EligibilityFinding;

use super::domain::{EligibilityStatus, Program};
use super::reference::ModalityReference;
use policy::decide_status;
use serde::{Deserialize, Serialize};

/// Stateless classifier that walks each program through the credentialing ladder.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    thresholds: EligibilityThresholds,
}

impl EligibilityEngine {
    pub fn new(thresholds: EligibilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &EligibilityThresholds {
        &self.thresholds
    }

    pub fn classify(&self, program: &Program, reference: &ModalityReference) -> EligibilityOutcome {
        let ladder = rules::walk_ladder(program, reference, &self.thresholds);
        let (status, findings) = decide_status(ladder);

        tracing::debug!(
            program = %program.program_name,
            country = %program.country,
            status = status.label(),
            findings = findings.len(),
            "classified program eligibility"
        );

        EligibilityOutcome { status, findings }
    }
}

/// Verdict for one program with the findings that produced it, in ladder order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub status: EligibilityStatus,
    pub findings: Vec<EligibilityFinding>,
}

impl EligibilityOutcome {
    pub fn reasons(&self) -> Vec<String> {
        self.findings
            .iter()
            .map(|finding| finding.reason().to_string())
            .collect()
    }

    pub fn actions(&self) -> Vec<String> {
        self.findings
            .iter()
            .map(|finding| finding.action().to_string())
            .collect()
    }

    pub fn joined_reasons(&self) -> String {
        join_messages(self.findings.iter().map(|finding| finding.reason()))
    }

    pub fn joined_actions(&self) -> String {
        join_messages(self.findings.iter().map(|finding| finding.action()))
    }

    /// `(status, reasons, actions)` triple consumed by table renderers.
    pub fn into_parts(self) -> (EligibilityStatus, Vec<String>, Vec<String>) {
        let reasons = self.reasons();
        let actions = self.actions();
        (self.status, reasons, actions)
    }
}

fn join_messages<'a>(messages: impl Iterator<Item = &'a str>) -> String {
    messages.collect::<Vec<_>>().join("; ")
}

/// Classifies one program with the default thresholds.
pub fn evaluate_program_eligibility(
    program: &Program,
    reference: &ModalityReference,
) -> (EligibilityStatus, Vec<String>, Vec<String>) {
    EligibilityEngine::default()
        .classify(program, reference)
        .into_parts()
}
