use super::super::domain::Program;
use super::super::reference::ModalityReference;
use super::config::EligibilityThresholds;
use super::policy::{EligibilityFinding, LadderResult};

pub(crate) fn walk_ladder(
    program: &Program,
    reference: &ModalityReference,
    thresholds: &EligibilityThresholds,
) -> LadderResult {
    let Some(modality) = reference.resolve_optional(program.modality.as_ref()) else {
        return LadderResult::Disqualified(EligibilityFinding::UnrecognizedModality);
    };

    let mut findings = Vec::new();

    // Negated comparisons so a NaN value fails each threshold.
    if !(modality.duration_months >= thresholds.minimum_duration_months) {
        findings.push(EligibilityFinding::ShortTrainingDuration);
    }

    if !(modality.field_based_percent >= thresholds.minimum_field_percent) {
        return LadderResult::Disqualified(EligibilityFinding::InsufficientFieldTraining);
    } else if !(modality.field_based_percent >= thresholds.optimal_field_percent) {
        findings.push(EligibilityFinding::SuboptimalFieldExposure);
    }

    if !program.accredited.is_yes() {
        findings.push(EligibilityFinding::NotAccredited);
    }

    if program.accountable_host().is_none() {
        return LadderResult::Disqualified(EligibilityFinding::MissingHostInstitution);
    }

    LadderResult::Completed(findings)
}
