use super::common::*;

use crate::workflows::credentialing::domain::{EligibilityStatus, ModalityId, YesNoFlag};
use crate::workflows::credentialing::eligibility::{
    evaluate_program_eligibility, EligibilityEngine, EligibilityFinding, EligibilityThresholds,
};
use crate::workflows::credentialing::reference::ModalityReference;

fn field_reference(field_based_percent: f64) -> ModalityReference {
    ModalityReference::from_modalities([modality("TRACK", "Track", 24.0, field_based_percent)])
}

#[test]
fn unresolvable_modality_is_not_eligible_regardless_of_other_fields() {
    let reference = reference();
    let mut unknown = program("Unknown", "Testland", "RESIDENCY");
    unknown.host_institution = None;
    unknown.accredited = YesNoFlag::No;

    let (status, reasons, actions) = evaluate_program_eligibility(&unknown, &reference);
    assert_eq!(status, EligibilityStatus::NotEligible);
    assert_eq!(reasons, vec!["Unrecognized/unknown training modality"]);
    assert_eq!(actions, vec!["Standardize/clarify modality classification"]);

    let mut missing = program("Missing", "Testland", "ADVANCED");
    missing.modality = None;
    let (status, reasons, _) = evaluate_program_eligibility(&missing, &reference);
    assert_eq!(status, EligibilityStatus::NotEligible);
    assert_eq!(reasons, vec!["Unrecognized/unknown training modality"]);
}

#[test]
fn insufficient_field_training_discards_earlier_findings() {
    let reference = ModalityReference::from_modalities([modality("SHORT", "Short", 6.0, 55.0)]);
    let candidate = program("Short", "Testland", "SHORT");

    let (status, reasons, actions) = evaluate_program_eligibility(&candidate, &reference);
    assert_eq!(status, EligibilityStatus::NotEligible);
    assert_eq!(reasons, vec!["Insufficient field-based training"]);
    assert_eq!(actions, vec!["Increase supervised field deployment"]);
}

#[test]
fn non_finite_modality_values_fail_their_thresholds() {
    let candidate = program("Track", "Testland", "TRACK");

    let reference = ModalityReference::from_modalities([modality("TRACK", "Track", f64::NAN, f64::NAN)]);
    let (status, reasons, _) = evaluate_program_eligibility(&candidate, &reference);
    assert_eq!(status, EligibilityStatus::NotEligible);
    assert_eq!(reasons, vec!["Insufficient field-based training"]);

    let reference = ModalityReference::from_modalities([modality("TRACK", "Track", f64::NAN, 80.0)]);
    let (status, reasons, _) = evaluate_program_eligibility(&candidate, &reference);
    assert_eq!(status, EligibilityStatus::ConditionallyEligible);
    assert_eq!(reasons, vec!["Training duration below professional credentialing threshold"]);
}

#[test]
fn field_percent_fixtures_match_expected_verdicts() {
    let candidate = program("Track", "Testland", "TRACK");

    let (status, reasons, actions) =
        evaluate_program_eligibility(&candidate, &field_reference(55.0));
    assert_eq!(status, EligibilityStatus::NotEligible);
    assert_eq!(reasons, vec!["Insufficient field-based training"]);
    assert_eq!(actions, vec!["Increase supervised field deployment"]);

    let (status, reasons, actions) =
        evaluate_program_eligibility(&candidate, &field_reference(65.0));
    assert_eq!(status, EligibilityStatus::ConditionallyEligible);
    assert_eq!(reasons, vec!["Field exposure below optimal threshold"]);
    assert_eq!(
        actions,
        vec!["Strengthen field mentorship/supervised placements"]
    );

    let (status, reasons, actions) =
        evaluate_program_eligibility(&candidate, &field_reference(80.0));
    assert_eq!(status, EligibilityStatus::Eligible);
    assert!(reasons.is_empty());
    assert!(actions.is_empty());
}

#[test]
fn field_thresholds_are_inclusive_lower_bounds() {
    let candidate = program("Track", "Testland", "TRACK");

    let (status, _, _) = evaluate_program_eligibility(&candidate, &field_reference(60.0));
    assert_eq!(status, EligibilityStatus::ConditionallyEligible);

    let (status, _, _) = evaluate_program_eligibility(&candidate, &field_reference(70.0));
    assert_eq!(status, EligibilityStatus::Eligible);
}

#[test]
fn blank_host_overrides_accumulated_findings() {
    let reference = reference();
    for host in [None, Some(String::new()), Some("  \t".to_string())] {
        let mut candidate = program("Hostless", "Testland", "INTERMEDIATE");
        candidate.accredited = YesNoFlag::No;
        candidate.host_institution = host;

        let (status, reasons, actions) = evaluate_program_eligibility(&candidate, &reference);
        assert_eq!(status, EligibilityStatus::NotEligible);
        assert_eq!(reasons, vec!["No accountable host institution"]);
        assert_eq!(actions, vec!["Establish institutional oversight"]);
    }
}

#[test]
fn non_terminal_findings_accumulate_in_ladder_order() {
    let reference = ModalityReference::from_modalities([modality("MID", "Mid", 9.0, 65.0)]);
    let mut candidate = program("Mid", "Testland", "MID");
    candidate.accredited = YesNoFlag::parse(" NO ");

    let outcome = EligibilityEngine::default().classify(&candidate, &reference);
    assert_eq!(outcome.status, EligibilityStatus::ConditionallyEligible);
    assert_eq!(
        outcome.findings,
        vec![
            EligibilityFinding::ShortTrainingDuration,
            EligibilityFinding::SuboptimalFieldExposure,
            EligibilityFinding::NotAccredited,
        ]
    );
    assert_eq!(
        outcome.joined_reasons(),
        "Training duration below professional credentialing threshold; \
         Field exposure below optimal threshold; Program not formally accredited"
    );
    assert_eq!(
        outcome.joined_actions(),
        "Upgrade to advanced-level training; Strengthen field mentorship/supervised placements; \
         Pursue FETP/FELTP accreditation"
    );
}

#[test]
fn accredited_flag_is_case_and_whitespace_insensitive() {
    let reference = reference();
    for raw in ["Yes", "yes", " YES ", "yEs\t"] {
        let mut candidate = program("Flag", "Testland", "ADVANCED");
        candidate.accredited = YesNoFlag::parse(raw);
        let (status, _, _) = evaluate_program_eligibility(&candidate, &reference);
        assert_eq!(status, EligibilityStatus::Eligible, "flag {raw:?}");
    }
}

#[test]
fn custom_thresholds_shift_the_ladder() {
    let reference = reference();
    let engine = EligibilityEngine::new(EligibilityThresholds {
        minimum_duration_months: 2.0,
        ..EligibilityThresholds::default()
    });
    let candidate = program("Frontline", "Testland", "FRONTLINE");

    assert_eq!(
        engine.classify(&candidate, &reference).status,
        EligibilityStatus::Eligible
    );
    assert_eq!(
        EligibilityEngine::default()
            .classify(&candidate, &reference)
            .status,
        EligibilityStatus::ConditionallyEligible
    );
}

#[test]
fn classification_is_idempotent() {
    let reference = reference();
    let mut candidate = program("Repeat", "Testland", "intermediate");
    candidate.modality = Some(ModalityId::new(" Intermediate "));
    candidate.accredited = YesNoFlag::No;

    let first = evaluate_program_eligibility(&candidate, &reference);
    let second = evaluate_program_eligibility(&candidate, &reference);
    assert_eq!(first, second);
    assert_eq!(first.0, EligibilityStatus::ConditionallyEligible);
}
