use super::super::domain::EligibilityStatus;
use serde::{Deserialize, Serialize};

/// Individual gap detected while walking the eligibility ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityFinding {
    UnrecognizedModality,
    ShortTrainingDuration,
    InsufficientFieldTraining,
    SuboptimalFieldExposure,
    NotAccredited,
    MissingHostInstitution,
}

impl EligibilityFinding {
    pub const fn reason(self) -> &'static str {
        match self {
            Self::UnrecognizedModality => "Unrecognized/unknown training modality",
            Self::ShortTrainingDuration => {
                "Training duration below professional credentialing threshold"
            }
            Self::InsufficientFieldTraining => "Insufficient field-based training",
            Self::SuboptimalFieldExposure => "Field exposure below optimal threshold",
            Self::NotAccredited => "Program not formally accredited",
            Self::MissingHostInstitution => "No accountable host institution",
        }
    }

    pub const fn action(self) -> &'static str {
        match self {
            Self::UnrecognizedModality => "Standardize/clarify modality classification",
            Self::ShortTrainingDuration => "Upgrade to advanced-level training",
            Self::InsufficientFieldTraining => "Increase supervised field deployment",
            Self::SuboptimalFieldExposure => "Strengthen field mentorship/supervised placements",
            Self::NotAccredited => "Pursue FETP/FELTP accreditation",
            Self::MissingHostInstitution => "Establish institutional oversight",
        }
    }
}

/// Result of walking the ladder before a status is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LadderResult {
    /// A disqualifying rule fired; anything gathered before it is dropped.
    Disqualified(EligibilityFinding),
    Completed(Vec<EligibilityFinding>),
}

pub(crate) fn decide_status(result: LadderResult) -> (EligibilityStatus, Vec<EligibilityFinding>) {
    match result {
        LadderResult::Disqualified(finding) => (EligibilityStatus::NotEligible, vec![finding]),
        LadderResult::Completed(findings) if findings.is_empty() => {
            (EligibilityStatus::Eligible, findings)
        }
        LadderResult::Completed(findings) => (EligibilityStatus::ConditionallyEligible, findings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disqualification_yields_single_finding() {
        let (status, findings) = decide_status(LadderResult::Disqualified(
            EligibilityFinding::MissingHostInstitution,
        ));
        assert_eq!(status, EligibilityStatus::NotEligible);
        assert_eq!(findings, vec![EligibilityFinding::MissingHostInstitution]);
    }

    #[test]
    fn completed_ladder_without_findings_is_eligible() {
        let (status, findings) = decide_status(LadderResult::Completed(Vec::new()));
        assert_eq!(status, EligibilityStatus::Eligible);
        assert!(findings.is_empty());
    }

    #[test]
    fn any_accumulated_finding_is_conditional() {
        let (status, _) = decide_status(LadderResult::Completed(vec![
            EligibilityFinding::ShortTrainingDuration,
            EligibilityFinding::NotAccredited,
        ]));
        assert_eq!(status, EligibilityStatus::ConditionallyEligible);
    }
}
