//! Credentialing readiness scoring and per-program eligibility classification.
//!
//! Both pipelines read the same immutable program rows: eligibility is decided per program,
//! readiness is scored per country aggregate.

pub mod context;
pub mod domain;
pub mod eligibility;
pub mod readiness;
pub mod reference;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use context::{ReviewContext, ViewerRole};
pub use domain::{
    AssessmentYear, CountryRecord, EligibilityStatus, Modality, ModalityId, Program,
    ReadinessTier, YesNoFlag,
};
pub use eligibility::{
    evaluate_program_eligibility, EligibilityEngine, EligibilityFinding, EligibilityOutcome,
    EligibilityThresholds,
};
pub use readiness::{
    CountryAggregate, ReadinessAssessment, ReadinessBreakdown, ReadinessGap, ReadinessGuidance,
    ReadinessScorer,
};
pub use reference::ModalityReference;
pub use router::credentialing_router;
