use super::super::domain::{AssessmentYear, EligibilityStatus, ReadinessTier};
use super::super::readiness::ReadinessGap;
use super::governance::GovernanceProfile;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreComponentView {
    pub dimension: &'static str,
    /// Rounded to one decimal for display.
    pub score: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryReadinessSnapshot {
    pub country: String,
    pub known_country: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_region: Option<String>,
    pub viewer_role: &'static str,
    pub viewer_mandate: &'static str,
    pub assessment_year: AssessmentYear,
    pub num_programs: usize,
    pub num_accredited: usize,
    pub years_active: u32,
    pub modalities: Vec<String>,
    pub readiness_score: u8,
    pub tier: ReadinessTier,
    pub tier_label: &'static str,
    pub breakdown: Vec<ScoreComponentView>,
    pub gaps: Vec<ReadinessGap>,
    pub recommendations: Vec<String>,
    pub investment_priorities: Vec<String>,
    pub governance: GovernanceProfile,
}

/// One line of the eligibility table; renamed fields keep the published column headers.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityRow {
    pub program_name: String,
    pub country: String,
    pub modality: String,
    pub accredited: &'static str,
    #[serde(rename = "Eligibility Status")]
    pub status: &'static str,
    #[serde(rename = "Eligibility Reasons")]
    pub reasons: String,
    #[serde(rename = "Recommended Actions")]
    pub actions: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EligibilityCounts {
    pub eligible: usize,
    pub conditionally_eligible: usize,
    pub not_eligible: usize,
}

impl EligibilityCounts {
    pub(crate) fn record(&mut self, status: EligibilityStatus) {
        match status {
            EligibilityStatus::Eligible => self.eligible += 1,
            EligibilityStatus::ConditionallyEligible => self.conditionally_eligible += 1,
            EligibilityStatus::NotEligible => self.not_eligible += 1,
        }
    }

    pub fn get(&self, status: EligibilityStatus) -> usize {
        match status {
            EligibilityStatus::Eligible => self.eligible,
            EligibilityStatus::ConditionallyEligible => self.conditionally_eligible,
            EligibilityStatus::NotEligible => self.not_eligible,
        }
    }

    pub fn total(&self) -> usize {
        self.eligible + self.conditionally_eligible + self.not_eligible
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub counts: EligibilityCounts,
    pub rows: Vec<EligibilityRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalityProgramView {
    pub program_name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established: Option<i32>,
    pub accredited: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalityReadinessEntry {
    pub modality_id: String,
    pub name: String,
    pub duration_months: f64,
    pub field_based_percent: f64,
    /// Duration relative to the longest modality, 0-100.
    pub duration_score: f64,
    pub field_intensity_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub programs: Vec<ModalityProgramView>,
}
