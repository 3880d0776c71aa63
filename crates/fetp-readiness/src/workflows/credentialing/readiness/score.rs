use super::super::domain::ReadinessTier;
use super::aggregate::CountryAggregate;
use serde::{Deserialize, Serialize};

pub const MATURITY_MAX: f64 = 30.0;
pub const MATURITY_SATURATION_YEARS: f64 = 25.0;
pub const ACCREDITATION_MAX: f64 = 30.0;
pub const MODALITY_MAX: f64 = 20.0;
/// Frontline, Intermediate and Advanced.
pub const CANONICAL_MODALITY_TIERS: f64 = 3.0;
pub const NETWORK_MAX: f64 = 20.0;

/// Four weighted sub-scores and their rounded total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessBreakdown {
    pub maturity_score: f64,
    pub accreditation_score: f64,
    pub modality_score: f64,
    pub network_score: f64,
    pub readiness_score: u8,
    pub tier: ReadinessTier,
}

impl ReadinessBreakdown {
    pub fn zero() -> Self {
        Self {
            maturity_score: 0.0,
            accreditation_score: 0.0,
            modality_score: 0.0,
            network_score: 0.0,
            readiness_score: 0,
            tier: ReadinessTier::Emerging,
        }
    }

    pub fn raw_total(&self) -> f64 {
        self.maturity_score + self.accreditation_score + self.modality_score + self.network_score
    }
}

pub(crate) fn score_aggregate(aggregate: &CountryAggregate) -> ReadinessBreakdown {
    let maturity_score =
        (f64::from(aggregate.years_active) / MATURITY_SATURATION_YEARS * MATURITY_MAX)
            .min(MATURITY_MAX);

    let accreditation_score = if aggregate.num_programs > 0 {
        aggregate.num_accredited as f64 / aggregate.num_programs as f64 * ACCREDITATION_MAX
    } else {
        0.0
    };

    let modality_score = (aggregate.modality_count() as f64 / CANONICAL_MODALITY_TIERS
        * MODALITY_MAX)
        .min(MODALITY_MAX);

    let network_score = if aggregate.tephinet_member_present {
        NETWORK_MAX
    } else {
        0.0
    };

    let total = maturity_score + accreditation_score + modality_score + network_score;
    // Halves round to even so a 74.5 total stays Moderate.
    let readiness_score = total.round_ties_even().clamp(0.0, 100.0) as u8;

    ReadinessBreakdown {
        maturity_score,
        accreditation_score,
        modality_score,
        network_score,
        readiness_score,
        tier: ReadinessTier::from_score(readiness_score),
    }
}
