mod aggregate;
mod guidance;
mod score;

pub use aggregate::CountryAggregate;
pub use guidance::{
    ReadinessGap, ReadinessGuidance, EARLY_MATURITY_YEARS, INVESTMENT_FALLBACK,
    RECOMMENDATION_FALLBACK,
};
pub use score::{
    ReadinessBreakdown, ACCREDITATION_MAX, CANONICAL_MODALITY_TIERS, MATURITY_MAX,
    MATURITY_SATURATION_YEARS, MODALITY_MAX, NETWORK_MAX,
};

use super::domain::{AssessmentYear, Program};
use super::reference::ModalityReference;
use serde::{Deserialize, Serialize};

/// Scores one country's aggregate. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessScorer;

impl ReadinessScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, aggregate: &CountryAggregate) -> ReadinessBreakdown {
        if aggregate.is_empty() {
            return ReadinessBreakdown::zero();
        }
        score::score_aggregate(aggregate)
    }

    pub fn assess(&self, aggregate: &CountryAggregate) -> ReadinessAssessment {
        let breakdown = self.score(aggregate);
        let guidance = guidance::derive_guidance(aggregate, &breakdown);

        tracing::debug!(
            country = %aggregate.country,
            programs = aggregate.num_programs,
            readiness_score = breakdown.readiness_score,
            tier = breakdown.tier.label(),
            "scored country readiness"
        );

        ReadinessAssessment {
            aggregate: aggregate.clone(),
            breakdown,
            guidance,
        }
    }

    /// Aggregates the country's rows and assesses them in one step.
    pub fn assess_country<'a, I>(
        &self,
        country: &str,
        programs: I,
        reference: &ModalityReference,
        year: AssessmentYear,
    ) -> ReadinessAssessment
    where
        I: IntoIterator<Item = &'a Program>,
    {
        let aggregate = CountryAggregate::from_programs(country, programs, reference, year);
        self.assess(&aggregate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessAssessment {
    pub aggregate: CountryAggregate,
    pub breakdown: ReadinessBreakdown,
    pub guidance: ReadinessGuidance,
}
