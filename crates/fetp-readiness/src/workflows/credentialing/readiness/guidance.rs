use super::aggregate::CountryAggregate;
use super::score::ReadinessBreakdown;
use serde::{Deserialize, Serialize};

pub const EARLY_MATURITY_YEARS: u32 = 5;

pub const RECOMMENDATION_FALLBACK: &str = "This country demonstrates strong readiness across all \
     assessed dimensions. Focus on sustainability, innovation, and regional leadership.";

pub const INVESTMENT_FALLBACK: &str = "This country is well-positioned for innovation-focused \
     investments, including digital epidemiology, research translation, and regional leadership.";

/// Condition behind a piece of country guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessGap {
    AccreditationAbsent,
    NoProgramsRecorded,
    AccreditationPartial,
    NoModality,
    SingleModality,
    PartialModalityLadder,
    EarlyMaturity,
    NetworkIsolation,
    HighReadiness,
}

struct GuidanceRule {
    gap: ReadinessGap,
    applies: fn(&CountryAggregate, &ReadinessBreakdown) -> bool,
    recommendation: Option<&'static str>,
    investment: Option<&'static str>,
}

// Order matters: accreditation, modality, maturity, network, then the high-readiness bonus.
static GUIDANCE_RULES: &[GuidanceRule] = &[
    GuidanceRule {
        gap: ReadinessGap::AccreditationAbsent,
        applies: accreditation_absent,
        recommendation: Some(
            "Expand accreditation: No accredited programs detected. Prioritize accreditation \
             pathways with regional or global bodies.",
        ),
        investment: Some(ACCREDITATION_SYSTEMS_INVESTMENT),
    },
    GuidanceRule {
        gap: ReadinessGap::NoProgramsRecorded,
        applies: no_programs_recorded,
        recommendation: None,
        investment: Some(ACCREDITATION_SYSTEMS_INVESTMENT),
    },
    GuidanceRule {
        gap: ReadinessGap::AccreditationPartial,
        applies: accreditation_partial,
        recommendation: Some(
            "Scale accreditation coverage: Some programs remain unaccredited. Target these for \
             phased accreditation.",
        ),
        investment: Some(
            "Accreditation scale-up: Fund phased accreditation of remaining programs.",
        ),
    },
    GuidanceRule {
        gap: ReadinessGap::NoModality,
        applies: no_modality,
        recommendation: None,
        investment: Some(WORKFORCE_PIPELINE_INVESTMENT),
    },
    GuidanceRule {
        gap: ReadinessGap::SingleModality,
        applies: single_modality,
        recommendation: Some(
            "Introduce additional training modalities: Expand beyond a single modality (e.g., \
             add Intermediate or Advanced levels).",
        ),
        investment: Some(WORKFORCE_PIPELINE_INVESTMENT),
    },
    GuidanceRule {
        gap: ReadinessGap::PartialModalityLadder,
        applies: partial_modality_ladder,
        recommendation: Some(
            "Complete modality ladder: Introduce the missing training tier to ensure workforce \
             progression.",
        ),
        investment: Some(WORKFORCE_PIPELINE_INVESTMENT),
    },
    GuidanceRule {
        gap: ReadinessGap::EarlyMaturity,
        applies: early_maturity,
        recommendation: Some(
            "Strengthen program maturity: Programs are relatively new. Focus on governance \
             structures, faculty development, and curriculum standardization.",
        ),
        investment: Some(
            "Institutional capacity building: Support faculty development, program governance, \
             and curriculum standardization.",
        ),
    },
    GuidanceRule {
        gap: ReadinessGap::NetworkIsolation,
        applies: network_isolation,
        recommendation: Some(
            "Strengthen regional integration: Country programs are not currently linked to \
             regional or global FETP networks (e.g., TEPHINET).",
        ),
        investment: Some(
            "Regional & global integration: Enable participation in networks such as TEPHINET \
             and GFEP initiatives.",
        ),
    },
    GuidanceRule {
        gap: ReadinessGap::HighReadiness,
        applies: high_readiness,
        recommendation: Some(
            "Advance to regional leadership: Position the country as a regional training hub \
             and mentorship center.",
        ),
        investment: Some(
            "Regional leadership & south-south cooperation: Fund the country to serve as a \
             regional training hub and mentorship center.",
        ),
    },
];

const ACCREDITATION_SYSTEMS_INVESTMENT: &str = "Accreditation systems strengthening: Support \
     accreditation fees, technical assistance, and quality assurance systems.";

const WORKFORCE_PIPELINE_INVESTMENT: &str = "Workforce pipeline expansion: Invest in Intermediate \
     and Advanced training modalities to strengthen career progression.";

fn accreditation_absent(aggregate: &CountryAggregate, _: &ReadinessBreakdown) -> bool {
    aggregate.num_programs > 0 && aggregate.num_accredited == 0
}

fn no_programs_recorded(aggregate: &CountryAggregate, _: &ReadinessBreakdown) -> bool {
    aggregate.num_programs == 0
}

fn accreditation_partial(aggregate: &CountryAggregate, _: &ReadinessBreakdown) -> bool {
    aggregate.num_accredited > 0 && aggregate.num_accredited < aggregate.num_programs
}

fn no_modality(aggregate: &CountryAggregate, _: &ReadinessBreakdown) -> bool {
    aggregate.modality_count() == 0
}

fn single_modality(aggregate: &CountryAggregate, _: &ReadinessBreakdown) -> bool {
    aggregate.modality_count() == 1
}

fn partial_modality_ladder(aggregate: &CountryAggregate, _: &ReadinessBreakdown) -> bool {
    aggregate.modality_count() == 2
}

fn early_maturity(aggregate: &CountryAggregate, _: &ReadinessBreakdown) -> bool {
    aggregate.years_active < EARLY_MATURITY_YEARS
}

fn network_isolation(_: &CountryAggregate, breakdown: &ReadinessBreakdown) -> bool {
    breakdown.network_score == 0.0
}

fn high_readiness(_: &CountryAggregate, breakdown: &ReadinessBreakdown) -> bool {
    breakdown.readiness_score >= 75
}

/// Country guidance emitted once per qualifying rule, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessGuidance {
    pub gaps: Vec<ReadinessGap>,
    pub recommendations: Vec<String>,
    pub investment_priorities: Vec<String>,
}

impl ReadinessGuidance {
    pub fn recommendations_or_fallback(&self) -> Vec<&str> {
        or_fallback(&self.recommendations, RECOMMENDATION_FALLBACK)
    }

    pub fn investment_priorities_or_fallback(&self) -> Vec<&str> {
        or_fallback(&self.investment_priorities, INVESTMENT_FALLBACK)
    }
}

fn or_fallback<'a>(messages: &'a [String], fallback: &'static str) -> Vec<&'a str> {
    if messages.is_empty() {
        vec![fallback]
    } else {
        messages.iter().map(String::as_str).collect()
    }
}

pub(crate) fn derive_guidance(
    aggregate: &CountryAggregate,
    breakdown: &ReadinessBreakdown,
) -> ReadinessGuidance {
    let mut guidance = ReadinessGuidance::default();

    for rule in GUIDANCE_RULES
        .iter()
        .filter(|rule| (rule.applies)(aggregate, breakdown))
    {
        guidance.gaps.push(rule.gap);
        if let Some(message) = rule.recommendation {
            guidance.recommendations.push(message.to_string());
        }
        if let Some(message) = rule.investment {
            guidance.investment_priorities.push(message.to_string());
        }
    }

    guidance
}
