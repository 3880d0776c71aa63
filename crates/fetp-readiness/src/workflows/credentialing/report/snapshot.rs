use super::super::context::ReviewContext;
use super::super::readiness::{
    ReadinessAssessment, ReadinessBreakdown, ReadinessScorer, ACCREDITATION_MAX, MATURITY_MAX,
    MODALITY_MAX, NETWORK_MAX,
};
use super::governance::GovernanceProfile;
use super::views::{CountryReadinessSnapshot, ScoreComponentView};
use crate::workflows::catalog::ProgramCatalog;

/// Executive snapshot for the country selected in `context`.
pub fn country_snapshot(
    catalog: &ProgramCatalog,
    context: &ReviewContext,
) -> CountryReadinessSnapshot {
    let country = context.country.trim();
    let known_country = catalog.knows_country(country);
    if !known_country {
        tracing::info!(country, "readiness requested for a country with no records");
    }

    let assessment = ReadinessScorer::new().assess_country(
        country,
        catalog.programs(),
        catalog.reference(),
        context.year,
    );
    let governance = GovernanceProfile::build(&assessment.aggregate, catalog.programs());

    let ReadinessAssessment {
        aggregate,
        breakdown,
        guidance,
    } = assessment;

    CountryReadinessSnapshot {
        country: country.to_string(),
        known_country,
        who_region: catalog.region_for_country(country).map(str::to_string),
        viewer_role: context.role.label(),
        viewer_mandate: context.role.mandate(),
        assessment_year: context.year,
        num_programs: aggregate.num_programs,
        num_accredited: aggregate.num_accredited,
        years_active: aggregate.years_active,
        modalities: aggregate.modalities.into_iter().collect(),
        readiness_score: breakdown.readiness_score,
        tier: breakdown.tier,
        tier_label: breakdown.tier.label(),
        breakdown: score_components(&breakdown),
        recommendations: owned(guidance.recommendations_or_fallback()),
        investment_priorities: owned(guidance.investment_priorities_or_fallback()),
        gaps: guidance.gaps,
        governance,
    }
}

pub(crate) fn score_components(breakdown: &ReadinessBreakdown) -> Vec<ScoreComponentView> {
    vec![
        component("Program maturity", breakdown.maturity_score, MATURITY_MAX),
        component(
            "Accreditation strength",
            breakdown.accreditation_score,
            ACCREDITATION_MAX,
        ),
        component("Modality breadth", breakdown.modality_score, MODALITY_MAX),
        component("Network integration", breakdown.network_score, NETWORK_MAX),
    ]
}

fn component(dimension: &'static str, score: f64, max: f64) -> ScoreComponentView {
    ScoreComponentView {
        dimension,
        score: (score * 10.0).round() / 10.0,
        max,
    }
}

fn owned(messages: Vec<&str>) -> Vec<String> {
    messages.into_iter().map(str::to_string).collect()
}
