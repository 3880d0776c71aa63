use super::common::*;

use crate::workflows::credentialing::domain::{AssessmentYear, ReadinessTier, YesNoFlag};
use crate::workflows::credentialing::readiness::{
    CountryAggregate, ReadinessBreakdown, ReadinessGap, ReadinessGuidance, ReadinessScorer,
    INVESTMENT_FALLBACK, RECOMMENDATION_FALLBACK,
};

#[test]
fn tier_boundaries() {
    assert_eq!(ReadinessTier::from_score(100), ReadinessTier::High);
    assert_eq!(ReadinessTier::from_score(75), ReadinessTier::High);
    assert_eq!(ReadinessTier::from_score(74), ReadinessTier::Moderate);
    assert_eq!(ReadinessTier::from_score(50), ReadinessTier::Moderate);
    assert_eq!(ReadinessTier::from_score(49), ReadinessTier::Emerging);
    assert_eq!(ReadinessTier::from_score(0), ReadinessTier::Emerging);
    assert_eq!(ReadinessTier::from_score(75).label(), "High Readiness");
    assert_eq!(ReadinessTier::from_score(74).label(), "Moderate Readiness");
    assert_eq!(ReadinessTier::from_score(49).label(), "Emerging Readiness");
}

#[test]
fn totals_either_side_of_the_high_boundary() {
    let scorer = ReadinessScorer::new();

    let moderate = scorer.score(&aggregate(1, 1, 20, &[], true));
    assert_eq!(moderate.readiness_score, 74);
    assert_eq!(moderate.tier, ReadinessTier::Moderate);

    let high = scorer.score(&aggregate(1, 1, 21, &[], true));
    assert_eq!(high.readiness_score, 75);
    assert_eq!(high.tier, ReadinessTier::High);
}

#[test]
fn maturity_is_monotonic_and_saturates() {
    let scorer = ReadinessScorer::new();
    let mut previous = 0.0;
    for years in 0..=40 {
        let maturity = scorer.score(&aggregate(1, 0, years, &[], false)).maturity_score;
        assert!(maturity >= previous, "maturity dropped at {years} years");
        assert!(maturity <= 30.0);
        previous = maturity;
    }

    assert_eq!(scorer.score(&aggregate(1, 0, 25, &[], false)).maturity_score, 30.0);
    assert_eq!(scorer.score(&aggregate(1, 0, 60, &[], false)).maturity_score, 30.0);
}

#[test]
fn modality_breadth_saturates_after_three() {
    let scorer = ReadinessScorer::new();

    let single = scorer.score(&aggregate(1, 0, 0, &["Frontline"], false));
    assert!((single.modality_score - 20.0 / 3.0).abs() < 1e-9);

    let full = scorer.score(&aggregate(3, 0, 0, &["A", "B", "C"], false));
    assert_eq!(full.modality_score, 20.0);

    let beyond = scorer.score(&aggregate(4, 0, 0, &["A", "B", "C", "D"], false));
    assert_eq!(beyond.modality_score, 20.0);
}

#[test]
fn empty_aggregate_scores_zero_without_dividing() {
    let scorer = ReadinessScorer::new();
    let breakdown = scorer.score(&CountryAggregate::empty("Atlantis"));
    assert_eq!(breakdown, ReadinessBreakdown::zero());
    assert_eq!(breakdown.accreditation_score, 0.0);
    assert_eq!(breakdown.tier, ReadinessTier::Emerging);
}

#[test]
fn total_is_rounded_sum_within_bounds() {
    let scorer = ReadinessScorer::new();
    let cases = [
        aggregate(3, 2, 17, &["Advanced", "Frontline", "Intermediate"], true),
        aggregate(1, 0, 3, &["Frontline"], false),
        aggregate(7, 3, 11, &["Advanced", "Frontline"], true),
        aggregate(2, 2, 90, &["A", "B", "C", "D"], true),
    ];

    for case in &cases {
        let breakdown = scorer.score(case);
        assert!(breakdown.readiness_score <= 100);
        assert_eq!(
            f64::from(breakdown.readiness_score),
            breakdown.raw_total().round_ties_even()
        );
    }

    assert_eq!(scorer.score(&cases[3]).readiness_score, 100);
}

#[test]
fn aggregation_skips_unresolved_modalities_and_clamps_years() {
    let reference = reference();
    let mut advanced = program("A", "Testland", "ADVANCED");
    advanced.established = Some(2030);
    let mut unknown = program("B", "Testland", "RESIDENCY");
    unknown.accredited = YesNoFlag::No;
    unknown.tephinet_member = YesNoFlag::parse("yes ");
    let elsewhere = program("C", "Elsewhere", "FRONTLINE");

    let programs = [advanced, unknown, elsewhere];
    let aggregate =
        CountryAggregate::from_programs("Testland", &programs, &reference, ASSESSMENT_YEAR);

    assert_eq!(aggregate.num_programs, 2);
    assert_eq!(aggregate.num_accredited, 1);
    assert_eq!(aggregate.modality_count(), 1);
    assert!(aggregate.modalities.contains("Advanced"));
    assert!(aggregate.tephinet_member_present);
    assert_eq!(aggregate.years_active, 0, "future establishment clamps to zero");
}

#[test]
fn years_active_follows_the_injected_year() {
    let reference = reference();
    let mut oldest = program("A", "Testland", "ADVANCED");
    oldest.established = Some(2005);
    let mut newer = program("B", "Testland", "FRONTLINE");
    newer.established = Some(2019);
    let programs = [oldest, newer];

    let in_2025 =
        CountryAggregate::from_programs("Testland", &programs, &reference, AssessmentYear(2025));
    let in_2030 =
        CountryAggregate::from_programs("Testland", &programs, &reference, AssessmentYear(2030));

    assert_eq!(in_2025.years_active, 20);
    assert_eq!(in_2030.years_active, 25);
}

#[test]
fn guidance_follows_rule_table_order() {
    let assessment = ReadinessScorer::new().assess(&aggregate(1, 0, 3, &["Frontline"], false));

    assert_eq!(
        assessment.guidance.gaps,
        vec![
            ReadinessGap::AccreditationAbsent,
            ReadinessGap::SingleModality,
            ReadinessGap::EarlyMaturity,
            ReadinessGap::NetworkIsolation,
        ]
    );

    let recommendations = &assessment.guidance.recommendations;
    assert_eq!(recommendations.len(), 4);
    assert!(recommendations[0].starts_with("Expand accreditation"));
    assert!(recommendations[1].starts_with("Introduce additional training modalities"));
    assert!(recommendations[2].starts_with("Strengthen program maturity"));
    assert!(recommendations[3].starts_with("Strengthen regional integration"));

    let investments = &assessment.guidance.investment_priorities;
    assert_eq!(investments.len(), 4);
    assert!(investments[0].starts_with("Accreditation systems strengthening"));
    assert!(investments[1].starts_with("Workforce pipeline expansion"));
    assert!(investments[2].starts_with("Institutional capacity building"));
    assert!(investments[3].starts_with("Regional & global integration"));
}

#[test]
fn high_readiness_adds_leadership_guidance() {
    let assessment = ReadinessScorer::new().assess(&aggregate(
        3,
        2,
        17,
        &["Advanced", "Frontline", "Intermediate"],
        true,
    ));

    assert_eq!(assessment.breakdown.readiness_score, 80);
    assert_eq!(
        assessment.guidance.gaps,
        vec![
            ReadinessGap::AccreditationPartial,
            ReadinessGap::HighReadiness
        ]
    );
    assert!(assessment.guidance.investment_priorities[1].starts_with("Regional leadership"));
}

#[test]
fn empty_country_gets_investment_only_accreditation_and_modality_guidance() {
    let assessment = ReadinessScorer::new().assess(&CountryAggregate::empty("Atlantis"));

    assert_eq!(
        assessment.guidance.gaps,
        vec![
            ReadinessGap::NoProgramsRecorded,
            ReadinessGap::NoModality,
            ReadinessGap::EarlyMaturity,
            ReadinessGap::NetworkIsolation,
        ]
    );
    assert_eq!(assessment.guidance.recommendations.len(), 2);
    assert_eq!(assessment.guidance.investment_priorities.len(), 4);
    assert!(assessment.guidance.investment_priorities[0]
        .starts_with("Accreditation systems strengthening"));
    assert!(!assessment
        .guidance
        .recommendations
        .iter()
        .any(|message| message.starts_with("Expand accreditation")));
}

#[test]
fn empty_guidance_falls_back_to_constants() {
    let guidance = ReadinessGuidance::default();
    assert_eq!(
        guidance.recommendations_or_fallback(),
        vec![RECOMMENDATION_FALLBACK]
    );
    assert_eq!(
        guidance.investment_priorities_or_fallback(),
        vec![INVESTMENT_FALLBACK]
    );
}

#[test]
fn scoring_is_idempotent() {
    let scorer = ReadinessScorer::new();
    let input = aggregate(4, 1, 9, &["Advanced", "Frontline"], false);

    let first = serde_json::to_string(&scorer.assess(&input)).expect("serialize");
    let second = serde_json::to_string(&scorer.assess(&input)).expect("serialize");
    assert_eq!(first, second);
}
