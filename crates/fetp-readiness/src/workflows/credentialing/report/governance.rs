use super::super::domain::Program;
use super::super::readiness::{CountryAggregate, EARLY_MATURITY_YEARS};
use serde::Serialize;

const FULL_PIPELINE_MODALITIES: usize = 3;
const STRONG_QUALITY_ACCREDITED: usize = 2;

/// Governance and accreditation pathway panel for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GovernanceProfile {
    pub host_institutions: Vec<String>,
    pub total_programs: usize,
    pub accredited_programs: usize,
    pub years_active: u32,
    pub modalities_present: Vec<String>,
    pub networks: Vec<String>,
    pub coverage_assessment: &'static str,
    pub quality_maturity: &'static str,
    pub accreditation_next_step: &'static str,
    pub integration_level: &'static str,
    pub partner_entry_points: Vec<&'static str>,
}

impl GovernanceProfile {
    pub fn build<'a, I>(aggregate: &CountryAggregate, programs: I) -> Self
    where
        I: IntoIterator<Item = &'a Program>,
    {
        let mut host_institutions: Vec<String> = Vec::new();
        let mut networks: Vec<String> = Vec::new();

        for program in programs
            .into_iter()
            .filter(|program| program.country == aggregate.country)
        {
            if let Some(host) = program.accountable_host() {
                push_unique(&mut host_institutions, host);
            }
            if let Some(network) = program.network_name() {
                push_unique(&mut networks, network);
            }
        }

        let modalities_present: Vec<String> = aggregate.modalities.iter().cloned().collect();
        let accredited_programs = aggregate.num_accredited;
        let strong_quality = accredited_programs >= STRONG_QUALITY_ACCREDITED;

        let coverage_assessment = if modalities_present.len() >= FULL_PIPELINE_MODALITIES {
            "Full pipeline coverage"
        } else {
            "Partial training pipeline: expansion recommended"
        };

        let (quality_maturity, accreditation_next_step) = if strong_quality {
            (
                "Strong quality assurance systems in place",
                "Maintain accreditation and mentor regional programs",
            )
        } else {
            (
                "Accreditation strengthening required",
                "Initiate accreditation readiness assessments",
            )
        };

        let integration_level = if networks.is_empty() {
            "Limited integration: partnership support recommended"
        } else {
            "Well-integrated"
        };

        let mut partner_entry_points = Vec::new();
        if accredited_programs == 0 {
            partner_entry_points.push("Accreditation readiness and external review support");
        }
        if modalities_present.len() < FULL_PIPELINE_MODALITIES {
            partner_entry_points.push("Expansion of intermediate and advanced training modalities");
        }
        if aggregate.years_active < EARLY_MATURITY_YEARS {
            partner_entry_points.push("Institutional strengthening and faculty development");
        }
        if networks.is_empty() {
            partner_entry_points.push("Regional and global partnership integration");
        }

        Self {
            host_institutions,
            total_programs: aggregate.num_programs,
            accredited_programs,
            years_active: aggregate.years_active,
            modalities_present,
            networks,
            coverage_assessment,
            quality_maturity,
            accreditation_next_step,
            integration_level,
            partner_entry_points,
        }
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}
