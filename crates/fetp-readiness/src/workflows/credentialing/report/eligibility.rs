use super::super::domain::Program;
use super::super::eligibility::EligibilityEngine;
use super::views::{EligibilityCounts, EligibilityRow, EligibilityTable};
use crate::workflows::catalog::ProgramCatalog;

/// Classifies every program, or only those in `region` when one is given.
pub fn eligibility_table(
    catalog: &ProgramCatalog,
    engine: &EligibilityEngine,
    region: Option<&str>,
) -> EligibilityTable {
    let region = region.map(str::trim).filter(|region| !region.is_empty());
    let mut counts = EligibilityCounts::default();
    let mut rows = Vec::new();

    let programs: Vec<&Program> = match region {
        Some(region) => catalog.programs_in_region(region).collect(),
        None => catalog.programs().iter().collect(),
    };

    for program in programs {
        let outcome = engine.classify(program, catalog.reference());
        counts.record(outcome.status);

        rows.push(EligibilityRow {
            program_name: program.program_name.clone(),
            country: program.country.clone(),
            modality: program
                .modality
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            accredited: program.accredited.label(),
            status: outcome.status.label(),
            reasons: outcome.joined_reasons(),
            actions: outcome.joined_actions(),
        });
    }

    tracing::info!(
        region = region.unwrap_or("all"),
        programs = rows.len(),
        eligible = counts.eligible,
        conditionally_eligible = counts.conditionally_eligible,
        not_eligible = counts.not_eligible,
        "built eligibility table"
    );

    EligibilityTable {
        region: region.map(str::to_string),
        counts,
        rows,
    }
}
