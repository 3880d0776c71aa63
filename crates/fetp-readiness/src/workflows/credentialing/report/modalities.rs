use super::views::{ModalityProgramView, ModalityReadinessEntry};
use crate::workflows::catalog::ProgramCatalog;

/// Duration and field-intensity comparison across modalities, with implementing programs.
pub fn modality_profile(catalog: &ProgramCatalog) -> Vec<ModalityReadinessEntry> {
    let reference = catalog.reference();
    let max_duration = reference.max_duration_months();

    reference
        .iter()
        .map(|modality| {
            let duration_score = if max_duration > 0.0 {
                modality.duration_months / max_duration * 100.0
            } else {
                0.0
            };

            let mut programs: Vec<ModalityProgramView> = catalog
                .programs_for_modality(modality)
                .map(|program| ModalityProgramView {
                    program_name: program.program_name.clone(),
                    country: program.country.clone(),
                    discipline: program.discipline.clone(),
                    network: program.network_name().map(str::to_string),
                    established: program.established,
                    accredited: program.accredited.label(),
                })
                .collect();
            // Stable sort; unknown years go last.
            programs.sort_by_key(|program| program.established.unwrap_or(i32::MAX));

            ModalityReadinessEntry {
                modality_id: modality.modality_id.to_string(),
                name: modality.name.clone(),
                duration_months: modality.duration_months,
                field_based_percent: modality.field_based_percent,
                duration_score,
                field_intensity_score: modality.field_based_percent,
                description: modality.description.clone(),
                programs,
            }
        })
        .collect()
}
