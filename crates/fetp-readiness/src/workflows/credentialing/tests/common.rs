use axum::response::Response;
use serde_json::Value;

use crate::workflows::catalog::ProgramCatalog;
use crate::workflows::credentialing::domain::{
    AssessmentYear, CountryRecord, Modality, ModalityId, Program, YesNoFlag,
};
use crate::workflows::credentialing::readiness::CountryAggregate;
use crate::workflows::credentialing::reference::ModalityReference;

pub(super) const ASSESSMENT_YEAR: AssessmentYear = AssessmentYear(2025);

pub(super) fn modality(id: &str, name: &str, duration_months: f64, field: f64) -> Modality {
    Modality {
        modality_id: ModalityId::new(id),
        name: name.to_string(),
        duration_months,
        field_based_percent: field,
        description: None,
    }
}

pub(super) fn standard_modalities() -> Vec<Modality> {
    vec![
        modality("FRONTLINE", "Frontline", 3.0, 80.0),
        modality("INTERMEDIATE", "Intermediate", 9.0, 70.0),
        modality("ADVANCED", "Advanced", 24.0, 75.0),
    ]
}

pub(super) fn reference() -> ModalityReference {
    ModalityReference::from_modalities(standard_modalities())
}

/// Accredited, hosted program on the given modality; tweak fields per test.
pub(super) fn program(name: &str, country: &str, modality: &str) -> Program {
    Program {
        program_name: name.to_string(),
        country: country.to_string(),
        modality: Some(ModalityId::new(modality)),
        accredited: YesNoFlag::Yes,
        host_institution: Some("X".to_string()),
        established: None,
        network: None,
        tephinet_member: YesNoFlag::No,
        who_region: None,
        discipline: None,
    }
}

pub(super) fn aggregate(
    num_programs: usize,
    num_accredited: usize,
    years_active: u32,
    modalities: &[&str],
    tephinet_member_present: bool,
) -> CountryAggregate {
    CountryAggregate {
        country: "Testland".to_string(),
        num_programs,
        num_accredited,
        years_active,
        modalities: modalities.iter().map(|name| name.to_string()).collect(),
        tephinet_member_present,
    }
}

/// Seven programs across four countries covering every eligibility branch.
pub(super) fn catalog() -> ProgramCatalog {
    let mut nigeria_advanced = program("Nigeria FELTP", "Nigeria", "ADVANCED");
    nigeria_advanced.host_institution = Some("NCDC".to_string());
    nigeria_advanced.established = Some(2008);
    nigeria_advanced.network = Some("AFENET".to_string());
    nigeria_advanced.tephinet_member = YesNoFlag::Yes;
    nigeria_advanced.who_region = Some("AFRO".to_string());
    nigeria_advanced.discipline = Some("Human Health".to_string());

    let mut nigeria_intermediate = program("Nigeria Intermediate", "Nigeria", "Intermediate");
    nigeria_intermediate.accredited = YesNoFlag::No;
    nigeria_intermediate.host_institution = Some(" NCDC ".to_string());
    nigeria_intermediate.established = Some(2015);

    let mut nigeria_frontline = program("Nigeria Frontline", "Nigeria", "frontline");
    nigeria_frontline.host_institution = Some("University of Ibadan".to_string());
    nigeria_frontline.established = Some(2016);

    let mut ghana = program("Ghana Frontline", "Ghana", "FRONTLINE");
    ghana.accredited = YesNoFlag::No;
    ghana.host_institution = Some("GHS".to_string());
    ghana.established = Some(2022);

    let mut kenya_feltp = program("Kenya FELTP", "Kenya", "ADVANCED");
    kenya_feltp.host_institution = Some("   ".to_string());

    let mut kenya_residency = program("Kenya Residency", "Kenya", "RESIDENCY");
    kenya_residency.established = Some(2004);

    let mut india = program("India FETP", "India", "ADVANCED");
    india.host_institution = Some("NCDC India".to_string());
    india.established = Some(2001);
    india.tephinet_member = YesNoFlag::Yes;
    india.network = Some("TEPHINET".to_string());

    ProgramCatalog::new(
        vec![
            nigeria_advanced,
            nigeria_intermediate,
            nigeria_frontline,
            ghana,
            kenya_feltp,
            kenya_residency,
            india,
        ],
        standard_modalities(),
        vec![
            country("Nigeria", "AFRO"),
            country("Ghana", "AFRO"),
            country("Kenya", "AFRO"),
            country("India", "SEARO"),
        ],
    )
}

fn country(name: &str, region: &str) -> CountryRecord {
    CountryRecord {
        country: name.to_string(),
        who_region: region.to_string(),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
