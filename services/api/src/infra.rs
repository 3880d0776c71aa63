use fetp_readiness::config::AppConfig;
use fetp_readiness::error::AppError;
use fetp_readiness::workflows::catalog::{CatalogImporter, ProgramCatalog};
use fetp_readiness::workflows::credentialing::AssessmentYear;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog and scoring year resolved from config plus command-line overrides.
pub(crate) struct LoadedCatalog {
    pub(crate) catalog: ProgramCatalog,
    pub(crate) year: AssessmentYear,
}

pub(crate) fn load_catalog(
    data_dir: Option<PathBuf>,
    year: Option<AssessmentYear>,
) -> Result<LoadedCatalog, AppError> {
    let config = AppConfig::load()?;
    let data_dir = data_dir.unwrap_or_else(|| config.catalog.data_dir.clone());
    let catalog = CatalogImporter::from_dir(&data_dir)?;
    let year = year.unwrap_or_else(|| config.catalog.assessment_year());

    Ok(LoadedCatalog { catalog, year })
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn parse_year(raw: &str) -> Result<AssessmentYear, String> {
    fetp_readiness::config::parse_assessment_year(raw)
        .map_err(|_| format!("'{raw}' is not a year between 1900 and 9999"))
}
