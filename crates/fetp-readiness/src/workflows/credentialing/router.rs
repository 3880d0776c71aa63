use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::context::{ReviewContext, ViewerRole};
use super::domain::AssessmentYear;
use super::eligibility::EligibilityEngine;
use super::report::{country_snapshot, eligibility_table, modality_profile};
use crate::config::parse_assessment_year;
use crate::workflows::catalog::ProgramCatalog;

/// Shared, read-only state behind the credentialing endpoints.
#[derive(Debug, Clone)]
pub struct CredentialingState {
    pub catalog: Arc<ProgramCatalog>,
    pub engine: EligibilityEngine,
    pub default_year: AssessmentYear,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReadinessQuery {
    pub role: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EligibilityQuery {
    pub region: Option<String>,
}

/// Router builder exposing readiness, eligibility and modality endpoints.
pub fn credentialing_router(catalog: Arc<ProgramCatalog>, default_year: AssessmentYear) -> Router {
    let state = Arc::new(CredentialingState {
        catalog,
        engine: EligibilityEngine::default(),
        default_year,
    });

    Router::new()
        .route("/api/v1/countries", get(countries_handler))
        .route(
            "/api/v1/countries/:country/readiness",
            get(readiness_handler),
        )
        .route("/api/v1/eligibility", get(eligibility_handler))
        .route("/api/v1/modalities", get(modalities_handler))
        .with_state(state)
}

pub(crate) async fn countries_handler(State(state): State<Arc<CredentialingState>>) -> Response {
    let catalog = &state.catalog;
    let payload = json!({
        "countries": catalog.countries(),
        "regions": catalog.regions(),
        "default_country": catalog.default_country(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn readiness_handler(
    State(state): State<Arc<CredentialingState>>,
    Path(country): Path<String>,
    Query(query): Query<ReadinessQuery>,
) -> Response {
    // Read as text so malformed years get the same JSON error as out-of-range ones.
    let year = match query.year.as_deref() {
        None => state.default_year,
        Some(raw) => match parse_assessment_year(raw) {
            Ok(year) => year,
            Err(_) => {
                let payload = json!({
                    "error": format!("assessment year '{raw}' must be a year between 1900 and 9999"),
                });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        },
    };
    let role = query
        .role
        .as_deref()
        .map(ViewerRole::parse)
        .unwrap_or_default();

    let context = ReviewContext::new(country, role, year);
    let snapshot = country_snapshot(&state.catalog, &context);
    (StatusCode::OK, axum::Json(snapshot)).into_response()
}

pub(crate) async fn eligibility_handler(
    State(state): State<Arc<CredentialingState>>,
    Query(query): Query<EligibilityQuery>,
) -> Response {
    let table = eligibility_table(&state.catalog, &state.engine, query.region.as_deref());
    (StatusCode::OK, axum::Json(table)).into_response()
}

pub(crate) async fn modalities_handler(State(state): State<Arc<CredentialingState>>) -> Response {
    let profile = modality_profile(&state.catalog);
    (StatusCode::OK, axum::Json(profile)).into_response()
}
