use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfare_core::{
    context::{TravelInfo, TravelPreferences},
    search_filtered, Activity, Destination, Hotel, KindFilter, SearchResult,
};

use super::{error::AppError, state::AppState};

pub const PREFERENCES_SAVED: &str = "Travel preferences saved successfully";

pub async fn destinations_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Destination>> {
    Json(state.catalog.destinations().to_vec())
}

pub async fn hotels_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Hotel>> {
    Json(state.catalog.hotels().to_vec())
}

pub async fn activities_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Activity>> {
    Json(state.catalog.activities().to_vec())
}

#[derive(Debug, Serialize)]
pub struct PreferencesSaved {
    pub message: &'static str,
    pub data: TravelInfo,
}

/// Validate and echo back. Nothing is stored.
pub async fn preferences_handler(
    payload: Result<Json<TravelPreferences>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(prefs) = payload.map_err(|e| {
        debug!("Rejected travel preferences body: {e}");
        AppError::MissingFields
    })?;

    let data = prefs.validate()?;
    Ok((
        StatusCode::CREATED,
        Json(PreferencesSaved {
            message: PREFERENCES_SAVED,
            data,
        }),
    ))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    kind: String,
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchResult>> {
    let filter = KindFilter::from_tag(&params.kind);
    Json(search_filtered(&state.catalog, &params.q, &filter))
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
