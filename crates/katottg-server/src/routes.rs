use axum::{extract::State, Json};
use katottg_core::Settlement;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Fixed result cap; the consuming autocomplete shows a short list.
pub const RESULT_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct CitiesRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<Settlement>,
}

/// `POST /cities` — settlement autocomplete.
///
/// A missing, unparsable, or too-short query is an empty result with
/// status 200, not an error: the UI fires this on every keystroke.
pub async fn cities_handler(
    State(state): State<AppState>,
    payload: Option<Json<CitiesRequest>>,
) -> Result<Json<CitiesResponse>, AppError> {
    let query = payload
        .and_then(|Json(req)| req.query)
        .unwrap_or_default();
    let query = query.trim();

    if query.chars().count() < 2 {
        return Ok(Json(CitiesResponse { cities: Vec::new() }));
    }

    let cities = state
        .directory
        .search(query, RESULT_LIMIT)
        .await
        .map_err(|e| {
            error!("city search failed: {e}");
            AppError::from(e)
        })?;

    Ok(Json(CitiesResponse { cities }))
}
