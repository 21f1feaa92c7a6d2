use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use katottg_core::{RegistryError, Settlement};
use serde::Serialize;

/// Handler-boundary error: everything below (loader, indexer, search)
/// propagates `RegistryError`; only this type touches the wire format.
#[derive(Debug)]
pub struct AppError(pub RegistryError);

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError(err)
    }
}

/// Error body keeps the same shape as a success response (`cities` always
/// present), so the consuming autocomplete never special-cases failures.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    cities: Vec<Settlement>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.to_string(),
            cities: Vec::new(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
