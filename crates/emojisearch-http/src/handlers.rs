//! Route handlers.

use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use emojisearch_core::SearchParams;
use serde::Serialize;

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

/// Filters the catalog.
///
/// POST /search
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchParams>, JsonRejection>,
) -> Response {
    let params = match payload {
        Ok(Json(params)) => params,
        Err(rejection) => {
            let details = rejection.body_text();
            tracing::warn!(status = %rejection.status(), details = %details, "rejected search payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "invalid search payload".to_string(),
                    details: Some(details),
                }),
            )
                .into_response();
        }
    };

    let results = state.engine.run(&params, state.distinct);

    tracing::info!(
        include = ?params.include,
        exclude = ?params.exclude,
        distinct = state.distinct,
        results = results.len(),
        "search served"
    );

    (StatusCode::OK, Json(results)).into_response()
}
