//! Report routes.
//!
//! `GET /valuations/{id}/report` rebuilds the report document from the
//! persisted record and renders it within the configured time budget. The
//! document itself is never persisted.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use worthwell_core::narrative::NarrativeComposer;
use worthwell_core::render::RenderError;
use worthwell_core::report::ReportAssembler;
use worthwell_shared::types::ValuationId;
use worthwell_store::StoreError;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/valuations/{id}/report", get(get_report))
}

/// GET /valuations/{id}/report
///
/// A timeout is surfaced as 504 and is retryable by the caller; it is not
/// retried here to avoid duplicate side effects in the surrounding
/// checkout flow.
#[axum::debug_handler]
async fn get_report(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let record = match state.store.get(ValuationId::from_uuid(id)).await {
        Ok(record) => record,
        Err(StoreError::NotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": "Valuation not found"
                })),
            )
                .into_response();
        }
    };

    let narrative = NarrativeComposer::compose(&record.input, &record.result);

    let document = match ReportAssembler::assemble(
        &record.input,
        &record.result,
        &narrative,
        Utc::now().date_naive(),
    ) {
        Ok(document) => document,
        Err(e) => {
            error!(error = %e, valuation_id = %record.id, "report assembly failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response();
        }
    };

    match state.render.render(&state.renderer, &document).await {
        Ok(rendered) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, rendered.content_type)],
            rendered.body,
        )
            .into_response(),
        Err(e @ RenderError::Timeout { .. }) => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(json!({
                "error": "render_timeout",
                "message": e.to_string()
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, valuation_id = %record.id, "report render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}
