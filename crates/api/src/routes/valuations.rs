//! Valuation routes.
//!
//! `POST /valuations` runs the full computation pipeline and persists the
//! record; the list and detail routes serve the dashboard's history view.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

use crate::AppState;
use worthwell_core::input::{Normalizer, RawValuationInput};
use worthwell_core::multiples::{MultipleSelector, MultipleSource};
use worthwell_core::sde::SdeEngine;
use worthwell_core::valuation::ValuationCalculator;
use worthwell_shared::types::{PageRequest, PageResponse, ValuationId};
use worthwell_store::{StoreError, ValuationRecord};

/// Creates the valuation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/valuations", post(create_valuation).get(list_valuations))
        .route("/valuations/{id}", get(get_valuation))
}

// ============================================================================
// Response Types
// ============================================================================

/// Computed valuation figures, formatted for the API.
#[derive(Debug, Serialize)]
pub struct ValuationResultResponse {
    /// Seller's discretionary earnings.
    pub sde: String,
    /// SDE margin percentage.
    pub sde_margin: String,
    /// Adjusted lower multiple bound.
    pub multiple_low: String,
    /// Adjusted upper multiple bound.
    pub multiple_high: String,
    /// Whether the industry table or the default fallback was used.
    pub multiple_source: MultipleSource,
    /// Low enterprise value estimate.
    pub valuation_low: String,
    /// High enterprise value estimate.
    pub valuation_high: String,
    /// Midpoint estimate.
    pub valuation_point: String,
}

/// One valuation record, with the input fields report rendering needs.
#[derive(Debug, Serialize)]
pub struct ValuationRecordResponse {
    /// Record ID.
    pub id: ValuationId,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Business name.
    pub business_name: String,
    /// Industry key.
    pub industry: String,
    /// Current-year annual revenue.
    pub annual_revenue: String,
    /// Computed result.
    pub result: ValuationResultResponse,
}

impl ValuationRecordResponse {
    fn from_record(record: &ValuationRecord) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at.to_rfc3339(),
            business_name: record.input.business_name.clone(),
            industry: record.input.industry.clone(),
            annual_revenue: format_money(record.input.annual_revenue),
            result: ValuationResultResponse {
                sde: format_money(record.result.sde),
                sde_margin: format_percent(record.result.sde_margin),
                multiple_low: format_multiple(record.result.multiple_low),
                multiple_high: format_multiple(record.result.multiple_high),
                multiple_source: record.result.multiple_source,
                valuation_low: format_money(record.result.valuation_low),
                valuation_high: format_money(record.result.valuation_high),
                valuation_point: format_money(record.result.valuation_point),
            },
        }
    }
}

/// Compact record summary for the dashboard listing.
#[derive(Debug, Serialize)]
pub struct ValuationSummaryResponse {
    /// Record ID.
    pub id: ValuationId,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Business name.
    pub business_name: String,
    /// Industry key.
    pub industry: String,
    /// Midpoint estimate.
    pub valuation_point: String,
}

impl ValuationSummaryResponse {
    fn from_record(record: &ValuationRecord) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at.to_rfc3339(),
            business_name: record.input.business_name.clone(),
            industry: record.input.industry.clone(),
            valuation_point: format_money(record.result.valuation_point),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Formats a Decimal amount with 2 decimal places.
fn format_money(amount: Decimal) -> String {
    format!("{amount:.2}")
}

/// Formats a Decimal percentage with 2 decimal places.
fn format_percent(amount: Decimal) -> String {
    format!("{amount:.2}")
}

/// Formats a Decimal multiple with 2 decimal places.
fn format_multiple(amount: Decimal) -> String {
    format!("{amount:.2}")
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /valuations
///
/// Normalizes and validates the raw questionnaire record, computes the
/// valuation, and persists it. The computation does not run when
/// validation fails, and nothing is persisted on any error.
#[axum::debug_handler]
async fn create_valuation(
    State(state): State<AppState>,
    Json(raw): Json<RawValuationInput>,
) -> impl IntoResponse {
    let input = Normalizer::normalize(raw);

    if let Err(validation) = Normalizer::validate(&input) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": validation.to_string()
            })),
        )
            .into_response();
    }

    let metrics = SdeEngine::compute(&input);
    let selection = MultipleSelector::select(&input.industry, &input.signals());

    if selection.source == MultipleSource::DefaultFallback {
        warn!(
            industry = %input.industry,
            "industry not in multiple table, applying default range"
        );
    }

    let result = match ValuationCalculator::calculate(&metrics, &selection) {
        Ok(result) => result,
        Err(e) => {
            // Unreachable after validation; a hit means a pipeline bug.
            error!(error = %e, "calculator rejected validated input");
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

    let record = state.store.insert(input, result).await;

    (
        StatusCode::CREATED,
        Json(ValuationRecordResponse::from_record(&record)),
    )
        .into_response()
}

/// GET /valuations
///
/// Paginated history, most recent first.
#[axum::debug_handler]
async fn list_valuations(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> impl IntoResponse {
    let records = state.store.list(&page).await;

    let data: Vec<ValuationSummaryResponse> = records
        .data
        .iter()
        .map(ValuationSummaryResponse::from_record)
        .collect();

    Json(PageResponse {
        data,
        meta: records.meta,
    })
}

/// GET /valuations/{id}
#[axum::debug_handler]
async fn get_valuation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.get(ValuationId::from_uuid(id)).await {
        Ok(record) => {
            (StatusCode::OK, Json(ValuationRecordResponse::from_record(&record))).into_response()
        }
        Err(StoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": "Valuation not found"
            })),
        )
            .into_response(),
    }
}
