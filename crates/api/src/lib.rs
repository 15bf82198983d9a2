//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for valuations and reports
//! - Application state wiring
//! - JSON error responses

pub mod routes;

use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use worthwell_core::render::{HtmlRenderer, RenderService};
use worthwell_store::ValuationRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Valuation record store.
    pub store: ValuationRepository,
    /// Renderer for report artifacts.
    pub renderer: HtmlRenderer,
    /// Timeout-enforcing render service.
    pub render: RenderService,
}

impl AppState {
    /// Creates application state with the given render time budget.
    #[must_use]
    pub fn new(render_timeout: Duration) -> Self {
        Self {
            store: ValuationRepository::new(),
            renderer: HtmlRenderer::new(),
            render: RenderService::new(render_timeout),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
