use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Identity;
use service::diagnostics::{self, DiagnosticsReport};
use service::store::RecordStore;

use crate::openapi;
use crate::records;

/// Shared handler state: the single process-wide record store, injected so
/// tests can swap in a double.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn RecordStore>,
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "OK")))]
pub async fn root() -> Json<Identity> {
    Json(Identity { brand: "Monter Medical Skin Care", status: "ok" })
}

/// Diagnostics probe: reports backend/configuration state as data, always
/// responds 200.
#[utoipa::path(get, path = "/test", tag = "health", responses((status = 200, description = "Status report")))]
pub async fn test_database(State(state): State<ServerState>) -> Json<DiagnosticsReport> {
    Json(diagnostics::collect(state.store.as_ref()).await)
}

/// Build the full application router: public pages, record endpoints, and
/// the generated API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .route("/", get(root))
        .route("/test", get(test_database))
        .route(
            "/api/bookings",
            post(records::create_booking).get(records::list_bookings),
        )
        .route("/api/messages", post(records::create_message))
        .route("/api/newsletter", post(records::subscribe_newsletter))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One INFO span per request with method and path.
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // Response events carry status code and latency.
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
