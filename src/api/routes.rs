//! API Routes
//!
//! Configures the Axum router with all cache gateway endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, get_handler, get_multi_handler, health_handler, set_handler,
    set_multi_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cache/:category/:key` - Read one value
/// - `PUT /cache/:category/:key` - Store one value
/// - `DELETE /cache/:category/:key` - Delete one value
/// - `PUT /batch/:category` - Store many values
/// - `POST /batch/:category` - Read many values
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/cache/:category/:key",
            get(get_handler).put(set_handler).delete(delete_handler),
        )
        .route(
            "/batch/:category",
            put(set_multi_handler).post(get_multi_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
