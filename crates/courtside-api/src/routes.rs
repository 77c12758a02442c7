//! Router setup with all API routes and middleware.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Browser clients connect from arbitrary dev origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/chat/stream", post(handlers::chat_stream))
        .route("/api/chat/check-news", post(handlers::check_news))
        .route(
            "/api/chat/history/{user_id}",
            get(handlers::get_history).delete(handlers::clear_history),
        )
        .route(
            "/api/onboarding/default-teams/{location}",
            get(handlers::default_teams),
        )
        .route(
            "/api/onboarding/available-locations",
            get(handlers::list_locations),
        )
        .route("/api/onboarding/preferences", post(handlers::save_preferences))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
