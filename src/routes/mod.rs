//! Router assembly: game and common routes behind CORS, body limit and request tracing.
//! Unknown paths and unregistered verbs answer with the JSON error envelope.

mod common;
mod games;

pub use common::common_routes;
pub use games::game_routes;

use crate::cors::{cors, CorsPolicy};
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower_http::trace::TraceLayer;

async fn fallback() -> AppError {
    AppError::NotFound("route not found".into())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("method not allowed".into())
}

/// Full application router. Layers run outermost first: trace, CORS, body limit.
/// The body limit is enforced by `JsonBody`, so oversized bodies get a JSON 413.
pub fn app_router(state: AppState) -> Router {
    let policy = CorsPolicy::new(state.settings.cors_origin.clone());
    let body_limit = state.settings.body_limit;

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(game_routes(state))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn_with_state(policy, cors))
        .layer(TraceLayer::new_for_http())
}
