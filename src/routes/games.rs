//! Game CRUD routes under /strGames.

use crate::handlers::games::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn game_routes(state: AppState) -> Router {
    Router::new()
        .route("/strGames", get(list).post(create))
        .route(
            "/strGames/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
