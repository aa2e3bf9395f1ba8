//! str-games: REST CRUD service for strategy games stored in SQLite.

pub mod config;
pub mod cors;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{MissingRowPolicy, Settings};
pub use error::{AppError, ConfigError, ServerError};
pub use models::{Game, NewGame, User};
pub use routes::app_router;
pub use service::GameService;
pub use state::AppState;
