//! CRUD execution against the `str_games` table.

use crate::error::AppError;
use crate::models::{Game, NewGame};
use crate::sql::{DELETE_GAME, INSERT_GAME, SELECT_GAMES, SELECT_GAME_BY_ID, UPDATE_GAME};
use sqlx::SqlitePool;

pub struct GameService;

impl GameService {
    /// Insert one row and return it with the generated id.
    pub async fn create(pool: &SqlitePool, game: NewGame) -> Result<Game, AppError> {
        tracing::debug!(sql = %INSERT_GAME, "query");
        let result = sqlx::query(INSERT_GAME)
            .bind(&game.name)
            .bind(&game.studio)
            .bind(game.year)
            .bind(game.sold)
            .execute(pool)
            .await
            .map_err(AppError::db("insert failed"))?;
        Ok(game.with_id(result.last_insert_rowid()))
    }

    /// All rows in table scan order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Game>, AppError> {
        tracing::debug!(sql = %SELECT_GAMES, "query");
        sqlx::query_as::<_, Game>(SELECT_GAMES)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                let context = if is_decode_error(&e) { "scan failed" } else { "query failed" };
                AppError::db(context)(e)
            })
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Game>, AppError> {
        tracing::debug!(sql = %SELECT_GAME_BY_ID, id, "query");
        sqlx::query_as::<_, Game>(SELECT_GAME_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(AppError::db("query failed"))
    }

    /// Overwrite every field of row `id`. Returns the number of rows changed (0 or 1).
    pub async fn update(pool: &SqlitePool, id: i64, game: &NewGame) -> Result<u64, AppError> {
        tracing::debug!(sql = %UPDATE_GAME, id, "query");
        let result = sqlx::query(UPDATE_GAME)
            .bind(&game.name)
            .bind(&game.studio)
            .bind(game.year)
            .bind(game.sold)
            .bind(id)
            .execute(pool)
            .await
            .map_err(AppError::db("update failed"))?;
        Ok(result.rows_affected())
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        tracing::debug!(sql = %DELETE_GAME, id, "query");
        let result = sqlx::query(DELETE_GAME)
            .bind(id)
            .execute(pool)
            .await
            .map_err(AppError::db("delete failed"))?;
        Ok(result.rows_affected())
    }
}

fn is_decode_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::ColumnNotFound(_)
    )
}
