//! Database bootstrap: open the SQLite pool and create tables if they do not exist.

use crate::config::Settings;
use crate::sql::{GAMES_TABLE_DDL, USERS_TABLE_DDL};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Open the database file named in `settings`, creating it when absent.
/// WAL plus a busy timeout lets writers on different pool connections wait for the lock instead of failing.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::new()
        .filename(&settings.database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(settings.acquire_timeout);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(opts)
        .await?;
    tracing::info!(
        path = %settings.database_path.display(),
        max_connections = settings.max_connections,
        "database opened"
    );
    Ok(pool)
}

/// Create `str_games` and `users`. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in [GAMES_TABLE_DDL, USERS_TABLE_DDL] {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
