//! Bootstrap and service-level tests against a real SQLite file.

use str_games::{store, GameService, NewGame, Settings};
use tempfile::TempDir;

async fn open(dir: &TempDir) -> sqlx::SqlitePool {
    let settings = Settings {
        database_path: dir.path().join("games.db"),
        max_connections: 2,
        ..Settings::default()
    };
    store::connect(&settings).await.unwrap()
}

fn chess() -> NewGame {
    NewGame {
        name: "Chess Tactics".into(),
        studio: "Indie Co".into(),
        year: 2021,
        sold: 500,
    }
}

#[tokio::test]
async fn connect_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.db");
    assert!(!path.exists());

    let pool = open(&dir).await;
    store::ensure_tables(&pool).await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn ensure_tables_is_idempotent_and_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let pool = open(&dir).await;
    store::ensure_tables(&pool).await.unwrap();
    let game = GameService::create(&pool, chess()).await.unwrap();

    store::ensure_tables(&pool).await.unwrap();

    assert_eq!(GameService::list(&pool).await.unwrap(), vec![game]);
}

#[tokio::test]
async fn creates_users_table() {
    let dir = tempfile::tempdir().unwrap();
    let pool = open(&dir).await;
    store::ensure_tables(&pool).await.unwrap();

    let tables: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('str_games', 'users') ORDER BY name")
            .fetch_all(&pool)
            .await
            .unwrap();

    let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
    assert_eq!(names, ["str_games", "users"]);
}

#[tokio::test]
async fn rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let pool = open(&dir).await;
    store::ensure_tables(&pool).await.unwrap();
    let game = GameService::create(&pool, chess()).await.unwrap();
    pool.close().await;

    let pool = open(&dir).await;
    store::ensure_tables(&pool).await.unwrap();

    assert_eq!(GameService::read(&pool, game.id).await.unwrap(), Some(game));
}

#[tokio::test]
async fn service_reports_affected_rows() {
    let dir = tempfile::tempdir().unwrap();
    let pool = open(&dir).await;
    store::ensure_tables(&pool).await.unwrap();
    let game = GameService::create(&pool, chess()).await.unwrap();
    assert_eq!(game.id, 1);

    let mut changed = chess();
    changed.sold = 900;
    assert_eq!(GameService::update(&pool, game.id, &changed).await.unwrap(), 1);
    assert_eq!(GameService::update(&pool, game.id + 1, &changed).await.unwrap(), 0);
    assert_eq!(GameService::read(&pool, game.id).await.unwrap().unwrap().sold, 900);

    assert_eq!(GameService::delete(&pool, game.id).await.unwrap(), 1);
    assert_eq!(GameService::delete(&pool, game.id).await.unwrap(), 0);
    assert_eq!(GameService::read(&pool, game.id).await.unwrap(), None);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let dir = tempfile::tempdir().unwrap();
    let pool = open(&dir).await;
    store::ensure_tables(&pool).await.unwrap();

    let first = GameService::create(&pool, chess()).await.unwrap();
    GameService::delete(&pool, first.id).await.unwrap();
    let second = GameService::create(&pool, chess()).await.unwrap();

    assert!(second.id > first.id);
}
