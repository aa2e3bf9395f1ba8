//! SQL text for the games resource. Identifiers are fixed here; values are always bound as `?` parameters.

pub const GAMES_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS str_games (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    studio TEXT NOT NULL,
    year INTEGER NOT NULL,
    sold INTEGER NOT NULL
)
"#;

pub const USERS_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    login TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL
)
"#;

pub const INSERT_GAME: &str = "INSERT INTO str_games (name, studio, year, sold) VALUES (?, ?, ?, ?)";

pub const SELECT_GAMES: &str = "SELECT id, name, studio, year, sold FROM str_games";

pub const SELECT_GAME_BY_ID: &str = "SELECT id, name, studio, year, sold FROM str_games WHERE id = ?";

pub const UPDATE_GAME: &str =
    "UPDATE str_games SET name = ?, studio = ?, year = ?, sold = ? WHERE id = ?";

pub const DELETE_GAME: &str = "DELETE FROM str_games WHERE id = ?";

pub const PING: &str = "SELECT 1";
