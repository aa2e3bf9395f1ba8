//! Row and payload types for the `str_games` and `users` tables.

use serde::{Deserialize, Serialize};

/// One row of `str_games`, serialized field-for-field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub studio: String,
    pub year: i64,
    pub sold: i64,
}

/// Client payload for create and update. An `id` in the body is ignored; the
/// database (create) or the path (update) decides it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub name: String,
    pub studio: String,
    pub year: i64,
    pub sold: i64,
}

impl NewGame {
    pub fn with_id(self, id: i64) -> Game {
        Game {
            id,
            name: self.name,
            studio: self.studio,
            year: self.year,
            sold: self.sold,
        }
    }
}

/// Row of `users`. The table is created at startup; no route reads or writes it yet.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(skip_serializing)]
    pub password: String,
}
