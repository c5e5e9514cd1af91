//! Local UI preference persistence.
//!
//! # Responsibility
//! - Store small string key/value pairs across sessions.
//!
//! # Invariants
//! - Keys are non-empty and trimmed.
//! - `set` is an upsert; `get` of an unknown key is `Ok(None)`.

use crate::db::{open_db, open_db_in_memory, DbError};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type PreferenceResult<T> = Result<T, PreferenceError>;

#[derive(Debug)]
pub enum PreferenceError {
    InvalidKey(String),
    Db(DbError),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid preference key `{key}`"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for PreferenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PreferenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub trait PreferenceRepository {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PreferenceResult<()>;
    fn remove(&self, key: &str) -> PreferenceResult<()>;
}

/// SQLite-backed preference repository owning its connection.
pub struct SqlitePreferenceRepository {
    conn: Connection,
}

impl SqlitePreferenceRepository {
    pub fn open(path: impl AsRef<Path>) -> PreferenceResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    pub fn in_memory() -> PreferenceResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl PreferenceRepository for SqlitePreferenceRepository {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        let key = normalize_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO preferences (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        debug!("event=preference_set module=repo status=ok key={key}");
        Ok(())
    }

    fn remove(&self, key: &str) -> PreferenceResult<()> {
        let key = normalize_key(key)?;
        self.conn
            .execute("DELETE FROM preferences WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn normalize_key(key: &str) -> PreferenceResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(PreferenceError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}
