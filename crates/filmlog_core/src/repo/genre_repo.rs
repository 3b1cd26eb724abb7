//! Genre repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/find/insert APIs over the `genre` table.
//! - Own the shared `RepoError` taxonomy for the repository layer.
//!
//! # Invariants
//! - Name lookups are exact and case-sensitive (`BINARY` collation on
//!   `TEXT` columns).
//! - `add_genre` never exposes the generated id to the caller.

use crate::db::DbError;
use crate::model::genre::Genre;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for genre/movie persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Statement preparation or execution failed. `operation` names the
    /// failing call and, where applicable, the argument being processed.
    Db {
        operation: String,
        source: DbError,
    },
    /// A fetched row holds a value the mapping layer cannot interpret.
    InvalidData(String),
}

impl RepoError {
    pub(crate) fn db(operation: impl Into<String>, source: impl Into<DbError>) -> Self {
        Self::Db {
            operation: operation.into(),
            source: source.into(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db { operation, source } => {
                write!(f, "database error while {operation}: {source}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db { source, .. } => Some(source),
            Self::InvalidData(_) => None,
        }
    }
}

/// Repository interface for genre operations.
///
/// No update or delete exists; genres are append-only in this core.
pub trait GenreRepository {
    /// Lists every genre in result-set order (unspecified, no ORDER BY).
    fn list_genres(&self) -> RepoResult<Vec<Genre>>;
    /// Finds the first genre with exactly the given name, if any.
    fn get_genre(&self, name: &str) -> RepoResult<Option<Genre>>;
    /// Inserts one genre row. The generated id is not returned.
    fn add_genre(&self, name: &str) -> RepoResult<()>;
}

/// SQLite-backed genre repository over a borrowed, bootstrapped connection.
pub struct SqliteGenreRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGenreRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GenreRepository for SqliteGenreRepository<'_> {
    fn list_genres(&self) -> RepoResult<Vec<Genre>> {
        let db_err = |err: rusqlite::Error| RepoError::db("listing genres", err);

        let mut stmt = self.conn.prepare("SELECT * FROM genre").map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;

        let mut genres = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            genres.push(Genre {
                id: row.get("idgenre").map_err(db_err)?,
                name: row.get("name").map_err(db_err)?,
            });
        }

        Ok(genres)
    }

    fn get_genre(&self, name: &str) -> RepoResult<Option<Genre>> {
        let db_err = |err: rusqlite::Error| RepoError::db(format!("fetching genre `{name}`"), err);

        let mut stmt = self
            .conn
            .prepare("SELECT * FROM genre WHERE name = ?")
            .map_err(db_err)?;
        let mut rows = stmt.query([name]).map_err(db_err)?;

        // First matching row only; duplicate names yield whichever row
        // the engine returns first.
        if let Some(row) = rows.next().map_err(db_err)? {
            return Ok(Some(Genre {
                id: row.get("idgenre").map_err(db_err)?,
                name: row.get("name").map_err(db_err)?,
            }));
        }

        Ok(None)
    }

    fn add_genre(&self, name: &str) -> RepoResult<()> {
        self.conn
            .execute("INSERT INTO genre(name) VALUES(?)", [name])
            .map_err(|err| RepoError::db(format!("adding genre `{name}`"), err))?;
        Ok(())
    }
}
