//! Movie repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/filter/insert APIs over the `movie` table.
//! - Populate the nested genre from the join on every read path.
//!
//! # Invariants
//! - Reads always join `genre`; a movie whose `genre_id` matches no
//!   genre row is silently excluded by the inner join.
//! - `add_movie` propagates the database-generated key back into the
//!   returned record.
//! - Mapping failure aborts the whole listing; partial results are
//!   discarded, not returned.

use crate::model::genre::Genre;
use crate::model::movie::Movie;
use crate::repo::genre_repo::{RepoError, RepoResult};
use crate::repo::last_insert_id;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Row};

const MOVIE_JOIN_SQL: &str = "SELECT * FROM movie JOIN genre ON movie.genre_id = genre.idgenre";

/// Repository interface for movie operations.
///
/// No update or delete exists; movies are append-only in this core.
pub trait MovieRepository {
    /// Lists every movie with its genre populated from the join.
    fn list_movies(&self) -> RepoResult<Vec<Movie>>;
    /// Lists movies whose genre name matches exactly (case-sensitive).
    fn list_movies_by_genre(&self, genre_name: &str) -> RepoResult<Vec<Movie>>;
    /// Inserts one movie row and returns it with the generated id set.
    ///
    /// The caller supplies a `genre` whose `id` references a persisted
    /// genre row; a dangling id fails the statement at the foreign key.
    fn add_movie(&self, movie: Movie) -> RepoResult<Movie>;
}

/// SQLite-backed movie repository over a borrowed, bootstrapped connection.
pub struct SqliteMovieRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMovieRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MovieRepository for SqliteMovieRepository<'_> {
    fn list_movies(&self) -> RepoResult<Vec<Movie>> {
        let db_err = |err: rusqlite::Error| RepoError::db("listing movies", err);

        let mut stmt = self.conn.prepare(MOVIE_JOIN_SQL).map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;

        let mut movies = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            let raw = JoinedMovieRow::from_row(row).map_err(db_err)?;
            movies.push(movie_from_joined_row(raw)?);
        }

        Ok(movies)
    }

    fn list_movies_by_genre(&self, genre_name: &str) -> RepoResult<Vec<Movie>> {
        let db_err = |err: rusqlite::Error| {
            RepoError::db(format!("listing movies for genre `{genre_name}`"), err)
        };

        let sql = format!("{MOVIE_JOIN_SQL} WHERE genre.name = ?");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([genre_name]).map_err(db_err)?;

        let mut movies = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            let raw = JoinedMovieRow::from_row(row).map_err(db_err)?;
            movies.push(movie_from_joined_row(raw)?);
        }

        Ok(movies)
    }

    fn add_movie(&self, mut movie: Movie) -> RepoResult<Movie> {
        let db_err =
            |err: rusqlite::Error| RepoError::db(format!("adding movie `{}`", movie.title), err);

        self.conn
            .execute(
                "INSERT INTO movie(title, release_date, genre_id, duration, director, summary) \
                 VALUES(?, ?, ?, ?, ?, ?)",
                params![
                    movie.title,
                    movie
                        .release_date
                        .map(|date| date.format(DATE_FORMAT).to_string()),
                    movie.genre.id,
                    movie.duration,
                    movie.director,
                    movie.summary,
                ],
            )
            .map_err(db_err)?;

        movie.id = last_insert_id(self.conn);
        Ok(movie)
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

// Datetime shapes tolerated on read. SQLite stores dates as text, and
// rows written by external tooling may carry a time-of-day component
// even though release_date is conceptually a date.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Raw column values pulled from one joined movie+genre row.
///
/// Column extraction is separated from interpretation so the mapping
/// below stays a pure function of values, not of a live cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JoinedMovieRow {
    pub idmovie: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub idgenre: i64,
    pub genre_name: String,
    pub duration: i64,
    pub director: String,
    pub summary: String,
}

impl JoinedMovieRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            idmovie: row.get("idmovie")?,
            title: row.get("title")?,
            release_date: row.get("release_date")?,
            idgenre: row.get("idgenre")?,
            genre_name: row.get("name")?,
            duration: row.get("duration")?,
            director: row.get("director")?,
            summary: row.get("summary")?,
        })
    }
}

/// Builds a `Movie` with its nested `Genre` from raw joined columns.
fn movie_from_joined_row(raw: JoinedMovieRow) -> RepoResult<Movie> {
    let release_date = match raw.release_date.as_deref() {
        Some(text) => Some(parse_release_date(text)?),
        None => None,
    };

    Ok(Movie {
        id: raw.idmovie,
        title: raw.title,
        release_date,
        genre: Genre {
            id: raw.idgenre,
            name: raw.genre_name,
        },
        duration: raw.duration,
        director: raw.director,
        summary: raw.summary,
    })
}

/// Parses a stored release date, truncating any time-of-day component.
fn parse_release_date(text: &str) -> RepoResult<NaiveDate> {
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed.date());
        }
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid release date `{text}` in movie.release_date"
        ))
    })
}
