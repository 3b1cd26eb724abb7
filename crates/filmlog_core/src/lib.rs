//! Persistence core for the filmlog movie catalog.
//! This crate is the single source of truth for genre/movie storage access.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::genre::Genre;
pub use model::movie::Movie;
pub use repo::genre_repo::{GenreRepository, RepoError, RepoResult, SqliteGenreRepository};
pub use repo::movie_repo::{MovieRepository, SqliteMovieRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
