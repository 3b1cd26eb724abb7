//! Movie domain model.
//!
//! # Invariants
//! - `genre` always carries the full associated record, not a bare
//!   foreign key; reads populate it from the join.
//! - `release_date` is a pure calendar date; no time-of-day component
//!   survives a round-trip through storage.

use crate::model::genre::Genre;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One catalog entry together with its genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Database-assigned identifier; `0` before the row exists.
    pub id: i64,
    pub title: String,
    /// Optional release date; absent dates persist as SQL NULL.
    pub release_date: Option<NaiveDate>,
    /// The owning genre. Its `id` must reference a persisted genre row
    /// before `add_movie`; the database enforces this, not the core.
    pub genre: Genre,
    /// Running time in minutes. Units are a convention, not enforced.
    pub duration: i64,
    pub director: String,
    pub summary: String,
}

impl Movie {
    /// Creates a not-yet-persisted movie with `id` unset.
    ///
    /// `add_movie` overwrites `id` with the database-generated key.
    pub fn new(
        title: impl Into<String>,
        release_date: Option<NaiveDate>,
        genre: Genre,
        duration: i64,
        director: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            release_date,
            genre,
            duration,
            director: director.into(),
            summary: summary.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Movie;
    use crate::model::genre::Genre;
    use chrono::NaiveDate;

    #[test]
    fn new_movie_starts_unpersisted() {
        let movie = Movie::new("Alien", None, Genre::new(1, "Horror"), 117, "Scott", "Crew.");
        assert_eq!(movie.id, 0);
        assert_eq!(movie.release_date, None);
    }

    #[test]
    fn movie_serde_round_trip_keeps_date_and_nested_genre() {
        let movie = Movie::new(
            "Alien",
            NaiveDate::from_ymd_opt(1979, 5, 25),
            Genre::new(3, "Horror"),
            117,
            "Ridley Scott",
            "The crew of the Nostromo picks up a signal.",
        );

        let json = serde_json::to_string(&movie).unwrap();
        assert!(json.contains("\"1979-05-25\""));

        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
    }
}
