//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define data access contracts for the genre/movie domain.
//! - Keep SQL text and row mapping out of caller code.
//!
//! # Invariants
//! - Repositories hold no state between calls; every method borrows a
//!   ready connection and releases statements/cursors on all exit paths
//!   through normal drop order.
//! - "Not found" is an empty `Vec` or `None`, never an error.

use rusqlite::Connection;

pub mod genre_repo;
pub mod movie_repo;

/// Reads back the primary key generated by the most recent insert on
/// this connection.
///
/// Kept as the single place touching the backend-specific generated-key
/// mechanism (`last_insert_rowid` on SQLite).
pub(crate) fn last_insert_id(conn: &Connection) -> i64 {
    conn.last_insert_rowid()
}
