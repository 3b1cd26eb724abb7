//! Genre domain model.

use serde::{Deserialize, Serialize};

/// A movie category, keyed by a database-assigned id.
///
/// Name uniqueness is left to the schema; the core never enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Database-assigned identifier; `0` before the row exists.
    pub id: i64,
    /// Display label, matched case-sensitively by lookups.
    pub name: String,
}

impl Genre {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
