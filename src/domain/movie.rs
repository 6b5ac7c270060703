use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cataloged movie
///
/// Referenced genre and streamings are validated at write time; the store
/// itself does not enforce the references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned immutable identifier; empty until first insert
    #[serde(default)]
    pub id: String,

    /// Unique title
    pub title: String,

    /// Genre reference, many-to-one
    pub genre_id: String,

    pub release_date: DateTime<Utc>,

    /// Ordered streaming references, many-to-many, never empty once validated
    pub streamings_id: Vec<String>,
}
