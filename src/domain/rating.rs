use serde::{Deserialize, Serialize};

/// A user's rating of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Store-assigned immutable identifier; empty until first insert
    #[serde(default)]
    pub id: String,

    /// Owning user, many-to-one; removed with the user (cascade)
    pub user_id: String,

    /// Rated movie, many-to-one; blocks movie deletion
    pub movie_id: String,

    pub comment: String,

    /// Integer score in [0, 5]
    pub rating_value: i32,
}
