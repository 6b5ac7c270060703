use serde::{Deserialize, Serialize};

/// A movie genre (e.g. "Action", "Drama")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    /// Store-assigned immutable identifier; empty until first insert
    #[serde(default)]
    pub id: String,

    /// Display name, unique across genres by tokenized match
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }
}
