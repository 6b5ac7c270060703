use serde::{Deserialize, Serialize};

/// A streaming platform carrying movies (e.g. "Netflix")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streaming {
    /// Store-assigned immutable identifier; empty until first insert
    #[serde(default)]
    pub id: String,

    /// Display name, unique across streamings by tokenized match
    pub name: String,
}

impl Streaming {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }
}
