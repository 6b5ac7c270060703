// src/dto/outputs.rs
//
// Result envelopes
//
// Business-rule violations travel inside these values with success=false
// and a message; they are never raised as errors. Success carries no
// message.

use serde::{Deserialize, Serialize};

/// Result of a create/update/delete operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutput {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Id of the affected record, present on successful writes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ActionOutput {
    /// Success without a record id (deletes)
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
            id: None,
        }
    }

    /// Success carrying the persisted record's id
    pub fn saved(id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: None,
            id: Some(id.into()),
        }
    }

    /// Failure with the violated rule's message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            id: None,
        }
    }
}

/// Result of a list operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListOutput<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub items: Vec<T>,

    /// Count of records matching the filter before pagination
    pub total: u64,
}

impl<T> ListOutput<T> {
    pub fn found(items: Vec<T>, total: u64) -> Self {
        Self {
            success: true,
            message: None,
            items,
            total,
        }
    }

    /// The per-entity "nothing found" normalization of an empty result
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
