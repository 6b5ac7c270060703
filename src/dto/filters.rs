// src/dto/filters.rs
//
// List inputs: per-entity filter descriptors plus pagination
//
// Filters are plain data. Each non-empty field contributes one condition;
// conditions are AND-combined by the query builder. An absent filter
// object, or one whose fields are all empty, matches every record.

use serde::{Deserialize, Serialize};

/// How one condition matches the stored document field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldMatch {
    /// Exact equality (reference ids, emails)
    Equals(String),
    /// Tokenized case-insensitive substring containment: every
    /// whitespace-separated token of the value must appear somewhere in
    /// the field, in any order
    ContainsTokens(String),
}

/// One field condition inside an AND-combined query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFilter {
    /// Field name inside the stored JSON document
    pub field: &'static str,
    pub matcher: FieldMatch,
}

impl FieldFilter {
    pub fn equals(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            matcher: FieldMatch::Equals(value.into()),
        }
    }

    pub fn contains_tokens(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            matcher: FieldMatch::ContainsTokens(value.into()),
        }
    }
}

/// Conversion of a per-entity filter input into field conditions
pub trait QueryFilters {
    fn conditions(&self) -> Vec<FieldFilter>;
}

/// 1-based pagination; any page <= 0 is treated as page 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaginatorInput {
    pub page: i64,
    pub results_per_page: i64,
}

/// Generic list input: optional filters plus optional pagination
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListInput<F> {
    #[serde(default)]
    pub filters: Option<F>,
    #[serde(default)]
    pub paginator: Option<PaginatorInput>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ----------------------------------------------------------------------------
// Per-entity filters
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenreFiltersInput {
    #[serde(default)]
    pub name: Option<String>,
}

impl QueryFilters for GenreFiltersInput {
    fn conditions(&self) -> Vec<FieldFilter> {
        let mut conditions = Vec::new();
        if let Some(name) = non_empty(&self.name) {
            conditions.push(FieldFilter::contains_tokens("name", name));
        }
        conditions
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamingFiltersInput {
    #[serde(default)]
    pub name: Option<String>,
}

impl QueryFilters for StreamingFiltersInput {
    fn conditions(&self) -> Vec<FieldFilter> {
        let mut conditions = Vec::new();
        if let Some(name) = non_empty(&self.name) {
            conditions.push(FieldFilter::contains_tokens("name", name));
        }
        conditions
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieFiltersInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre_id: Option<String>,
}

impl QueryFilters for MovieFiltersInput {
    fn conditions(&self) -> Vec<FieldFilter> {
        let mut conditions = Vec::new();
        if let Some(title) = non_empty(&self.title) {
            conditions.push(FieldFilter::contains_tokens("title", title));
        }
        if let Some(genre_id) = non_empty(&self.genre_id) {
            conditions.push(FieldFilter::equals("genre_id", genre_id));
        }
        conditions
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingFiltersInput {
    #[serde(default)]
    pub movie_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl QueryFilters for RatingFiltersInput {
    fn conditions(&self) -> Vec<FieldFilter> {
        let mut conditions = Vec::new();
        if let Some(movie_id) = non_empty(&self.movie_id) {
            conditions.push(FieldFilter::equals("movie_id", movie_id));
        }
        if let Some(user_id) = non_empty(&self.user_id) {
            conditions.push(FieldFilter::equals("user_id", user_id));
        }
        conditions
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFiltersInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl QueryFilters for UserFiltersInput {
    fn conditions(&self) -> Vec<FieldFilter> {
        let mut conditions = Vec::new();
        if let Some(name) = non_empty(&self.name) {
            conditions.push(FieldFilter::contains_tokens("name", name));
        }
        if let Some(email) = non_empty(&self.email) {
            conditions.push(FieldFilter::equals("email", email));
        }
        conditions
    }
}

pub type GenreListInput = ListInput<GenreFiltersInput>;
pub type StreamingListInput = ListInput<StreamingFiltersInput>;
pub type MovieListInput = ListInput<MovieFiltersInput>;
pub type RatingListInput = ListInput<RatingFiltersInput>;
pub type UserListInput = ListInput<UserFiltersInput>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_contribute_nothing() {
        assert!(GenreFiltersInput::default().conditions().is_empty());
        assert!(MovieFiltersInput::default().conditions().is_empty());
    }

    #[test]
    fn test_empty_string_treated_as_absent() {
        let filters = MovieFiltersInput {
            title: Some(String::new()),
            genre_id: Some(String::new()),
        };
        assert!(filters.conditions().is_empty());
    }

    #[test]
    fn test_each_field_contributes_one_condition() {
        let filters = MovieFiltersInput {
            title: Some("matrix".to_string()),
            genre_id: Some("g1".to_string()),
        };
        let conditions = filters.conditions();
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0], FieldFilter::contains_tokens("title", "matrix"));
        assert_eq!(conditions[1], FieldFilter::equals("genre_id", "g1"));
    }
}
