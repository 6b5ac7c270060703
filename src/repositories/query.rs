// src/repositories/query.rs
//
// Pure translation of filter descriptors into the store's query shape.
// Tokens are matched by literal substring containment, so there are no
// metacharacters to escape and no regular expressions anywhere.

use crate::dto::{FieldFilter, FieldMatch, PaginatorInput};

/// True when `field` contains every whitespace-separated token of `value`
/// as a substring, case-insensitively, in any order.
///
/// This is the in-process twin of the SQL emitted by `build_where` for
/// `ContainsTokens`; uniqueness checks use it directly against candidate
/// names. A value with no tokens matches everything.
pub fn contains_all_tokens(field: &str, value: &str) -> bool {
    let haystack = field.to_lowercase();
    value
        .split_whitespace()
        .all(|token| haystack.contains(&token.to_lowercase()))
}

/// Translate AND-combined conditions into a WHERE fragment over the JSON
/// document column plus its positional parameters. No conditions means no
/// WHERE clause (match all).
pub fn build_where(conditions: &[FieldFilter]) -> (String, Vec<String>) {
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    for condition in conditions {
        match &condition.matcher {
            FieldMatch::Equals(value) => {
                clauses.push(format!("json_extract(doc, '$.{}') = ?", condition.field));
                params.push(value.clone());
            }
            FieldMatch::ContainsTokens(value) => {
                // one clause per token, AND-combined like everything else
                for token in value.split_whitespace() {
                    clauses.push(format!(
                        "instr(lower(json_extract(doc, '$.{}')), ?) > 0",
                        condition.field
                    ));
                    params.push(token.to_lowercase());
                }
            }
        }
    }

    if clauses.is_empty() {
        (String::new(), params)
    } else {
        (format!(" WHERE {}", clauses.join(" AND ")), params)
    }
}

/// skip/limit for a 1-based page; any page <= 0 is treated as page 1
pub fn build_page(paginator: &PaginatorInput) -> (i64, i64) {
    let page = paginator.page.max(1);
    ((page - 1) * paginator.results_per_page, paginator.results_per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match_in_any_order() {
        assert!(contains_all_tokens("The Lord of the Rings", "rings lord"));
        assert!(contains_all_tokens("The Lord of the Rings", "LORD"));
        assert!(!contains_all_tokens("The Lord of the Rings", "lord hobbit"));
    }

    #[test]
    fn test_tokens_are_independent_substrings() {
        // not a contiguous phrase: both tokens present even though the
        // field never contains "rings lord" as a phrase
        assert!(contains_all_tokens("lordly ringside", "lord ring"));
    }

    #[test]
    fn test_empty_value_matches_everything() {
        assert!(contains_all_tokens("anything", ""));
        assert!(contains_all_tokens("anything", "   "));
    }

    #[test]
    fn test_directional_matching() {
        // stored field is searched for the candidate's tokens, not the
        // other way around
        assert!(contains_all_tokens("Action and Adventure", "action"));
        assert!(!contains_all_tokens("Action", "action adventure"));
    }

    #[test]
    fn test_build_where_empty() {
        let (sql, params) = build_where(&[]);
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_build_where_equality() {
        let (sql, params) = build_where(&[FieldFilter::equals("genre_id", "g1")]);
        assert_eq!(sql, " WHERE json_extract(doc, '$.genre_id') = ?");
        assert_eq!(params, vec!["g1".to_string()]);
    }

    #[test]
    fn test_build_where_one_clause_per_token() {
        let (sql, params) = build_where(&[FieldFilter::contains_tokens("title", "Dark Knight")]);
        assert_eq!(sql.matches("instr(").count(), 2);
        assert_eq!(params, vec!["dark".to_string(), "knight".to_string()]);
    }

    #[test]
    fn test_build_where_combines_with_and() {
        let (sql, params) = build_where(&[
            FieldFilter::contains_tokens("title", "matrix"),
            FieldFilter::equals("genre_id", "g1"),
        ]);
        assert!(sql.contains(" AND "));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_page_zero_and_one_are_the_first_page() {
        let zero = build_page(&PaginatorInput { page: 0, results_per_page: 10 });
        let one = build_page(&PaginatorInput { page: 1, results_per_page: 10 });
        assert_eq!(zero, (0, 10));
        assert_eq!(zero, one);
    }

    #[test]
    fn test_page_skip() {
        let (skip, limit) = build_page(&PaginatorInput { page: 3, results_per_page: 25 });
        assert_eq!(skip, 50);
        assert_eq!(limit, 25);
    }
}
