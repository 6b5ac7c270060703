// src/services/rating_service_tests.rs
//
// Rating validation chain and value bounds

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::application::AppState;
    use crate::db::create_test_pool;
    use crate::dto::{MovieInput, RatingFiltersInput, RatingInput, RatingListInput, UserInput};
    use crate::services::rating_service::{
        MSG_NO_RATING_FOUND, MSG_RATING_COMMENT_REQUIRED, MSG_RATING_MOVIE_NOT_FOUND,
        MSG_RATING_MOVIE_REQUIRED, MSG_RATING_NOT_FOUND, MSG_RATING_USER_NOT_FOUND,
        MSG_RATING_USER_REQUIRED, MSG_RATING_VALUE_RANGE,
    };

    fn setup() -> AppState {
        AppState::new(Arc::new(create_test_pool().unwrap()))
    }

    /// Seeds a movie (with its genre and streaming) and a user, returning
    /// (movie_id, user_id)
    fn seed_references(state: &AppState) -> (String, String) {
        let genre_id = state.genre_service.create("Action").unwrap().id.unwrap();
        let streaming_id = state
            .streaming_service
            .create("Netflix")
            .unwrap()
            .id
            .unwrap();
        let movie_id = state
            .movie_service
            .create(&MovieInput {
                title: "Heat".to_string(),
                genre_id,
                release_date: None,
                streamings_id: vec![streaming_id],
            })
            .unwrap()
            .id
            .unwrap();
        let user_id = state
            .user_service
            .create(&UserInput {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret".to_string(),
            })
            .unwrap()
            .id
            .unwrap();
        (movie_id, user_id)
    }

    fn rating_input(movie_id: &str, user_id: &str, value: i32) -> RatingInput {
        RatingInput {
            user_id: user_id.to_string(),
            movie_id: movie_id.to_string(),
            comment: "Watched it twice".to_string(),
            rating_value: value,
        }
    }

    #[test]
    fn test_boundary_values_are_accepted() {
        let state = setup();
        let (movie_id, user_id) = seed_references(&state);

        for value in [0, 5] {
            let output = state
                .rating_service
                .create(&rating_input(&movie_id, &user_id, value))
                .unwrap();
            assert!(output.success, "value {} should be accepted", value);
        }
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let state = setup();
        let (movie_id, user_id) = seed_references(&state);

        for value in [-1, 6] {
            let output = state
                .rating_service
                .create(&rating_input(&movie_id, &user_id, value))
                .unwrap();
            assert!(!output.success, "value {} should be rejected", value);
            assert_eq!(output.message.as_deref(), Some(MSG_RATING_VALUE_RANGE));
        }
    }

    #[test]
    fn test_range_is_checked_before_references() {
        let state = setup();

        // rating 6 with a missing movie still reports the range, the
        // chain never reaches the existence checks
        let output = state
            .rating_service
            .create(&rating_input("missing", "missing", 6))
            .unwrap();

        assert_eq!(output.message.as_deref(), Some(MSG_RATING_VALUE_RANGE));
    }

    #[test]
    fn test_comment_error_comes_first() {
        let state = setup();

        let output = state
            .rating_service
            .create(&RatingInput {
                user_id: String::new(),
                movie_id: String::new(),
                comment: String::new(),
                rating_value: 99,
            })
            .unwrap();

        assert_eq!(output.message.as_deref(), Some(MSG_RATING_COMMENT_REQUIRED));
    }

    #[test]
    fn test_empty_movie_id_fails_before_empty_user_id() {
        let state = setup();

        let output = state
            .rating_service
            .create(&RatingInput {
                user_id: String::new(),
                movie_id: String::new(),
                comment: "Fine".to_string(),
                rating_value: 3,
            })
            .unwrap();

        assert_eq!(output.message.as_deref(), Some(MSG_RATING_MOVIE_REQUIRED));
    }

    #[test]
    fn test_empty_user_id_fails() {
        let state = setup();
        let (movie_id, _) = seed_references(&state);

        let output = state
            .rating_service
            .create(&RatingInput {
                user_id: String::new(),
                movie_id,
                comment: "Fine".to_string(),
                rating_value: 3,
            })
            .unwrap();

        assert_eq!(output.message.as_deref(), Some(MSG_RATING_USER_REQUIRED));
    }

    #[test]
    fn test_unknown_movie_fails() {
        let state = setup();
        let (_, user_id) = seed_references(&state);

        let output = state
            .rating_service
            .create(&rating_input("missing", &user_id, 3))
            .unwrap();

        assert_eq!(output.message.as_deref(), Some(MSG_RATING_MOVIE_NOT_FOUND));
    }

    #[test]
    fn test_unknown_user_fails() {
        let state = setup();
        let (movie_id, _) = seed_references(&state);

        let output = state
            .rating_service
            .create(&rating_input(&movie_id, "missing", 3))
            .unwrap();

        assert_eq!(output.message.as_deref(), Some(MSG_RATING_USER_NOT_FOUND));
    }

    #[test]
    fn test_update_missing_rating_fails() {
        let state = setup();
        let (movie_id, user_id) = seed_references(&state);

        let output = state
            .rating_service
            .update("missing", &rating_input(&movie_id, &user_id, 3))
            .unwrap();

        assert_eq!(output.message.as_deref(), Some(MSG_RATING_NOT_FOUND));
    }

    #[test]
    fn test_update_replaces_fields_preserving_id() {
        let state = setup();
        let (movie_id, user_id) = seed_references(&state);
        let id = state
            .rating_service
            .create(&rating_input(&movie_id, &user_id, 2))
            .unwrap()
            .id
            .unwrap();

        let mut input = rating_input(&movie_id, &user_id, 4);
        input.comment = "Better on rewatch".to_string();
        let output = state.rating_service.update(&id, &input).unwrap();

        assert!(output.success);
        let stored = state.rating_service.get(&id).unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.rating_value, 4);
        assert_eq!(stored.comment, "Better on rewatch");
    }

    #[test]
    fn test_delete_missing_rating_fails() {
        let state = setup();

        let output = state.rating_service.delete("missing").unwrap();

        assert!(!output.success);
        assert_eq!(output.message.as_deref(), Some(MSG_RATING_NOT_FOUND));
    }

    #[test]
    fn test_delete_removes_rating() {
        let state = setup();
        let (movie_id, user_id) = seed_references(&state);
        let id = state
            .rating_service
            .create(&rating_input(&movie_id, &user_id, 3))
            .unwrap()
            .id
            .unwrap();

        assert!(state.rating_service.delete(&id).unwrap().success);
        assert!(state.rating_service.get(&id).unwrap().is_none());
    }

    #[test]
    fn test_list_filters_by_movie() {
        let state = setup();
        let (movie_id, user_id) = seed_references(&state);
        state
            .rating_service
            .create(&rating_input(&movie_id, &user_id, 3))
            .unwrap();
        state
            .rating_service
            .create(&rating_input(&movie_id, &user_id, 5))
            .unwrap();

        let input = RatingListInput {
            filters: Some(RatingFiltersInput {
                movie_id: Some(movie_id.clone()),
                user_id: None,
            }),
            paginator: None,
        };
        let output = state.rating_service.list(Some(&input)).unwrap();

        assert!(output.success);
        assert_eq!(output.total, 2);
        assert!(output.items.iter().all(|r| r.movie_id == movie_id));
    }

    #[test]
    fn test_list_empty_is_nothing_found() {
        let state = setup();

        let output = state.rating_service.list(None).unwrap();

        assert!(!output.success);
        assert_eq!(output.message.as_deref(), Some(MSG_NO_RATING_FOUND));
    }
}
