// src/services/rating_service.rs
use std::sync::Arc;

use crate::domain::Rating;
use crate::dto::{ActionOutput, ListOutput, RatingInput, RatingListInput};
use crate::error::AppResult;
use crate::repositories::Repository;
use crate::services::ReferentialIntegrityGuard;

pub const MSG_RATING_COMMENT_REQUIRED: &str = "Enter a comment for the movie!";
pub const MSG_RATING_MOVIE_REQUIRED: &str = "Enter a movie!";
pub const MSG_RATING_USER_REQUIRED: &str = "Enter a user!";
pub const MSG_RATING_VALUE_RANGE: &str = "Enter a rating for the movie between 0 and 5!";
pub const MSG_RATING_MOVIE_NOT_FOUND: &str = "Movie not found!";
pub const MSG_RATING_USER_NOT_FOUND: &str = "User not found!";
pub const MSG_RATING_NOT_FOUND: &str = "Rating not found!";
pub const MSG_NO_RATING_FOUND: &str = "No rating found!";

pub struct RatingService {
    rating_repo: Arc<Repository<Rating>>,
    guard: Arc<ReferentialIntegrityGuard>,
}

impl RatingService {
    pub fn new(rating_repo: Arc<Repository<Rating>>, guard: Arc<ReferentialIntegrityGuard>) -> Self {
        Self { rating_repo, guard }
    }

    pub fn create(&self, input: &RatingInput) -> AppResult<ActionOutput> {
        if let Some(violation) = self.validate_input(input)? {
            return Ok(ActionOutput::fail(violation));
        }

        self.rating_repo.insert(&Rating::from(input))
    }

    pub fn update(&self, id: &str, input: &RatingInput) -> AppResult<ActionOutput> {
        if self.rating_repo.find_by_id(id)?.is_none() {
            return Ok(ActionOutput::fail(MSG_RATING_NOT_FOUND));
        }

        if let Some(violation) = self.validate_input(input)? {
            return Ok(ActionOutput::fail(violation));
        }

        let mut rating = Rating::from(input);
        rating.id = id.to_string();
        self.rating_repo.update(&rating)
    }

    /// Ratings have no dependents; delete only requires existence
    pub fn delete(&self, id: &str) -> AppResult<ActionOutput> {
        if self.rating_repo.find_by_id(id)?.is_none() {
            return Ok(ActionOutput::fail(MSG_RATING_NOT_FOUND));
        }

        self.rating_repo.remove_by_id(id)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Rating>> {
        self.rating_repo.find_by_id(id)
    }

    pub fn list(&self, input: Option<&RatingListInput>) -> AppResult<ListOutput<Rating>> {
        let result = self.rating_repo.list(input)?;
        if result.is_empty() {
            return Ok(ListOutput::empty(MSG_NO_RATING_FOUND));
        }

        Ok(result)
    }

    /// Ordered chain shared by create and update: field checks first, the
    /// value range, then referenced entities.
    fn validate_input(&self, input: &RatingInput) -> AppResult<Option<&'static str>> {
        if input.comment.trim().is_empty() {
            return Ok(Some(MSG_RATING_COMMENT_REQUIRED));
        }

        if input.movie_id.is_empty() {
            return Ok(Some(MSG_RATING_MOVIE_REQUIRED));
        }

        if input.user_id.is_empty() {
            return Ok(Some(MSG_RATING_USER_REQUIRED));
        }

        if !(0..=5).contains(&input.rating_value) {
            return Ok(Some(MSG_RATING_VALUE_RANGE));
        }

        if !self.guard.movie_exists(&input.movie_id)? {
            return Ok(Some(MSG_RATING_MOVIE_NOT_FOUND));
        }

        if !self.guard.user_exists(&input.user_id)? {
            return Ok(Some(MSG_RATING_USER_NOT_FOUND));
        }

        Ok(None)
    }
}
