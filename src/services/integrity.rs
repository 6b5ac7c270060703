// src/services/integrity.rs
//
// Referential integrity guard
//
// Cross-entity existence and cascade/block rules, shared by every service
// so the policy table lives in exactly one place:
//
//   Genre     <- Movie.genre_id        delete BLOCKED while referenced
//   Streaming <- Movie.streamings_id   delete BLOCKED while referenced
//   Movie     <- Rating.movie_id       delete BLOCKED while referenced
//   User      <- Rating.user_id        delete CASCADES over ratings
//
// Every check is a first-match short-circuit, not a count. Checks are
// read-then-write without a transaction: a concurrent write can
// invalidate a verdict between the check and the mutation it guards.

use std::sync::Arc;

use crate::domain::{Genre, Movie, Rating, Streaming, User};
use crate::error::AppResult;
use crate::repositories::Repository;

pub struct ReferentialIntegrityGuard {
    genre_repo: Arc<Repository<Genre>>,
    streaming_repo: Arc<Repository<Streaming>>,
    movie_repo: Arc<Repository<Movie>>,
    rating_repo: Arc<Repository<Rating>>,
    user_repo: Arc<Repository<User>>,
}

impl ReferentialIntegrityGuard {
    pub fn new(
        genre_repo: Arc<Repository<Genre>>,
        streaming_repo: Arc<Repository<Streaming>>,
        movie_repo: Arc<Repository<Movie>>,
        rating_repo: Arc<Repository<Rating>>,
        user_repo: Arc<Repository<User>>,
    ) -> Self {
        Self {
            genre_repo,
            streaming_repo,
            movie_repo,
            rating_repo,
            user_repo,
        }
    }

    // ------------------------------------------------------------------
    // Existence checks, used by composite writes (movie, rating)
    // ------------------------------------------------------------------

    pub fn genre_exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.genre_repo.find_by_id(id)?.is_some())
    }

    pub fn streaming_exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.streaming_repo.find_by_id(id)?.is_some())
    }

    pub fn movie_exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.movie_repo.find_by_id(id)?.is_some())
    }

    pub fn user_exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.user_repo.find_by_id(id)?.is_some())
    }

    // ------------------------------------------------------------------
    // Block checks, used by destructive writes
    // ------------------------------------------------------------------

    pub fn genre_has_movies(&self, genre_id: &str) -> AppResult<bool> {
        Ok(self
            .movie_repo
            .find_one_where(|m| m.genre_id == genre_id)?
            .is_some())
    }

    pub fn streaming_has_movies(&self, streaming_id: &str) -> AppResult<bool> {
        Ok(self
            .movie_repo
            .find_one_where(|m| m.streamings_id.iter().any(|s| s == streaming_id))?
            .is_some())
    }

    pub fn movie_has_ratings(&self, movie_id: &str) -> AppResult<bool> {
        Ok(self
            .rating_repo
            .find_one_where(|r| r.movie_id == movie_id)?
            .is_some())
    }

    // ------------------------------------------------------------------
    // Cascade
    // ------------------------------------------------------------------

    /// Remove every rating owned by the user, each by its own rating id.
    /// Returns how many were removed.
    pub fn remove_user_ratings(&self, user_id: &str) -> AppResult<usize> {
        let ratings = self.rating_repo.find_where(|r| r.user_id == user_id)?;

        for rating in &ratings {
            self.rating_repo.remove_by_id(&rating.id)?;
        }

        if !ratings.is_empty() {
            log::info!("cascade removed {} ratings for user {}", ratings.len(), user_id);
        }

        Ok(ratings.len())
    }
}
