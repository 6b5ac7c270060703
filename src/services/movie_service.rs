// src/services/movie_service.rs
use std::sync::Arc;

use crate::domain::Movie;
use crate::dto::{ActionOutput, ListOutput, MovieInput, MovieListInput};
use crate::error::AppResult;
use crate::repositories::Repository;
use crate::services::ReferentialIntegrityGuard;

pub const MSG_MOVIE_TITLE_REQUIRED: &str = "Enter a name for the movie!";
pub const MSG_MOVIE_GENRE_REQUIRED: &str = "Enter a genre for the movie!";
pub const MSG_MOVIE_GENRE_NOT_FOUND: &str = "Genre not found!";
pub const MSG_MOVIE_STREAMINGS_REQUIRED: &str = "Enter at least one streaming for the movie!";
pub const MSG_MOVIE_STREAMING_NOT_FOUND: &str = "Streaming not found!";
pub const MSG_MOVIE_TITLE_TAKEN: &str = "There is already a movie with this name!";
pub const MSG_MOVIE_NOT_FOUND: &str = "Movie not found!";
pub const MSG_MOVIE_HAS_RATINGS: &str = "There are ratings linked to this movie!";
pub const MSG_NO_MOVIE_FOUND: &str = "No movie found!";

pub struct MovieService {
    movie_repo: Arc<Repository<Movie>>,
    guard: Arc<ReferentialIntegrityGuard>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<Repository<Movie>>, guard: Arc<ReferentialIntegrityGuard>) -> Self {
        Self { movie_repo, guard }
    }

    pub fn create(&self, input: &MovieInput) -> AppResult<ActionOutput> {
        if let Some(violation) = self.validate_input(input)? {
            return Ok(ActionOutput::fail(violation));
        }

        if self.title_in_use(&input.title, None)? {
            return Ok(ActionOutput::fail(MSG_MOVIE_TITLE_TAKEN));
        }

        self.movie_repo.insert(&Movie::from(input))
    }

    pub fn update(&self, id: &str, input: &MovieInput) -> AppResult<ActionOutput> {
        if self.movie_repo.find_by_id(id)?.is_none() {
            return Ok(ActionOutput::fail(MSG_MOVIE_NOT_FOUND));
        }

        if let Some(violation) = self.validate_input(input)? {
            return Ok(ActionOutput::fail(violation));
        }

        if self.title_in_use(&input.title, Some(id))? {
            return Ok(ActionOutput::fail(MSG_MOVIE_TITLE_TAKEN));
        }

        // full replacement of mutable fields, id preserved
        let mut movie = Movie::from(input);
        movie.id = id.to_string();
        self.movie_repo.update(&movie)
    }

    pub fn delete(&self, id: &str) -> AppResult<ActionOutput> {
        if self.movie_repo.find_by_id(id)?.is_none() {
            return Ok(ActionOutput::fail(MSG_MOVIE_NOT_FOUND));
        }

        if self.guard.movie_has_ratings(id)? {
            return Ok(ActionOutput::fail(MSG_MOVIE_HAS_RATINGS));
        }

        self.movie_repo.remove_by_id(id)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Movie>> {
        self.movie_repo.find_by_id(id)
    }

    pub fn list(&self, input: Option<&MovieListInput>) -> AppResult<ListOutput<Movie>> {
        let result = self.movie_repo.list(input)?;
        if result.is_empty() {
            return Ok(ListOutput::empty(MSG_NO_MOVIE_FOUND));
        }

        Ok(result)
    }

    /// Ordered chain shared by create and update; the first violated rule
    /// decides the message. Streamings are checked in list order.
    fn validate_input(&self, input: &MovieInput) -> AppResult<Option<&'static str>> {
        if input.title.trim().is_empty() {
            return Ok(Some(MSG_MOVIE_TITLE_REQUIRED));
        }

        if input.genre_id.is_empty() {
            return Ok(Some(MSG_MOVIE_GENRE_REQUIRED));
        }

        if !self.guard.genre_exists(&input.genre_id)? {
            return Ok(Some(MSG_MOVIE_GENRE_NOT_FOUND));
        }

        if input.streamings_id.is_empty() {
            return Ok(Some(MSG_MOVIE_STREAMINGS_REQUIRED));
        }

        for streaming_id in &input.streamings_id {
            if !self.guard.streaming_exists(streaming_id)? {
                return Ok(Some(MSG_MOVIE_STREAMING_NOT_FOUND));
            }
        }

        Ok(None)
    }

    /// Movie titles are unique by exact match, unlike the tokenized
    /// genre/streaming names. `exclude` skips the record being updated.
    fn title_in_use(&self, title: &str, exclude: Option<&str>) -> AppResult<bool> {
        Ok(self
            .movie_repo
            .find_one_where(|m| exclude.map_or(true, |id| m.id != id) && m.title == title)?
            .is_some())
    }
}
