// src/services/genre_service.rs
use std::sync::Arc;

use crate::domain::Genre;
use crate::dto::{ActionOutput, GenreListInput, ListOutput};
use crate::error::AppResult;
use crate::repositories::{contains_all_tokens, Repository};
use crate::services::ReferentialIntegrityGuard;

pub const MSG_GENRE_NAME_REQUIRED: &str = "Enter a name for the genre!";
pub const MSG_GENRE_NAME_TAKEN: &str = "There is already a genre with this name!";
pub const MSG_GENRE_NOT_FOUND: &str = "Genre not found!";
pub const MSG_GENRE_HAS_MOVIES: &str = "There are movies linked to this genre!";
pub const MSG_NO_GENRE_FOUND: &str = "No genre found!";

pub struct GenreService {
    genre_repo: Arc<Repository<Genre>>,
    guard: Arc<ReferentialIntegrityGuard>,
}

impl GenreService {
    pub fn new(genre_repo: Arc<Repository<Genre>>, guard: Arc<ReferentialIntegrityGuard>) -> Self {
        Self { genre_repo, guard }
    }

    pub fn create(&self, name: &str) -> AppResult<ActionOutput> {
        if name.trim().is_empty() {
            return Ok(ActionOutput::fail(MSG_GENRE_NAME_REQUIRED));
        }

        // read-then-write: a concurrent create with the same name can slip
        // past this check, there is no unique index behind it
        if self.name_in_use(name, None)? {
            return Ok(ActionOutput::fail(MSG_GENRE_NAME_TAKEN));
        }

        self.genre_repo.insert(&Genre::new(name))
    }

    pub fn update(&self, id: &str, name: &str) -> AppResult<ActionOutput> {
        let Some(mut genre) = self.genre_repo.find_by_id(id)? else {
            return Ok(ActionOutput::fail(MSG_GENRE_NOT_FOUND));
        };

        if name.trim().is_empty() {
            return Ok(ActionOutput::fail(MSG_GENRE_NAME_REQUIRED));
        }

        if self.name_in_use(name, Some(id))? {
            return Ok(ActionOutput::fail(MSG_GENRE_NAME_TAKEN));
        }

        genre.name = name.to_string();
        self.genre_repo.update(&genre)
    }

    pub fn delete(&self, id: &str) -> AppResult<ActionOutput> {
        if self.genre_repo.find_by_id(id)?.is_none() {
            return Ok(ActionOutput::fail(MSG_GENRE_NOT_FOUND));
        }

        if self.guard.genre_has_movies(id)? {
            return Ok(ActionOutput::fail(MSG_GENRE_HAS_MOVIES));
        }

        self.genre_repo.remove_by_id(id)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Genre>> {
        self.genre_repo.find_by_id(id)
    }

    pub fn list(&self, input: Option<&GenreListInput>) -> AppResult<ListOutput<Genre>> {
        let result = self.genre_repo.list(input)?;
        if result.is_empty() {
            return Ok(ListOutput::empty(MSG_NO_GENRE_FOUND));
        }

        Ok(result)
    }

    /// Tokenized duplicate probe: a stored name containing every token of
    /// the candidate counts as taken. `exclude` skips the record being
    /// updated.
    fn name_in_use(&self, name: &str, exclude: Option<&str>) -> AppResult<bool> {
        Ok(self
            .genre_repo
            .find_one_where(|g| {
                exclude.map_or(true, |id| g.id != id) && contains_all_tokens(&g.name, name)
            })?
            .is_some())
    }
}
