// src/services/streaming_service.rs
use std::sync::Arc;

use crate::domain::Streaming;
use crate::dto::{ActionOutput, ListOutput, StreamingListInput};
use crate::error::AppResult;
use crate::repositories::{contains_all_tokens, Repository};
use crate::services::ReferentialIntegrityGuard;

pub const MSG_STREAMING_NAME_REQUIRED: &str = "Enter a name for the streaming!";
pub const MSG_STREAMING_NAME_TAKEN: &str = "There is already a streaming with this name!";
pub const MSG_STREAMING_NOT_FOUND: &str = "Streaming not found!";
pub const MSG_STREAMING_HAS_MOVIES: &str = "There are movies linked to this streaming!";
pub const MSG_NO_STREAMING_FOUND: &str = "No streaming found!";

pub struct StreamingService {
    streaming_repo: Arc<Repository<Streaming>>,
    guard: Arc<ReferentialIntegrityGuard>,
}

impl StreamingService {
    pub fn new(
        streaming_repo: Arc<Repository<Streaming>>,
        guard: Arc<ReferentialIntegrityGuard>,
    ) -> Self {
        Self {
            streaming_repo,
            guard,
        }
    }

    pub fn create(&self, name: &str) -> AppResult<ActionOutput> {
        if name.trim().is_empty() {
            return Ok(ActionOutput::fail(MSG_STREAMING_NAME_REQUIRED));
        }

        if self.name_in_use(name, None)? {
            return Ok(ActionOutput::fail(MSG_STREAMING_NAME_TAKEN));
        }

        self.streaming_repo.insert(&Streaming::new(name))
    }

    pub fn update(&self, id: &str, name: &str) -> AppResult<ActionOutput> {
        let Some(mut streaming) = self.streaming_repo.find_by_id(id)? else {
            return Ok(ActionOutput::fail(MSG_STREAMING_NOT_FOUND));
        };

        if name.trim().is_empty() {
            return Ok(ActionOutput::fail(MSG_STREAMING_NAME_REQUIRED));
        }

        if self.name_in_use(name, Some(id))? {
            return Ok(ActionOutput::fail(MSG_STREAMING_NAME_TAKEN));
        }

        streaming.name = name.to_string();
        self.streaming_repo.update(&streaming)
    }

    pub fn delete(&self, id: &str) -> AppResult<ActionOutput> {
        if self.streaming_repo.find_by_id(id)?.is_none() {
            return Ok(ActionOutput::fail(MSG_STREAMING_NOT_FOUND));
        }

        if self.guard.streaming_has_movies(id)? {
            return Ok(ActionOutput::fail(MSG_STREAMING_HAS_MOVIES));
        }

        self.streaming_repo.remove_by_id(id)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Streaming>> {
        self.streaming_repo.find_by_id(id)
    }

    pub fn list(&self, input: Option<&StreamingListInput>) -> AppResult<ListOutput<Streaming>> {
        let result = self.streaming_repo.list(input)?;
        if result.is_empty() {
            return Ok(ListOutput::empty(MSG_NO_STREAMING_FOUND));
        }

        Ok(result)
    }

    fn name_in_use(&self, name: &str, exclude: Option<&str>) -> AppResult<bool> {
        Ok(self
            .streaming_repo
            .find_one_where(|s| {
                exclude.map_or(true, |id| s.id != id) && contains_all_tokens(&s.name, name)
            })?
            .is_some())
    }
}
