// src/services/user_service.rs
use std::sync::Arc;

use crate::domain::User;
use crate::dto::{ActionOutput, ListOutput, LoginInput, UserInput, UserListInput};
use crate::error::AppResult;
use crate::repositories::Repository;
use crate::services::ReferentialIntegrityGuard;

pub const MSG_USER_EMAIL_REQUIRED: &str = "Email not provided!";
pub const MSG_USER_NAME_REQUIRED: &str = "Name not provided!";
pub const MSG_USER_PASSWORD_REQUIRED: &str = "Password not provided!";
pub const MSG_USER_EMAIL_TAKEN: &str = "Email is already linked to another user!";
pub const MSG_USER_NOT_FOUND: &str = "User not found!";
pub const MSG_NO_USER_FOUND: &str = "No user found!";
pub const MSG_LOGIN_DATA_REQUIRED: &str = "No login data provided!";

pub struct UserService {
    user_repo: Arc<Repository<User>>,
    guard: Arc<ReferentialIntegrityGuard>,
}

impl UserService {
    pub fn new(user_repo: Arc<Repository<User>>, guard: Arc<ReferentialIntegrityGuard>) -> Self {
        Self { user_repo, guard }
    }

    /// Credential comparison only; token issuance is the auth layer's job
    pub fn login(&self, input: &LoginInput) -> AppResult<ActionOutput> {
        if input.email.is_empty() || input.password.is_empty() {
            return Ok(ActionOutput::fail(MSG_LOGIN_DATA_REQUIRED));
        }

        let user = self
            .user_repo
            .find_one_where(|u| u.password == input.password && u.email == input.email)?;

        Ok(match user {
            Some(_) => ActionOutput::ok(),
            None => ActionOutput::fail(MSG_USER_NOT_FOUND),
        })
    }

    pub fn create(&self, input: &UserInput) -> AppResult<ActionOutput> {
        if input.email.is_empty() {
            return Ok(ActionOutput::fail(MSG_USER_EMAIL_REQUIRED));
        }

        if input.name.is_empty() {
            return Ok(ActionOutput::fail(MSG_USER_NAME_REQUIRED));
        }

        if input.password.is_empty() {
            return Ok(ActionOutput::fail(MSG_USER_PASSWORD_REQUIRED));
        }

        if self.email_in_use(&input.email, None)? {
            return Ok(ActionOutput::fail(MSG_USER_EMAIL_TAKEN));
        }

        self.user_repo.insert(&User::from(input))
    }

    /// Password is not revalidated on update; whatever the input carries
    /// replaces the stored value. There is no separate existence check:
    /// replacing an absent id surfaces as a storage-write failure.
    pub fn update(&self, id: &str, input: &UserInput) -> AppResult<ActionOutput> {
        if input.email.is_empty() {
            return Ok(ActionOutput::fail(MSG_USER_EMAIL_REQUIRED));
        }

        if input.name.is_empty() {
            return Ok(ActionOutput::fail(MSG_USER_NAME_REQUIRED));
        }

        if self.email_in_use(&input.email, Some(id))? {
            return Ok(ActionOutput::fail(MSG_USER_EMAIL_TAKEN));
        }

        let mut user = User::from(input);
        user.id = id.to_string();
        self.user_repo.update(&user)
    }

    /// Never blocked: ratings owned by the user are cascaded away first
    pub fn delete(&self, id: &str) -> AppResult<ActionOutput> {
        if self.user_repo.find_by_id(id)?.is_none() {
            return Ok(ActionOutput::fail(MSG_USER_NOT_FOUND));
        }

        self.guard.remove_user_ratings(id)?;
        self.user_repo.remove_by_id(id)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(id)
    }

    pub fn list(&self, input: Option<&UserListInput>) -> AppResult<ListOutput<User>> {
        let result = self.user_repo.list(input)?;
        if result.is_empty() {
            return Ok(ListOutput::empty(MSG_NO_USER_FOUND));
        }

        Ok(result)
    }

    /// Emails are unique by exact match; `exclude` skips the record being
    /// updated so a user can keep their own email.
    fn email_in_use(&self, email: &str, exclude: Option<&str>) -> AppResult<bool> {
        Ok(self
            .user_repo
            .find_one_where(|u| exclude.map_or(true, |id| u.id != id) && u.email == email)?
            .is_some())
    }
}
