// src/dto/inputs.rs
//
// Per-entity write inputs, mirroring each entity's mutable fields.
// Conversion into the stored entity always leaves the id empty; ids are
// assigned by the store on insert and preserved by services on update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Movie, Rating, User};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre_id: String,
    #[serde(default)]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub streamings_id: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingInput {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub movie_id: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub rating_value: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<&MovieInput> for Movie {
    fn from(input: &MovieInput) -> Self {
        Movie {
            id: String::new(),
            title: input.title.clone(),
            genre_id: input.genre_id.clone(),
            release_date: input.release_date.unwrap_or_default(),
            streamings_id: input.streamings_id.clone(),
        }
    }
}

impl From<&RatingInput> for Rating {
    fn from(input: &RatingInput) -> Self {
        Rating {
            id: String::new(),
            user_id: input.user_id.clone(),
            movie_id: input.movie_id.clone(),
            comment: input.comment.clone(),
            rating_value: input.rating_value,
        }
    }
}

impl From<&UserInput> for User {
    fn from(input: &UserInput) -> Self {
        User {
            id: String::new(),
            name: input.name.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        }
    }
}
