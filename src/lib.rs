// src/lib.rs
// MovieHub - movie catalog core
//
// Architecture:
// - domain: plain entity documents; the store assigns identity
// - dto: boundary inputs, filters and result envelopes
// - repositories: one generic document repository, instantiated per collection
// - services: ordered validation chains + referential integrity guard
// - db: pooled SQLite acting as the document store
//
// Business-rule violations are values (failed envelopes with a message),
// never errors; AppError is reserved for store and serialization faults.

pub mod application;
pub mod db;
pub mod domain;
pub mod dto;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use application::AppState;

pub use domain::{Genre, Movie, Rating, Streaming, User};

pub use dto::{
    ActionOutput, GenreFiltersInput, GenreListInput, ListInput, ListOutput, LoginInput,
    MovieFiltersInput, MovieInput, MovieListInput, PaginatorInput, RatingFiltersInput,
    RatingInput, RatingListInput, StreamingFiltersInput, StreamingListInput, UserFiltersInput,
    UserInput, UserListInput,
};

pub use error::{AppError, AppResult};

pub use repositories::{Document, Repository};

pub use services::{
    GenreService, MovieService, RatingService, ReferentialIntegrityGuard, StreamingService,
    UserService,
};
