// src/services/mod.rs
//
// Services Module - Business Validation Layer
//
// One service per entity, each exposing create/update/delete/get/list.
// Create and update run an ordered, short-circuiting validation chain;
// the first violated rule's message is the whole answer. Deletes go
// through the referential integrity guard.

pub mod genre_service;
pub mod integrity;
pub mod movie_service;
pub mod rating_service;
pub mod streaming_service;
pub mod user_service;

#[cfg(test)]
mod rating_service_tests;

// Re-export all services
pub use genre_service::GenreService;
pub use integrity::ReferentialIntegrityGuard;
pub use movie_service::MovieService;
pub use rating_service::RatingService;
pub use streaming_service::StreamingService;
pub use user_service::UserService;
