// src/application/state.rs
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Genre, Movie, Rating, Streaming, User};
use crate::repositories::Repository;
use crate::services::{
    GenreService, MovieService, RatingService, ReferentialIntegrityGuard, StreamingService,
    UserService,
};

/// Service aggregate handed to the transport layer.
///
/// Services and repositories hold no mutable state of their own; the only
/// shared thing underneath is the connection pool. A transport layer can
/// keep one AppState for the process or build a fresh one per request at
/// negligible cost.
pub struct AppState {
    pub genre_service: Arc<GenreService>,
    pub streaming_service: Arc<StreamingService>,
    pub movie_service: Arc<MovieService>,
    pub rating_service: Arc<RatingService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        let genre_repo = Arc::new(Repository::<Genre>::new(pool.clone()));
        let streaming_repo = Arc::new(Repository::<Streaming>::new(pool.clone()));
        let movie_repo = Arc::new(Repository::<Movie>::new(pool.clone()));
        let rating_repo = Arc::new(Repository::<Rating>::new(pool.clone()));
        let user_repo = Arc::new(Repository::<User>::new(pool));

        let guard = Arc::new(ReferentialIntegrityGuard::new(
            genre_repo.clone(),
            streaming_repo.clone(),
            movie_repo.clone(),
            rating_repo.clone(),
            user_repo.clone(),
        ));

        Self {
            genre_service: Arc::new(GenreService::new(genre_repo, guard.clone())),
            streaming_service: Arc::new(StreamingService::new(streaming_repo, guard.clone())),
            movie_service: Arc::new(MovieService::new(movie_repo, guard.clone())),
            rating_service: Arc::new(RatingService::new(rating_repo, guard.clone())),
            user_service: Arc::new(UserService::new(user_repo, guard)),
        }
    }
}
