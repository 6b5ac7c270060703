// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Entities here are plain documents: the store assigns their identity and
// the services layer enforces every business rule. Repositories treat them
// as opaque JSON.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod genre;
pub mod movie;
pub mod rating;
pub mod streaming;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use genre::Genre;
pub use movie::Movie;
pub use rating::Rating;
pub use streaming::Streaming;
pub use user::User;
