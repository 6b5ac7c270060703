// src/error/mod.rs
//
// Error module
//
// One error type shared by every layer. Business-rule failures are NOT
// errors - they travel as ActionOutput/ListOutput values. AppError is
// reserved for store and serialization faults.

pub mod types;

pub use types::{AppError, AppResult};
