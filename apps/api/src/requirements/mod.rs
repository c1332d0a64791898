// Requirement gap engine.
// Implements: requirement catalog, posting scanner, profile status resolution.
// Pure functions only; callers persist anything they want to keep.

pub mod catalog;
pub mod handlers;
pub mod models;
pub mod scanner;
pub mod status;
