//! Error types for course validation and strict lesson lookup

use thiserror::Error;

/// Errors raised when a course definition cannot be used for navigation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("course `{0}` has no lessons")]
    Empty(String),

    #[error("duplicate lesson id `{0}`")]
    DuplicateLesson(String),

    #[error("lessons `{first}` and `{second}` map to the same page `{slug}`")]
    SlugCollision { first: String, second: String, slug: String },
}

/// Returned by the strict lookups that refuse to fall back to the first lesson
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("lesson not found: {0}")]
    NotFound(String),
}
