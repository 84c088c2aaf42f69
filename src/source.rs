use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::course::{sample_course, Course};
use crate::types::{course_from_record, CourseRecord};

/// Content-loading collaborator: where a course definition comes from.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn load_course(&self) -> Result<Course>;
    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// The hard-coded sample course.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCourse;

#[async_trait]
impl CourseSource for BuiltinCourse {
    async fn load_course(&self) -> Result<Course> { Ok(sample_course()) }
    fn describe(&self) -> String { "built-in sample course".to_string() }
}

/// A course given inline in the site configuration.
#[derive(Debug, Clone)]
pub struct InlineCourse {
    record: CourseRecord,
}

impl InlineCourse {
    pub(crate) fn new(record: CourseRecord) -> Self { Self { record } }
}

#[async_trait]
impl CourseSource for InlineCourse {
    async fn load_course(&self) -> Result<Course> {
        course_from_record(self.record.clone()).context("invalid inline course in configuration")
    }
    fn describe(&self) -> String { format!("inline course `{}`", self.record.title) }
}

/// A standalone TOML course file.
#[derive(Debug, Clone)]
pub struct TomlCourseFile {
    path: PathBuf,
}

impl TomlCourseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
    pub fn path(&self) -> &Path { &self.path }
}

#[async_trait]
impl CourseSource for TomlCourseFile {
    async fn load_course(&self) -> Result<Course> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading course file: {}", self.path.display()))?;
        let record: CourseRecord = toml::from_str(&text)
            .with_context(|| format!("parsing course file: {}", self.path.display()))?;
        course_from_record(record).with_context(|| format!("invalid course in {}", self.path.display()))
    }
    fn describe(&self) -> String { format!("course file {}", self.path.display()) }
}
