pub mod config;
pub mod course;
pub mod error;
pub mod landing;
pub mod mapping;
pub mod media;
pub mod navigator;
pub mod player;
pub mod render;
pub mod site;
pub mod source;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::course::{Course, Lesson};
    pub use crate::error::{CourseError, NavError};
    pub use crate::media::{AspectRatio, EmbedDescriptor, EmbedMount, EmbedOptions, LoadState, MediaType, Sizing};
    pub use crate::navigator::{LessonNavigator, Selection, SidebarEntry};
    pub use crate::player::{CoursePlayer, EmbedSettings};
    pub use crate::site::SiteReport;
    pub use crate::Courseview;
}

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::course::{Course, Lesson};
use crate::media::EmbedDescriptor;
use crate::player::CoursePlayer;
use crate::site::{plan_site, write_site, SiteReport};

/// Library entry point. Owns the loaded course and the site configuration.
pub struct Courseview {
    config: SiteConfig,
    course: Arc<Course>,
}

impl Courseview {
    /// Load the course named by `config` from its source.
    pub async fn open(config: SiteConfig) -> Result<Self> {
        let source = config.course_source();
        let course = source.load_course().await?;
        tracing::info!(source = %source.describe(), lessons = course.len(), "course loaded");
        if let Some(id) = config.initial_lesson() {
            if course.position(id).is_none() {
                tracing::warn!(id, "default lesson is not in the course; the first lesson will be shown");
            }
        }
        Ok(Self { config, course: Arc::new(course) })
    }

    /// Resolve configuration (see [`SiteConfig::load`]) and open the course.
    pub async fn from_config_path(path: Option<&Path>) -> Result<Self> {
        Self::open(SiteConfig::load(path).await?).await
    }

    pub fn config(&self) -> &SiteConfig { &self.config }
    pub fn course(&self) -> &Course { &self.course }
    pub fn shared_course(&self) -> Arc<Course> { self.course.clone() }

    /// A freshly mounted player, on the configured default lesson.
    pub fn player(&self) -> CoursePlayer {
        CoursePlayer::new(self.course.clone(), self.config.initial_lesson())
            .with_embed_settings(self.config.embed_settings())
    }

    /// Lesson shown for `id`, falling back to the first lesson.
    pub fn lesson_or_first(&self, id: &str) -> &Lesson {
        self.course.lesson(id).unwrap_or_else(|| self.course.first())
    }

    /// Embed for the lesson shown for `id`.
    pub fn lesson_embed(&self, id: &str) -> EmbedDescriptor {
        let mut player = self.player();
        player.select_lesson(id);
        player.current_embed()
    }

    /// Render and write the whole static site under `out_dir`.
    pub async fn write_site(&self, out_dir: &Path) -> Result<SiteReport> {
        let pages = plan_site(self.course.clone(), &self.config);
        let pages_written = write_site(out_dir, pages).await?;
        let default_lesson = self.player().current().id.clone();
        tracing::info!(out = %out_dir.display(), pages = pages_written, "site written");
        Ok(SiteReport { out_dir: out_dir.to_path_buf(), pages_written, default_lesson })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_with_defaults_uses_sample() {
        let cv = Courseview::open(SiteConfig::default()).await.unwrap();
        assert_eq!(cv.course().title(), "Product Management Interview Preparation");
        assert_eq!(cv.player().current().id, "answer-favorite-product-question");
    }

    #[tokio::test]
    async fn unknown_lesson_falls_back_to_first() {
        let cv = Courseview::open(SiteConfig::default()).await.unwrap();
        assert_eq!(cv.lesson_or_first("nope").id, "favorite-product-question");
        assert_eq!(
            cv.lesson_embed("nope").src.as_deref(),
            Some("https://www.youtube.com/embed/CkhXgec-iHI")
        );
    }

    #[tokio::test]
    async fn write_site_reports_pages() {
        let tmp = tempfile::tempdir().unwrap();
        let cv = Courseview::open(SiteConfig::default()).await.unwrap();
        let report = cv.write_site(tmp.path()).await.unwrap();
        assert_eq!(report.pages_written, 6);
        assert_eq!(report.default_lesson, "answer-favorite-product-question");
        assert!(tmp.path().join("course/index.html").exists());
    }
}
