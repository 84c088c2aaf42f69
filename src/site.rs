use anyhow::{Context, Result};
use futures::future::try_join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::course::Course;
use crate::mapping::{lesson_page_path, COURSE_DIR, INDEX_PAGE};
use crate::player::CoursePlayer;
use crate::render::{render_landing, render_lesson_page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Relative to the site root.
    pub path: PathBuf,
    pub html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteReport {
    pub out_dir: PathBuf,
    pub pages_written: usize,
    pub default_lesson: String,
}

/// Every page of the static site: the landing page, the course entry page
/// (the player as mounted), and one page per lesson.
pub fn plan_site(course: Arc<Course>, cfg: &SiteConfig) -> Vec<Page> {
    let mount = CoursePlayer::new(course.clone(), cfg.initial_lesson()).with_embed_settings(cfg.embed_settings());
    let body = cfg.course.body.as_str();

    let mut pages = Vec::with_capacity(course.len() + 2);
    pages.push(Page { path: PathBuf::from(INDEX_PAGE), html: render_landing(&cfg.site) });
    pages.push(Page { path: Path::new(COURSE_DIR).join(INDEX_PAGE), html: render_lesson_page(&mount, body) });

    for lesson in course.lessons() {
        let mut player = mount.clone();
        player.select_lesson(&lesson.id);
        pages.push(Page { path: lesson_page_path(&lesson.id), html: render_lesson_page(&player, body) });
    }
    pages
}

/// Write pages under `out_dir`, creating directories as needed. Existing
/// files with the same names are overwritten.
pub async fn write_site(out_dir: &Path, pages: Vec<Page>) -> Result<usize> {
    tokio::fs::create_dir_all(out_dir.join(COURSE_DIR))
        .await
        .with_context(|| format!("creating output dir: {}", out_dir.display()))?;

    let count = pages.len();
    try_join_all(pages.into_iter().map(|p| async move {
        let dest = out_dir.join(&p.path);
        tokio::fs::write(&dest, p.html.as_bytes())
            .await
            .with_context(|| format!("writing page: {}", dest.display()))?;
        tracing::debug!(page = %dest.display(), "wrote page");
        Ok::<_, anyhow::Error>(())
    }))
    .await?;
    Ok(count)
}
