use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::course::{DEFAULT_LESSON_BODY, SAMPLE_DEFAULT_LESSON};
use crate::landing::LandingContent;
use crate::media::AspectRatio;
use crate::player::EmbedSettings;
use crate::source::{BuiltinCourse, CourseSource, InlineCourse, TomlCourseFile};
use crate::types::{CourseRecord, LessonRecord};

pub const CONFIG_ENV: &str = "COURSEVIEW_CONFIG";
pub const TOUGHTONGUE_HEIGHT_ENV: &str = "COURSEVIEW_TOUGHTONGUE_HEIGHT";
pub const CONFIG_FILE_NAME: &str = "courseview.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: LandingContent,
    pub embed: EmbedConfig,
    pub course: CourseConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    pub aspect_ratio: AspectRatio,
    /// Height of voice-agent frames; the resolver default applies when unset.
    pub toughtongue_height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// Lesson the player opens on. First lesson when unset.
    pub default_lesson: Option<String>,
    /// Separate course file. Relative paths resolve against the config file.
    pub file: Option<PathBuf>,
    pub title: Option<String>,
    pub lessons: Vec<LessonRecord>,
    /// Copy shown under each lesson's media.
    pub body: String,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self { default_lesson: None, file: None, title: None, lessons: Vec::new(), body: DEFAULT_LESSON_BODY.to_string() }
    }
}

impl SiteConfig {
    /// Resolve and load configuration: explicit path, then `COURSEVIEW_CONFIG`,
    /// then `courseview.toml` in the platform config dir, else defaults.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| default_config_path().filter(|p| p.exists()));

        let mut cfg = match path {
            Some(p) => Self::from_file(&p).await?,
            None => {
                tracing::debug!("no configuration file, using defaults");
                Self::default()
            }
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading config: {}", path.display()))?;
        let mut cfg: SiteConfig =
            toml::from_str(&text).with_context(|| format!("parsing config: {}", path.display()))?;
        if let (Some(file), Some(dir)) = (cfg.course.file.as_mut(), path.parent()) {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(h) = std::env::var(TOUGHTONGUE_HEIGHT_ENV).ok().filter(|s| !s.trim().is_empty()) {
            self.embed.toughtongue_height = Some(h.trim().to_string());
        }
    }

    /// Where the course comes from: a course file wins over inline lessons,
    /// which win over the built-in sample.
    pub fn course_source(&self) -> Box<dyn CourseSource> {
        if let Some(file) = &self.course.file {
            return Box::new(TomlCourseFile::new(file.clone()));
        }
        if !self.course.lessons.is_empty() {
            return Box::new(InlineCourse::new(CourseRecord {
                title: self.course.title.clone().unwrap_or_else(|| "Course".to_string()),
                lessons: self.course.lessons.clone(),
            }));
        }
        Box::new(BuiltinCourse)
    }

    /// Lesson the player mounts on.
    pub fn initial_lesson(&self) -> Option<&str> {
        match &self.course.default_lesson {
            Some(id) => Some(id.as_str()),
            None if self.course.file.is_none() && self.course.lessons.is_empty() => Some(SAMPLE_DEFAULT_LESSON),
            None => None,
        }
    }

    pub fn embed_settings(&self) -> EmbedSettings {
        EmbedSettings {
            aspect_ratio: self.embed.aspect_ratio,
            toughtongue_height: self.embed.toughtongue_height.clone(),
        }
    }
}

/// `courseview.toml` in the user's config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "courseview", "courseview").map(|p| p.config_dir().join(CONFIG_FILE_NAME))
}
