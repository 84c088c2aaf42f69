use std::sync::Arc;

use crate::course::{Course, Lesson};
use crate::media::{self, AspectRatio, EmbedDescriptor, EmbedOptions, MediaType};
use crate::navigator::{LessonNavigator, SidebarEntry};

/// Top-level view state of the lesson player: the navigator plus the mobile
/// sidebar toggle. All selection changes go through here.
#[derive(Debug, Clone)]
pub struct CoursePlayer {
    nav: LessonNavigator,
    sidebar_open: bool,
    embed: EmbedSettings,
}

/// Per-site embed defaults applied when resolving the current lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSettings {
    pub aspect_ratio: AspectRatio,
    pub toughtongue_height: Option<String>,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self { aspect_ratio: AspectRatio::Wide, toughtongue_height: None }
    }
}

impl CoursePlayer {
    /// Mount the player on `initial`. `None` starts on the first lesson.
    pub fn new(course: Arc<Course>, initial: Option<&str>) -> Self {
        let nav = match initial {
            Some(id) => LessonNavigator::new(course, id),
            None => LessonNavigator::at_start(course),
        };
        Self { nav, sidebar_open: false, embed: EmbedSettings::default() }
    }

    pub fn with_embed_settings(mut self, embed: EmbedSettings) -> Self {
        self.embed = embed;
        self
    }

    pub fn navigator(&self) -> &LessonNavigator { &self.nav }
    pub fn current(&self) -> &Lesson { self.nav.current() }
    pub fn sidebar(&self) -> Vec<SidebarEntry> { self.nav.sidebar() }
    pub fn sidebar_open(&self) -> bool { self.sidebar_open }

    pub fn toggle_sidebar(&mut self) { self.sidebar_open = !self.sidebar_open; }

    pub fn select_lesson(&mut self, id: &str) { self.nav.select_lesson(id); }

    /// Sidebar click: select the lesson and close the (mobile) sidebar.
    pub fn choose_from_sidebar(&mut self, id: &str) {
        self.nav.select_lesson(id);
        self.sidebar_open = false;
    }

    pub fn next(&mut self) -> bool { self.nav.next() }
    pub fn previous(&mut self) -> bool { self.nav.previous() }

    /// Embed for the displayed lesson, framed with the lesson title.
    pub fn current_embed(&self) -> EmbedDescriptor {
        let lesson = self.nav.current();
        media::resolve(lesson.media_type, &lesson.video_url, &self.embed_options(lesson))
    }

    pub fn embed_options(&self, lesson: &Lesson) -> EmbedOptions {
        EmbedOptions {
            aspect_ratio: self.embed.aspect_ratio,
            height: match lesson.media_type {
                MediaType::ToughTongue => self.embed.toughtongue_height.clone(),
                _ => None,
            },
            ..EmbedOptions::titled(lesson.title.clone())
        }
    }
}
