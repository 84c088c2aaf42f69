//! Lesson navigation over a closed, non-cyclic lesson sequence.
//!
//! The navigator owns the active lesson id. Lookups never fail: an id that is
//! not part of the course displays the first lesson instead.

use std::sync::Arc;

use crate::course::{Course, Lesson};
use crate::error::NavError;

/// The two pseudo-states of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Resolved(usize),
    /// Active id is not in the course; the first lesson is displayed.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct LessonNavigator {
    course: Arc<Course>,
    active: String,
}

impl LessonNavigator {
    pub fn new(course: Arc<Course>, initial: impl Into<String>) -> Self {
        Self { course, active: initial.into() }
    }

    /// Start on the first lesson.
    pub fn at_start(course: Arc<Course>) -> Self {
        let first = course.first().id.clone();
        Self::new(course, first)
    }

    pub fn course(&self) -> &Course { &self.course }
    pub fn active_id(&self) -> &str { &self.active }

    /// Set the active id unconditionally, even if no lesson carries it.
    pub fn select_lesson(&mut self, id: impl Into<String>) {
        self.active = id.into();
        if self.course.position(&self.active).is_none() {
            tracing::debug!(id = %self.active, "selected lesson is not in the course");
        }
    }

    pub fn selection(&self) -> Selection {
        match self.course.position(&self.active) {
            Some(i) => Selection::Resolved(i),
            None => Selection::Fallback,
        }
    }

    pub fn current_index(&self) -> Option<usize> { self.course.position(&self.active) }

    /// The displayed lesson: the active one, or the first lesson if the
    /// active id does not resolve.
    pub fn current(&self) -> &Lesson {
        self.course.lesson(&self.active).unwrap_or_else(|| self.course.first())
    }

    pub fn try_current(&self) -> Result<&Lesson, NavError> {
        self.course.lesson(&self.active).ok_or_else(|| NavError::NotFound(self.active.clone()))
    }

    /// Where `next()` would land, if it moves at all.
    pub fn peek_next(&self) -> Option<&Lesson> {
        // An unresolved selection sits before the first lesson.
        let target = match self.current_index() {
            Some(i) => i + 1,
            None => 0,
        };
        self.course.lessons().get(target)
    }

    /// Where `previous()` would land, if it moves at all.
    pub fn peek_previous(&self) -> Option<&Lesson> {
        let i = self.current_index()?;
        i.checked_sub(1).and_then(|p| self.course.lessons().get(p))
    }

    /// Advance one lesson. No-op on the last lesson. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        match self.peek_next().map(|l| l.id.clone()) {
            Some(id) => {
                self.active = id;
                true
            }
            None => false,
        }
    }

    /// Step back one lesson. No-op on the first lesson or an unresolved
    /// selection. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        match self.peek_previous().map(|l| l.id.clone()) {
            Some(id) => {
                self.active = id;
                true
            }
            None => false,
        }
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        self.course
            .lessons()
            .iter()
            .map(|l| SidebarEntry {
                id: l.id.clone(),
                title: l.title.clone(),
                duration: l.duration.clone(),
                active: l.id == self.active,
            })
            .collect()
    }
}
