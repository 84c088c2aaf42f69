use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CourseError;
use crate::mapping::page_slug;
use crate::media::MediaType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    /// Display only, e.g. "5:00". Never parsed.
    pub duration: String,
    pub video_url: String,
    pub media_type: MediaType,
}

impl Lesson {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration: impl Into<String>,
        video_url: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration: duration.into(),
            video_url: video_url.into(),
            media_type,
        }
    }
}

/// An ordered, non-empty lesson sequence. Order is the navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    title: String,
    lessons: Vec<Lesson>,
}

impl Course {
    pub fn new(title: impl Into<String>, lessons: Vec<Lesson>) -> Result<Self, CourseError> {
        let title = title.into();
        if lessons.is_empty() {
            return Err(CourseError::Empty(title));
        }
        let mut seen = HashSet::with_capacity(lessons.len());
        let mut slugs = std::collections::HashMap::with_capacity(lessons.len());
        for l in &lessons {
            if !seen.insert(l.id.as_str()) {
                return Err(CourseError::DuplicateLesson(l.id.clone()));
            }
            let slug = page_slug(&l.id);
            if let Some(first) = slugs.insert(slug.clone(), l.id.as_str()) {
                return Err(CourseError::SlugCollision { first: first.to_string(), second: l.id.clone(), slug });
            }
        }
        Ok(Self { title, lessons })
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn lessons(&self) -> &[Lesson] { &self.lessons }
    pub fn len(&self) -> usize { self.lessons.len() }

    pub fn is_empty(&self) -> bool { self.lessons.is_empty() }

    /// The fallback lesson.
    pub fn first(&self) -> &Lesson { &self.lessons[0] }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == id)
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }
}

/// Body copy shown under every lesson's media.
pub const DEFAULT_LESSON_BODY: &str = "Answers to any interview question has three distinct parts: beginning, middle, and end. Each part requires different skills and techniques to deliver a solid answer.";

/// Built-in course used when no course is configured.
pub fn sample_course() -> Course {
    let lessons = vec![
        Lesson::new(
            "favorite-product-question",
            "Integrate Voice agent into the website",
            "5:00",
            "https://www.youtube.com/watch?v=CkhXgec-iHI",
            MediaType::Youtube,
        ),
        Lesson::new(
            "answer-favorite-product-question",
            "Get your questions answered by AI",
            "1:31",
            "https://app.toughtongueai.com/embed/677e5dbd261d3f3e3803b968?bg=black&skipPrecheck=true",
            MediaType::ToughTongue,
        ),
        Lesson::new(
            "practice-favorite-product-question",
            "Practice Favorite Product Question",
            "10:00",
            "https://app.toughtongueai.com/embed/677e7676de365dba3af0055a?bg=black&skipPrecheck=true",
            MediaType::ToughTongue,
        ),
        Lesson::new(
            "practice-favorite-product-question-2",
            "Practice Favorite Product Question 2",
            "10:00",
            "https://app.toughtongueai.com/embed/67b0248abc39997a6c6a4cc7?bg=black&skipPrecheck=true",
            MediaType::ToughTongue,
        ),
    ];
    Course { title: "Product Management Interview Preparation".to_string(), lessons }
}

/// The sample course opens on its second lesson.
pub const SAMPLE_DEFAULT_LESSON: &str = "answer-favorite-product-question";

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str) -> Lesson {
        Lesson::new(id, id, "1:00", "", MediaType::Placeholder)
    }

    #[test]
    fn rejects_empty_course() {
        assert_eq!(Course::new("c", vec![]), Err(CourseError::Empty("c".into())));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Course::new("c", vec![lesson("a"), lesson("b"), lesson("a")]).unwrap_err();
        assert_eq!(err, CourseError::DuplicateLesson("a".into()));
    }

    #[test]
    fn rejects_ids_sharing_a_page() {
        let err = Course::new("c", vec![lesson("intro 1"), lesson("intro-1")]).unwrap_err();
        assert!(matches!(err, CourseError::SlugCollision { .. }));
        let err = Course::new("c", vec![lesson("index"), lesson("index-lesson")]).unwrap_err();
        assert!(matches!(err, CourseError::SlugCollision { .. }));
    }

    #[test]
    fn sample_course_is_valid() {
        let c = sample_course();
        let rebuilt = Course::new(c.title(), c.lessons().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 4);
        assert_eq!(c.position(SAMPLE_DEFAULT_LESSON), Some(1));
    }
}
