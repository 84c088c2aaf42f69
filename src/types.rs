use serde::{Deserialize, Serialize};

use crate::course::{Course, Lesson};
use crate::error::CourseError;
use crate::media::MediaType;

/// On-disk lesson form. The media type stays a free string so unknown values
/// degrade to a placeholder instead of failing the whole file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LessonRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default, alias = "videoUrl")]
    pub video_url: String,
    #[serde(default, alias = "mediaType")]
    pub media_type: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<LessonRecord>,
}

pub(crate) fn lesson_from_record(r: LessonRecord) -> Lesson {
    let media_type = MediaType::from_tag(r.media_type.as_deref());
    Lesson { id: r.id, title: r.title, duration: r.duration, video_url: r.video_url, media_type }
}

pub(crate) fn lesson_to_record(l: &Lesson) -> LessonRecord {
    LessonRecord {
        id: l.id.clone(),
        title: l.title.clone(),
        duration: l.duration.clone(),
        video_url: l.video_url.clone(),
        media_type: Some(l.media_type.as_str().to_string()),
    }
}

pub(crate) fn course_from_record(r: CourseRecord) -> Result<Course, CourseError> {
    Course::new(r.title, r.lessons.into_iter().map(lesson_from_record).collect())
}

pub fn course_to_record(c: &Course) -> CourseRecord {
    CourseRecord { title: c.title().to_string(), lessons: c.lessons().iter().map(lesson_to_record).collect() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_media_type_becomes_placeholder() {
        let r: CourseRecord = toml::from_str(
            r#"
            title = "T"
            [[lessons]]
            id = "a"
            title = "A"
            videoUrl = "https://vimeo.com/1"
            mediaType = "vimeo"

            [[lessons]]
            id = "b"
            title = "B"
            "#,
        )
        .unwrap();
        let c = course_from_record(r).unwrap();
        assert_eq!(c.lessons()[0].media_type, MediaType::Placeholder);
        assert_eq!(c.lessons()[0].video_url, "https://vimeo.com/1");
        assert_eq!(c.lessons()[1].media_type, MediaType::Placeholder);
        assert_eq!(c.lessons()[1].duration, "");
    }

    #[test]
    fn sample_course_survives_toml() {
        let c = crate::course::sample_course();
        let text = toml::to_string(&course_to_record(&c)).unwrap();
        let back = course_from_record(toml::from_str(&text).unwrap()).unwrap();
        assert_eq!(back, c);
    }
}
