use std::path::PathBuf;

pub const COURSE_DIR: &str = "course";
pub const INDEX_PAGE: &str = "index.html";

/// Slug used instead of `index`, which names the course entry page.
pub const RESERVED_INDEX_SLUG: &str = "index-lesson";

/// File-name safe form of a lesson id. ASCII alphanumerics, `-` and `_` are
/// kept, everything else becomes `-`. Never `index`.
pub fn page_slug(lesson_id: &str) -> String {
    let slug: String = lesson_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    if slug.is_empty() {
        "lesson".to_string()
    } else if slug.eq_ignore_ascii_case("index") {
        RESERVED_INDEX_SLUG.to_string()
    } else {
        slug
    }
}

/// Path of a lesson page relative to the site root.
pub fn lesson_page_path(lesson_id: &str) -> PathBuf {
    PathBuf::from(COURSE_DIR).join(format!("{}.html", page_slug(lesson_id)))
}

/// Link from one lesson page to another (both live in `course/`).
pub fn lesson_href(lesson_id: &str) -> String {
    format!("{}.html", page_slug(lesson_id))
}

/// Link from the landing page to the course entry page.
pub fn course_entry_href() -> String {
    format!("{}/{}", COURSE_DIR, INDEX_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_keeps_safe_chars() {
        assert_eq!(page_slug("practice-favorite_2"), "practice-favorite_2");
        assert_eq!(page_slug("a/b c"), "a-b-c");
        assert_eq!(page_slug(""), "lesson");
    }

    #[test]
    fn index_id_never_maps_to_entry_page() {
        assert_eq!(page_slug("index"), RESERVED_INDEX_SLUG);
        assert_eq!(page_slug("INDEX"), RESERVED_INDEX_SLUG);
        assert_ne!(lesson_page_path("index"), PathBuf::from(COURSE_DIR).join(INDEX_PAGE));
    }

    #[test]
    fn page_path_under_course_dir() {
        assert_eq!(lesson_page_path("intro"), PathBuf::from("course/intro.html"));
        assert_eq!(lesson_href("../etc"), "---etc.html");
    }
}
