//! HTML rendering for the landing page and lesson player pages.
//!
//! Output is plain markup with utility class names; styling lives outside
//! this crate. All text and attribute values pass through [`escape`].

use crate::landing::LandingContent;
use crate::mapping::{course_entry_href, lesson_href};
use crate::media::{EmbedDescriptor, EmbedMount, Sizing};
use crate::navigator::SidebarEntry;
use crate::player::CoursePlayer;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn render_landing(content: &LandingContent) -> String {
    let mut body = String::new();
    body.push_str("<main class=\"landing\">\n");
    body.push_str(&format!("<h1>{}</h1>\n<p class=\"tagline\">{}</p>\n", escape(&content.headline), escape(&content.tagline)));

    body.push_str("<section class=\"benefits\">\n");
    for b in &content.benefits {
        body.push_str(&format!(
            "<div class=\"feature-card\"><span class=\"icon icon-{}\"></span><h3>{}</h3><p>{}</p></div>\n",
            escape(&b.icon),
            escape(&b.title),
            escape(&b.description)
        ));
    }
    body.push_str("</section>\n");

    body.push_str(&format!("<section class=\"modules\">\n<h2>{}</h2>\n", escape(&content.modules_heading)));
    for m in &content.modules {
        body.push_str(&format!(
            "<div class=\"card\"><h3>{}</h3><p>{}</p></div>\n",
            escape(&m.title),
            escape(&m.description)
        ));
    }
    body.push_str("</section>\n");

    let entry = escape(&course_entry_href());
    body.push_str(&format!(
        "<div class=\"cta\">\n<a class=\"button primary\" href=\"{0}\">{1}</a>\n<a class=\"button outline\" href=\"{0}\">{2}</a>\n</div>\n",
        entry,
        escape(&content.primary_cta),
        escape(&content.secondary_cta)
    ));
    body.push_str("</main>\n");

    body.push_str("<footer>\n");
    for l in &content.footer_links {
        body.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><span class=\"icon icon-{}\"></span>{}</a>\n",
            escape(&l.href),
            escape(&l.icon),
            escape(&l.label)
        ));
    }
    body.push_str("</footer>\n");

    page(&content.headline, &body)
}

/// Markup for one embed. The loading overlay is emitted while the mount is
/// still loading; a script hook removes it on the frame's `load` event.
pub fn render_embed(mount: &EmbedMount) -> String {
    let d = mount.descriptor();
    let box_class = match &d.sizing {
        Sizing::AspectBox { ratio, .. } => ratio.css_class(),
        Sizing::FixedHeight { .. } => "",
    };
    let mut out = if box_class.is_empty() {
        "<div class=\"card embed\">\n".to_string()
    } else {
        format!("<div class=\"card embed {}\">\n", box_class)
    };
    match &d.src {
        None => out.push_str(&render_placeholder()),
        Some(src) => out.push_str(&render_frame(d, src)),
    }
    if mount.show_spinner() {
        out.push_str("<div class=\"loading-overlay\"><div class=\"spinner\"></div></div>\n");
    }
    out.push_str("</div>\n");
    out
}

fn render_frame(d: &EmbedDescriptor, src: &str) -> String {
    let mut attrs = vec![
        format!("src=\"{}\"", escape(src)),
        format!("title=\"{}\"", escape(&d.title)),
    ];
    match &d.sizing {
        Sizing::FixedHeight { height } => {
            attrs.push("width=\"100%\"".to_string());
            attrs.push(format!("height=\"{}\"", escape(height)));
        }
        Sizing::AspectBox { height: Some(h), .. } => attrs.push(format!("height=\"{}\"", escape(h))),
        Sizing::AspectBox { height: None, .. } => {}
    }
    if let Some(fb) = &d.frame_border {
        attrs.push(format!("frameborder=\"{}\"", escape(fb)));
    }
    if let Some(allow) = &d.allow {
        attrs.push(format!("allow=\"{}\"", escape(allow)));
    }
    if d.allow_fullscreen {
        attrs.push("allowfullscreen".to_string());
    }
    attrs.push("onload=\"this.parentElement.classList.add('loaded')\"".to_string());
    format!("<iframe {}></iframe>\n", attrs.join(" "))
}

fn render_placeholder() -> String {
    "<div class=\"placeholder\"><span class=\"icon icon-play-circle\"></span>\
     <p>Video or interactive content will be displayed here</p>\
     <p class=\"hint\">Supports Loom, YouTube, or custom iframes</p></div>\n"
        .to_string()
}

pub fn render_sidebar(entries: &[SidebarEntry]) -> String {
    let mut out = String::from("<nav class=\"sidebar\">\n<ul>\n");
    for e in entries {
        let class = if e.active { "lesson active" } else { "lesson" };
        out.push_str(&format!(
            "<li><a class=\"{}\" href=\"{}\" data-lesson-id=\"{}\"><span class=\"icon icon-play-circle\"></span>\
             <span class=\"title\">{}</span><span class=\"duration\">({})</span></a></li>\n",
            class,
            escape(&lesson_href(&e.id)),
            escape(&e.id),
            escape(&e.title),
            escape(&e.duration)
        ));
    }
    out.push_str("</ul>\n</nav>\n");
    out
}

/// Full lesson page for the player's displayed lesson. Previous/next links
/// point at the current page when there is nowhere to go.
pub fn render_lesson_page(player: &CoursePlayer, body: &str) -> String {
    let nav = player.navigator();
    let lesson = player.current();
    let here = lesson_href(&lesson.id);
    let prev = nav.peek_previous().map(|l| lesson_href(&l.id)).unwrap_or_else(|| here.clone());
    let next = nav.peek_next().map(|l| lesson_href(&l.id)).unwrap_or_else(|| here.clone());

    let mut html = String::new();
    html.push_str("<div class=\"course\">\n");
    html.push_str(&render_sidebar(&player.sidebar()));
    html.push_str("<div class=\"content\">\n<div class=\"lesson-header\">\n");
    html.push_str(&format!(
        "<a class=\"button outline\" href=\"{}\" aria-label=\"Previous lesson\">Previous</a>\n",
        escape(&prev)
    ));
    html.push_str(&format!("<h1>{}</h1>\n", escape(&lesson.title)));
    html.push_str(&format!(
        "<a class=\"button primary\" href=\"{}\" aria-label=\"Next lesson\">Next</a>\n",
        escape(&next)
    ));
    html.push_str("</div>\n");
    html.push_str(&render_embed(&EmbedMount::new(player.current_embed())));
    html.push_str(&format!("<div class=\"prose\"><p>{}</p></div>\n", escape(body)));
    html.push_str("</div>\n</div>\n");

    page(&format!("{} | {}", lesson.title, nav.course().title()), &html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{sample_course, SAMPLE_DEFAULT_LESSON};
    use crate::media::{resolve, EmbedOptions, MediaType};
    use std::sync::Arc;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn landing_links_to_course() {
        let html = render_landing(&LandingContent::default());
        assert!(html.contains("<h1>The Apology Coach</h1>"));
        assert!(html.contains("href=\"course/index.html\">Enroll Now</a>"));
        assert_eq!(html.matches("class=\"feature-card\"").count(), 3);
    }

    #[test]
    fn toughtongue_frame_has_grants_and_height() {
        let d = resolve(MediaType::ToughTongue, "https://x/embed/1?a=1&b=2", &EmbedOptions::default());
        let html = render_embed(&EmbedMount::new(d));
        assert!(html.contains("src=\"https://x/embed/1?a=1&amp;b=2\""));
        assert!(html.contains("allow=\"microphone; camera; display-capture\""));
        assert!(html.contains("height=\"700px\""));
        assert!(html.contains("<div class=\"card embed\">"));
        assert!(html.contains("loading-overlay"));
    }

    #[test]
    fn placeholder_has_no_frame_or_spinner() {
        let d = resolve(MediaType::Placeholder, "", &EmbedOptions::default());
        let html = render_embed(&EmbedMount::new(d));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("loading-overlay"));
        assert!(html.contains("aspect-video"));
    }

    #[test]
    fn loaded_mount_drops_overlay() {
        let d = resolve(MediaType::Youtube, "abc", &EmbedOptions::default());
        let mut mount = EmbedMount::new(d);
        mount.mark_loaded();
        assert!(!render_embed(&mount).contains("loading-overlay"));
    }

    #[test]
    fn lesson_page_links_neighbours() {
        let player = CoursePlayer::new(Arc::new(sample_course()), Some(SAMPLE_DEFAULT_LESSON));
        let html = render_lesson_page(&player, "body text");
        assert!(html.contains("href=\"favorite-product-question.html\" aria-label=\"Previous lesson\""));
        assert!(html.contains("href=\"practice-favorite-product-question.html\" aria-label=\"Next lesson\""));
        assert!(html.contains("class=\"lesson active\" href=\"answer-favorite-product-question.html\""));
        assert!(html.contains("<span class=\"duration\">(1:31)</span>"));
    }

    #[test]
    fn last_lesson_next_points_at_itself() {
        let course = Arc::new(sample_course());
        let last = course.lessons()[3].id.clone();
        let player = CoursePlayer::new(course, Some(&last));
        let html = render_lesson_page(&player, "");
        assert!(html.contains(&format!("href=\"{}.html\" aria-label=\"Next lesson\"", last)));
    }
}
