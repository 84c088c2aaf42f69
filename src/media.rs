//! Media resolution: turns a lesson's declared media type and raw URL into an
//! embed descriptor the rendering surface can hand straight to an iframe.

pub(crate) mod load;

pub use load::{EmbedMount, LoadState};

use serde::{Deserialize, Serialize};
use std::fmt;

pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
pub const LOOM_EMBED_BASE: &str = "https://www.loom.com/embed/";
pub const TOUGHTONGUE_DEFAULT_HEIGHT: &str = "700px";
pub const TOUGHTONGUE_PERMISSIONS: &str = "microphone; camera; display-capture";
pub const DEFAULT_FRAME_TITLE: &str = "Video content";

/// Supported media types. Anything unrecognized parses to `Placeholder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Youtube,
    Loom,
    #[serde(rename = "toughtongue")]
    ToughTongue,
    Iframe,
    #[default]
    Placeholder,
}

impl MediaType {
    /// Lenient parse used for configuration values. Never fails.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("youtube") => MediaType::Youtube,
            Some("loom") => MediaType::Loom,
            Some("toughtongue") => MediaType::ToughTongue,
            Some("iframe") => MediaType::Iframe,
            _ => MediaType::Placeholder,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Youtube => "youtube",
            MediaType::Loom => "loom",
            MediaType::ToughTongue => "toughtongue",
            MediaType::Iframe => "iframe",
            MediaType::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn css_class(&self) -> &'static str {
        match self {
            AspectRatio::Wide => "aspect-video",
            AspectRatio::Standard => "aspect-[4/3]",
            AspectRatio::Square => "aspect-square",
        }
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "16:9" => Ok(Self::Wide),
            "4:3" => Ok(Self::Standard),
            "1:1" => Ok(Self::Square),
            other => Err(anyhow::anyhow!(
                "unknown aspect ratio `{}` (expected 16:9, 4:3, 1:1)",
                other
            )),
        }
    }
}

/// Caller-supplied knobs. Only `iframe` honors all of them; `toughtongue`
/// honors `height` and `frame_border`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    pub title: String,
    pub aspect_ratio: AspectRatio,
    pub height: Option<String>,
    pub allow: String,
    pub frame_border: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_FRAME_TITLE.to_string(),
            aspect_ratio: AspectRatio::default(),
            height: None,
            allow: String::new(),
            frame_border: "0".to_string(),
        }
    }
}

impl EmbedOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }
}

/// How the frame is sized on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sizing {
    /// Fills an aspect-ratio box; an explicit height attribute may still be set.
    AspectBox { ratio: AspectRatio, height: Option<String> },
    /// Full width with a fixed height, no aspect box.
    FixedHeight { height: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedDescriptor {
    pub media_type: MediaType,
    /// `None` only for placeholders: nothing is fetched.
    pub src: Option<String>,
    pub title: String,
    pub sizing: Sizing,
    pub allow: Option<String>,
    pub allow_fullscreen: bool,
    pub frame_border: Option<String>,
}

impl EmbedDescriptor {
    pub fn is_placeholder(&self) -> bool { self.src.is_none() }

    /// Individual permission grants parsed from the `allow` attribute.
    pub fn permissions(&self) -> Vec<&str> {
        self.allow
            .as_deref()
            .map(|a| a.split(';').map(str::trim).filter(|p| !p.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Resolve `(media_type, raw_url)` into an embed descriptor. Never fails:
/// malformed input yields a broken embed, unknown types a placeholder.
pub fn resolve(media_type: MediaType, raw_url: &str, opts: &EmbedOptions) -> EmbedDescriptor {
    let aspect = || Sizing::AspectBox { ratio: opts.aspect_ratio, height: None };
    match media_type {
        MediaType::Youtube => EmbedDescriptor {
            media_type,
            src: Some(format!("{}{}", YOUTUBE_EMBED_BASE, youtube_id(raw_url))),
            title: opts.title.clone(),
            sizing: aspect(),
            allow: None,
            allow_fullscreen: true,
            frame_border: None,
        },
        MediaType::Loom => {
            let src = if raw_url.contains("/share/") {
                raw_url.to_string()
            } else {
                format!("{}{}", LOOM_EMBED_BASE, raw_url)
            };
            EmbedDescriptor {
                media_type,
                src: Some(src),
                title: opts.title.clone(),
                sizing: aspect(),
                allow: None,
                allow_fullscreen: true,
                frame_border: None,
            }
        }
        MediaType::ToughTongue => EmbedDescriptor {
            media_type,
            src: Some(raw_url.to_string()),
            title: opts.title.clone(),
            sizing: Sizing::FixedHeight {
                height: opts
                    .height
                    .clone()
                    .filter(|h| !h.is_empty())
                    .unwrap_or_else(|| TOUGHTONGUE_DEFAULT_HEIGHT.to_string()),
            },
            // Voice agents need these grants whatever the caller asked for.
            allow: Some(TOUGHTONGUE_PERMISSIONS.to_string()),
            allow_fullscreen: false,
            frame_border: Some(opts.frame_border.clone()),
        },
        MediaType::Iframe => EmbedDescriptor {
            media_type,
            src: Some(raw_url.to_string()),
            title: opts.title.clone(),
            sizing: Sizing::AspectBox { ratio: opts.aspect_ratio, height: opts.height.clone() },
            allow: Some(opts.allow.clone()),
            allow_fullscreen: true,
            frame_border: Some(opts.frame_border.clone()),
        },
        MediaType::Placeholder => placeholder(opts),
    }
}

/// Same as [`resolve`] but takes the raw type tag as found in configuration.
pub fn resolve_tagged(tag: Option<&str>, raw_url: &str, opts: &EmbedOptions) -> EmbedDescriptor {
    resolve(MediaType::from_tag(tag), raw_url, opts)
}

fn placeholder(opts: &EmbedOptions) -> EmbedDescriptor {
    EmbedDescriptor {
        media_type: MediaType::Placeholder,
        src: None,
        title: opts.title.clone(),
        sizing: Sizing::AspectBox { ratio: opts.aspect_ratio, height: None },
        allow: None,
        allow_fullscreen: false,
        frame_border: None,
    }
}

/// Short links take the last path segment, watch links the `v` query
/// parameter; anything else is assumed to already be an id.
fn youtube_id(raw: &str) -> String {
    if raw.contains("youtu.be") {
        return raw.rsplit('/').next().unwrap_or_default().to_string();
    }
    if raw.contains("?v=") {
        // Only the text between the first and second `?` is the query; a
        // missing `v` embeds the literal id `null`.
        let query = raw.split('?').nth(1).unwrap_or_default();
        return url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_else(|| "null".to_string());
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(mt: MediaType, url: &str) -> Option<String> {
        resolve(mt, url, &EmbedOptions::default()).src
    }

    #[test]
    fn youtube_short_link_takes_last_segment() {
        assert_eq!(
            src(MediaType::Youtube, "https://youtu.be/abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn youtube_watch_link_reads_v_param() {
        assert_eq!(
            src(MediaType::Youtube, "https://example.com/watch?v=xyz789").as_deref(),
            Some("https://www.youtube.com/embed/xyz789")
        );
        assert_eq!(
            src(MediaType::Youtube, "https://www.youtube.com/watch?v=CkhXgec-iHI&t=42").as_deref(),
            Some("https://www.youtube.com/embed/CkhXgec-iHI")
        );
    }

    #[test]
    fn youtube_bare_id_passes_through() {
        assert_eq!(
            src(MediaType::Youtube, "dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn youtube_marker_outside_first_query_embeds_null() {
        assert_eq!(
            src(MediaType::Youtube, "https://example.com/a?x=1?v=2").as_deref(),
            Some("https://www.youtube.com/embed/null")
        );
    }

    #[test]
    fn loom_bare_id_and_share_url() {
        assert_eq!(src(MediaType::Loom, "XYZ1").as_deref(), Some("https://www.loom.com/embed/XYZ1"));
        assert_eq!(
            src(MediaType::Loom, "https://www.loom.com/share/XYZ1").as_deref(),
            Some("https://www.loom.com/share/XYZ1")
        );
    }

    #[test]
    fn toughtongue_forces_permissions_and_default_height() {
        let url = "https://app.example.com/embed/id1";
        let opts = EmbedOptions { allow: "autoplay".into(), ..EmbedOptions::default() };
        let d = resolve(MediaType::ToughTongue, url, &opts);
        assert_eq!(d.src.as_deref(), Some(url));
        assert_eq!(d.permissions(), vec!["microphone", "camera", "display-capture"]);
        assert_eq!(d.sizing, Sizing::FixedHeight { height: "700px".into() });
        assert_eq!(d.frame_border.as_deref(), Some("0"));
    }

    #[test]
    fn toughtongue_honors_caller_height() {
        let opts = EmbedOptions { height: Some("540px".into()), ..EmbedOptions::default() };
        let d = resolve(MediaType::ToughTongue, "https://x", &opts);
        assert_eq!(d.sizing, Sizing::FixedHeight { height: "540px".into() });
    }

    #[test]
    fn iframe_is_pure_passthrough() {
        let opts = EmbedOptions {
            title: "Quiz".into(),
            aspect_ratio: AspectRatio::Square,
            height: Some("300".into()),
            allow: "clipboard-write".into(),
            frame_border: "2".into(),
        };
        let d = resolve(MediaType::Iframe, "not a url", &opts);
        assert_eq!(d.src.as_deref(), Some("not a url"));
        assert_eq!(d.allow.as_deref(), Some("clipboard-write"));
        assert_eq!(d.frame_border.as_deref(), Some("2"));
        assert_eq!(d.sizing, Sizing::AspectBox { ratio: AspectRatio::Square, height: Some("300".into()) });
        assert_eq!(d.title, "Quiz");
    }

    #[test]
    fn unknown_or_missing_type_is_placeholder() {
        for tag in [None, Some("vimeo"), Some(""), Some("placeholder")] {
            let d = resolve_tagged(tag, "https://youtu.be/abc123", &EmbedOptions::default());
            assert!(d.is_placeholder(), "tag {:?}", tag);
            assert_eq!(d.media_type, MediaType::Placeholder);
            assert!(d.permissions().is_empty());
        }
    }

    #[test]
    fn tag_parse_is_case_insensitive() {
        assert_eq!(MediaType::from_tag(Some(" YouTube ")), MediaType::Youtube);
        assert_eq!(MediaType::from_tag(Some("ToughTongue")), MediaType::ToughTongue);
    }

    #[test]
    fn aspect_ratio_parses_known_values() {
        assert_eq!("4:3".parse::<AspectRatio>().unwrap(), AspectRatio::Standard);
        assert!("21:9".parse::<AspectRatio>().is_err());
    }
}
