use serde::{Deserialize, Serialize};

/// Copy for the landing page. Every field has a default so a config file
/// only needs to override what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingContent {
    pub headline: String,
    pub tagline: String,
    pub benefits: Vec<Benefit>,
    pub modules_heading: String,
    pub modules: Vec<ModuleBlurb>,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub footer_links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
    /// Icon name, rendered as a CSS class hook.
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleBlurb {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: String,
}

impl Default for LandingContent {
    fn default() -> Self {
        let benefit = |title: &str, description: &str, icon: &str| Benefit {
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        };
        let module = |n: usize| ModuleBlurb {
            title: format!("Module {}: [Module Name]", n),
            description: "Brief description of this module and what students will learn.".into(),
        };
        let link = |label: &str, href: &str, icon: &str| FooterLink {
            label: label.into(),
            href: href.into(),
            icon: icon.into(),
        };
        Self {
            headline: "The Apology Coach".into(),
            tagline: "Get the tools and confidence to apologize effectively and move on with your life.".into(),
            benefits: vec![
                benefit(
                    "Interactive Learning",
                    "Practice conversations with AI tutors that adapt to your learning pace",
                    "message-square",
                ),
                benefit(
                    "Real-time Feedback",
                    "Receive instant feedback on your responses and communication style",
                    "sparkles",
                ),
                benefit("Flexible Schedule", "Learn anytime, anywhere with 24/7 access to practice sessions", "clock"),
            ],
            modules_heading: "Course Modules".into(),
            modules: (1..=3).map(module).collect(),
            primary_cta: "Enroll Now".into(),
            secondary_cta: "Get Started".into(),
            footer_links: vec![
                link("Documentation", "https://app.toughtongueai.com/docs/api-integration/", "file-text"),
                link("Developer Portal", "https://app.toughtongueai.com/developer/", "layout-panel-top"),
                link("Visit Tough Tongue AI \u{2192}", "https://app.toughtongueai.com/", "globe"),
            ],
        }
    }
}
