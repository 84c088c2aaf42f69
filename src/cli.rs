use clap::{Parser, Subcommand, ValueEnum};
use courseview::media::{AspectRatio, EmbedOptions};
use std::path::PathBuf;

/// Inspect a course and build its static site
#[derive(Parser)]
#[command(name = "courseview")]
#[command(about = "A CLI tool for previewing courses and rendering the course site", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $COURSEVIEW_CONFIG, then the user config dir)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the course lessons in navigation order
    Lessons,
    /// Resolve a media URL into an embed descriptor (JSON)
    Resolve {
        /// Media type: youtube, loom, toughtongue, iframe (anything else is a placeholder)
        #[arg(short = 't', long = "type")]
        media_type: Option<String>,
        /// Raw URL or id
        url: String,
        /// Frame height (toughtongue, iframe)
        #[arg(long)]
        height: Option<String>,
        /// Permission string (iframe)
        #[arg(long, default_value = "")]
        allow: String,
        /// Aspect ratio: 16:9, 4:3, 1:1
        #[arg(long, default_value = "16:9")]
        aspect_ratio: String,
        /// Frame border width (toughtongue, iframe)
        #[arg(long, default_value = "0")]
        frame_border: String,
        /// Frame title
        #[arg(long, default_value = courseview::media::DEFAULT_FRAME_TITLE)]
        title: String,
    },
    /// Show a lesson and its embed (unknown ids show the first lesson)
    Show {
        /// Lesson id; defaults to the configured default lesson
        id: Option<String>,
    },
    /// Walk the lesson sequence from a starting lesson
    Nav {
        /// Starting lesson id; defaults to the configured default lesson
        #[arg(long)]
        from: Option<String>,
        /// Steps to apply in order
        #[arg(value_enum)]
        steps: Vec<Step>,
    },
    /// Render the landing page and every lesson page into a directory
    Render {
        /// Output directory
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
    },
    /// Print the loaded course as TOML (a starting point for a course file)
    ExportCourse,
}

impl Commands {
    /// Embed options carried by `resolve`; defaults for every other command.
    pub fn embed_options(&self) -> anyhow::Result<EmbedOptions> {
        match self {
            Commands::Resolve { height, allow, aspect_ratio, frame_border, title, .. } => Ok(EmbedOptions {
                title: title.clone(),
                aspect_ratio: aspect_ratio.parse::<AspectRatio>()?,
                height: height.clone(),
                allow: allow.clone(),
                frame_border: frame_border.clone(),
            }),
            _ => Ok(EmbedOptions::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Step {
    #[value(alias = "n")]
    Next,
    #[value(alias = "p", alias = "prev")]
    Previous,
}
