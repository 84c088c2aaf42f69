mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, Step};
use courseview::media;
use courseview::navigator::Selection;
use courseview::types::course_to_record;
use courseview::Courseview;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("courseview=info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        // Resolving a URL needs no course.
        Commands::Resolve { ref media_type, ref url, .. } => {
            let opts = cli.command.embed_options()?;
            let d = media::resolve_tagged(media_type.as_deref(), url, &opts);
            println!("{}", serde_json::to_string_pretty(&d)?);
        }
        Commands::Lessons => {
            let cv = Courseview::from_config_path(config).await?;
            let player = cv.player();
            println!("{}", cv.course().title());
            for (i, e) in player.sidebar().iter().enumerate() {
                let marker = if e.active { "*" } else { " " };
                println!("{} {:>2}. {} ({}) [{}]", marker, i + 1, e.title, e.duration, e.id);
            }
        }
        Commands::Show { id } => {
            let cv = Courseview::from_config_path(config).await?;
            let mut player = cv.player();
            if let Some(id) = id {
                player.select_lesson(&id);
            }
            let fallback = player.navigator().selection() == Selection::Fallback;
            let out = serde_json::json!({
                "requested": player.navigator().active_id(),
                "fallback": fallback,
                "lesson": player.current(),
                "embed": player.current_embed(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Nav { from, steps } => {
            let cv = Courseview::from_config_path(config).await?;
            let mut player = cv.player();
            if let Some(from) = from {
                player.select_lesson(&from);
            }
            for step in steps {
                let moved = match step {
                    Step::Next => player.next(),
                    Step::Previous => player.previous(),
                };
                if !moved {
                    tracing::info!(?step, at = %player.navigator().active_id(), "no lesson in that direction");
                }
            }
            println!("{}", player.current().id);
        }
        Commands::Render { out } => {
            let cv = Courseview::from_config_path(config).await?;
            let report = cv.write_site(&out).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::ExportCourse => {
            let cv = Courseview::from_config_path(config).await?;
            let text = toml::to_string_pretty(&course_to_record(cv.course())).context("serializing course")?;
            print!("{}", text);
        }
    }
    Ok(())
}
