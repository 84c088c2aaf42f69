//! Flutter bridge for the courseview library API.
//! Exposes the lesson player behind a shared handle suitable for flutter_rust_bridge.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use courseview::prelude::*;
use flutter_rust_bridge::frb;

/// Opaque on the Dart side; the player state never crosses the bridge.
#[frb(opaque)]
pub struct CourseBridge {
    inner: Arc<Courseview>,
    player: Arc<Mutex<CoursePlayer>>,
}

impl CourseBridge {
    /// Load configuration (None resolves the default locations) and mount the player.
    pub async fn new(config_path: Option<String>) -> Result<Self> {
        let path = config_path.map(PathBuf::from);
        let cv = Courseview::from_config_path(path.as_deref()).await?;
        let player = cv.player();
        Ok(Self { inner: Arc::new(cv), player: Arc::new(Mutex::new(player)) })
    }

    #[frb(ignore)]
    fn player(&self) -> Result<MutexGuard<'_, CoursePlayer>> {
        self.player.lock().map_err(|_| anyhow!("player state poisoned"))
    }

    #[frb(sync)]
    pub fn course_title(&self) -> String { self.inner.course().title().to_string() }

    #[frb(sync)]
    pub fn sidebar(&self) -> Result<Vec<SidebarEntry>> { Ok(self.player()?.sidebar()) }

    #[frb(sync)]
    pub fn current_lesson(&self) -> Result<Lesson> { Ok(self.player()?.current().clone()) }

    /// JSON form of the current embed descriptor, for the Dart side to decode.
    #[frb(sync)]
    pub fn current_embed_json(&self) -> Result<String> {
        let d = self.player()?.current_embed();
        Ok(serde_json::to_string(&d)?)
    }

    #[frb(sync)]
    pub fn choose_lesson(&self, id: String) -> Result<()> {
        self.player()?.choose_from_sidebar(&id);
        Ok(())
    }

    #[frb(sync)]
    pub fn next(&self) -> Result<bool> { Ok(self.player()?.next()) }

    #[frb(sync)]
    pub fn previous(&self) -> Result<bool> { Ok(self.player()?.previous()) }

    #[frb(sync)]
    pub fn toggle_sidebar(&self) -> Result<bool> {
        let mut p = self.player()?;
        p.toggle_sidebar();
        Ok(p.sidebar_open())
    }

    pub async fn render_site(&self, out_dir: String) -> Result<SiteReport> {
        self.inner.write_site(PathBuf::from(out_dir).as_path()).await
    }
}
