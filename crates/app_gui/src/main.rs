mod app;

use anyhow::{Context, Result};
use app::UiApp;
use directories_next::ProjectDirs;
use eframe::NativeOptions;
use hotdog_core::{AppConfig, Assets, HttpClassifier, LabelPolicy};
use std::env;
use std::path::PathBuf;

const CONFIG_FILE: &str = "hotdog.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = locate_config(env::var_os("HOTDOG_CONFIG").map(PathBuf::from));
    tracing::info!("config: {}", config_path.display());
    let cfg = AppConfig::load_or_default(&config_path)?;
    // Missing indicator images or stylesheet stop us before a window opens.
    let assets = Assets::load(&cfg.assets).context("failed to load UI assets")?;
    let classifier = HttpClassifier::new(&cfg.classifier)
        .context("failed to set up the classifier client")?;
    let policy = LabelPolicy::from(&cfg.labels);

    let title = format!("Hotdog Vision {}", env!("HOTDOG_VERSION"));
    let options = NativeOptions::default();
    if let Err(e) = eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(
                &cc.egui_ctx,
                classifier,
                policy,
                assets,
            )))
        }),
    ) {
        tracing::error!("application stopped with error: {e}");
    }
    Ok(())
}

/// Explicit override first, then `./hotdog.toml`, then the per-user config dir.
fn locate_config(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return local;
    }
    ProjectDirs::from("nl", "hotdog", "HotdogVision")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .unwrap_or(local)
}
