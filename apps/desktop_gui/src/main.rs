use std::path::PathBuf;

mod controller;
mod platform;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use color_core::load_settings;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::platform::{clipboard::SystemClipboard, paths::resolve_settings_path};
use crate::ui::ColorChangerApp;

#[derive(Parser, Debug)]
#[command(name = "color-changer-gui", about = "Pick a background color")]
struct Args {
    /// Settings file; defaults to the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings_path = resolve_settings_path(args.config.as_deref());
    let settings = load_settings(&settings_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(path = %settings_path.display(), palette = settings.palette.len(), "settings loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Color Changer")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([520.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Color Changer",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ColorChangerApp::new(
                &settings,
                Box::new(SystemClipboard),
            )))
        }),
    )
    .map_err(|err| anyhow!("desktop ui exited with error: {err}"))
}
