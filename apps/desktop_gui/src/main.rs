use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{config::DEFAULT_CONFIG_FILE, load_settings, ClientSettings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::KataDesktopApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop client for the kata exercise platform")]
struct Args {
    /// Base URL of the kata server, e.g. http://127.0.0.1:8000
    #[arg(long)]
    server_url: Option<String>,
    /// TOML file with client settings
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Explicit `--config`, else the per-user config file if present, else the
/// working-directory default handled by `load_settings`.
fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("kata_desktop").join(DEFAULT_CONFIG_FILE))
            .filter(|path| path.exists())
    })
}

fn load_startup_settings(args: Args) -> anyhow::Result<ClientSettings> {
    let config_path = resolve_config_path(args.config);
    let settings = load_settings(config_path.as_deref())
        .context("failed to load client settings")?
        .with_server_url(args.server_url);
    tracing::info!(
        server_url = %settings.server_url,
        config = ?config_path,
        "client settings resolved"
    );
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_startup_settings(Args::parse())?;
    let server_url = settings.server_url.clone();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kata Exercise")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Kata Exercise",
        options,
        Box::new(move |_cc| Ok(Box::new(KataDesktopApp::new(cmd_tx, ui_rx, server_url)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop GUI: {err}"))
}
