mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::app::DatadeskApp;

/// Fixed production endpoint of the remote classification service.
const DEFAULT_ENDPOINT: &str = "https://gourav-backend-5voz.vercel.app/bfhl";

#[derive(Debug, Parser)]
#[command(about = "Desktop form for the remote classification service")]
struct Args {
    /// Classification endpoint receiving the submitted JSON.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

fn resolve_endpoint(raw: &str) -> anyhow::Result<String> {
    let url = Url::parse(raw).with_context(|| format!("invalid endpoint URL '{raw}'"))?;
    anyhow::ensure!(
        matches!(url.scheme(), "http" | "https"),
        "endpoint scheme must be http or https, got '{}'",
        url.scheme()
    );
    Ok(url.to_string())
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let endpoint = match resolve_endpoint(&args.endpoint) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            tracing::error!("refusing to start: {err:#}");
            std::process::exit(2);
        }
    };
    tracing::info!(%endpoint, "starting desktop GUI");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::spawn(endpoint, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Data Processing Desk",
        options,
        Box::new(|_cc| Ok(Box::new(DatadeskApp::new(cmd_tx, ui_rx)))),
    )
}
