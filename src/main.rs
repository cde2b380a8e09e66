//! Marginalia - markdown note application with linked comment notes
//!
//! A Rust-based markdown editor with a vault explorer and a command that
//! turns the current selection into a link to a timestamped comment note.

mod app;
mod core;
mod ui;

use app::MarginaliaApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Marginalia...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Marginalia"),
        ..Default::default()
    };

    eframe::run_native(
        "Marginalia",
        native_options,
        Box::new(|cc| Ok(Box::new(MarginaliaApp::new(cc)))),
    )
}
