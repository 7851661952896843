//! Lordline GUI
//!
//! A graphical interface for playing Lordline against the AI or another player.

use lordline::ui::LordlineApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lordline=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Lordline"),
        ..Default::default()
    };

    eframe::run_native(
        "Lordline",
        options,
        Box::new(|cc| Ok(Box::new(LordlineApp::new(cc)))),
    )
}
