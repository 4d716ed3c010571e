//! GUI entry point for Fleet Manager

mod app;
mod fleet_panel;

use app::FleetApp;
use eframe::egui;
use fleet_app::logging::{init_logging, Verbosity};

fn main() -> eframe::Result<()> {
    init_logging(Verbosity::Normal);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fleet Manager",
        options,
        Box::new(|cc| create_app(cc)),
    )
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(FleetApp::new(cc)?))
}
