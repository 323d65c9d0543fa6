mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::ResourceDbApp;
use eframe::egui;
use resource_db::EngineConfig;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Config from RESOURCE_DB_* env vars; a CSV path argument wins over them.
    let mut config = EngineConfig::load(None).unwrap_or_else(|e| {
        log::error!("Ignoring invalid configuration: {e}");
        EngineConfig::default()
    });
    if let Some(path) = std::env::args_os().nth(1) {
        config.source = PathBuf::from(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resource Database",
        options,
        Box::new(move |_cc| Ok(Box::new(ResourceDbApp::new(AppState::new(config))))),
    )
}
