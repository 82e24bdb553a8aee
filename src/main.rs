mod app;
mod ui;

use app::CreatureDashApp;
use creature_dash::config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env().with_cli_path(std::env::args().nth(1));
    log::debug!("starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Creature Dash – Catalogue Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(CreatureDashApp::new(config)))),
    )
}
