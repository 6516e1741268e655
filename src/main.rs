mod app;
mod ui;

use eframe::egui;

use portfolio_viewer::config::{load_config, AppConfig};

use app::PortfolioApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match load_config(None) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("falling back to default configuration: {}", e);
            AppConfig::default()
        }
    };
    if !config.emailjs.is_configured() {
        log::warn!("EmailJS credentials are not configured; contact submissions will fail");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Abu Bakar Khawaja | Portfolio",
        options,
        Box::new(|_cc| Ok(Box::new(PortfolioApp::new(config)))),
    )
}
