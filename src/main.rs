mod app;
mod config;
mod entry;
mod io;
mod nav;
mod state;
mod style;
mod view;

use app::Vantage;
use config::Config;
use eframe::egui;
use style::Theme;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    log::info!("starting vantage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Vantage"),
        ..Default::default()
    };

    eframe::run_native(
        "Vantage",
        options,
        Box::new(move |cc| {
            Theme::from_mode(&config.theme.mode).apply(&cc.egui_ctx);
            Ok(Box::new(Vantage::new(config)))
        }),
    )
}
