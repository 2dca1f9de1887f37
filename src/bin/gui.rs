// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use book_scrape::{config::state::GuiState, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(log::LogSink::File);

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        tracing::error!(error = %e, "GUI failed");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
