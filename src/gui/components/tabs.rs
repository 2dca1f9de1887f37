// src/gui/components/tabs.rs
//
// Top tabs. Switching only changes which views are drawn; the dashboard is
// already computed for the current filters.

use eframe::egui;
use tracing::debug;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                debug!(from = app.current_page().title(), to = page.title(), "tab switch");
                app.set_current_index(idx);
            }
        }
    });
}
