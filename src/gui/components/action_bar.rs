// src/gui/components/action_bar.rs
//
// Dataset row: path, Load, Collect. Export row: format, headers, output,
// Copy, Export. Buttons hand off to gui::actions.

use eframe::egui;
use tracing::debug;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Dataset ---
    ui.horizontal(|ui| {
        ui.label("Dataset:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.dataset_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0),
        );

        if ui.button("Load").clicked() {
            actions::load(app);
        }

        ui.checkbox(&mut app.state.options.collect.category_column, "Genre column");

        let red = egui::Color32::from_rgb(220, 30, 30);
        if ui
            .add(egui::Button::new(egui::RichText::new("COLLECT").color(egui::Color32::BLACK).strong()).fill(red))
            .on_hover_text(app.state.options.collect.base_url.as_str())
            .clicked()
        {
            actions::collect(app);
        }
    });

    // --- Export ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev = export.format;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev {
            debug!(format = ?export.format, "export format changed");
            if !app.export_path_dirty {
                app.export_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        ui.checkbox(&mut app.state.options.export.include_headers, "Include headers");

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.export_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.export_path_dirty = true;
        }

        let has_rows = app.dashboard.as_ref().is_some_and(|d| !d.listing.is_empty());
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(ui.ctx(), app);
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}
