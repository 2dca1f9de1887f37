// src/gui/components/filter_panel.rs
//
// Left panel: category multi-select and the price range. Any change
// recomputes the dashboard right away.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    let Some(ds) = app.dataset.as_ref() else {
        ui.weak("Load a dataset to filter it.");
        return;
    };
    let categories = ds.categories().to_vec();
    let bounds = ds.price_bounds();
    let mut changed = false;

    ui.separator();
    ui.strong("Category");
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_categories = categories.clone();
            changed = true;
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_categories.clear();
            changed = true;
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("category_scroll")
        .max_height(260.0)
        .show(ui, |ui| {
            for cat in &categories {
                let sel = &mut app.state.gui.selected_categories;
                let mut on = sel.contains(cat);
                if ui.checkbox(&mut on, cat.as_str()).changed() {
                    if on {
                        sel.push(cat.clone());
                    } else {
                        sel.retain(|c| c != cat);
                    }
                    changed = true;
                }
            }
        });

    ui.separator();
    ui.strong("Price");
    {
        let g = &mut app.state.gui;
        let range = bounds.lo..=bounds.hi;
        changed |= ui
            .add(egui::Slider::new(&mut g.price_lo, range.clone()).prefix("£").fixed_decimals(2).text("min"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut g.price_hi, range).prefix("£").fixed_decimals(2).text("max"))
            .changed();
    }

    ui.separator();
    if ui.button("Reset filters").clicked() {
        app.reset_filters();
        return;
    }

    if changed {
        app.rebuild_view();
    }
}
