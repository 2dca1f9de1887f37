// src/gui/pages/overview.rs
//
// Stock status, category shares and price spread per category.

use eframe::egui;

use crate::{
    dashboard::Dashboard,
    data::Dataset,
    gui::components::charts,
};

use super::{category_color, section};

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

impl super::Page for OverviewPage {
    fn title(&self) -> &'static str { "Overview" }

    fn draw(&self, ui: &mut egui::Ui, ds: &Dataset, dash: &Dashboard) {
        egui::ScrollArea::vertical().id_salt("overview_scroll").show(ui, |ui| {
            let t = &dash.totals;
            ui.horizontal_wrapped(|ui| {
                ui.strong(format!("{} books", t.books));
                ui.separator();
                ui.label(format!("{} in stock", t.in_stock));
                ui.separator();
                match t.mean_price {
                    Some(p) => ui.label(format!("mean price £{p:.2}")),
                    None => ui.label("mean price –"),
                };
                ui.separator();
                match t.mean_rating {
                    Some(r) => ui.label(format!("mean rating {r:.2}")),
                    None => ui.label("mean rating –"),
                };
            });

            ui.columns(2, |cols| {
                section(&mut cols[0], "Stock status by category");
                charts::stacked_bars(&mut cols[0], &dash.stock_by_category, 260.0);

                section(&mut cols[1], "Books per category");
                charts::pie(&mut cols[1], &dash.category_distribution, category_color(ds), 260.0);
            });

            section(ui, "Price spread by category");
            charts::box_plot(ui, &dash.price_boxes, category_color(ds), 300.0);
        });
    }
}
