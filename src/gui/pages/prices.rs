// src/gui/pages/prices.rs
//
// Cheapest / most expensive lists, price against rating, mean price per rating.

use eframe::egui;

use crate::{
    dashboard::Dashboard,
    data::Dataset,
    gui::components::{charts, record_table::{self, Col}},
};

use super::{category_color, section, visible_categories};

pub struct PricesPage;
pub static PAGE: PricesPage = PricesPage;

const TOP_COLS: &[Col] = &[Col::Title, Col::Category, Col::Price];

impl super::Page for PricesPage {
    fn title(&self) -> &'static str { "Prices" }

    fn draw(&self, ui: &mut egui::Ui, ds: &Dataset, dash: &Dashboard) {
        egui::ScrollArea::vertical().id_salt("prices_scroll").show(ui, |ui| {
            ui.columns(2, |cols| {
                section(&mut cols[0], "Cheapest books");
                record_table::draw(&mut cols[0], "cheapest", ds, &dash.cheapest, TOP_COLS, None);

                section(&mut cols[1], "Most expensive books");
                record_table::draw(&mut cols[1], "most_expensive", ds, &dash.most_expensive, TOP_COLS, None);
            });

            section(ui, "Price by rating");
            charts::scatter(ui, &dash.price_vs_rating, category_color(ds), 300.0);
            let color = category_color(ds);
            let legend: Vec<_> = visible_categories(ds, dash)
                .into_iter()
                .map(|c| {
                    let col = color(&c);
                    (c, col)
                })
                .collect();
            charts::legend(ui, &legend);

            section(ui, "Mean price per rating");
            charts::mean_bars(ui, &dash.mean_price_by_rating, 240.0);
        });
    }
}
