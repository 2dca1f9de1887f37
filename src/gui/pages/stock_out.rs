// src/gui/pages/stock_out.rs
use eframe::egui;

use crate::{
    dashboard::Dashboard,
    data::Dataset,
    gui::components::record_table::{self, Col},
};

pub struct StockOutPage;
pub static PAGE: StockOutPage = StockOutPage;

impl super::Page for StockOutPage {
    fn title(&self) -> &'static str { "Stock out" }

    fn draw(&self, ui: &mut egui::Ui, ds: &Dataset, dash: &Dashboard) {
        let so = &dash.stock_out;
        ui.horizontal(|ui| {
            ui.strong(format!("{} of {} books not in stock", so.count, so.total));
            ui.label(format!("({:.2}%)", so.percent));
        });
        if so.row_ix.is_empty() {
            ui.weak("Every filtered book is in stock.");
            return;
        }
        let h = ui.available_height();
        record_table::draw(ui, "stock_out", ds, &so.row_ix, Col::ALL, Some(h));
    }
}
