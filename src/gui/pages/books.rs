// src/gui/pages/books.rs
use eframe::egui;

use crate::{
    dashboard::Dashboard,
    data::Dataset,
    gui::components::record_table::{self, Col},
};

pub struct BooksPage;
pub static PAGE: BooksPage = BooksPage;

impl super::Page for BooksPage {
    fn title(&self) -> &'static str { "Books" }

    fn draw(&self, ui: &mut egui::Ui, ds: &Dataset, dash: &Dashboard) {
        ui.label(format!("{} of {} books match the filters", dash.listing.len(), ds.len()));
        let h = ui.available_height();
        record_table::draw(ui, "listing", ds, &dash.listing, Col::ALL, Some(h));
    }
}
