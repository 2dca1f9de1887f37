// src/gui/pages/mod.rs
use eframe::egui::{self, Color32};

use crate::{dashboard::Dashboard, data::Dataset};

use super::components::charts::series_color;

pub mod books;
pub mod overview;
pub mod prices;
pub mod ratings;
pub mod stock_out;

/// One dashboard tab. Pages only read; filters live in the side panel.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    fn draw(&self, ui: &mut egui::Ui, ds: &Dataset, dash: &Dashboard);
}

/// Colors follow the dataset's category order so they stay put while
/// filters change.
pub(crate) fn category_color(ds: &Dataset) -> impl Fn(&str) -> Color32 + '_ {
    move |c| series_color(ds.categories().iter().position(|x| x == c).unwrap_or(0))
}

/// Categories that appear in the filtered views, in dataset order.
pub(crate) fn visible_categories(ds: &Dataset, dash: &Dashboard) -> Vec<String> {
    ds.categories()
        .iter()
        .filter(|c| dash.category_distribution.iter().any(|s| &s.category == *c))
        .cloned()
        .collect()
}

pub(crate) fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(6.0);
    ui.heading(title);
}
