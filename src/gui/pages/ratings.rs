// src/gui/pages/ratings.rs
use eframe::egui;

use crate::{dashboard::Dashboard, data::Dataset, gui::components::charts};

use super::{section, visible_categories};

pub struct RatingsPage;
pub static PAGE: RatingsPage = RatingsPage;

impl super::Page for RatingsPage {
    fn title(&self) -> &'static str { "Ratings" }

    fn draw(&self, ui: &mut egui::Ui, ds: &Dataset, dash: &Dashboard) {
        section(ui, "Rating share within each category");
        ui.weak("Each bar is a share of its own category's books.");
        let cats = visible_categories(ds, dash);
        charts::grouped_share(ui, &dash.rating_share, &cats, 340.0);
    }
}
