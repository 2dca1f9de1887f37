// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::overview::PAGE,
    &pages::prices::PAGE,
    &pages::ratings::PAGE,
    &pages::books::PAGE,
    &pages::stock_out::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
