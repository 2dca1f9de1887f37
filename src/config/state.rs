// src/config/state.rs
use std::path::PathBuf;

use super::options::AppOptions;
use crate::data::Filters;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Dataset the dashboard reads; text field contents, applied on Load.
    pub dataset_path_text: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Category multi-select; names ticked in the left panel.
    pub selected_categories: Vec<String>,

    /// Price slider values (inclusive).
    pub price_lo: f64,
    pub price_hi: f64,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            dataset_path_text: s!(),
            window_w: 1280,
            window_h: 820,
            current_page_index: 0,
            selected_categories: Vec::new(),
            price_lo: 0.0,
            price_hi: 0.0,
        }
    }
}

impl GuiState {
    /// Point the side panel widgets at `filters`. An unset category set
    /// ticks nothing; an unset price range leaves the sliders alone.
    pub fn set_filters(&mut self, filters: &Filters) {
        self.selected_categories = filters
            .categories
            .as_ref()
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        if let Some(p) = filters.price {
            self.price_lo = p.lo;
            self.price_hi = p.hi;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Fresh state pointing the dashboard at the collector's own output.
    pub fn new() -> Self {
        let mut state = Self::default();
        state.gui.dataset_path_text = state.options.collect.out_path().to_string_lossy().into_owned();
        state
    }

    pub fn dataset_path(&self) -> PathBuf {
        PathBuf::from(self.gui.dataset_path_text.trim())
    }
}
