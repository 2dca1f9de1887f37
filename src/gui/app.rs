// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use tracing::{debug, info};

use crate::{
    config::{consts::ATTRIBUTION, state::AppState},
    dashboard::{present, Dashboard},
    data::{Dataset, Filters},
    store,
};

use super::{components, pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Books Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded dataset and the views over the current filters
    pub dataset: Option<Dataset>,
    pub dashboard: Option<Dashboard>,

    // export text field UX (mapped onto ExportOptions on Export)
    pub export_path_text: String,
    pub export_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let export_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let mut app = Self {
            state,
            dataset: None,
            dashboard: None,
            export_path_text,
            export_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        // Pick up whatever the last collect left behind.
        let path = app.state.dataset_path();
        match store::load_dataset(&path) {
            Ok(ds) => {
                app.status(format!("Loaded {} books from {}", ds.len(), path.display()));
                app.set_dataset(ds);
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no dataset at startup");
                app.status("No dataset loaded. Load a file or Collect.");
            }
        }
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Filters as the side panel currently shows them.
    pub fn filters(&self) -> Filters {
        let g = &self.state.gui;
        Filters::all()
            .with_categories(g.selected_categories.iter().cloned())
            .with_price(g.price_lo, g.price_hi)
    }

    /// Swap in a new dataset; filters go back to "everything".
    pub fn set_dataset(&mut self, ds: Dataset) {
        self.state.gui.set_filters(&Filters::defaults_for(&ds));
        self.dataset = Some(ds);
        self.rebuild_view();
    }

    pub fn reset_filters(&mut self) {
        if let Some(defaults) = self.dataset.as_ref().map(Filters::defaults_for) {
            self.state.gui.set_filters(&defaults);
        }
        self.rebuild_view();
    }

    /// Recompute every view from the dataset and the current filters.
    pub fn rebuild_view(&mut self) {
        self.dashboard = self.dataset.as_ref().map(|ds| present(ds, &self.filters()));
        if let Some(d) = &self.dashboard {
            info!(
                books = d.totals.books,
                categories = self.state.gui.selected_categories.len(),
                lo = self.state.gui.price_lo,
                hi = self.state.gui.price_hi,
                "filters applied"
            );
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Status: {}", self.status_text()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(ATTRIBUTION);
                });
            });
        });

        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            components::tabs::draw(ui, self);

            ui.separator();

            match (&self.dataset, &self.dashboard) {
                (Some(ds), Some(dash)) => self.current_page().draw(ui, ds, dash),
                _ => {
                    ui.centered_and_justified(|ui| {
                        ui.label("No dataset loaded");
                    });
                }
            }
        });
    }
}
