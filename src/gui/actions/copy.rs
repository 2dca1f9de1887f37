// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{
    config::options::ExportFormat,
    gui::app::App,
    store::{self, LISTING_HEADERS},
};

/// Filtered listing to the clipboard as TSV, so it pastes into a spreadsheet.
pub fn copy(ctx: &egui::Context, app: &mut App) {
    let Some(rows) = super::current_rows(app).filter(|r| !r.is_empty()) else {
        app.status("Nothing to copy");
        debug!("copy: nothing to copy");
        return;
    };

    let headers = app.state.options.export.include_headers.then_some(&LISTING_HEADERS[..]);
    match store::table_string(headers, &rows, ExportFormat::Tsv) {
        Ok(txt) => {
            ctx.copy_text(txt);
            info!(rows = rows.len(), "copied to clipboard");
            app.status(format!("Copied {} rows to clipboard", rows.len()));
        }
        Err(e) => {
            error!(error = %e, "copy failed");
            app.status(format!("Copy error: {e}"));
        }
    }
}
