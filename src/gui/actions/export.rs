// src/gui/actions/export.rs
use tracing::{debug, error, info};

use crate::{
    gui::app::App,
    store::{self, LISTING_HEADERS},
};

/// Filtered listing to the export path, in the chosen format.
pub fn export(app: &mut App) {
    let Some(rows) = super::current_rows(app).filter(|r| !r.is_empty()) else {
        app.status("Nothing to export");
        debug!("export: nothing to export");
        return;
    };

    if app.export_path_dirty {
        app.state.options.export.set_path(&app.export_path_text);
        app.export_path_dirty = false;
    }
    let export = &app.state.options.export;
    let path = export.out_path();
    // Show the path that is actually written (extension follows the format).
    app.export_path_text = path.to_string_lossy().into_owned();

    let headers = export.include_headers.then_some(&LISTING_HEADERS[..]);
    info!(path = %path.display(), rows = rows.len(), format = ?export.format, headers = export.include_headers, "export begin");

    match store::write_table(&path, headers, &rows, export.format) {
        Ok(()) => {
            info!(path = %path.display(), "export ok");
            app.status(format!("Exported {} rows → {}", rows.len(), path.display()));
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "export failed");
            app.status(format!("Export error: {e}"));
        }
    }
}
