// src/gui/actions/load.rs
use tracing::{error, info};

use crate::{gui::app::App, store};

pub fn load(app: &mut App) {
    let path = app.state.dataset_path();
    info!(path = %path.display(), "load requested");

    match store::load_dataset(&path) {
        Ok(ds) => {
            app.status(format!(
                "Loaded {} books in {} categories from {}",
                ds.len(),
                ds.categories().len(),
                path.display()
            ));
            app.set_dataset(ds);
        }
        Err(e) => {
            // Keep whatever was loaded before.
            error!(path = %path.display(), error = %e, "load failed");
            app.status(format!("Load error: {e}"));
        }
    }
}
