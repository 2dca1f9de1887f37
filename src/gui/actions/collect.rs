// src/gui/actions/collect.rs
//
// Runs on the UI thread; the window stalls until the last page is in.

use tracing::{error, info};

use crate::{
    gui::{app::App, progress::GuiProgress},
    scrape, store,
};

pub fn collect(app: &mut App) {
    // Collect into whatever the dataset field points at.
    let mut opts = app.state.options.collect.clone();
    let text = app.state.gui.dataset_path_text.trim().to_owned();
    if !text.is_empty() {
        opts.set_out_path(&text);
    }
    info!(base = %opts.base_url, out = %opts.out_path().display(), cap = opts.page_cap, "collect begin");

    let mut prog = GuiProgress::new(app.status.clone());
    let summary = match scrape::run_collect(&opts, Some(&mut prog)) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "collect failed");
            app.status(format!("Collect error: {e}"));
            return;
        }
    };

    app.state.options.collect = opts;
    app.state.gui.dataset_path_text = summary.path.to_string_lossy().into_owned();

    match store::load_dataset(&summary.path) {
        Ok(ds) => {
            app.set_dataset(ds);
            app.status(format!(
                "Collected {} books from {} pages → {}",
                summary.records,
                summary.pages,
                summary.path.display()
            ));
        }
        Err(e) => {
            error!(path = %summary.path.display(), error = %e, "reload after collect failed");
            app.status(format!("Collected, but could not load: {e}"));
        }
    }
}
