// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load,collect,copy,export}.

mod collect; // src/gui/actions/collect.rs
mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod load;    // src/gui/actions/load.rs

pub use collect::collect;
pub use copy::copy;
pub use export::export;
pub use load::load;

use crate::{gui::app::App, store};

/// Filtered listing as table rows (with the category column), if any.
pub(super) fn current_rows(app: &App) -> Option<Vec<Vec<String>>> {
    let ds = app.dataset.as_ref()?;
    let dash = app.dashboard.as_ref()?;
    Some(store::listing_rows(ds, &dash.listing))
}
