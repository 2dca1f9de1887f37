// src/scrape/collect.rs
//
// The paginated walk: fetch, parse, append, follow "next", stop.
// Nothing touches the output path until every page has been collected.

use std::path::PathBuf;

use tracing::{info, warn};
use url::Url;

use crate::{
    config::options::CollectOptions,
    core::{sanitize::category_from_listing_url, Fetch, HttpFetcher},
    error::CollectError,
    progress::Progress,
    record::BookRecord,
    specs::listing::parse_listing,
    store,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectSummary {
    pub path: PathBuf,
    pub pages: usize,
    pub records: usize,
}

fn start_url(opts: &CollectOptions) -> Result<Url, CollectError> {
    let base = Url::parse(&opts.base_url)
        .map_err(|source| CollectError::Url { url: opts.base_url.clone(), source })?;
    base.join(&opts.first_page)
        .map_err(|source| CollectError::Url { url: opts.first_page.clone(), source })
}

/// Walk the listing starting at `base_url` + `first_page` and return every
/// record in page order, then in-page order.
///
/// Fails on the first fetch or parse error, and with `LimitExceeded` when the
/// "next" chain would need more than `page_cap` pages.
pub fn collect(
    fetcher: &mut dyn Fetch,
    opts: &CollectOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<BookRecord>, CollectError> {
    walk(fetcher, opts, progress).map(|(records, _)| records)
}

/// Records plus the number of pages fetched.
fn walk(
    fetcher: &mut dyn Fetch,
    opts: &CollectOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Vec<BookRecord>, usize), CollectError> {
    let mut next = Some(start_url(opts)?);
    let mut records: Vec<BookRecord> = Vec::new();
    let mut pages = 0usize;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.page_cap);
    }

    let result = loop {
        let Some(url) = next.take() else { break Ok(()) };
        if pages >= opts.page_cap {
            warn!(cap = opts.page_cap, next = %url, "page cap reached");
            break Err(CollectError::LimitExceeded { cap: opts.page_cap });
        }
        pages += 1;

        info!(page = pages, url = %url, "fetching listing page");
        let html = match fetcher.get(&url) {
            Ok(h) => h,
            Err(e) => break Err(e),
        };
        let page = match parse_listing(&html, &url) {
            Ok(p) => p,
            Err(e) => break Err(e),
        };

        records.extend(page.records);
        next = page.next;

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(pages, records.len());
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result?;

    if opts.category_column {
        let label = opts
            .category
            .clone()
            .or_else(|| category_from_listing_url(&opts.base_url))
            .unwrap_or_else(|| s!("Uncategorized"));
        for r in &mut records {
            r.category = Some(label.clone());
        }
    }

    info!(pages, records = records.len(), "collection complete");
    Ok((records, pages))
}

/// Collect over HTTP and write the dataset to `opts.out_path()`.
pub fn run_collect(
    opts: &CollectOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<CollectSummary, CollectError> {
    let mut fetcher = HttpFetcher::new()?;
    run_collect_with(&mut fetcher, opts, progress)
}

/// Same as `run_collect` with a caller-supplied fetcher.
pub fn run_collect_with(
    fetcher: &mut dyn Fetch,
    opts: &CollectOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CollectSummary, CollectError> {
    // Reborrow so `progress` is usable again after the walk.
    let walk_progress = match progress {
        Some(ref mut p) => Some(&mut **p as &mut dyn Progress),
        None => None,
    };
    let (records, pages) = walk(fetcher, opts, walk_progress)?;
    let path = opts.out_path();
    store::save_records(&path, &records, opts.format, opts.category_column)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {} books → {}", records.len(), path.display()));
    }
    info!(path = %path.display(), rows = records.len(), "dataset written");

    Ok(CollectSummary { path, pages, records: records.len() })
}
