// src/specs/listing.rs
//! Where the data lives on a catalog listing page.
//!
//! Each item block is an `article.product_pod`:
//!
//! ```text
//! <article class="product_pod">
//!   <p class="star-rating Three"></p>
//!   <h3><a href="..." title="Full Title">Short…</a></h3>
//!   <div class="product_price">
//!     <p class="price_color">£51.77</p>
//!     <p class="instock availability"> In stock </p>
//!   </div>
//! </article>
//! ...
//! <li class="next"><a href="page-2.html">next</a></li>
//! ```

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::core::sanitize::normalize_ws;
use crate::error::CollectError;
use crate::record::{parse_price, BookRecord, Rating};

/// Records of one page plus where to go next.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingPage {
    pub records: Vec<BookRecord>,
    pub next: Option<Url>,
}

macro_rules! selector {
    ($css:literal) => {{
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        SELECTOR.get_or_init(|| Selector::parse($css).expect("static selector"))
    }};
}

fn item_sel() -> &'static Selector { selector!("article.product_pod") }
fn title_sel() -> &'static Selector { selector!("h3 > a") }
fn price_sel() -> &'static Selector { selector!(".price_color") }
fn avail_sel() -> &'static Selector { selector!(".availability") }
fn rating_sel() -> &'static Selector { selector!("p.star-rating") }
fn next_sel() -> &'static Selector { selector!("li.next > a") }

/// Parse one listing page fetched from `page_url`.
pub fn parse_listing(html: &str, page_url: &Url) -> Result<ListingPage, CollectError> {
    let doc = Html::parse_document(html);

    let mut records = Vec::new();
    for (i, block) in doc.select(item_sel()).enumerate() {
        let rec = extract_item(block)
            .map_err(|why| CollectError::parse(page_url, format!("item {}: {why}", i + 1)))?;
        records.push(rec);
    }
    if records.is_empty() {
        return Err(CollectError::parse(page_url, "no item blocks (article.product_pod)"));
    }

    let next = match doc.select(next_sel()).next() {
        None => None,
        Some(a) => {
            let href = a
                .value()
                .attr("href")
                .ok_or_else(|| CollectError::parse(page_url, "next link without href"))?;
            let url = page_url.join(href).map_err(|source| CollectError::Url { url: s!(href), source })?;
            Some(url)
        }
    };

    debug!(page = %page_url, items = records.len(), has_next = next.is_some(), "listing parsed");
    Ok(ListingPage { records, next })
}

fn first_text(block: ElementRef<'_>, sel: &Selector) -> Option<String> {
    block.select(sel).next().map(|e| e.text().collect::<String>())
}

fn extract_item(block: ElementRef<'_>) -> Result<BookRecord, String> {
    let anchor = block.select(title_sel()).next().ok_or("missing title link")?;
    let title = match anchor.value().attr("title") {
        Some(t) if !t.trim().is_empty() => s!(t.trim()),
        // Short listings sometimes drop the attribute; the anchor text is the title then.
        _ => normalize_ws(&anchor.text().collect::<String>()),
    };
    if title.is_empty() {
        return Err(s!("empty title"));
    }

    let price_text = first_text(block, price_sel()).ok_or("missing price")?;
    let price = parse_price(&price_text).ok_or_else(|| format!("bad price {:?}", price_text.trim()))?;

    let availability = first_text(block, avail_sel())
        .map(|t| normalize_ws(&t))
        .ok_or("missing availability")?;

    let class = block
        .select(rating_sel())
        .next()
        .and_then(|p| p.value().attr("class"))
        .ok_or("missing star-rating")?;
    let token = class.split_whitespace().nth(1).ok_or("star-rating without a rating token")?;
    let rating: Rating = token.parse().map_err(|e| format!("{e}"))?;

    Ok(BookRecord::new(title, price, availability, rating))
}
