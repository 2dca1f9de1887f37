// tests/common/mod.rs
//
// Canned listing pages and a fetcher that serves them from memory.
#![allow(dead_code)]

use std::collections::HashMap;

use book_scrape::{core::Fetch, CollectError};
use url::Url;

pub const BASE: &str = "https://books.example/catalogue/category/books/poetry_23/";

pub fn url(rel: &str) -> String {
    format!("{BASE}{rel}")
}

pub fn item(title: &str, price: &str, avail: &str, rating: &str) -> String {
    format!(
        r#"<article class="product_pod">
             <p class="star-rating {rating}"><i class="icon-star"></i></p>
             <h3><a href="../../../x/index.html" title="{title}">{title}</a></h3>
             <div class="product_price">
               <p class="price_color">{price}</p>
               <p class="instock availability"><i class="icon-ok"></i>
                  {avail}
               </p>
             </div>
           </article>"#
    )
}

pub fn page(items: &[String], next: Option<&str>) -> String {
    let pager = next
        .map(|h| format!(r#"<ul class="pager"><li class="current">Page</li><li class="next"><a href="{h}">next</a></li></ul>"#))
        .unwrap_or_default();
    format!("<html><body><section><ol class=\"row\">{}</ol>{pager}</section></body></html>", items.concat())
}

/// Serves pages by absolute URL; anything else is a 404.
pub struct MapFetcher {
    pages: HashMap<String, String>,
    pub requests: Vec<String>,
}

impl MapFetcher {
    pub fn new<I, K>(pages: I) -> Self
    where
        I: IntoIterator<Item = (K, String)>,
        K: Into<String>,
    {
        Self { pages: pages.into_iter().map(|(k, v)| (k.into(), v)).collect(), requests: Vec::new() }
    }
}

impl Fetch for MapFetcher {
    fn get(&mut self, url: &Url) -> Result<String, CollectError> {
        self.requests.push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| CollectError::fetch(url, "HTTP 404 Not Found"))
    }
}

/// Two pages: three books, then one.
pub fn two_page_site() -> MapFetcher {
    MapFetcher::new([
        (
            url("index.html"),
            page(
                &[
                    item("Leaves of Grass", "£24.05", "In stock", "Three"),
                    item("The Odyssey", "£51.77", "In stock", "One"),
                    item("Howl", "£9.99", "Out of stock", "Five"),
                ],
                Some("page-2.html"),
            ),
        ),
        (url("page-2.html"), page(&[item("Ariel", "£12.50", "In stock", "Two")], None)),
    ])
}
