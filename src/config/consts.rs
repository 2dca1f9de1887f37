// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://books.toscrape.com/catalogue/category/books/classics_6/";
pub const FIRST_PAGE: &str = "index.html";
pub const USER_AGENT: &str = "book_scrape/0.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Collect
pub const DEFAULT_PAGE_CAP: usize = 500;
pub const CATEGORY_COLUMN: &str = "Genre";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "books";
pub const DEFAULT_EXPORT_FILE: &str = "filtered";

// Dashboard
pub const IN_STOCK_MARKER: &str = "In stock";
pub const TOP_N: usize = 5;
pub const ATTRIBUTION: &str = "Data source: Books to Scrape (http://books.toscrape.com/)";
