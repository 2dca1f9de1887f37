//! # Scraping "specs"
//!
//! Page-specific extraction. A spec knows *where the ground truth lives in
//! the HTML* of one kind of page and how to turn it into records. It does no
//! networking and no file I/O; `scrape` decides when to fetch and what to do
//! with the result.
//!
//! Conventions:
//! - Fail loudly. A page that lacks the structure we expect is an error that
//!   names the page, never a silently shorter result.
//! - Testable offline against inline or saved HTML.
pub mod listing;
