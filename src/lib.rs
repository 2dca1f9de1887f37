// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod progress;
pub mod record;
pub mod specs;

pub mod dashboard;
pub mod data;
pub mod file;
pub mod gui;
pub mod scrape;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use dashboard::{present, Dashboard};
pub use data::{Dataset, Filters, FilteredView, PriceRange};
pub use error::{CollectError, DataFormatError};
pub use record::{BookRecord, Rating};
pub use scrape::{collect, run_collect};
