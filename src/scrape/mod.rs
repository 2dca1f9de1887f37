// src/scrape/mod.rs
mod collect;

pub use collect::{collect, run_collect, run_collect_with, CollectSummary};
