// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Mirrors collection progress into the status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    pages: usize,
    records: usize,
    cap: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, pages: 0, records: 0, cap: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, cap: usize) {
        self.cap = cap;
        self.set_status("Collecting…");
    }

    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }

    fn item_done(&mut self, page_no: usize, records: usize) {
        self.pages = page_no;
        self.records = records;
        self.set_status(format!("Fetched page {page_no} ({records} books so far, cap {})", self.cap));
    }

    fn finish(&mut self) {
        if self.pages == 0 {
            self.set_status("Collect finished"); // nothing fetched
        } else {
            self.set_status(format!("Collect finished ({} pages, {} books)", self.pages, self.records));
        }
    }
}
