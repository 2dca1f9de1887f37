// src/progress.rs
/// Lightweight progress reporting for long-running operations (collect/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the page cap (upper bound, not a promise).
    fn begin(&mut self, _cap: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One listing page fetched and parsed; `records` is the running total.
    fn item_done(&mut self, _page_no: usize, _records: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
