// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one license has been fetched and assembled.
    fn item_done(&mut self, _spdx_id_lower: &str) {}

    /// Called when one license could not be collected.
    fn item_failed(&mut self, _spdx_id_lower: &str, _why: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
