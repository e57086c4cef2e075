// src/progress.rs
use std::path::Path;

use crate::config::Category;

/// Lightweight progress reporting for a dump run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// A category is starting; `total` is the number of module files it will write.
    fn begin(&mut self, _category: Category, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One module file was written.
    fn item_done(&mut self, _path: &Path) {}

    /// Called once at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
