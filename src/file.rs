// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::consts::MODULE_EXT;
use crate::config::{Category, GameMode};
use crate::emit::{self, Layout};
use crate::error::{Error, Result};
use crate::progress::Progress;

/// A rendered module waiting to be written. Rendering everything first means
/// a category either lands on disk whole or not at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingModule {
    pub path: PathBuf,
    pub contents: String,
}

impl PendingModule {
    pub fn render<T: Serialize + ?Sized>(path: PathBuf, rows: &T, layout: Layout) -> Result<Self> {
        let value = serde_json::to_value(rows)?;
        Ok(Self { path, contents: emit::render_module(&value, layout) })
    }
}

/// `<dir>/<mode>.<category>.ts`
pub fn module_path(dir: &Path, mode: GameMode, category: Category) -> PathBuf {
    dir.join(join!(mode.as_str(), ".", category.tag(), ".", MODULE_EXT))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Overwrite each module file whole. Returns the paths written, in order.
pub fn write_modules(
    modules: &[PendingModule],
    progress: &mut dyn Progress,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(modules.len());
    for module in modules {
        if let Some(parent) = module.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        fs::write(&module.path, &module.contents)?;
        logd!("Wrote {} ({} bytes)", module.path.display(), module.contents.len());
        progress.item_done(&module.path);
        written.push(module.path.clone());
    }
    Ok(written)
}
