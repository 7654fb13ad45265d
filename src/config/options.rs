// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Options for a single run, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Base output directory. Templates, headers and the manifest live under it
    /// unless overridden individually.
    pub out: PathBuf,
    /// Where header stubs are looked up. `None` → `<out>/headers`.
    pub headers_dir: Option<PathBuf>,
    /// Manifest file name, relative to `out`.
    pub manifest: String,
    /// Save fetched template files under `<out>/templates`.
    pub save_templates: bool,
    pub quiet: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_DIR),
            headers_dir: None,
            manifest: s!(MANIFEST_FILE),
            save_templates: true,
            quiet: false,
        }
    }
}

impl Params {
    pub fn templates_dir(&self) -> PathBuf {
        self.out.join(TEMPLATES_SUBDIR)
    }

    pub fn headers_dir(&self) -> PathBuf {
        match &self.headers_dir {
            Some(dir) => dir.clone(),
            None => self.out.join(HEADERS_SUBDIR),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out.join(&self.manifest)
    }

    pub fn set_out(&mut self, path: &str) {
        self.out = Path::new(path).to_path_buf();
    }
}
