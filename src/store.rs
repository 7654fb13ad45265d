// src/store.rs

// Output-directory layout and template persistence.
//
//   <out>/templates/<id>.txt      saved license templates
//   <out>/headers/<id>.txt        pre-existing header stubs (never written here)
//   <out>/licenses.manifest.json  the manifest
//
// Header stubs are input, not output: their presence is what sets
// `has_header` on a record.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::TEMPLATE_EXT;

fn id_filename(spdx_id_lower: &str) -> String {
    join!(spdx_id_lower, ".", TEMPLATE_EXT)
}

pub fn template_path(templates_dir: &Path, spdx_id_lower: &str) -> PathBuf {
    templates_dir.join(id_filename(spdx_id_lower))
}

pub fn header_path(headers_dir: &Path, spdx_id_lower: &str) -> PathBuf {
    headers_dir.join(id_filename(spdx_id_lower))
}

pub fn header_exists(headers_dir: &Path, spdx_id_lower: &str) -> bool {
    header_path(headers_dir, spdx_id_lower).is_file()
}

/// Error if the path exists and is not a directory; create it otherwise.
pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Save one template verbatim. Parent directory must already exist.
pub fn save_template(path: &Path, template: &str) -> io::Result<()> {
    fs::write(path, template)
}
