// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::options::Params,
    manifest::Manifest,
    progress::Progress,
    scrape::{self, CollectError},
    store,
};

/// Summary of what a run produced.
pub struct RunSummary {
    pub manifest_path: PathBuf,
    pub templates_written: Vec<PathBuf>,
    pub licenses: usize,
    pub failures: Vec<(String, CollectError)>,
}

/// Top-level run: validate the output layout, collect everything, save the
/// templates, write the manifest.
///
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    store::ensure_directory(&params.out)?;
    let templates_dir = params.templates_dir();
    if params.save_templates {
        store::ensure_directory(&templates_dir)?;
    }

    let collected = scrape::collect_licenses(params, progress)?;

    let mut templates_written = Vec::with_capacity(collected.records.len());
    if params.save_templates {
        for rec in &collected.records {
            // Every collected record still carries its template text.
            let Some(template) = rec.template.as_deref() else {
                continue;
            };
            let path = store::template_path(&templates_dir, &rec.spdx_id_lower);
            store::save_template(&path, template)?;
            templates_written.push(path);
        }
        logf!("Saved {} template files", templates_written.len());
    }

    let licenses = collected.records.len();
    let manifest = Manifest::from_records(collected.records);
    let manifest_path = params.manifest_path();
    manifest.write(&manifest_path)?;
    logf!("Wrote manifest: {}", manifest_path.display());

    Ok(RunSummary {
        manifest_path,
        templates_written,
        licenses,
        failures: collected.failures,
    })
}
