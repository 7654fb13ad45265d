// src/scrape.rs
use std::{
    error::Error,
    path::Path,
    sync::{
        Arc, mpsc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use crate::{
    config::consts::{JITTER_MS, REQUEST_PAUSE_MS, WORKERS},
    config::options::Params,
    core::net::{self, NetError},
    progress::Progress,
    record::{self, LicenseRecord, LicenseRef},
    specs, store,
    template::TemplateError,
};

/// Why one license dropped out of the manifest. Fetch trouble and bad
/// template content are distinct conditions and stay distinguishable.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] NetError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Everything a run collected, in scraped-index order. Failures are carried
/// out rather than swallowed so the caller can report them loudly.
pub struct Collected {
    pub records: Vec<LicenseRecord>,
    pub failures: Vec<(String, CollectError)>,
}

/// Fetch the appendix index, then fetch and assemble every license on a
/// small worker pool. Records come back in the same relative order as the
/// scraped index regardless of which worker finished first.
pub fn collect_licenses(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collected, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching license index…");
    }
    let refs = specs::appendix::fetch()?;
    logf!("Found {} licenses", refs.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(refs.len());
    }

    let total = refs.len();
    let refs_arc = Arc::new(refs);
    let counter = Arc::new(AtomicUsize::new(0));
    let headers_dir = Arc::new(params.headers_dir());

    type FetchOk = (usize, LicenseRecord);
    type FetchErr = (usize, String, CollectError);
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(total).max(1);

    for _ in 0..workers {
        let refs = Arc::clone(&refs_arc);
        let idx = Arc::clone(&counter);
        let headers_dir = Arc::clone(&headers_dir);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= refs.len() {
                    break;
                }
                let license = &refs[i];
                let result = match fetch_one(license, &headers_dir) {
                    Ok(rec) => Ok((i, rec)),
                    Err(e) => Err((i, license.spdx_id_lower.clone(), e)),
                };
                let _ = tx.send(result);
                let jitter = (i as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut done: Vec<(usize, LicenseRecord)> = Vec::with_capacity(total);
    let mut failed: Vec<(usize, String, CollectError)> = Vec::new();

    for _ in 0..total {
        match res_rx.recv() {
            Ok(Ok((i, rec))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&rec.spdx_id_lower);
                }
                done.push((i, rec));
            }
            Ok(Err((i, id, e))) => {
                loge!("{id}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&id, &e.to_string());
                }
                failed.push((i, id, e));
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Restore scraped-index order
    done.sort_by_key(|(i, _)| *i);
    failed.sort_by_key(|(i, _, _)| *i);

    Ok(Collected {
        records: done.into_iter().map(|(_, rec)| rec).collect(),
        failures: failed.into_iter().map(|(_, id, e)| (id, e)).collect(),
    })
}

/// One license end to end: fetch template, parse, assemble.
fn fetch_one(license: &LicenseRef, headers_dir: &Path) -> Result<LicenseRecord, CollectError> {
    let template = net::http_get(&license.template_url())?;
    let rec = record::assemble(license, &template, |id| store::header_exists(headers_dir, id))?;
    Ok(rec)
}
