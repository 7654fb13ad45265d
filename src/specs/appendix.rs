// src/specs/appendix.rs
//! Scraping *spec* for the choosealicense.com appendix.
//!
//! The appendix lists every license as a table row whose header cell links to
//! the license page:
//!
//! ```text
//! <tr>
//!   <th scope="row"><a href="/licenses/0bsd/">BSD Zero Clause License</a></th>
//!   ...
//! </tr>
//! ```
//!
//! `fetch()` downloads the page and returns `(display name, spdx_id_lower)`
//! refs in document order. The identifier is the last path segment of the
//! href, which is the same lowercase key the raw-template repository uses.

use std::error::Error;

use crate::config::consts::APPENDIX_URL;
use crate::core::html::{next_tag_block_ci, slice_between_ci, strip_tags, to_lower};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::record::LicenseRef;

pub fn fetch() -> Result<Vec<LicenseRef>, Box<dyn Error>> {
    let html_doc = net::http_get(APPENDIX_URL)?;
    let refs = parse(&html_doc);
    if refs.is_empty() {
        return Err("appendix: no license rows found".into());
    }
    Ok(refs)
}

/// Extract license refs from the appendix HTML. Pure; fixture-testable.
pub fn parse(doc: &str) -> Vec<LicenseRef> {
    // The license index is the only table on the page.
    let table = match slice_between_ci(doc, "<table", "</table>") {
        Some(t) => t,
        None => return Vec::new(),
    };

    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((th_s, th_e)) = next_tag_block_ci(table, "<th", "</th>", pos) {
        let th = &table[th_s..th_e];
        pos = th_e;

        // Row-header cells only; the column headers in <thead> lack scope="row".
        let opener = &th[..th.find('>').map(|i| i + 1).unwrap_or(th.len())];
        if !to_lower(opener).contains("scope=\"row\"") && !to_lower(opener).contains("scope='row'")
        {
            continue;
        }

        if let Some(license) = parse_row_anchor(th) {
            out.push(license);
        }
    }

    out
}

/// First `<a href="/licenses/<id>/">NAME</a>` inside one header cell.
fn parse_row_anchor(th: &str) -> Option<LicenseRef> {
    let lc = to_lower(th);
    let a_pos = lc.find("<a")?;
    let opener_end = th[a_pos..].find('>')? + a_pos;
    let a_open = &th[a_pos..opener_end + 1];

    let id = href_last_segment(a_open)?;

    let close_rel = lc[opener_end + 1..].find("</a>")?;
    let text = &th[opener_end + 1..opener_end + 1 + close_rel];
    let name = strip_tags(normalize_entities(text));
    if name.is_empty() || id.is_empty() {
        return None;
    }

    Some(LicenseRef::new(name, id))
}

/// Last path segment of the opener's href value, trailing slash ignored.
fn href_last_segment(a_open: &str) -> Option<String> {
    let lc = to_lower(a_open);
    let hp = lc.find("href=")?;
    let val = a_open[hp + 5..].trim_start();

    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..].find(quote).map(|e| start_off + e)
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>')
    }
    .unwrap_or(val.len());
    let href_val = val[start_off..end].trim_end_matches('/');

    href_val.rsplit('/').next().map(to_lower)
}
