// src/record.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::consts::{TEMPLATE_EXT, TEMPLATE_URL_BASE};
use crate::template::{
    self, FIELD_MAP, TemplateError, extract_placeholder_tokens, normalize_fields,
};

/// One scraped appendix entry: display name + the lowercase identifier the
/// appendix links with. Everything else is derived later from the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRef {
    pub name: String,
    pub spdx_id_lower: String,
}

impl LicenseRef {
    pub fn new(name: impl Into<String>, spdx_id_lower: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spdx_id_lower: spdx_id_lower.into(),
        }
    }

    /// Raw template location in the choosealicense repository.
    pub fn template_url(&self) -> String {
        join!(TEMPLATE_URL_BASE, "/", &self.spdx_id_lower, ".", TEMPLATE_EXT)
    }
}

/// One manifest row: scraped identity plus everything derived from the
/// fetched template. Constructed whole by [`assemble`]; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub name: String,
    /// Canonical-case identifier from the template front matter, e.g. "0BSD".
    pub spdx_id: String,
    /// Lowercased `spdx_id`; file and URL key.
    pub spdx_id_lower: String,
    pub nickname: Option<String>,
    pub template_url: String,
    /// Whether a local header stub exists for this license.
    pub has_header: bool,
    /// Canonical placeholder field names referenced by the license body.
    pub fields: BTreeSet<String>,
    /// Raw fetched template; kept for saving, never serialized.
    #[serde(skip)]
    pub template: Option<String>,
}

/// Build a [`LicenseRecord`] from a scraped ref and its fetched template.
///
/// Front matter is parsed first; a missing required field invalidates the
/// record and surfaces as [`TemplateError`]. The parsed `title` replaces the
/// scraped display name, and `has_header` is probed with the parsed spdx id
/// lowercased: the template, not the appendix link, is the source of truth
/// for identity.
pub fn assemble(
    license: &LicenseRef,
    template: &str,
    header_exists: impl Fn(&str) -> bool,
) -> Result<LicenseRecord, TemplateError> {
    let meta = template::parse_front_matter(template)?;
    let spdx_id_lower = meta.spdx_id.to_ascii_lowercase();

    let body = template::license_body(template);
    let fields = normalize_fields(&extract_placeholder_tokens(body), FIELD_MAP);

    let has_header = header_exists(&spdx_id_lower);

    Ok(LicenseRecord {
        name: meta.title,
        spdx_id: meta.spdx_id,
        spdx_id_lower,
        nickname: meta.nickname,
        template_url: license.template_url(),
        has_header,
        fields,
        template: Some(s!(template)),
    })
}
