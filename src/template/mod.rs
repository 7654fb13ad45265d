// src/template/mod.rs
//! License template processing.
//!
//! A choosealicense template is a front-matter block of `key: value` lines
//! fenced by `---` markers, followed by the license text itself. This module
//! owns the two text-processing halves:
//! - `front_matter` pulls `title` / `spdx-id` / `nickname` out of the
//!   metadata block, failing loudly (and field-specifically) when a required
//!   key is absent.
//! - `fields` finds bracketed placeholder tokens (`[year]`, `<fullname>`)
//!   in the license body and collapses synonym spellings into canonical field
//!   names via `FIELD_MAP`.
//!
//! Everything here is pure string work; fetching and storage live elsewhere.

pub mod fields;
pub mod front_matter;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A required front-matter key was absent (or its value empty).
    #[error("Failed to determine license header field: {field}")]
    MissingField { field: &'static str },
}

pub use fields::{FIELD_MAP, extract_placeholder_tokens, normalize_fields};
pub use front_matter::{LicenseMetadata, license_body, parse_front_matter};
