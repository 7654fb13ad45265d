// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications: each spec encodes *where the ground
//! truth lives in the HTML* and *how to extract it robustly*.
//!
//! ## Conventions & invariants
//! - **Pure HTML parsing** over an already-fetched document string, so every
//!   spec is testable **offline** against captured fixtures.
//! - Case-insensitive tag detection via `core::html`; prefer local scanning
//!   within known blocks over brittle full-document matching.
//! - Specs only extract. Fetching cadence, storage and the manifest are the
//!   business of `scrape`/`runner`/`store`.
//!
//! There is currently a single spec: `appendix`, the license index table on
//! choosealicense.com.

pub mod appendix;
