// src/config/consts.rs

// Net config
pub const APPENDIX_URL: &str = "https://choosealicense.com/appendix/";
pub const TEMPLATE_URL_BASE: &str =
    "https://raw.githubusercontent.com/github/choosealicense.com/gh-pages/_licenses";
pub const USER_AGENT: &str = concat!("license_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Output layout
pub const DEFAULT_OUT_DIR: &str = "out";
pub const TEMPLATES_SUBDIR: &str = "templates";
pub const HEADERS_SUBDIR: &str = "headers";
pub const MANIFEST_FILE: &str = "licenses.manifest.json";
pub const TEMPLATE_EXT: &str = "txt";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
