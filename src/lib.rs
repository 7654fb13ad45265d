// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;
pub mod template;

#[macro_use]
pub mod log;
pub mod manifest;
pub mod progress;
pub mod record;
pub mod runner;
pub mod scrape;
pub mod store;
