// src/core/net.rs

// Blocking HTTPS GET via a shared client.

use std::sync::OnceLock;
use std::time::Duration;

use thiserror::Error;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Error)]
pub enum NetError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP error: {status} {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

static CLIENT: OnceLock<reqwest::blocking::Client> = OnceLock::new();

fn client() -> &'static reqwest::blocking::Client {
    CLIENT.get_or_init(|| {
        reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            // Builder only fails on TLS backend / resolver misconfiguration.
            .unwrap_or_else(|_| reqwest::blocking::Client::new())
    })
}

pub fn http_get(url: &str) -> Result<String, NetError> {
    let resp = client().get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(NetError::Status {
            status,
            url: s!(url),
        });
    }
    Ok(resp.text()?)
}
