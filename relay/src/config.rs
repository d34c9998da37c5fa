//! Relay configuration
//!
//! Read once at startup from the environment. A missing credential is
//! tolerated at boot and answered with 500 per request, so a
//! misconfigured deployment fails loudly instead of crashing silently
//! under a supervisor restart loop.

use std::env;

use tracing::warn;

const DEFAULT_PORT: u16 = 8788;

pub struct Config {
    pub port: u16,
    /// Gemini API credential; never leaves this process
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: load_port(),
            gemini_api_key: load_key(),
        }
    }
}

fn load_port() -> u16 {
    match env::var("RELAY_PORT") {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("Invalid RELAY_PORT value: {e}, using default {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn load_key() -> Option<String> {
    match env::var("GEMINI_API_KEY") {
        Ok(key) if !key.is_empty() => Some(key),
        _ => {
            warn!("GEMINI_API_KEY not set; analysis requests will be rejected");
            None
        }
    }
}
