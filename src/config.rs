//! Server settings read from the environment at startup.
//! HOST (default 0.0.0.0), PORT (default 8080), FETCH_DELAY_MS (default 500).

use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Artificial delay before answering a single-entity fetch.
    pub fetch_delay: Duration,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_fetch_delay_ms() -> u64 {
    500
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fetch_delay: Duration::from_millis(default_fetch_delay_ms()),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or_else(default_port);
        let delay_ms = lookup("FETCH_DELAY_MS")
            .and_then(|d| d.trim().parse().ok())
            .unwrap_or_else(default_fetch_delay_ms);
        Self {
            host,
            port,
            fetch_delay: Duration::from_millis(delay_ms),
        }
    }
}
