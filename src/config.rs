// src/config.rs

use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
/// Cache timeout handed to the page renderer, in seconds.
pub const DEFAULT_CACHE_TIMEOUT_SECS: u64 = 300;
/// Age a log must reach before its page may be cached at all: one day.
pub const DEFAULT_FRESH_THRESHOLD_SECS: u64 = 86_400;
pub const DEFAULT_OPENID_URL: &str = "/openid/login/";

/// Everything the request handlers need to know, fixed at construction
/// time. There is no other settings access.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub db_path: PathBuf,
    pub cache_timeout_secs: u64,
    pub fresh_threshold_secs: u64,
    /// Where /login sends the browser; the OpenID flow itself is external.
    pub openid_url: String,
    /// External command run before each request to refresh the logs.
    /// None disables the refresh hook.
    pub update_logs_cmd: Option<String>,
}

impl Config {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            db_path,
            cache_timeout_secs: DEFAULT_CACHE_TIMEOUT_SECS,
            fresh_threshold_secs: DEFAULT_FRESH_THRESHOLD_SECS,
            openid_url: DEFAULT_OPENID_URL.to_string(),
            update_logs_cmd: None,
        }
    }
}
