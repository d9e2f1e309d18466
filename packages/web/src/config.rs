use anyhow::{Context, Result};
use std::env;
use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TOAST_TIMEOUT_MS: u64 = 3000;
const DEFAULT_FEATURED_DOCTORS: usize = 10;

/// Frontend configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin the `/api/...` endpoints are resolved against
    pub api_base_url: String,
    /// How long a notification stays on screen
    pub toast_timeout_ms: u64,
    /// Doctors shown on the home page before "Load More"
    pub featured_doctors: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            featured_doctors: DEFAULT_FEATURED_DOCTORS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(default_api_base_url),
            toast_timeout_ms: match lookup("TOAST_TIMEOUT_MS") {
                Some(value) => value
                    .parse()
                    .context("TOAST_TIMEOUT_MS must be a valid number")?,
                None => DEFAULT_TOAST_TIMEOUT_MS,
            },
            featured_doctors: match lookup("FEATURED_DOCTORS") {
                Some(value) => value
                    .parse()
                    .context("FEATURED_DOCTORS must be a valid number")?,
                None => DEFAULT_FEATURED_DOCTORS,
            },
        })
    }
}

/// Install the configuration. Call this at startup.
pub fn init_config(config: Config) {
    CONFIG.set(config).ok();
}

/// Get the installed configuration, or defaults if none was installed
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// In the browser the API lives on the same origin as the page
#[cfg(feature = "web")]
fn default_api_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(not(feature = "web"))]
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.toast_timeout_ms, 3000);
        assert_eq!(config.featured_doctors, 10);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config =
            Config::from_lookup(lookup(&[("API_BASE_URL", "https://clinic.example/")])).unwrap();
        assert_eq!(config.api_base_url, "https://clinic.example");
    }

    #[test]
    fn invalid_numbers_are_reported() {
        let err = Config::from_lookup(lookup(&[("TOAST_TIMEOUT_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("TOAST_TIMEOUT_MS"));
    }
}
