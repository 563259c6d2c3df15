//! Endpoint configuration and optional `.matcher.toml` loading.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

/// Where the similarity API lives unless `.matcher.toml` says otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/find-similar";

/// Multipart field the API reads the image from.
pub const IMAGE_FIELD: &str = "image";

pub const CONFIG_FILE: &str = ".matcher.toml";

/// Known keys in `.matcher.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["endpoint", "timeout_secs"];

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub endpoint: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), timeout: None }
    }
}

impl ApiConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), ..Self::default() }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Load API configuration from `.matcher.toml` in `dir`.
///
/// Missing file, parse errors and bad values all fall back to defaults with a
/// warning. Unknown keys trigger a warning with a typo suggestion.
pub fn load_matcher_config(dir: &Path) -> ApiConfig {
    let mut config = ApiConfig::default();
    let config_path = dir.join(CONFIG_FILE);

    if !config_path.exists() {
        return config;
    }

    debug!(path = %config_path.display(), "Loading {CONFIG_FILE}");
    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Could not read {CONFIG_FILE}");
            return config;
        }
    };
    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE}");
            return config;
        }
    };

    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS
            .iter()
            .min_by_key(|k| edit_distance(key, k))
            .copied()
            .unwrap_or_default();
        if edit_distance(key, suggestion) <= 3 {
            warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE} — did you mean '{suggestion}'?"
            );
        } else {
            warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            );
        }
    }

    match table.get("endpoint") {
        Some(toml::Value::String(s)) if !s.trim().is_empty() => {
            config.endpoint = s.trim().to_string();
        }
        Some(_) => warn!("Ignoring 'endpoint' in {CONFIG_FILE}: expected a non-empty string"),
        None => {}
    }

    match table.get("timeout_secs") {
        Some(toml::Value::Integer(n)) if *n > 0 => {
            config.timeout = Some(Duration::from_secs(*n as u64));
        }
        Some(_) => warn!("Ignoring 'timeout_secs' in {CONFIG_FILE}: expected a positive integer"),
        None => {}
    }

    config
}
