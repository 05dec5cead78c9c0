//! Configuration management for macrolog.
//!
//! Loads configuration from ${MACROLOG_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for macrolog configuration and data files.
    //!
    //! MACROLOG_HOME resolution order:
    //! 1. MACROLOG_HOME environment variable (if set)
    //! 2. ~/.config/macrolog (default)
    //! 3. ./.macrolog when no home directory can be determined

    use std::path::PathBuf;

    pub fn macrolog_home() -> PathBuf {
        if let Ok(home) = std::env::var("MACROLOG_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".macrolog"),
            |h| h.join(".config").join("macrolog"),
        )
    }

    pub fn config_path() -> PathBuf {
        macrolog_home().join("config.toml")
    }

    /// Local key-value store (same-day response cache).
    pub fn storage_path() -> PathBuf {
        macrolog_home().join("storage.json")
    }

    pub fn logs_dir() -> PathBuf {
        macrolog_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the nutrition API.
    pub api_base_url: String,

    /// Timeout for a single API request in seconds (0 disables).
    pub request_timeout_secs: u64,

    /// Debounce quiet period for food search.
    pub search_debounce_ms: u64,

    /// Minimum query length that triggers a search.
    pub min_search_chars: usize,

    /// Default tracing filter when `MACROLOG_LOG` is unset.
    pub log_level: String,
}

impl Config {
    const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
    const DEFAULT_MIN_SEARCH_CHARS: usize = 2;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Saves only the api_base_url field to a specific config file path.
    ///
    /// Creates the file from the template if it doesn't exist; otherwise
    /// edits the existing document in place so comments survive.
    pub fn save_api_base_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc["api_base_url"] = value(url.trim_end_matches('/'));

        Self::write_config(path, &doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        crate::storage::write_atomic(path, content)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            search_debounce_ms: Self::DEFAULT_SEARCH_DEBOUNCE_MS,
            min_search_chars: Self::DEFAULT_MIN_SEARCH_CHARS,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.min_search_chars, 2);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "api_base_url = \"http://food.lan:9000\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, "http://food.lan:9000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_request_timeout_zero_disables() {
        let config = Config {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        Config::init(&config_path).unwrap();
        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_save_api_base_url_preserves_comments_and_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");
        fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        fs::write(
            &config_path,
            "# mine\napi_base_url = \"http://old\"\nsearch_debounce_ms = 500\n",
        )
        .unwrap();

        Config::save_api_base_url_to(&config_path, "http://new:8000/").unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# mine"));
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, "http://new:8000");
        assert_eq!(config.search_debounce_ms, 500);
    }

    #[test]
    fn test_save_api_base_url_creates_from_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("a").join("config.toml");

        Config::save_api_base_url_to(&config_path, "http://x").unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# macrolog Configuration"));
        assert_eq!(
            Config::load_from(&config_path).unwrap().api_base_url,
            "http://x"
        );
    }
}
