use crate::constants::{
    API_FOOTBALL_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, FOOTBALL_DATA_BASE_URL, env_vars,
};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration for the data core.
///
/// Both provider credentials are mandatory: there is deliberately no
/// baked-in fallback key, and `validate` fails loudly when one is missing
/// so that a misconfigured deployment cannot silently run on someone
/// else's quota.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API key for football-data.org, sent as `X-Auth-Token`.
    pub football_data_api_key: String,
    /// API key for api-football, sent as `x-apisports-key`.
    pub api_football_api_key: String,
    /// Base URL for football-data.org requests.
    #[serde(default = "default_football_data_base_url")]
    pub football_data_base_url: String,
    /// Base URL for api-football requests.
    #[serde(default = "default_api_football_base_url")]
    pub api_football_base_url: String,
    /// HTTP timeout in seconds for provider requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_football_data_base_url() -> String {
    FOOTBALL_DATA_BASE_URL.to_string()
}

fn default_api_football_base_url() -> String {
    API_FOOTBALL_BASE_URL.to_string()
}

impl Config {
    /// Creates a configuration from explicit credentials with default
    /// base URLs and timeout. Intended for embedders and tests that do
    /// not use a config file.
    pub fn with_keys(
        football_data_api_key: impl Into<String>,
        api_football_api_key: impl Into<String>,
    ) -> Self {
        Config {
            football_data_api_key: football_data_api_key.into(),
            api_football_api_key: api_football_api_key.into(),
            football_data_base_url: default_football_data_base_url(),
            api_football_base_url: default_api_football_base_url(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }

    /// Loads configuration from the default config file location, then
    /// applies environment-variable overrides.
    ///
    /// # Environment Variables
    /// - `FOOTBALL_DATA_ORG_KEY` - Override football-data.org API key
    /// - `API_FOOTBALL_KEY` - Override api-football API key
    /// - `BSPORTS_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `BSPORTS_LOG_FILE` - Override log file path
    ///
    /// Environment variables take precedence over config file values. If
    /// no config file exists, the credentials must be supplied entirely
    /// through the environment or loading fails.
    pub async fn load() -> Result<Self, ApiError> {
        let config_path = get_config_path();
        Self::load_from_path(&config_path).await
    }

    /// Loads configuration from a custom file path with the same
    /// environment override and validation behavior as [`Config::load`].
    pub async fn load_from_path(path: &str) -> Result<Self, ApiError> {
        let mut config = if Path::new(path).exists() {
            let content = fs::read_to_string(path).await?;
            toml::from_str(&content)?
        } else {
            Config::with_keys("", "")
        };

        if let Ok(key) = std::env::var(env_vars::FOOTBALL_DATA_KEY) {
            config.football_data_api_key = key;
        }
        if let Ok(key) = std::env::var(env_vars::API_FOOTBALL_KEY) {
            config.api_football_api_key = key;
        }
        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings.
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(ApiError::Config)` - A credential is missing, a base URL is
    ///   malformed, or the timeout is zero
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.football_data_api_key.trim().is_empty() {
            return Err(ApiError::config_error(format!(
                "football-data.org API key is not set (config file or {})",
                env_vars::FOOTBALL_DATA_KEY
            )));
        }
        if self.api_football_api_key.trim().is_empty() {
            return Err(ApiError::config_error(format!(
                "api-football API key is not set (config file or {})",
                env_vars::API_FOOTBALL_KEY
            )));
        }
        for url in [&self.football_data_base_url, &self.api_football_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ApiError::config_error(format!(
                    "Base URL must include an http(s) scheme: {url}"
                )));
            }
        }
        if self.http_timeout_seconds == 0 {
            return Err(ApiError::config_error("HTTP timeout must be non-zero"));
        }
        Ok(())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), ApiError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it does not exist.
    pub async fn save_to_path(&self, path: &str) -> Result<(), ApiError> {
        let config_dir = Path::new(path)
            .parent()
            .ok_or_else(|| ApiError::config_error(format!("Path '{path}' has no parent directory")))?;
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }
}

/// Platform-specific config file path, falling back to the current
/// directory when no config directory is available.
fn get_config_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("bsports").join("config.toml"))
        .unwrap_or_else(|| Path::new("config.toml").to_path_buf())
        .to_string_lossy()
        .to_string()
}

fn get_log_dir_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("bsports").join("logs"))
        .unwrap_or_else(|| Path::new("logs").to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::FOOTBALL_DATA_KEY);
            std::env::remove_var(env_vars::API_FOOTBALL_KEY);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::LOG_FILE);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_load_save_roundtrip() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml").to_string_lossy().to_string();

        let config = Config::with_keys("fd-key", "af-key");
        config.save_to_path(&path).await.unwrap();

        let loaded = Config::load_from_path(&path).await.unwrap();
        assert_eq!(loaded.football_data_api_key, "fd-key");
        assert_eq!(loaded.api_football_api_key, "af-key");
        assert_eq!(loaded.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
        assert_eq!(loaded.football_data_base_url, FOOTBALL_DATA_BASE_URL);
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_take_precedence() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml").to_string_lossy().to_string();
        Config::with_keys("file-fd", "file-af")
            .save_to_path(&path)
            .await
            .unwrap();

        unsafe {
            std::env::set_var(env_vars::FOOTBALL_DATA_KEY, "env-fd");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }
        let loaded = Config::load_from_path(&path).await.unwrap();
        clear_env();

        assert_eq!(loaded.football_data_api_key, "env-fd");
        assert_eq!(loaded.api_football_api_key, "file-af");
        assert_eq!(loaded.http_timeout_seconds, 5);
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_credentials_fail_loudly() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir
            .path()
            .join("does_not_exist.toml")
            .to_string_lossy()
            .to_string();

        let result = Config::load_from_path(&path).await;
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::with_keys("a", "b");
        config.api_football_base_url = "v3.football.api-sports.io".to_string();
        assert!(matches!(config.validate(), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let config = Config::with_keys("  ", "b");
        assert!(matches!(config.validate(), Err(ApiError::Config(_))));
    }
}
