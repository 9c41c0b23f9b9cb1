use crate::{
    BackendConfig, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    GenerationConfig, LoggingConfig, PayeeConfig, ProviderConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub provider: ProviderConfig,
    pub generation: GenerationConfig,
    pub payee: PayeeConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MACA_CONFIG_DIR env var, else use ./.maca/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MACA_* (and GEMINI_API_KEY) environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MACA_CONFIG_DIR env var > ./.maca/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("MACA_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.provider.validate()?;
        self.generation.validate()?;
        self.payee.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Absolute path of the local key/value store directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  backend: {} (timeout {}s)",
            self.backend.base_url, self.backend.request_timeout_secs
        );
        info!(
            "  provider: {} (key: {}, timeout {}s)",
            self.provider.api_base,
            if self.provider.has_api_key() {
                "configured"
            } else {
                "missing"
            },
            self.provider.request_timeout_secs
        );
        info!(
            "  models: text={}, image={}, video={}, verification={}",
            self.provider.text_model,
            self.provider.image_model,
            self.provider.video_model,
            self.provider.verification_model
        );
        info!(
            "  generation: poll={}s, max_wait={}s",
            self.generation.poll_interval_secs, self.generation.max_wait_secs
        );
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_string("MACA_BACKEND_URL", &mut self.backend.base_url);
        Self::apply_env_parse(
            "MACA_BACKEND_TIMEOUT_SECS",
            &mut self.backend.request_timeout_secs,
        );

        // Provider
        Self::apply_env_string("MACA_PROVIDER_API_BASE", &mut self.provider.api_base);
        Self::apply_env_option_string("GEMINI_API_KEY", &mut self.provider.api_key);
        Self::apply_env_option_string("MACA_PROVIDER_API_KEY", &mut self.provider.api_key);
        Self::apply_env_string("MACA_TEXT_MODEL", &mut self.provider.text_model);
        Self::apply_env_string("MACA_IMAGE_MODEL", &mut self.provider.image_model);
        Self::apply_env_string("MACA_VIDEO_MODEL", &mut self.provider.video_model);
        Self::apply_env_string(
            "MACA_VERIFICATION_MODEL",
            &mut self.provider.verification_model,
        );
        Self::apply_env_parse(
            "MACA_PROVIDER_TIMEOUT_SECS",
            &mut self.provider.request_timeout_secs,
        );

        // Generation
        Self::apply_env_parse(
            "MACA_POLL_INTERVAL_SECS",
            &mut self.generation.poll_interval_secs,
        );
        Self::apply_env_parse("MACA_MAX_WAIT_SECS", &mut self.generation.max_wait_secs);

        // Payee
        Self::apply_env_string("MACA_PAYEE_LEGAL_NAME", &mut self.payee.legal_name);

        // Storage
        Self::apply_env_string("MACA_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("MACA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MACA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MACA_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.trim().is_empty()
        {
            *target = Some(val);
        }
    }
}
