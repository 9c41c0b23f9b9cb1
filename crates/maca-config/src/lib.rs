mod backend_config;
mod config;
mod error;
mod generation_config;
mod log_level;
mod logging_config;
mod payee_config;
mod provider_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use generation_config::GenerationConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use payee_config::PayeeConfig;
pub use provider_config::ProviderConfig;
pub use storage_config::StorageConfig;

const DEFAULT_CONFIG_DIR: &str = ".maca";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BACKEND_URL: &str = "https://api.maca-art.com";
const DEFAULT_PROVIDER_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const DEFAULT_VIDEO_MODEL: &str = "veo-3.1-fast-generate-preview";
const DEFAULT_VERIFICATION_MODEL: &str = "gemini-3-flash-preview";

const DEFAULT_PAYEE_LEGAL_NAME: &str = "ROBERIA ARAUJO DE LEMOS";

const DEFAULT_STORAGE_DIR: &str = "storage";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
