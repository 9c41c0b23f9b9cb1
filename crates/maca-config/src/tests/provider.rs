use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err};
use serial_test::serial;

#[test]
#[serial]
fn given_gemini_api_key_env_when_load_then_key_configured() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _maca_key = EnvGuard::remove("MACA_PROVIDER_API_KEY");
    let _key = EnvGuard::set("GEMINI_API_KEY", "secret-key");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.provider.has_api_key());
    assert_eq!(config.provider.api_key.as_deref(), Some("secret-key"));
}

#[test]
#[serial]
fn given_blank_api_key_env_when_load_then_key_missing() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _maca_key = EnvGuard::remove("MACA_PROVIDER_API_KEY");
    let _key = EnvGuard::set("GEMINI_API_KEY", "   ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(!config.provider.has_api_key());
    assert!(config.provider.api_key.is_none());
}

#[test]
#[serial]
fn given_api_key_when_debug_formatted_then_key_redacted() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _key = EnvGuard::set("MACA_PROVIDER_API_KEY", "super-secret");

    // When
    let config = Config::load().unwrap();
    let rendered = format!("{:?}", config.provider);

    // Then
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
#[serial]
fn given_empty_model_name_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _model = EnvGuard::set("MACA_VIDEO_MODEL", " ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
