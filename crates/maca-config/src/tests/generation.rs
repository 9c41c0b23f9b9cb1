use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Generation
// =========================================================================

#[test]
#[serial]
fn given_poll_interval_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _interval = EnvGuard::set("MACA_POLL_INTERVAL_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_wait_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _wait = EnvGuard::set("MACA_MAX_WAIT_SECS", "7200");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_wait_below_poll_interval_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _interval = EnvGuard::set("MACA_POLL_INTERVAL_SECS", "60");
    let _wait = EnvGuard::set("MACA_MAX_WAIT_SECS", "30");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_valid_generation_config_when_validate_then_ok_and_durations_match() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _interval = EnvGuard::set("MACA_POLL_INTERVAL_SECS", "5");
    let _wait = EnvGuard::set("MACA_MAX_WAIT_SECS", "300");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(config.generation.poll_interval(), eq(Duration::from_secs(5)));
    assert_that!(config.generation.max_wait(), eq(Duration::from_secs(300)));
}
