use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Service
// =========================================================================

#[test]
#[serial]
fn given_no_anon_key_when_validate_then_error_mentions_anon_key() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("anon_key"));
}

#[test]
#[serial]
fn given_blank_anon_key_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _anon = EnvGuard::set("RA_SERVICE_ANON_KEY", "   ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_anon_key_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _anon = EnvGuard::set("RA_SERVICE_ANON_KEY", "anon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_non_http_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _anon = EnvGuard::set("RA_SERVICE_ANON_KEY", "anon");
    let _url = EnvGuard::set("RA_SERVICE_URL", "ftp://example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("service.url"));
}

#[test]
#[serial]
fn given_timeout_out_of_range_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _anon = EnvGuard::set("RA_SERVICE_ANON_KEY", "anon");
    let _timeout = EnvGuard::set("RA_REQUEST_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
