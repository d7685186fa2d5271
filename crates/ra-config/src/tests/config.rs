use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok};
use serial_test::serial;
use tempfile::TempDir;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.service.url.as_str(), eq(crate::DEFAULT_SERVICE_URL));
    assert_that!(
        config.service.request_timeout_secs,
        eq(crate::DEFAULT_REQUEST_TIMEOUT_SECS)
    );
    assert_that!(config.service.anon_key, none());
    assert_that!(config.auth.min_password_length, eq(6));
    assert_that!(config.session.dir.as_str(), eq("sessions"));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let (temp, _guards) = setup_config_dir();
    let nested = temp.path().join("nested/roster");
    let _dir = EnvGuard::set("RA_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [service]
              url = "https://abc.supabase.co"
              anon_key = "anon"
              request_timeout_secs = 10

              [auth]
              password_reset_redirect = "https://admin.example.com/update-password"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.service.url.as_str(), eq("https://abc.supabase.co"));
    assert_that!(config.service.request_timeout_secs, eq(10));
    assert_that!(
        config.auth.password_reset_redirect.as_str(),
        eq("https://admin.example.com/update-password")
    );
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[service]\nurl = \"https://from-file.example.com\"",
    )
    .unwrap();
    let _url = EnvGuard::set("RA_SERVICE_URL", "https://from-env.example.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.service.url.as_str(), eq("https://from-env.example.com"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _anon = EnvGuard::set("RA_SERVICE_ANON_KEY", "anon-key");
    let _role = EnvGuard::set("RA_SERVICE_ROLE_KEY", "role-key");
    let _timeout = EnvGuard::set("RA_REQUEST_TIMEOUT_SECS", "5");
    let _colored = EnvGuard::set("RA_LOG_COLORED", "false");
    let _file = EnvGuard::set("RA_LOG_FILE", "roster.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.service.anon_key.as_deref(), eq(Some("anon-key")));
    assert_that!(config.service.service_role_key.as_deref(), eq(Some("role-key")));
    assert_that!(config.service.request_timeout_secs, eq(5));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("roster.log")));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_inside_log_dir() {
    // Given
    let (temp, _guards) = setup_config_dir();
    let _file = EnvGuard::set("RA_LOG_FILE", "roster.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("log").join("roster.log")));
}

#[test]
#[serial]
fn given_default_session_dir_when_session_dir_then_under_config_dir() {
    // Given
    let (temp, _guards) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.session_dir(),
        eq(&temp.path().join("sessions"))
    );
}

#[test]
#[serial]
fn given_explicit_dir_when_load_from_then_env_dir_ignored() {
    // Given
    let (env_dir, _guards) = setup_config_dir();
    std::fs::write(
        env_dir.path().join("config.toml"),
        "[service]\nurl = \"https://from-env-dir.example.com\"",
    )
    .unwrap();
    let explicit = TempDir::new().unwrap();
    std::fs::write(
        explicit.path().join("config.toml"),
        "[service]\nurl = \"https://from-flag.example.com\"",
    )
    .unwrap();

    // When
    let config = Config::load_from(Some(explicit.path())).unwrap();

    // Then
    assert_that!(config.service.url.as_str(), eq("https://from-flag.example.com"));
    assert_that!(config.dir(), eq(explicit.path()));
    assert_that!(
        config.session_dir(),
        eq(&explicit.path().join("sessions"))
    );
}
