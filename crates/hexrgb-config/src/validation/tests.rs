//! Tests for config validation.

use super::*;
use crate::schema::HexRgbConfig;

fn error_message(config: &HexRgbConfig) -> String {
    match validate(config) {
        Err(ConfigError::ValidationError(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&HexRgbConfig::default()).is_ok());
}

#[test]
fn accepts_ip_and_hostname_hosts() {
    for host in ["127.0.0.1", "::1", "[::1]", "localhost", "api.example.com"] {
        let mut config = HexRgbConfig::default();
        config.server.host = host.into();
        assert!(validate(&config).is_ok(), "host {host} should be valid");
    }
}

#[test]
fn rejects_empty_host() {
    let mut config = HexRgbConfig::default();
    config.server.host = "  ".into();
    assert!(error_message(&config).contains("server.host must not be empty"));
}

#[test]
fn rejects_malformed_host() {
    for host in ["bad host", "-leading.example", "trailing..dot", "under_score"] {
        let mut config = HexRgbConfig::default();
        config.server.host = host.into();
        assert!(
            error_message(&config).contains("server.host"),
            "host {host} should be rejected"
        );
    }
}

#[test]
fn rejects_port_zero() {
    let mut config = HexRgbConfig::default();
    config.server.port = 0;
    assert!(error_message(&config).contains("server.port"));
}

#[test]
fn rejects_body_limit_out_of_range() {
    let mut config = HexRgbConfig::default();
    config.server.max_body_bytes = 10;
    assert!(error_message(&config).contains("server.max_body_bytes = 10 is out of range"));

    config.server.max_body_bytes = 2 * 1024 * 1024;
    assert!(error_message(&config).contains("server.max_body_bytes"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut config = HexRgbConfig::default();
    config.logging.level = "DEBUG".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn rejects_unknown_log_level() {
    let mut config = HexRgbConfig::default();
    config.logging.level = "verbose".into();
    assert!(error_message(&config).contains("logging.level"));
}

#[test]
fn collects_all_errors() {
    let mut config = HexRgbConfig::default();
    config.server.port = 0;
    config.logging.level = "loud".into();
    let msg = error_message(&config);
    assert!(msg.contains("server.port"));
    assert!(msg.contains("logging.level"));
    assert!(msg.contains("; "));
}
