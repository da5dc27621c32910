//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# hexrgb configuration
# Only override what you want to change -- missing fields use defaults.
# Command-line flags (--host, --port, --log-level) take precedence.

[server]
# host = "0.0.0.0"         # IP address or hostname to bind
# port = 8000              # 1-65535
# max_body_bytes = 16384   # 64-1048576, largest accepted request body

[logging]
# level = "info"           # trace, debug, info, warn, error
# RUST_LOG overrides this when set.
"##
    .to_string()
}
