//! hexrgb-server: HTTP service that converts hex color codes to RGB.
//!
//! Routes live in [`routes`]; each accepted TCP connection is served on
//! its own task by hyper's HTTP/1 driver.

mod cli;
mod connection;
mod docs;
mod protocol;
mod routes;

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

use hexrgb_common::HexRgbError;
use hexrgb_config::{config_to_json, load_config, HexRgbConfig, ServerOverrides};

use crate::connection::handle_connection;

/// Default level until the config file has been read.
const STARTUP_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Keep stdout clean for the JSON dump.
    if args.print_config {
        match resolve_config(&args) {
            Ok(config) => println!("{}", config_to_json(&config)),
            Err(e) => {
                eprintln!("hexrgb-server: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // Logging comes first so config loading is visible.
    let (filter, filter_handle) =
        reload::Layer::new(log_filter(args.log_level.as_deref(), STARTUP_LOG_LEVEL));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) =
        filter_handle.reload(log_filter(args.log_level.as_deref(), &config.logging.level))
    {
        tracing::warn!(error = %e, "failed to apply configured log level");
    }

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}

/// Config file values with command-line overrides applied, validated.
fn resolve_config(args: &cli::Args) -> hexrgb_common::Result<HexRgbConfig> {
    let overrides = ServerOverrides {
        host: args.host.clone(),
        port: args.port,
    };
    Ok(load_config(args.config.as_deref().map(Path::new), &overrides)?)
}

/// `RUST_LOG` wins, then `--log-level`, then the configured level.
fn log_filter(cli_directive: Option<&str>, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = config_level.to_ascii_lowercase();
    let fallback = format!("hexrgb_server={level},hexrgb_config={level}");
    let directive = cli_directive.unwrap_or(&fallback);

    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("hexrgb_server=info"))
}

async fn run(config: HexRgbConfig) -> hexrgb_common::Result<()> {
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| HexRgbError::Server(format!("failed to bind {addr}: {e}")))?;

    tracing::info!("hexrgb-server listening on http://{}", addr);
    tracing::info!("API documentation at http://{}/docs", addr);

    let server = Arc::new(config.server);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    // Accept loop.
    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    tokio::spawn(handle_connection(stream, peer, Arc::clone(&server)));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "TCP accept error");
                }
            },
            signal = &mut shutdown => {
                signal?;
                tracing::info!("Shutting down");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> cli::Args {
        use clap::Parser;
        let mut argv = vec!["hexrgb-server"];
        argv.extend_from_slice(extra);
        cli::Args::try_parse_from(argv).unwrap()
    }

    fn write_config(content: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path.to_string_lossy().into_owned())
    }

    #[test]
    fn cli_overrides_config_file() {
        let (_dir, path) = write_config("[server]\nhost = \"127.0.0.1\"\nport = 9000\n");

        let config = resolve_config(&args(&["--config", &path, "--port", "9100"])).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn cli_override_rescues_invalid_file_value() {
        let (_dir, path) = write_config("[server]\nport = 0\n");

        let config = resolve_config(&args(&["--config", &path, "--port", "9000"])).unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn invalid_file_value_without_override_is_rejected() {
        let (_dir, path) = write_config("[server]\nport = 0\n");

        let result = resolve_config(&args(&["--config", &path]));
        assert!(matches!(result, Err(HexRgbError::Config(_))));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let (_dir, path) = write_config("");

        let result = resolve_config(&args(&["--config", &path, "--port", "0"]));
        assert!(matches!(result, Err(HexRgbError::Config(_))));
    }

    #[test]
    fn log_filter_accepts_configured_level() {
        let filter = log_filter(None, "DEBUG");
        // RUST_LOG may be set by the test runner; either way a filter is built.
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn config_loading_is_logged_once_subscriber_is_installed() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let (filter, _handle) = reload::Layer::new(EnvFilter::new("hexrgb_config=info"));
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );

        let (_dir, path) = write_config("[server]\nport = 8124\n");
        tracing::subscriber::with_default(subscriber, || {
            resolve_config(&args(&["--config", &path])).unwrap();
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("loaded config from"), "{output}");
    }
}
