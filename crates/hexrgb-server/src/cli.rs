use clap::Parser;

/// hexrgb: HTTP service converting hex color codes to RGB.
#[derive(Parser, Debug)]
#[command(name = "hexrgb-server", version, about)]
pub struct Args {
    /// Interface to bind (overrides the config file).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides the config file).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive, e.g. `hexrgb_server=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_everything_to_config() {
        let args = Args::try_parse_from(["hexrgb-server"]).unwrap();
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(args.config.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "hexrgb-server",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Args::try_parse_from(["hexrgb-server", "--port", "70000"]).is_err());
    }
}
