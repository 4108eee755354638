use crate::cli::Cli;

/// Runtime configuration handed to the control loop at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where frames come from: an RTSP/HTTP URL or a local file path.
    pub stream_source: String,
    /// Host the command listener runs on.
    pub command_host: String,
    /// Port the command listener accepts connections on.
    pub command_port: u16,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            stream_source: cli.stream,
            command_host: cli.host,
            command_port: cli.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::try_parse_from([
            "camctl",
            "--stream",
            "video.mp4",
            "--host",
            "127.0.0.1",
            "--port",
            "4242",
        ])
        .unwrap();

        let config = Config::from(cli);
        assert_eq!(config.stream_source, "video.mp4");
        assert_eq!(config.command_host, "127.0.0.1");
        assert_eq!(config.command_port, 4242);
    }
}
