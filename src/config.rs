//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-server")]
#[command(about = "A Pomodoro timer session server driven by caller-supplied timestamps")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Directory holding the static frontend (index.html, app.js)
    #[arg(long, default_value = "frontend")]
    pub frontend_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["pomodoro-server"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:8000");
        assert_eq!(config.frontend_dir, PathBuf::from("frontend"));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "pomodoro-server",
            "-p",
            "9000",
            "--host",
            "127.0.0.1",
            "--frontend-dir",
            "/srv/ui",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:9000");
        assert_eq!(config.frontend_dir, PathBuf::from("/srv/ui"));
        assert_eq!(config.log_level(), "debug");
    }
}
