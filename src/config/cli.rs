use crate::config::PartialConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "movie-editors")]
#[command(about = "Serves TMDB movies for a year together with their editors")]
pub struct CliConfig {
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "TMDB_API_BASE_URL")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Interface to bind (default 0.0.0.0)")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, help = "Timeout in seconds for each TMDB request")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            api_key: self.api_key.clone(),
            api_base_url: self.api_base_url.clone(),
            host: self.host.clone(),
            port: self.port,
            timeout_seconds: self.timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let cli = CliConfig::parse_from([
            "movie-editors",
            "--api-key",
            "abc",
            "--port",
            "8081",
            "--timeout-seconds",
            "10",
            "--verbose",
        ]);

        let overrides = cli.overrides();
        assert_eq!(overrides.api_key.as_deref(), Some("abc"));
        assert_eq!(overrides.port, Some(8081));
        assert_eq!(overrides.timeout_seconds, Some(10));
        assert!(cli.verbose);
        assert!(!cli.log_json);
    }
}
