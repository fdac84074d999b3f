//! Configuration file support for grouppick.
//!
//! Configuration is loaded from `~/.config/grouppick/config.toml` (or the file
//! named by `GROUPPICK_CONFIG`) with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/grouppick/config.toml
//! request_timeout_ms = 10000
//!
//! [source]
//! kind = "remote"
//! url = "https://example.net/gosvc/listgroups"
//!
//! [submit]
//! kind = "remote"
//! url = "https://example.net/gosvc/choosegroup"
//! next = "/loading"
//! ```
//!
//! Without a file the bundled group list is shown and submits are simulated.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::AppError;
use crate::groups::GroupSource;
use crate::submit::{SubmitAction, DEFAULT_NEXT, DEFAULT_SIMULATED_DELAY_MS};

/// Per-request budget when none is configured
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "GROUPPICK_CONFIG";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the group list comes from
    pub source: GroupSource,

    /// What happens on submit
    pub submit: SubmitAction,

    /// Timeout applied to each list and submit request
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: GroupSource::default(),
            submit: SubmitAction::default(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

/// Command line arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub groups_file: Option<PathBuf>,
    pub list_url: Option<String>,
    pub submit_url: Option<String>,
    pub next: Option<String>,
    pub simulate: bool,
    pub timeout_ms: Option<u64>,
}

impl CliArgs {
    /// Parse arguments (without the program name). Bad or unknown flags are
    /// reported on stderr and skipped.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => match args.next() {
                    Some(v) => cli.config = Some(PathBuf::from(v)),
                    None => eprintln!("Warning: --config requires a path argument"),
                },
                "--groups-file" => match args.next() {
                    Some(v) => cli.groups_file = Some(PathBuf::from(v)),
                    None => eprintln!("Warning: --groups-file requires a path argument"),
                },
                "--list-url" => match args.next() {
                    Some(v) => cli.list_url = Some(v),
                    None => eprintln!("Warning: --list-url requires a URL argument"),
                },
                "--submit-url" => match args.next() {
                    Some(v) => cli.submit_url = Some(v),
                    None => eprintln!("Warning: --submit-url requires a URL argument"),
                },
                "--next" => match args.next() {
                    Some(v) => cli.next = Some(v),
                    None => eprintln!("Warning: --next requires a location argument"),
                },
                "--timeout-ms" => match args.next().map(|v| v.parse::<u64>()) {
                    Some(Ok(ms)) if ms > 0 => cli.timeout_ms = Some(ms),
                    _ => eprintln!("Warning: --timeout-ms requires a positive integer"),
                },
                "--simulate" => cli.simulate = true,
                other => eprintln!("Warning: ignoring unknown argument '{}'", other),
            }
        }

        cli
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// Returns default configuration if the file doesn't exist or can't be parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Parse a config file. A zero request timeout is rejected.
    pub fn parse(contents: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(contents)?;
        if config.request_timeout_ms == 0 {
            return Err(AppError::Config(
                "request_timeout_ms must be a positive integer".to_string(),
            ));
        }
        Ok(config)
    }

    /// Get the configuration file path, honouring `GROUPPICK_CONFIG`.
    pub fn config_path() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("grouppick")
                    .join("config.toml")
            })
    }

    /// Merge with CLI overrides.
    ///
    /// A list URL wins over a groups file; `--simulate` wins over a submit URL.
    pub fn with_overrides(mut self, cli: &CliArgs) -> Self {
        if let Some(path) = &cli.groups_file {
            self.source = GroupSource::Static {
                path: Some(path.clone()),
            };
        }
        if let Some(url) = &cli.list_url {
            self.source = GroupSource::Remote { url: url.clone() };
        }

        let current_next = match &self.submit {
            SubmitAction::Remote { next, .. } => next.clone(),
            SubmitAction::Simulated { .. } => DEFAULT_NEXT.to_string(),
        };
        let next = cli.next.clone().unwrap_or(current_next);

        if let Some(url) = &cli.submit_url {
            self.submit = SubmitAction::Remote {
                url: url.clone(),
                next,
            };
        } else if let SubmitAction::Remote { next: configured, .. } = &mut self.submit {
            *configured = next;
        }

        if cli.simulate {
            let delay_ms = match self.submit {
                SubmitAction::Simulated { delay_ms } => delay_ms,
                SubmitAction::Remote { .. } => DEFAULT_SIMULATED_DELAY_MS,
            };
            self.submit = SubmitAction::Simulated { delay_ms };
        }

        if let Some(ms) = cli.timeout_ms {
            self.request_timeout_ms = ms;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliArgs {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source, GroupSource::Static { path: None });
        assert_eq!(
            config.submit,
            SubmitAction::Simulated {
                delay_ms: DEFAULT_SIMULATED_DELAY_MS
            }
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            request_timeout_ms = 2500

            [source]
            kind = "remote"
            url = "https://example.net/gosvc/listgroups"

            [submit]
            kind = "remote"
            url = "https://example.net/gosvc/choosegroup"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(
            config.source,
            GroupSource::Remote {
                url: "https://example.net/gosvc/listgroups".to_string()
            }
        );
        assert_eq!(
            config.submit,
            SubmitAction::Remote {
                url: "https://example.net/gosvc/choosegroup".to_string(),
                next: "/loading".to_string(),
            }
        );
        assert_eq!(config.request_timeout_ms, 2500);
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = Config::parse("[source]\nkind = \"carrier-pigeon\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_parse_rejects_zero_timeout() {
        let err = Config::parse("request_timeout_ms = 0").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Config error: request_timeout_ms must be a positive integer"
        );
    }

    #[test]
    fn test_zero_timeout_file_falls_back_to_defaults() {
        let path = std::env::temp_dir()
            .join(format!("grouppick_zero_timeout_{}.toml", std::process::id()));
        std::fs::write(&path, "request_timeout_ms = 0\n").unwrap();

        let config = Config::load(Some(&path));
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.request_timeout(), Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/grouppick/config.toml")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_parse() {
        let cli = args(&[
            "-c",
            "/tmp/c.toml",
            "--list-url",
            "http://h/list",
            "--submit-url",
            "http://h/choose",
            "--next",
            "/wait",
            "--timeout-ms",
            "0",
            "--bogus",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.list_url.as_deref(), Some("http://h/list"));
        assert_eq!(cli.submit_url.as_deref(), Some("http://h/choose"));
        assert_eq!(cli.next.as_deref(), Some("/wait"));
        assert_eq!(cli.timeout_ms, None);
        assert!(!cli.simulate);
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = args(&[
            "--groups-file",
            "groups.json",
            "--submit-url",
            "http://h/choose",
            "--timeout-ms",
            "300",
        ]);
        let config = Config::default().with_overrides(&cli);

        assert_eq!(
            config.source,
            GroupSource::Static {
                path: Some(PathBuf::from("groups.json"))
            }
        );
        assert_eq!(
            config.submit,
            SubmitAction::Remote {
                url: "http://h/choose".to_string(),
                next: DEFAULT_NEXT.to_string(),
            }
        );
        assert_eq!(config.request_timeout_ms, 300);
    }

    #[test]
    fn test_next_override_keeps_configured_url() {
        let config = Config {
            submit: SubmitAction::Remote {
                url: "http://h/choose".to_string(),
                next: "/loading".to_string(),
            },
            ..Config::default()
        }
        .with_overrides(&args(&["--next", "/elsewhere"]));

        assert_eq!(
            config.submit,
            SubmitAction::Remote {
                url: "http://h/choose".to_string(),
                next: "/elsewhere".to_string(),
            }
        );
    }

    #[test]
    fn test_simulate_wins() {
        let config = Config::default()
            .with_overrides(&args(&["--submit-url", "http://h/choose", "--simulate"]));
        assert_eq!(config.submit, SubmitAction::default());

        let config = Config::default()
            .with_overrides(&args(&["--groups-file", "g.json", "--list-url", "http://h/list"]));
        assert_eq!(
            config.source,
            GroupSource::Remote {
                url: "http://h/list".to_string()
            }
        );
    }
}
