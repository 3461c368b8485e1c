//! Runtime configuration.
//!
//! Defaults, overlaid by an optional `config.toml` in the platform config
//! directory (~/.config/kwdash/config.toml on Linux), overlaid by flags.
//!
//! ```toml
//! quota = 10
//! delay = "1500ms"
//! slots = 5
//! currency = "원"
//! db = "/path/to/kwdash.db"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::{Cli, Command};
use crate::session::DEFAULT_QUOTA;
use crate::task::DEFAULT_DELAY;

pub const DEFAULT_SLOTS: usize = 5;
pub const DEFAULT_CURRENCY: &str = "원";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid delay '{value}': {source}")]
    Delay {
        value: String,
        source: humantime::DurationError,
    },

    #[error("slots must be at least 1")]
    NoSlots,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: Option<PathBuf>,
    pub initial_quota: u32,
    pub analysis_delay: Duration,
    pub keyword_slots: usize,
    pub currency: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    quota: Option<u32>,
    delay: Option<String>,
    slots: Option<usize>,
    currency: Option<String>,
    db: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: None,
            initial_quota: DEFAULT_QUOTA,
            analysis_delay: DEFAULT_DELAY,
            keyword_slots: DEFAULT_SLOTS,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "kwdash").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn parse_delay(value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value).map_err(|source| ConfigError::Delay {
        value: value.to_string(),
        source,
    })
}

impl Config {
    /// Overlays a toml document on the defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(text)?;
        let mut config = Config::default();

        if let Some(quota) = file.quota {
            config.initial_quota = quota;
        }
        if let Some(delay) = file.delay {
            config.analysis_delay = parse_delay(&delay)?;
        }
        if let Some(slots) = file.slots {
            config.keyword_slots = slots;
        }
        if let Some(currency) = file.currency {
            config.currency = currency;
        }
        config.db_path = file.db;

        config.validate()?;
        Ok(config)
    }

    /// Missing file means defaults; an unreadable or invalid one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Config::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match cli.config.clone().or_else(default_config_path) {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };

        if cli.db.is_some() {
            config.db_path = cli.db.clone();
        }

        if let Command::Session(args) = &cli.command {
            if let Some(slots) = args.slots {
                config.keyword_slots = slots;
            }
            if let Some(delay) = &args.delay {
                config.analysis_delay = parse_delay(delay)?;
            }
            if let Some(quota) = args.quota {
                config.initial_quota = quota;
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.keyword_slots == 0 {
            return Err(ConfigError::NoSlots);
        }
        Ok(())
    }
}
