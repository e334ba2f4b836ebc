//! Runtime configuration for the terminal game.
//!
//! Values come from built-in defaults, then environment variables, then
//! command-line flags, each layer overriding the previous one.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{
    DEFAULT_COLORS, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_COLORS, MAX_HEIGHT, MAX_WIDTH,
};

pub const USAGE: &str = "\
usage: tui-samegame [--width N] [--height N] [--colors N] [--seed N] [--log PATH]

environment:
  SAMEGAME_WIDTH, SAMEGAME_HEIGHT, SAMEGAME_COLORS, SAMEGAME_SEED, SAMEGAME_LOG_PATH";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("{name} must be between 1 and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        max: u32,
    },

    #[error("help requested")]
    HelpRequested,
}

/// Board and session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub colors: u8,
    pub seed: u32,
    /// Optional JSON-lines event log.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            colors: DEFAULT_COLORS,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `SAMEGAME_*` environment variables.
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = get("SAMEGAME_WIDTH").and_then(|s| s.parse().ok()) {
            cfg.width = v;
        }
        if let Some(v) = get("SAMEGAME_HEIGHT").and_then(|s| s.parse().ok()) {
            cfg.height = v;
        }
        if let Some(v) = get("SAMEGAME_COLORS").and_then(|s| s.parse().ok()) {
            cfg.colors = v;
        }
        if let Some(v) = get("SAMEGAME_SEED").and_then(|s| s.parse().ok()) {
            cfg.seed = v;
        }
        if let Some(v) = get("SAMEGAME_LOG_PATH") {
            cfg.log_path = Some(PathBuf::from(v));
        }
        cfg
    }

    /// Apply `--flag value` arguments (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), ConfigError> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "--width" => self.width = parse_value(flag, args.get(i + 1))?,
                "--height" => self.height = parse_value(flag, args.get(i + 1))?,
                "--colors" => self.colors = parse_value(flag, args.get(i + 1))?,
                "--seed" => self.seed = parse_value(flag, args.get(i + 1))?,
                "--log" => {
                    let v = args
                        .get(i + 1)
                        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
                    self.log_path = Some(PathBuf::from(v));
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
            i += 2;
        }
        Ok(())
    }

    /// Environment, then arguments, then validation.
    pub fn load(args: &[String]) -> Result<Self, ConfigError> {
        let mut cfg = Self::from_env();
        cfg.apply_args(args)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("width", self.width as u32, MAX_WIDTH as u32)?;
        check_range("height", self.height as u32, MAX_HEIGHT as u32)?;
        check_range("colors", self.colors as u32, MAX_COLORS as u32)?;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, ConfigError> {
    let v = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    v.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: v.clone(),
    })
}

fn check_range(name: &'static str, value: u32, max: u32) -> Result<(), ConfigError> {
    if value == 0 || value > max {
        return Err(ConfigError::OutOfRange { name, value, max });
    }
    Ok(())
}

/// Seconds since the epoch, truncated to 32 bits.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
