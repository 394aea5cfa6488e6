//! Configuration file loading with precedence handling.

use crate::model::ScrollConfig;
use serde::Deserialize;
use std::num::{NonZeroU16, NonZeroU64};
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "CONTENTSCROLL_CONFIG";

/// Environment variable overriding the animation length in milliseconds.
pub const ANIMATION_ENV: &str = "CONTENTSCROLL_ANIMATION_MS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything missing falls back to the defaults.
/// Lives at `~/.config/contentscroll/config.toml`:
///
/// ```toml
/// height = 20
/// pages = 3
/// frame_interval_ms = 16
/// log_level = "debug"
///
/// [scroll]
/// animation_ms = 240.0
/// debounce_ms = 40.0
/// pixel_step = 10.0
/// key_step = 50.0
/// wheel_delta = 1.0
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Fixed viewport height in rows; absent means "fill the terminal".
    /// Zero is rejected, like `--height 0`.
    #[serde(default)]
    pub height: Option<NonZeroU16>,

    /// Number of fixture pages to generate.
    #[serde(default)]
    pub pages: Option<u32>,

    /// Fixture RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Event poll timeout, i.e. the paint tick interval. Must be non-zero.
    #[serde(default)]
    pub frame_interval_ms: Option<NonZeroU64>,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Path to the log file.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Scroll physics.
    #[serde(default)]
    pub scroll: Option<ScrollSection>,
}

/// `[scroll]` section of the config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScrollSection {
    /// Eased transition length.
    #[serde(default)]
    pub animation_ms: Option<f64>,
    /// Re-entry window after a transition starts.
    #[serde(default)]
    pub debounce_ms: Option<f64>,
    /// Wheel multiplier.
    #[serde(default)]
    pub pixel_step: Option<f64>,
    /// Offset change per arrow key.
    #[serde(default)]
    pub key_step: Option<f64>,
    /// Delta reported for one terminal wheel notch.
    #[serde(default)]
    pub wheel_delta: Option<f64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Scroll physics handed to the viewport.
    pub scroll: ScrollConfig,
    /// Delta reported for one terminal wheel notch.
    pub wheel_delta: f64,
    /// Paint tick interval.
    pub frame_interval_ms: u64,
    /// Fixed viewport height in rows (`None` = measure the terminal).
    pub viewport_height: Option<u16>,
    /// Fixture pages to generate.
    pub fixture_pages: u32,
    /// Fixture seed (`None` = derived from the clock).
    pub seed: Option<u64>,
    /// Default tracing filter.
    pub log_level: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            wheel_delta: 1.0,
            frame_interval_ms: 16,
            viewport_height: None,
            fixture_pages: 3,
            seed: None,
            log_level: "info".to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/contentscroll/contentscroll.log` on Linux, the
/// platform equivalent elsewhere, or the current directory as a fallback.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("contentscroll").join("contentscroll.log")
    } else {
        PathBuf::from("contentscroll.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("contentscroll").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CONTENTSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/contentscroll/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let scroll = config.scroll.unwrap_or_default();
    ResolvedConfig {
        scroll: ScrollConfig {
            animation_duration_ms: scroll
                .animation_ms
                .unwrap_or(defaults.scroll.animation_duration_ms),
            debounce_ms: scroll.debounce_ms.unwrap_or(defaults.scroll.debounce_ms),
            pixel_step: scroll.pixel_step.unwrap_or(defaults.scroll.pixel_step),
            key_step: scroll.key_step.unwrap_or(defaults.scroll.key_step),
        },
        wheel_delta: scroll.wheel_delta.unwrap_or(defaults.wheel_delta),
        frame_interval_ms: config
            .frame_interval_ms
            .map_or(defaults.frame_interval_ms, NonZeroU64::get),
        viewport_height: config
            .height
            .map(NonZeroU16::get)
            .or(defaults.viewport_height),
        fixture_pages: config.pages.unwrap_or(defaults.fixture_pages),
        seed: config.seed.or(defaults.seed),
        log_level: config.log_level.unwrap_or(defaults.log_level),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// An override that was set but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredSetting {
    /// Environment variable name.
    pub name: &'static str,
    /// The rejected raw value.
    pub value: String,
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `CONTENTSCROLL_ANIMATION_MS`. Unparseable values leave the config
/// untouched and are handed back so the caller can log them once the
/// subscriber is installed.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<IgnoredSetting>) {
    let mut ignored = Vec::new();

    if let Ok(raw) = std::env::var(ANIMATION_ENV) {
        match raw.trim().parse::<f64>() {
            Ok(ms) if ms.is_finite() && ms >= 0.0 => config.scroll.animation_duration_ms = ms,
            _ => ignored.push(IgnoredSetting {
                name: ANIMATION_ENV,
                value: raw,
            }),
        }
    }

    (config, ignored)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually
/// passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    height_override: Option<u16>,
    pages_override: Option<u32>,
    seed_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(height) = height_override {
        config.viewport_height = Some(height);
    }

    if let Some(pages) = pages_override {
        config.fixture_pages = pages;
    }

    if let Some(seed) = seed_override {
        config.seed = Some(seed);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
