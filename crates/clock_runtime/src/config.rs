use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use clock_core::PhrasingKind;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "wordclock.toml";
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tick_interval_ms: u64,
    pub phrasing: PhrasingKind,
    pub simulate: bool,
    pub debug_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            phrasing: PhrasingKind::Standard,
            simulate: false,
            debug_overlay: false,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 || self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(ConfigError::InvalidValue {
                key: "tick_interval_ms",
                value: self.tick_interval_ms.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    tick_interval_ms: Option<u64>,
    phrasing: Option<PhrasingKind>,
    simulate: Option<bool>,
    debug_overlay: Option<bool>,
}

/// Defaults, then the TOML file, then `WORDCLOCK_*` / `APP__*` variables.
///
/// An explicit `path` must exist; the default `wordclock.toml` may be absent.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_settings_with(path, |name| std::env::var(name).ok())
}

pub fn load_settings_with<F>(path: Option<&Path>, env: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if let Some(file_cfg) = read_file_settings(&path, required)? {
        if let Some(v) = file_cfg.tick_interval_ms {
            settings.tick_interval_ms = v;
        }
        if let Some(v) = file_cfg.phrasing {
            settings.phrasing = v;
        }
        if let Some(v) = file_cfg.simulate {
            settings.simulate = v;
        }
        if let Some(v) = file_cfg.debug_overlay {
            settings.debug_overlay = v;
        }
    }

    if let Some(v) = env_override(&env, "TICK_INTERVAL_MS", |raw| raw.parse::<u64>().ok()) {
        settings.tick_interval_ms = v;
    }
    if let Some(v) = env_override(&env, "PHRASING", |raw| raw.parse::<PhrasingKind>().ok()) {
        settings.phrasing = v;
    }
    if let Some(v) = env_override(&env, "SIMULATE", parse_flag) {
        settings.simulate = v;
    }
    if let Some(v) = env_override(&env, "DEBUG_OVERLAY", parse_flag) {
        settings.debug_overlay = v;
    }

    settings.validate()?;
    Ok(settings)
}

fn read_file_settings(path: &Path, required: bool) -> Result<Option<FileSettings>, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str::<FileSettings>(&raw)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

// APP__ wins over WORDCLOCK_ when both are set.
fn env_override<T, F, P>(env: &F, suffix: &str, parse: P) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let mut value = None;

    for name in [format!("WORDCLOCK_{suffix}"), format!("APP__{suffix}")] {
        let Some(raw) = env(&name) else {
            continue;
        };
        match parse(raw.trim()) {
            Some(parsed) => value = Some(parsed),
            None => warn!(variable = %name, value = %raw, "ignoring unparseable setting"),
        }
    }

    value
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
