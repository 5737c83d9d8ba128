use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

use crate::{error::ConfigError, notification::DEFAULT_NOTIFICATION_TTL};

pub const DEFAULT_COLLECTOR_URL: &str = "http://localhost:8081";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub collector_url: String,
    pub notification_ttl: Duration,
    /// `None` leaves the transport's own timeout behavior in place.
    pub request_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collector_url: DEFAULT_COLLECTOR_URL.into(),
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            request_timeout: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    collector_url: Option<String>,
    notification_ttl_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
}

/// Defaults, then the TOML file (if it exists), then the process environment.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    if path.exists() {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        apply_file_overrides(&mut settings, &raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    }
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) -> Result<(), toml::de::Error> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.collector_url {
        settings.collector_url = v;
    }
    if let Some(ms) = file_cfg.notification_ttl_ms {
        settings.notification_ttl = Duration::from_millis(ms);
    }
    if let Some(ms) = file_cfg.request_timeout_ms {
        settings.request_timeout = Some(Duration::from_millis(ms));
    }
    Ok(())
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("COURSE_COLLECTOR_URL") {
        settings.collector_url = v;
    }
    if let Some(v) = lookup("APP__COLLECTOR_URL") {
        settings.collector_url = v;
    }

    if let Some(ms) = lookup_millis(&lookup, "APP__NOTIFICATION_TTL_MS") {
        settings.notification_ttl = ms;
    }
    if let Some(ms) = lookup_millis(&lookup, "APP__REQUEST_TIMEOUT_MS") {
        settings.request_timeout = Some(ms);
    }
}

fn lookup_millis(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<Duration> {
    let raw = lookup(name)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(err) => {
            warn!(variable = name, value = %raw, error = %err, "ignoring unparseable override");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
