use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use thiserror::Error;
use toml::{Table, Value};
use tracing::warn;

/// Looked up in the working directory when no explicit config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "kata_client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub submit_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".into(),
            request_timeout_secs: 10,
            submit_timeout_secs: 60,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs.max(1))
    }

    pub fn with_server_url(mut self, server_url: Option<String>) -> Self {
        if let Some(server_url) = server_url.filter(|url| !url.trim().is_empty()) {
            self.server_url = server_url;
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults, then the config file, then `KATA_*` environment variables.
///
/// An explicit `config_path` must exist; the implicit [`DEFAULT_CONFIG_FILE`]
/// is skipped when absent.
pub fn load_settings(config_path: Option<&Path>) -> Result<ClientSettings, ConfigError> {
    let mut settings = match config_path {
        Some(path) => read_settings_file(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_settings_file(path)?
            } else {
                ClientSettings::default()
            }
        }
    };
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

/// Reads a TOML settings file on top of the defaults.
///
/// Only invalid TOML syntax is an error. Unknown keys and values of the wrong
/// type are skipped with a warning and the remaining keys still apply.
pub fn read_settings_file(path: &Path) -> Result<ClientSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = raw.parse::<Table>().map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut settings = ClientSettings::default();
    for (key, value) in table {
        let applied = match key.as_str() {
            "server_url" => match value.as_str().filter(|v| !v.trim().is_empty()) {
                Some(url) => {
                    settings.server_url = url.to_string();
                    true
                }
                None => false,
            },
            "request_timeout_secs" => set_secs(&mut settings.request_timeout_secs, &value),
            "submit_timeout_secs" => set_secs(&mut settings.submit_timeout_secs, &value),
            _ => {
                warn!(path = %path.display(), key = %key, "ignoring unknown config key");
                continue;
            }
        };
        if !applied {
            warn!(path = %path.display(), key = %key, value = %value, "ignoring invalid config value");
        }
    }
    Ok(settings)
}

fn set_secs(slot: &mut u64, value: &Value) -> bool {
    match value.as_integer().and_then(|secs| u64::try_from(secs).ok()) {
        Some(secs) => {
            *slot = secs;
            true
        }
        None => false,
    }
}

pub fn apply_env_overrides(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("KATA_SERVER_URL").filter(|v| !v.trim().is_empty()) {
        settings.server_url = v;
    }

    for (name, slot) in [
        (
            "KATA_REQUEST_TIMEOUT_SECS",
            &mut settings.request_timeout_secs,
        ),
        ("KATA_SUBMIT_TIMEOUT_SECS", &mut settings.submit_timeout_secs),
    ] {
        if let Some(v) = lookup(name) {
            match v.trim().parse::<u64>() {
                Ok(parsed) => *slot = parsed,
                Err(err) => warn!(variable = name, value = %v, "ignoring invalid timeout: {err}"),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
