use std::collections::BTreeSet;
use std::env;
use std::str::FromStr;

use plot_survey_core::settings::ValidationSettings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
    /// Map areas, special locations and supervisor groups used by the plot rules.
    pub validation: ValidationSettings,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ValidationSettings::default();
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse(&lookup, "PORT", "u16", 3030)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            validation: ValidationSettings {
                add_plot_map_areas: list(&lookup, "ADD_PLOT_MAP_AREAS")
                    .unwrap_or(defaults.add_plot_map_areas),
                special_locations: list(&lookup, "SPECIAL_LOCATIONS")
                    .unwrap_or(defaults.special_locations),
                supervisor_groups: list(&lookup, "SUPERVISOR_GROUPS")
                    .unwrap_or(defaults.supervisor_groups),
            },
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(
    lookup: &F,
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value,
        }),
    }
}

/// Comma-separated list; `None` when the variable is unset.
fn list<F>(lookup: &F, key: &str) -> Option<BTreeSet<String>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}
