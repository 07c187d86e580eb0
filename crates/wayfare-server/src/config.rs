use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
#[error("Invalid {key} value `{value}`: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Catalog file to serve; `None` serves the bundled sample.
    pub catalog: Option<PathBuf>,
    pub cors_max_age: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            catalog: None,
            cors_max_age: 60 * 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Build from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "WAYFARE_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "WAYFARE_PORT", "5000")?,
            catalog: lookup("WAYFARE_CATALOG")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            cors_max_age: try_load(&lookup, "WAYFARE_CORS_MAX_AGE", "3600")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not found");
    })
}

fn try_load<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.address(), "0.0.0.0:5000");
        assert_eq!(config.cors_max_age, 3600);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("WAYFARE_HOST", "127.0.0.1"),
            ("WAYFARE_PORT", " 8080 "),
            ("WAYFARE_CATALOG", "/srv/catalog.json.gz"),
        ]))
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/catalog.json.gz")));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("WAYFARE_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.key, "WAYFARE_PORT");
        assert_eq!(err.value, "eighty");
    }
}
