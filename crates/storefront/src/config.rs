//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | required |
//! | `STOREFRONT_MAX_CONNECTIONS` | 8 |
//! | `STOREFRONT_BUSY_TIMEOUT_MS` | 5000 |
//! | `STOREFRONT_CHECKOUT_ATTEMPTS` | 3 |
//! | `STOREFRONT_CHECKOUT_BACKOFF_MS` | 25 |

use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;
use store_framework::{PoolSettings, RetryPolicy};
use thiserror::Error;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS: &str = "STOREFRONT_MAX_CONNECTIONS";
pub const BUSY_TIMEOUT_MS: &str = "STOREFRONT_BUSY_TIMEOUT_MS";
pub const CHECKOUT_ATTEMPTS: &str = "STOREFRONT_CHECKOUT_ATTEMPTS";
pub const CHECKOUT_BACKOFF_MS: &str = "STOREFRONT_CHECKOUT_BACKOFF_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub busy_timeout_ms: u64,
    pub checkout_attempts: u32,
    pub checkout_backoff_ms: u64,
}

impl StorefrontConfig {
    /// Defaults for everything except the database.
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 8,
            busy_timeout_ms: 5_000,
            checkout_attempts: 3,
            checkout_backoff_ms: 25,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL))?;
        let defaults = Self::for_database(database_url);

        Ok(Self {
            max_connections: positive(&lookup, MAX_CONNECTIONS, defaults.max_connections)?,
            busy_timeout_ms: parse(&lookup, BUSY_TIMEOUT_MS, defaults.busy_timeout_ms)?,
            checkout_attempts: positive(&lookup, CHECKOUT_ATTEMPTS, defaults.checkout_attempts)?,
            checkout_backoff_ms: parse(&lookup, CHECKOUT_BACKOFF_MS, defaults.checkout_backoff_ms)?,
            ..defaults
        })
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.checkout_attempts,
            Duration::from_millis(self.checkout_backoff_ms),
        )
    }
}

fn parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn positive<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse(lookup, key, default)? {
        0 => Err(ConfigError::Invalid {
            key,
            value: "0".to_string(),
        }),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_database_url_is_required() {
        assert_eq!(
            StorefrontConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(DATABASE_URL))
        );
        assert_eq!(
            StorefrontConfig::from_lookup(lookup(&[(DATABASE_URL, "  ")])),
            Err(ConfigError::Missing(DATABASE_URL))
        );
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[(DATABASE_URL, "sqlite://shop.db")])).unwrap();
        assert_eq!(config, StorefrontConfig::for_database("sqlite://shop.db"));
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert_eq!(config.pool_settings(), PoolSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (DATABASE_URL, "sqlite://shop.db"),
            (MAX_CONNECTIONS, "2"),
            (BUSY_TIMEOUT_MS, "100"),
            (CHECKOUT_ATTEMPTS, "5"),
            (CHECKOUT_BACKOFF_MS, " 0 "),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.pool_settings().busy_timeout, Duration::from_millis(100));
        assert_eq!(config.retry_policy().max_attempts(), 5);
        assert_eq!(config.retry_policy().backoff(), Duration::ZERO);
    }

    #[test]
    fn test_invalid_values() {
        let result = StorefrontConfig::from_lookup(lookup(&[
            (DATABASE_URL, "sqlite://shop.db"),
            (BUSY_TIMEOUT_MS, "soon"),
        ]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key: BUSY_TIMEOUT_MS,
                value: "soon".to_string()
            })
        );

        let result = StorefrontConfig::from_lookup(lookup(&[
            (DATABASE_URL, "sqlite://shop.db"),
            (CHECKOUT_ATTEMPTS, "0"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { key, .. }) if key == CHECKOUT_ATTEMPTS));
    }
}
