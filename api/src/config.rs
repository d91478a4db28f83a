use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which `UserStore` adapter backs the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    /// Process-local store; registrations are lost on restart
    Memory,
}

/// Per-IP rate limit applied to the registration route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Seconds after which one request of the quota is replenished
    pub replenish_secs: u64,
    pub burst_size: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub port: u16,
    /// `None` disables rate limiting
    pub rate_limit: Option<RateLimitConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("USER_STORE").as_deref() {
            None | Some("postgres") => StoreBackend::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "USER_STORE",
                    value: other.to_string(),
                })
            }
        };

        let rate_limit = if parse_var(&lookup, "RATE_LIMIT_ENABLED", true)? {
            Some(RateLimitConfig {
                replenish_secs: parse_positive(&lookup, "RATE_LIMIT_REPLENISH_SECS", 2)?,
                burst_size: parse_positive(&lookup, "RATE_LIMIT_BURST", 5)?,
            })
        } else {
            None
        };

        Ok(Self {
            store,
            port: parse_var(&lookup, "PORT", 8080)?,
            rate_limit,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

// Governor refuses a zero period or a zero burst.
fn parse_positive<T: FromStr + PartialOrd + Default>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    let value = parse_var(lookup, name, default)?;
    if value > T::default() {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            name,
            value: lookup(name).unwrap_or_default(),
        })
    }
}
