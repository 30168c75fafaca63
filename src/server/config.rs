use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_STATIC_DIR: &str = "build";
const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;

/// How lookups and replaces of a well-formed but unknown id are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCharacterPolicy {
    /// 200 OK with a JSON `null` body.
    #[default]
    Null,
    /// 404 Not Found with an error body.
    NotFound,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Directory holding the built single-page front end.
    pub static_dir: PathBuf,

    pub store_timeout: Duration,
    pub missing_character: MissingCharacterPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, which returns the value of a variable or
    /// `None` when it is unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let strict_not_found: bool = optional_var(&lookup, "STRICT_NOT_FOUND", false)?;

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: optional_var(&lookup, "PORT", DEFAULT_PORT)?,
            static_dir: optional_var(&lookup, "STATIC_DIR", PathBuf::from(DEFAULT_STATIC_DIR))?,
            store_timeout: Duration::from_millis(optional_var(
                &lookup,
                "STORE_TIMEOUT_MS",
                DEFAULT_STORE_TIMEOUT_MS,
            )?),
            missing_character: if strict_not_found {
                MissingCharacterPolicy::NotFound
            } else {
                MissingCharacterPolicy::Null
            },
        })
    }
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn optional_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
