//! Connection settings loaded from the environment.

use std::env;

use crate::types::{ApiKey, HackerRankSvc};
use crate::validation::ValidationError;

/// Environment variable holding the raw account secret.
pub const API_KEY_VAR: &str = "API_KEY";
/// Environment variable holding the service root URL.
pub const SERVICE_VAR: &str = "HACKERRANK_SVC";

/// Validated connection parameters. Built once at startup.
#[derive(Clone, Debug)]
pub struct HackerRankSvcConfig {
    pub key: ApiKey,
    pub svc: HackerRankSvc,
}

impl HackerRankSvcConfig {
    pub fn new(key: ApiKey, svc: HackerRankSvc) -> Self {
        Self { key, svc }
    }

    /// Loads `.env` if present, then reads [`API_KEY_VAR`] and [`SERVICE_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(None, None)
    }

    /// Like [`from_env`](Self::from_env), but explicit values win over the
    /// environment.
    pub fn from_env_with(
        secret: Option<String>,
        svc: Option<String>,
    ) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_values(
            secret.or_else(|| env::var(API_KEY_VAR).ok()),
            svc.or_else(|| env::var(SERVICE_VAR).ok()),
        )
    }

    /// Builds the config from raw values. The secret is turned into a bearer
    /// token with [`ApiKey::from_secret`].
    pub fn from_values(
        secret: Option<String>,
        svc: Option<String>,
    ) -> Result<Self, ConfigError> {
        let secret = secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        let svc = svc
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar(SERVICE_VAR))?;

        let key = ApiKey::from_secret(&secret).map_err(|source| ConfigError::Invalid {
            var: API_KEY_VAR,
            source,
        })?;
        let svc = HackerRankSvc::parse(svc).map_err(|source| ConfigError::Invalid {
            var: SERVICE_VAR,
            source,
        })?;
        Ok(Self { key, svc })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The variable is unset or empty.
    #[error("{0} is not set")]
    MissingVar(&'static str),
    #[error("{var} is invalid: {source}")]
    Invalid {
        var: &'static str,
        source: ValidationError,
    },
}
