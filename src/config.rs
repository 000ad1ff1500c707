// src/config.rs
use crate::errors::StoreError;
use crate::portfolio::Portfolio;
use crate::store::{DocumentStore, RestStore, SqliteStore};
use std::env;
use std::sync::Arc;
use tracing::{info, warn};

pub const DATABASE_URL_VAR: &str = "PORTFOLIO_DATABASE_URL";
pub const AUTH_TOKEN_VAR: &str = "PORTFOLIO_AUTH_TOKEN";
pub const SQLITE_PATH_VAR: &str = "PORTFOLIO_SQLITE_PATH";
pub const ENV_VAR: &str = "PORTFOLIO_ENV";

const DEFAULT_SQLITE_PATH: &str = "portfolio.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Rest {
        base_url: String,
        auth_token: Option<String>,
    },
    Sqlite {
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: StoreBackend,
    /// Serve a mock property for missing records. Off only in production.
    pub use_development_fallback: bool,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend = match var(DATABASE_URL_VAR) {
            Some(base_url) => StoreBackend::Rest {
                base_url,
                auth_token: var(AUTH_TOKEN_VAR),
            },
            None => {
                let path = var(SQLITE_PATH_VAR).unwrap_or_else(|| {
                    warn!("{DATABASE_URL_VAR} not set, using local SQLite store");
                    DEFAULT_SQLITE_PATH.to_string()
                });
                StoreBackend::Sqlite { path }
            }
        };

        let environment = var(ENV_VAR).unwrap_or_else(|| "development".to_string());
        let use_development_fallback = !environment.eq_ignore_ascii_case("production");
        info!(
            environment = environment.as_str(),
            use_development_fallback,
            "configuration loaded"
        );

        Self {
            backend,
            use_development_fallback,
        }
    }

    pub fn build_store(&self) -> Result<Arc<dyn DocumentStore>, StoreError> {
        let store: Arc<dyn DocumentStore> = match &self.backend {
            StoreBackend::Rest {
                base_url,
                auth_token,
            } => Arc::new(RestStore::new(base_url, auth_token.clone())?),
            StoreBackend::Sqlite { path } => Arc::new(SqliteStore::new(path.as_str())),
        };
        Ok(store)
    }

    pub fn portfolio(&self) -> Result<Portfolio, StoreError> {
        Ok(Portfolio::new(
            self.build_store()?,
            self.use_development_fallback,
        ))
    }
}
