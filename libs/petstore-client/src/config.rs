//! Configuration for the pet-store client

use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, PETSTORE_BASE_URL, PETSTORE_ROUTES,
    PETSTORE_TIMEOUT_SECS,
};
use crate::error::PetstoreError;
use crate::routes::Routes;

/// Where the URL templates come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteSource {
    /// Built from `base_url`
    #[default]
    Constants,
    /// Read from the bundled `routes.properties` resource; `base_url` is ignored
    Properties,
}

impl RouteSource {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "constants" => Some(RouteSource::Constants),
            "properties" => Some(RouteSource::Properties),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PetstoreConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub route_source: RouteSource,
}

impl Default for PetstoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            route_source: RouteSource::Constants,
        }
    }
}

impl PetstoreConfig {
    pub fn from_env() -> Self {
        let default = Self::default();

        let base_url = std::env::var(PETSTORE_BASE_URL).unwrap_or(default.base_url);

        let request_timeout_secs: u64 = match std::env::var(PETSTORE_TIMEOUT_SECS) {
            Ok(value) => value.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    env_var = PETSTORE_TIMEOUT_SECS,
                    value = %value,
                    default = DEFAULT_TIMEOUT_SECS,
                    "ignoring unparsable timeout, using default"
                );
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let route_source = match std::env::var(PETSTORE_ROUTES) {
            Ok(value) => RouteSource::parse(&value).unwrap_or_else(|| {
                tracing::warn!(
                    env_var = PETSTORE_ROUTES,
                    value = %value,
                    "ignoring unknown route source, using constants"
                );
                default.route_source
            }),
            Err(_) => default.route_source,
        };

        if route_source == RouteSource::Properties && std::env::var_os(PETSTORE_BASE_URL).is_some() {
            tracing::warn!(
                env_var = PETSTORE_BASE_URL,
                "base URL is ignored when routes come from properties"
            );
        }

        Self {
            base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            route_source,
        }
    }

    /// Config pointing at another deployment, e.g. a local fake store
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn routes(&self) -> Result<Routes, PetstoreError> {
        match self.route_source {
            RouteSource::Constants => Ok(Routes::from_base_url(&self.base_url)),
            RouteSource::Properties => Routes::bundled(),
        }
    }
}
