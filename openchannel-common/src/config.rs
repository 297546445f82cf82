// openchannel-common/src/config.rs
use std::env;
use std::fmt;

use tracing::debug;
use url::Url;

use super::error::{OcError, Result};
use crate::model::Id;

pub const DEFAULT_API_BASE_URL: &str = "https://market.openchannel.io/v2";

const ENV_MARKETPLACE_ID: &str = "OPENCHANNEL_MARKETPLACE_ID";
const ENV_SECRET: &str = "OPENCHANNEL_SECRET";
const ENV_USER_ID: &str = "OPENCHANNEL_USER_ID";
const ENV_DEVELOPER_ID: &str = "OPENCHANNEL_DEVELOPER_ID";
const ENV_API_BASE_URL: &str = "OPENCHANNEL_API_BASE_URL";

/// Credentials and acting identities for one marketplace.
#[derive(Clone)]
pub struct Config {
    pub marketplace_id: String,
    pub secret: String,
    /// Acting user, appended to app reads.
    pub user_id: Id,
    /// Acting developer, appended to app writes and version reads.
    pub developer_id: Id,
    pub api_base_url: String,
}

impl Config {
    pub fn new(marketplace_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            marketplace_id: marketplace_id.into(),
            secret: secret.into(),
            user_id: Id::from(1),
            developer_id: Id::from(1),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<Id>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_developer_id(mut self, developer_id: impl Into<Id>) -> Self {
        self.developer_id = developer_id.into();
        self
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Loads the configuration from `OPENCHANNEL_*` environment variables.
    pub fn load() -> Result<Self> {
        debug!("Loading openchannel configuration");
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| OcError::Config(format!("{key} is not set")))
        };

        let mut config = Self::new(required(ENV_MARKETPLACE_ID)?, required(ENV_SECRET)?);

        if let Some(user_id) = lookup(ENV_USER_ID).filter(|v| !v.is_empty()) {
            config.user_id = Id::parse_lossy(&user_id);
        }
        if let Some(developer_id) = lookup(ENV_DEVELOPER_ID).filter(|v| !v.is_empty()) {
            config.developer_id = Id::parse_lossy(&developer_id);
        }
        if let Some(base) = lookup(ENV_API_BASE_URL).filter(|v| !v.is_empty()) {
            debug!("Using API base URL override: {}", base);
            config.api_base_url = base;
        }

        debug!("Configuration loaded successfully.");
        Ok(config)
    }

    /// Parses the base URL, rejecting anything that is not http(s).
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            OcError::ValidationError(format!(
                "Failed to parse API base URL '{}': {e}",
                self.api_base_url
            ))
        })?;
        match url.scheme() {
            "https" | "http" => Ok(url),
            other => Err(OcError::ValidationError(format!(
                "Invalid URL scheme for '{}': must be https or http, but got '{other}'",
                self.api_base_url
            ))),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("marketplace_id", &self.marketplace_id)
            .field("secret", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("developer_id", &self.developer_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
