use reqwest::Url;
use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid url: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("{var} must be a positive integer, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Origin every request is resolved against.
    pub base_url: Url,
    pub products_endpoint: String,
    /// Initial `limit` of the product list.
    pub page_size: u32,
    pub request_timeout: Duration,
    /// Capacity of each component's request channel.
    pub mailbox_size: usize,
}

fn positive<T>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(parsed) if parsed >= T::from(1) => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}

impl WidgetConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(|var| env::var(var).ok())
    }

    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("PRODUCTS_BASE_URL").unwrap_or_else(|| "http://127.0.0.1:5000".to_string());
        let base_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
            var: "PRODUCTS_BASE_URL",
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                var: "PRODUCTS_BASE_URL",
                reason: "cannot be used as a base".to_string(),
            });
        }

        let timeout_secs: u64 = positive("PRODUCTS_TIMEOUT_SECS", lookup("PRODUCTS_TIMEOUT_SECS"), 10)?;

        Ok(Self {
            base_url,
            products_endpoint: lookup("PRODUCTS_ENDPOINT").unwrap_or_else(|| "/api/products".to_string()),
            page_size: positive("PRODUCTS_PAGE_SIZE", lookup("PRODUCTS_PAGE_SIZE"), 10)?,
            request_timeout: Duration::from_secs(timeout_secs),
            mailbox_size: positive("WIDGET_MAILBOX_SIZE", lookup("WIDGET_MAILBOX_SIZE"), 32)?,
        })
    }
}
