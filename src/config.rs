//! Job configuration, read once from the environment at startup.
//!
//! Required values (credentials, Slack token and channel) are kept optional
//! here and validated by the component that needs them, so that each failure
//! is reported against the stage it belongs to.

use std::{env, time::Duration};
use url::Url;

/// The base URL of the Scholar Inbox API.
pub const SCHOLAR_API_BASE: &str = "https://api.scholar-inbox.com/api";

/// The base URL of the Slack Web API.
pub const SLACK_API_BASE: &str = "https://slack.com/api";

/// Slack caps a message at 50 blocks. A header, a divider, and three blocks
/// per paper plus dividers between them fits 12 papers in 49 blocks.
pub const MAX_DIGEST_LIMIT: usize = 12;

pub const DEFAULT_DIGEST_LIMIT: usize = MAX_DIGEST_LIMIT;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not parse ${name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub scholar: ScholarConfig,
    pub slack: SlackConfig,
    /// Maximum number of papers posted per run.
    pub digest_limit: usize,
}

#[derive(Debug, Clone)]
pub struct ScholarConfig {
    pub email: Option<String>,
    pub password: Option<String>,
    pub api_base: Url,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SlackConfig {
    pub token: Option<String>,
    pub channel: Option<String>,
    pub api_base: Url,
    pub request_timeout: Duration,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable lookup. Empty values are
    /// treated as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|x| !x.trim().is_empty());

        let request_timeout = match var("REQUEST_TIMEOUT_SECS") {
            Some(x) => Duration::from_secs(parse_number("REQUEST_TIMEOUT_SECS", &x)?),
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let digest_limit = match var("DIGEST_LIMIT") {
            Some(x) => parse_number("DIGEST_LIMIT", &x)?,
            None => DEFAULT_DIGEST_LIMIT,
        };

        if digest_limit > MAX_DIGEST_LIMIT {
            return Err(ConfigError::Invalid {
                name: "DIGEST_LIMIT",
                reason: format!("at most {} papers fit in one Slack message", MAX_DIGEST_LIMIT),
            });
        }

        let scholar = ScholarConfig {
            email: var("SCHOLAR_INBOX_EMAIL"),
            password: var("SCHOLAR_INBOX_PASSWORD"),
            api_base: parse_url(
                "SCHOLAR_INBOX_API_BASE",
                var("SCHOLAR_INBOX_API_BASE").as_deref(),
                SCHOLAR_API_BASE,
            )?,
            request_timeout,
        };

        let slack = SlackConfig {
            token: var("SLACK_API_TOKEN"),
            channel: var("SLACK_CHANNEL_ID"),
            api_base: parse_url("SLACK_API_BASE", var("SLACK_API_BASE").as_deref(), SLACK_API_BASE)?,
            request_timeout,
        };

        Ok(Config {
            scholar,
            slack,
            digest_limit,
        })
    }
}

/// Join an endpoint path onto an API base, tolerating a trailing slash on
/// the base.
pub fn endpoint(base: &Url, path: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), path)
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

fn parse_url(name: &'static str, raw: Option<&str>, default: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.unwrap_or(default)).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
