//! Type definitions and helpers for the Slack API.

use super::{auth::*, channel::ChannelId, error::SlackError};
use crate::config::{endpoint, SlackConfig};
use serde::Deserialize;
use url::Url;

/// A client bound to one workspace token and one destination channel. Holds
/// a connection pool internally, as per [reqwest::Client].
pub struct SlackClient {
    http: reqwest::Client,
    api_base: Url,
    token: SlackAccessToken,
    pub(super) channel: ChannelId,
}

impl SlackClient {
    /// Both the token and the channel are required.
    pub fn new(config: &SlackConfig) -> Result<Self, SlackError> {
        let token = config
            .token
            .clone()
            .filter(|x| !x.is_empty())
            .ok_or(SlackError::MissingConfiguration("SLACK_API_TOKEN"))?;
        let channel = config
            .channel
            .clone()
            .filter(|x| !x.is_empty())
            .ok_or(SlackError::MissingConfiguration("SLACK_CHANNEL_ID"))?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(SlackClient {
            http,
            api_base: config.api_base.clone(),
            token: SlackAccessToken(token),
            channel: ChannelId(channel),
        })
    }

    /// Create a POST request to any Slack API endpoint, handling
    /// authentication.
    pub(super) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .post(endpoint(&self.api_base, path))
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(&self.token))
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "ts": "1503435956.000247"
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "channel_not_found"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

/// The universal response in case of an unsuccessful request.
// The `ok` field is checked here, and should be checked on responses too,
// primarily to ensure appropriate deserialization behaviour in case of an
// otherwise empty successful response.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl From<ErrorResponse> for SlackError {
    fn from(res: ErrorResponse) -> Self {
        match res.error {
            Some(e) => SlackError::APIResponseError(e),
            None => SlackError::APIResponseMissingError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(token: Option<&str>, channel: Option<&str>) -> SlackConfig {
        SlackConfig {
            token: token.map(String::from),
            channel: channel.map(String::from),
            api_base: Url::parse("http://localhost").unwrap(),
            request_timeout: Duration::from_secs(5),
        }
    }

    #[derive(Deserialize)]
    struct Empty {
        #[allow(dead_code)]
        #[serde(deserialize_with = "crate::de::only_true")]
        ok: bool,
    }

    #[test]
    fn test_requires_token_and_channel() {
        assert!(SlackClient::new(&config(Some("xoxb-foo"), Some("C0123"))).is_ok());

        assert!(matches!(
            SlackClient::new(&config(None, Some("C0123"))),
            Err(SlackError::MissingConfiguration("SLACK_API_TOKEN"))
        ));
        assert!(matches!(
            SlackClient::new(&config(Some("xoxb-foo"), Some(""))),
            Err(SlackError::MissingConfiguration("SLACK_CHANNEL_ID"))
        ));
    }

    #[test]
    fn test_api_result() {
        let ok: APIResult<Empty> = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(matches!(ok, APIResult::Ok(_)));

        let err: APIResult<Empty> =
            serde_json::from_str(r#"{"ok": false, "error": "invalid_auth"}"#).unwrap();
        match err {
            APIResult::Err(res) => assert!(matches!(
                SlackError::from(res),
                SlackError::APIResponseError(e) if e == "invalid_auth"
            )),
            APIResult::Ok(_) => panic!("expected an error response"),
        }

        let bare: APIResult<Empty> = serde_json::from_str(r#"{"ok": false}"#).unwrap();
        match bare {
            APIResult::Err(res) => assert!(matches!(
                SlackError::from(res),
                SlackError::APIResponseMissingError
            )),
            APIResult::Ok(_) => panic!("expected an error response"),
        }
    }
}
