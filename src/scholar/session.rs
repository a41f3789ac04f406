//! An authenticated session against the Scholar Inbox API.

use super::{auth::Credentials, digest::decode_digest, error::ScholarError, paper::Paper};
use crate::config::{endpoint, ScholarConfig};
use serde::Deserialize;
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnError};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// The API rejects requests without a browser-like user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetches the digest on behalf of one account.
pub struct ScholarClient {
    credentials: Credentials,
    api_base: Url,
    request_timeout: Duration,
}

/// <https://api.scholar-inbox.com/api/password_login>
///
/// Anything other than an object with `"success": true` is a rejection,
/// including a body which isn't JSON at all.
#[serde_as]
#[derive(Deserialize)]
struct LoginResponse {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    success: bool,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    message: Option<String>,
}

impl ScholarClient {
    pub fn new(config: &ScholarConfig) -> Result<Self, ScholarError> {
        let credentials = Credentials::new(config.email.as_deref(), config.password.as_deref())?;

        Ok(ScholarClient {
            credentials,
            api_base: config.api_base.clone(),
            request_timeout: config.request_timeout,
        })
    }

    /// Log in, then fetch and decode today's digest.
    ///
    /// Each call opens a fresh session whose cookies live only as long as the
    /// call. Nothing is retried. A digest without the expected shape is logged
    /// and yields no papers.
    pub async fn fetch_papers(&self) -> Result<Vec<Paper>, ScholarError> {
        let session = self.open_session()?;

        self.login(&session).await?;
        info!("Login successful for {}", self.credentials.email());

        let body = session
            .get(endpoint(&self.api_base, "/"))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match decode_digest(&body) {
            Ok(papers) => {
                for paper in &papers {
                    debug!(?paper, "Decoded paper");
                }

                Ok(papers)
            }
            Err(ScholarError::ResponseShape(e)) => {
                warn!("{}, treating the digest as empty", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// A client with its own cookie jar, so that the login cookie is carried
    /// onto the digest request.
    fn open_session(&self) -> Result<reqwest::Client, ScholarError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(self.request_timeout)
            .build()?;

        Ok(client)
    }

    async fn login(&self, session: &reqwest::Client) -> Result<(), ScholarError> {
        let body = session
            .post(endpoint(&self.api_base, "/password_login"))
            .json(&self.credentials)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // A struct would also accept a JSON array, field by field.
        let res: LoginResponse = serde_json::from_str::<Map<String, Value>>(&body)
            .and_then(|x| serde_json::from_value(Value::Object(x)))
            .map_err(|e| {
                ScholarError::Authentication(format!("Undecodable login response: {}", e))
            })?;

        if res.success {
            Ok(())
        } else {
            let reason = res.message.unwrap_or_else(|| "no reason given".into());
            warn!("Login failed for {}: {}", self.credentials.email(), reason);

            Err(ScholarError::Authentication(reason))
        }
    }
}
