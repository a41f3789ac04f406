/// Sum type representing every way delivering a message can fail.
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    /// A required setting, named by its environment variable, is missing.
    #[error("${0} must be set")]
    MissingConfiguration(&'static str),
    #[error("Slack API request failed: {0}")]
    APIRequestFailed(#[from] reqwest::Error),
    #[error("Slack API returned error: {0}")]
    APIResponseError(String),
    #[error("Slack API failed to return error")]
    APIResponseMissingError,
}
