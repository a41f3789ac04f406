/// Every way fetching the digest can fail.
#[derive(Debug, thiserror::Error)]
pub enum ScholarError {
    /// A required setting, named by its environment variable, is missing.
    #[error("${0} must be set")]
    Configuration(&'static str),
    #[error("Login rejected: {0}")]
    Authentication(String),
    /// The digest didn't look as expected. The fetcher degrades this to an
    /// empty digest rather than failing.
    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),
    #[error("Scholar Inbox request failed: {0}")]
    Network(#[from] reqwest::Error),
}
