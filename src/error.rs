use crate::{config::ConfigError, scholar::error::ScholarError, slack::error::SlackError};

/// Sum type representing every way a run can fail, labelled by the stage
/// which failed.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("error fetching papers: {0}")]
    Fetch(#[from] ScholarError),
    #[error("error posting to Slack: {0}")]
    Deliver(#[from] SlackError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_stage() {
        let e = Failure::from(ScholarError::Authentication("Wrong password".into()));
        assert_eq!(
            e.to_string(),
            "error fetching papers: Login rejected: Wrong password"
        );

        let e = Failure::from(SlackError::MissingConfiguration("SLACK_CHANNEL_ID"));
        assert_eq!(
            e.to_string(),
            "error posting to Slack: $SLACK_CHANNEL_ID must be set"
        );
    }
}
