//! One run of the daily job: log in, fetch the digest, post it.

use crate::{config::Config, error::Failure, scholar::session::ScholarClient, slack::api::SlackClient};
use chrono::NaiveDate;
use tracing::info;

/// Run the job for `today`, returning how many papers were posted.
///
/// Both clients are built before any request is made, so a missing Slack
/// setting doesn't cost a login.
pub async fn run(config: &Config, today: NaiveDate) -> Result<usize, Failure> {
    info!("Starting Scholar Inbox daily job");

    let scholar = ScholarClient::new(&config.scholar)?;
    let slack = SlackClient::new(&config.slack)?;

    let mut papers = scholar.fetch_papers().await?;
    info!("Found {} papers", papers.len());

    if papers.len() > config.digest_limit {
        info!("Posting only the first {}", config.digest_limit);
        papers.truncate(config.digest_limit);
    }

    slack.post_papers(&papers, today).await?;
    info!("Successfully posted papers to Slack");

    Ok(papers.len())
}
