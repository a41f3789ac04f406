//! Format papers as a Slack message and send it.

use super::{api::*, block::*, channel::ChannelId, error::SlackError};
use crate::scholar::paper::Paper;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::info;

/// Abstracts longer than this many characters are cut short in the message.
pub const ABSTRACT_PREVIEW_CHARS: usize = 200;

/// Appended to text which was cut short.
pub const ELLIPSIS: &str = "...";

/// Slack rejects a section whose text is longer than this.
///
/// <https://api.slack.com/reference/block-kit/blocks#section_fields>
pub const MRKDWN_TEXT_LIMIT: usize = 3000;

/// <https://api.slack.com/methods/chat.postMessage#args>
#[derive(Serialize)]
struct MessageRequest<'a> {
    channel: &'a ChannelId,
    blocks: Vec<Block>,
    // Used for notifications in the presence of `blocks`.
    text: String,
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
#[derive(Deserialize)]
struct MessageResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
}

impl SlackClient {
    /// Post the digest for `date` in one message. An empty digest still posts
    /// the header, so that readers know the job ran.
    pub async fn post_papers(&self, papers: &[Paper], date: NaiveDate) -> Result<(), SlackError> {
        info!("Posting {} papers to Slack channel {}", papers.len(), self.channel);

        let res: APIResult<MessageResponse> = self
            .post("/chat.postMessage")
            .json(&MessageRequest {
                channel: &self.channel,
                blocks: build_blocks(papers, date),
                text: build_notif_text(papers, date),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match res {
            APIResult::Ok(_) => Ok(()),
            APIResult::Err(res) => Err(res.into()),
        }
    }
}

/// Put together the blocks, mapping papers to their format on Slack's end.
///
/// A header, then a group of blocks per paper. Groups are separated by
/// dividers, and the header from the first group.
pub fn build_blocks(papers: &[Paper], date: NaiveDate) -> Vec<Block> {
    let mut xs = Vec::with_capacity(2 + papers.len() * 4);

    xs.push(Block::Header(fmt_header(date)));

    for paper in papers {
        xs.push(Block::Divider);

        xs.push(Block::Mrkdwn(fmt_title(paper)));
        xs.push(Block::Mrkdwn(fmt_meta(paper)));

        // Slack rejects sections with empty text.
        if !paper.abstract_text.is_empty() {
            xs.push(Block::Mrkdwn(
                escape(&preview(&paper.abstract_text)).into_owned(),
            ));
        }
    }

    xs
}

fn fmt_header(date: NaiveDate) -> String {
    format!("Scholar Inbox Daily Papers ({})", date.format("%Y-%m-%d"))
}

fn build_notif_text(papers: &[Paper], date: NaiveDate) -> String {
    match papers.len() {
        1 => format!("{}: 1 paper", fmt_header(date)),
        n => format!("{}: {} papers", fmt_header(date), n),
    }
}

/// The title in bold, linking to the paper where we have a URL and the link
/// fits in one section.
fn fmt_title(paper: &Paper) -> String {
    let title = escape(&paper.title);

    if !paper.url.is_empty() {
        // `|` would end the URL early.
        let url = paper.url.replace('|', "%7C");
        let link = format!("*<{}|{}>*", escape(&url), title);

        if link.chars().count() <= MRKDWN_TEXT_LIMIT {
            return link;
        }
    }

    format!("*{}*", clip(&title, MRKDWN_TEXT_LIMIT - 2))
}

fn fmt_meta(paper: &Paper) -> String {
    let meta = format!(
        "Authors: {}\nDate: {}",
        escape(&paper.authors),
        escape(&paper.date)
    );

    clip(&meta, MRKDWN_TEXT_LIMIT).into_owned()
}

/// Cut an abstract down to [ABSTRACT_PREVIEW_CHARS] characters, marking the
/// cut with [ELLIPSIS]. Never splits a character.
pub fn preview(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(ABSTRACT_PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}

/// Cut escaped text down to `max_chars` characters, [ELLIPSIS] included.
/// Never splits a character or an escape sequence.
fn clip(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut cut = text.char_indices().nth(keep).map_or(text.len(), |(i, _)| i);

    // Escaped text only has `&` at the start of an escape sequence.
    if let Some(amp) = text[..cut].rfind('&') {
        if !text[amp..cut].contains(';') {
            cut = amp;
        }
    }

    Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS))
}

/// Escape the three characters Slack treats as control characters in text.
///
/// <https://api.slack.com/reference/surfaces/formatting#escaping>
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(&['&', '<', '>'][..]) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}
