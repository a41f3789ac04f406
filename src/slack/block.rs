use serde::ser::SerializeStruct;
use serde::{ser, Serialize};

/// Slack's block API is its most modern, and allows us to mix rich formatting
/// with foreign plaintext. This is our limited subset thereof.
///
/// <https://api.slack.com/reference/block-kit/blocks>
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header(String),
    /// "mrkdown" is Slack's alternative to Markdown, rendered in a section.
    /// Callers are responsible for escaping.
    ///
    /// <https://api.slack.com/reference/surfaces/formatting#basics>
    Mrkdwn(String),
    Divider,
}

#[derive(Serialize)]
struct RawTextBlock<'a> {
    #[serde(rename = "type")]
    typ: &'static str,
    text: &'a String,
}

impl ser::Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            Block::Header(x) => {
                let mut state = serializer.serialize_struct("Block", 2)?;
                state.serialize_field("type", "header")?;
                state.serialize_field(
                    "text",
                    &RawTextBlock {
                        typ: "plain_text",
                        text: x,
                    },
                )?;
                state.end()
            }

            Block::Mrkdwn(x) => {
                let mut state = serializer.serialize_struct("Block", 2)?;
                state.serialize_field("type", "section")?;
                state.serialize_field(
                    "text",
                    &RawTextBlock {
                        typ: "mrkdwn",
                        text: x,
                    },
                )?;
                state.end()
            }

            Block::Divider => {
                let mut state = serializer.serialize_struct("Block", 1)?;
                state.serialize_field("type", "divider")?;
                state.end()
            }
        }
    }
}
