use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};

/// A recommended paper, normalised from the digest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paper {
    pub title: String,
    pub authors: String,
    /// Either the publication date or, failing that, the venue as displayed
    /// by Scholar Inbox. Free text in both cases.
    pub date: String,
    /// May be empty.
    pub url: String,
    /// May be empty.
    pub abstract_text: String,
}

/// A digest entry as it arrives. Every field is optional and anything that
/// isn't a string is treated as absent.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawPaper {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    authors: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    shortened_authors: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    publication_date: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    display_venue: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "abstract")]
    abstract_text: Option<String>,
}

impl Paper {
    /// Apply the fallback chains to a raw entry. Entries without a title
    /// can't be presented and yield `None`.
    ///
    /// An empty string still counts as present for every field bar the title,
    /// so `"authors": ""` doesn't fall back to `shortened_authors`.
    pub(super) fn from_raw(raw: RawPaper) -> Option<Paper> {
        let title = raw.title.filter(|t| !t.is_empty())?;

        Some(Paper {
            title,
            authors: raw.authors.or(raw.shortened_authors).unwrap_or_default(),
            date: raw
                .publication_date
                .or(raw.display_venue)
                .unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            abstract_text: raw.abstract_text.unwrap_or_default(),
        })
    }
}
