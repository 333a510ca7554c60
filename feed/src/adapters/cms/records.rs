//! Raw CMS record types
//!
//! Shapes of the JSON the content API returns. These stay inside the
//! adapter; the rest of the crate works with translated domain entities.

use serde::{Deserialize, Serialize};

/// Envelope returned by the listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RawDocument>,
    /// Absolute URL of the next page; `null` when exhausted
    #[serde(default)]
    pub next_page: Option<String>,
}

/// One stored document
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub uid: Option<String>,
    /// RFC 3339 timestamp; `null` while unpublished
    #[serde(default)]
    pub first_publication_date: Option<String>,
    /// RFC 3339 timestamp of the latest edit; not used for display
    #[serde(default)]
    pub last_publication_date: Option<String>,
    pub data: RawPostData,
}

/// The post payload of a document
#[derive(Debug, Clone, Deserialize)]
pub struct RawPostData {
    #[serde(default)]
    pub title: RichText,
    #[serde(default)]
    pub subtitle: RichText,
    #[serde(default)]
    pub author: RichText,
    #[serde(default)]
    pub banner: Option<RawImage>,
    #[serde(default)]
    pub content: Vec<RawContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub url: String,
}

/// One body section: a heading plus rich-text paragraphs
#[derive(Debug, Clone, Deserialize)]
pub struct RawContentBlock {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: RichText,
}

/// A rich-text field: an ordered list of typed spans
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichText(pub Vec<RichTextSpan>);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextSpan {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

impl RichText {
    /// Flatten to plain text, joining span texts in order.
    pub fn as_text(&self) -> String {
        self.0
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The text of each span, in order.
    pub fn fragments(&self) -> Vec<String> {
        self.0.iter().map(|span| span.text.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|span| span.text.trim().is_empty())
    }
}
