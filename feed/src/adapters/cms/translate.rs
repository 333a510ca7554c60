//! Record translation
//!
//! Converts raw CMS documents into domain entities. Translation runs inside
//! the adapter, before anything reaches the feed core: a record that fails
//! here aborts the whole fetch, so the core only ever sees well-formed
//! posts.

use chrono::DateTime;

use crate::domain::entities::{ContentBlock, PostDetail, PostSummary};
use crate::error::SourceError;

use super::records::{RawDocument, RichText};

/// Translates raw documents into domain entities
#[derive(Debug, Clone)]
pub struct Translator {
    /// chrono format string applied to publication dates
    date_format: String,
}

impl Translator {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Translate a listing document into a summary.
    ///
    /// The displayed date always comes from `first_publication_date`,
    /// whichever endpoint produced the document.
    pub fn summary(&self, doc: &RawDocument) -> Result<PostSummary, SourceError> {
        let uid = require_uid(doc)?;

        Ok(PostSummary {
            title: require_text(&doc.data.title, &uid, "title")?,
            subtitle: doc.data.subtitle.as_text(),
            author: require_text(&doc.data.author, &uid, "author")?,
            first_publication_date: self.display_date(doc, &uid)?,
            uid,
        })
    }

    /// Translate a full document into a detail view.
    pub fn detail(&self, doc: &RawDocument) -> Result<PostDetail, SourceError> {
        let uid = require_uid(doc)?;

        let banner = doc.data.banner.as_ref().ok_or(SourceError::MalformedRecord {
            uid: Some(uid.clone()),
            field: "banner",
        })?;

        let content = doc
            .data
            .content
            .iter()
            .map(|block| ContentBlock {
                heading: block.heading.clone(),
                body: block.body.fragments(),
            })
            .collect();

        Ok(PostDetail {
            title: require_text(&doc.data.title, &uid, "title")?,
            banner_url: banner.url.clone(),
            author: require_text(&doc.data.author, &uid, "author")?,
            first_publication_date: self.display_date(doc, &uid)?,
            content,
            uid,
        })
    }

    /// Parse and render the publication date; an absent date stays absent.
    fn display_date(&self, doc: &RawDocument, uid: &str) -> Result<Option<String>, SourceError> {
        let Some(raw) = doc.first_publication_date.as_deref() else {
            return Ok(None);
        };

        let parsed =
            DateTime::parse_from_rfc3339(raw).map_err(|_| SourceError::MalformedRecord {
                uid: Some(uid.to_string()),
                field: "first_publication_date",
            })?;

        Ok(Some(parsed.format(&self.date_format).to_string()))
    }
}

fn require_uid(doc: &RawDocument) -> Result<String, SourceError> {
    doc.uid
        .as_deref()
        .filter(|uid| !uid.trim().is_empty())
        .map(str::to_string)
        .ok_or(SourceError::MalformedRecord {
            uid: None,
            field: "uid",
        })
}

fn require_text(
    field: &RichText,
    uid: &str,
    name: &'static str,
) -> Result<String, SourceError> {
    if field.is_empty() {
        return Err(SourceError::MalformedRecord {
            uid: Some(uid.to_string()),
            field: name,
        });
    }
    Ok(field.as_text())
}
