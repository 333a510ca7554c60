//! Post domain entities
//!
//! `PostSummary` is what the listing shows; `PostDetail` is what a detail
//! page shows. Both are immutable once constructed by translation.

use serde::{Deserialize, Serialize};

/// Lightweight representation of a post for listing display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Backend-issued identifier, unique per post
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// Display-formatted publication date; `None` while unpublished
    pub first_publication_date: Option<String>,
}

impl PostSummary {
    /// Whether the post has a publication date to display
    pub fn is_published(&self) -> bool {
        self.first_publication_date.is_some()
    }
}

/// Full representation of a single post for detail-page display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub uid: String,
    pub title: String,
    pub banner_url: String,
    pub author: String,
    /// Display-formatted publication date; `None` while unpublished
    pub first_publication_date: Option<String>,
    /// Ordered body sections
    pub content: Vec<ContentBlock>,
}

/// One section of a post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: String,
    /// Plain-text fragments extracted from the section's rich text, in order
    pub body: Vec<String>,
}
