//! Content source port trait
//!
//! Defines the interface to the upstream content backend. Implementations
//! own fetching *and* translation: every page and document they return is
//! already well-formed domain data, so the feed core never sees a raw or
//! partially-valid record.

use async_trait::async_trait;

use crate::domain::entities::{PageCursor, PostDetail, PostPage};
use crate::error::SourceError;

/// Port trait for the paginated post backend
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the first page of post summaries.
    async fn fetch_first_page(&self) -> Result<PostPage, SourceError>;

    /// Fetch the page behind a backend-issued cursor.
    async fn fetch_page(&self, cursor: &PageCursor) -> Result<PostPage, SourceError>;

    /// Fetch one full post by uid. Returns `Ok(None)` if no such post exists.
    async fn fetch_detail(&self, uid: &str) -> Result<Option<PostDetail>, SourceError>;
}
