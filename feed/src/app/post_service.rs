//! Post service
//!
//! Detail-page lookups, plus uid enumeration for pre-generating detail
//! paths. Enumeration walks the same cursor chain the listing consumes.

use std::sync::Arc;

use crate::domain::entities::{FeedState, PostDetail};
use crate::domain::ports::PostSource;
use crate::error::SourceError;

/// Service for single-post operations
pub struct PostService<S: PostSource> {
    source: Arc<S>,
}

impl<S: PostSource> PostService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch one full post by uid. Returns `Ok(None)` if no such post exists.
    pub async fn get_post(&self, uid: &str) -> Result<Option<PostDetail>, SourceError> {
        self.source.fetch_detail(uid).await
    }

    /// Collect post uids in feed order, walking up to `max_pages` pages.
    pub async fn collect_uids(&self, max_pages: usize) -> Result<Vec<String>, SourceError> {
        if max_pages == 0 {
            return Ok(Vec::new());
        }

        let mut state = FeedState::from_page(self.source.fetch_first_page().await?);
        let mut fetched = 1;

        while fetched < max_pages {
            let Some(cursor) = state.next_page().cloned() else {
                break;
            };
            let page = self.source.fetch_page(&cursor).await?;
            state = state.append_page(page.posts, page.next_page);
            fetched += 1;
        }

        tracing::debug!(uids = state.len(), pages = fetched, "collected post uids");
        Ok(state.posts().iter().map(|p| p.uid.clone()).collect())
    }
}
