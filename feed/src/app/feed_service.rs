//! Feed service
//!
//! Drives the listing: one fetch-and-append cycle per trigger. The service
//! is stateless; the caller holds the current `FeedState` and replaces it
//! with the returned one. A failed fetch propagates its error and the
//! caller's prior state remains the last known-good one, still fully
//! usable for display and for a retry.
//!
//! The caller is also responsible for serializing triggers: at most one
//! load cycle may be outstanding at a time (e.g. disable the "load more"
//! control while a fetch is in flight).

use std::sync::Arc;

use crate::domain::entities::FeedState;
use crate::domain::ports::PostSource;
use crate::error::SourceError;

/// Service for growing the paginated post listing
pub struct FeedService<S: PostSource> {
    source: Arc<S>,
}

impl<S: PostSource> FeedService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch the first page and build the initial feed state.
    pub async fn initial_load(&self) -> Result<FeedState, SourceError> {
        let page = self.source.fetch_first_page().await?;
        tracing::debug!(posts = page.posts.len(), has_more = page.next_page.is_some(), "initial feed page loaded");

        Ok(FeedState::from_page(page))
    }

    /// Fetch the next page and return the grown state.
    ///
    /// Performs exactly one fetch. On error the passed-in state is
    /// untouched; calling again with the same state retries the same page.
    ///
    /// # Panics
    ///
    /// Panics if `state` is exhausted. Callers must check
    /// [`FeedState::has_more`] before triggering a load.
    pub async fn load_more(&self, state: &FeedState) -> Result<FeedState, SourceError> {
        let cursor = state
            .next_page()
            .expect("load_more called on an exhausted feed")
            .clone();

        let page = self.source.fetch_page(&cursor).await.map_err(|e| {
            tracing::warn!(cursor = %cursor, "failed to fetch next feed page: {e}");
            e
        })?;
        tracing::debug!(appended = page.posts.len(), has_more = page.next_page.is_some(), "feed page appended");

        Ok(state.append_page(page.posts, page.next_page))
    }
}
