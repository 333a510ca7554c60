//! Feed state for the paginated post listing
//!
//! The listing grows across successive fetches of a paginated upstream
//! source. `FeedState` is the accumulated view: every loaded summary in
//! fetch order, plus the cursor for the next unfetched page. State never
//! changes in place: each transition reads one prior state and produces a
//! new one, so the caller holds the current state and replaces it wholesale.

use serde::{Deserialize, Serialize};

use super::post::PostSummary;

/// Opaque backend-issued token referencing the next page of a result set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One translated page fetched from the content source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub posts: Vec<PostSummary>,
    /// Cursor for the page after this one; `None` when the source is exhausted
    pub next_page: Option<PageCursor>,
}

/// The accumulated, append-only listing state plus pagination cursor
///
/// An absent cursor means the feed is exhausted and no further fetch should
/// be attempted; a present cursor means at least one more page may exist
/// (the backend, not this type, is authoritative). Consumers render
/// `posts()` in order and offer a "load more" control only while
/// `has_more()` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedState {
    posts: Vec<PostSummary>,
    next_page: Option<PageCursor>,
}

impl FeedState {
    /// Build the initial state from the first fetched page.
    pub fn new(first_page: Vec<PostSummary>, next_page: Option<PageCursor>) -> Self {
        Self {
            posts: first_page,
            next_page,
        }
    }

    /// Build the initial state directly from a fetch result.
    pub fn from_page(page: PostPage) -> Self {
        Self::new(page.posts, page.next_page)
    }

    /// Every loaded summary, in fetch order
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Cursor for the next unfetched page, if the source advertised one
    pub fn next_page(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    /// Whether another page may be fetched
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Append a freshly fetched page and replace the cursor.
    ///
    /// Relative order is preserved within and across pages. Entries are
    /// never sorted and never de-duplicated: if the upstream source returns
    /// an overlapping record, the feed carries it twice. Appending the same
    /// page twice therefore yields two copies; the transition is not
    /// idempotent.
    ///
    /// # Panics
    ///
    /// Panics if this state has no next-page cursor. Calling with an
    /// exhausted feed is a caller bug; consumers must check [`has_more`]
    /// before triggering a load.
    ///
    /// [`has_more`]: FeedState::has_more
    pub fn append_page(
        &self,
        new_page: Vec<PostSummary>,
        next_page: Option<PageCursor>,
    ) -> Self {
        assert!(
            self.next_page.is_some(),
            "append_page called on an exhausted feed"
        );

        let mut posts = self.posts.clone();
        posts.extend(new_page);
        Self { posts, next_page }
    }
}
