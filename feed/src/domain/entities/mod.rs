//! Domain entities
//!
//! Pure domain models. Raw CMS documents never appear here; everything is
//! translated by the adapter layer before it becomes one of these types.

pub mod feed;
pub mod post;

pub use feed::{FeedState, PageCursor, PostPage};
pub use post::{ContentBlock, PostDetail, PostSummary};
