//! Application layer
//!
//! Services orchestrating fetch-and-append cycles between the content
//! source port and the feed accumulator.

pub mod feed_service;
pub mod post_service;

pub use feed_service::FeedService;
pub use post_service::PostService;
