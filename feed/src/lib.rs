//! Feed client for the Space Traveling blog
//!
//! Talks to the headless content backend that stores the blog's posts and
//! exposes the append-only listing state the site is built around: an
//! accumulated sequence of post summaries plus a cursor for the next
//! unfetched page, grown one page per explicit "load more" trigger.
//!
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns:
//! - `domain`: pure entities (including the feed accumulator) and port traits
//! - `app`: services orchestrating fetch-and-append cycles over the ports
//! - `adapters`: the HTTP content API implementation of the source port

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use adapters::HttpPostSource;
pub use app::{FeedService, PostService};
pub use config::Config;
pub use domain::entities::{
    ContentBlock, FeedState, PageCursor, PostDetail, PostPage, PostSummary,
};
pub use domain::ports::PostSource;
pub use error::SourceError;
