//! Content API adapter
//!
//! HTTP implementation of the `PostSource` port plus the translation from
//! raw CMS documents into domain entities.

pub mod client;
pub mod records;
pub mod translate;

pub use client::HttpPostSource;
pub use records::{RawContentBlock, RawDocument, RawImage, RawPostData, RichText, RichTextSpan, SearchResponse};
pub use translate::Translator;
