//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::adapters::cms::{
    RawContentBlock, RawDocument, RawImage, RawPostData, RichText, RichTextSpan,
};
use crate::domain::entities::{ContentBlock, PageCursor, PostDetail, PostPage, PostSummary};

/// Create a published test summary
pub fn test_summary(uid: &str) -> PostSummary {
    PostSummary {
        uid: uid.to_string(),
        title: format!("Title for {uid}"),
        subtitle: format!("Subtitle for {uid}"),
        author: "test-author".to_string(),
        first_publication_date: Some("15 Mar 2021".to_string()),
    }
}

/// Create a page of test summaries with an optional next-page cursor
pub fn test_page(uids: &[&str], next_page: Option<&str>) -> PostPage {
    PostPage {
        posts: uids.iter().map(|uid| test_summary(uid)).collect(),
        next_page: next_page.map(PageCursor::new),
    }
}

/// Create a test detail with two body sections
pub fn test_detail(uid: &str) -> PostDetail {
    PostDetail {
        uid: uid.to_string(),
        title: format!("Title for {uid}"),
        banner_url: format!("https://images.test/{uid}.png"),
        author: "test-author".to_string(),
        first_publication_date: Some("15 Mar 2021".to_string()),
        content: vec![
            ContentBlock {
                heading: "Section one".to_string(),
                body: vec![
                    "First paragraph.".to_string(),
                    "Second paragraph.".to_string(),
                ],
            },
            ContentBlock {
                heading: "Section two".to_string(),
                body: vec!["Closing paragraph.".to_string()],
            },
        ],
    }
}

fn rich(text: &str) -> RichText {
    RichText(vec![RichTextSpan {
        kind: "paragraph".to_string(),
        text: text.to_string(),
    }])
}

/// Create a raw CMS document as the backend would return it
pub fn test_document(uid: &str) -> RawDocument {
    test_document_with_dates(
        uid,
        Some("2021-03-15T10:00:00+00:00"),
        Some("2021-03-15T10:00:00+00:00"),
    )
}

/// Create a raw document with explicit publication timestamps
pub fn test_document_with_dates(
    uid: &str,
    first_publication_date: Option<&str>,
    last_publication_date: Option<&str>,
) -> RawDocument {
    RawDocument {
        uid: Some(uid.to_string()),
        first_publication_date: first_publication_date.map(str::to_string),
        last_publication_date: last_publication_date.map(str::to_string),
        data: RawPostData {
            title: rich(&format!("Title for {uid}")),
            subtitle: rich(&format!("Subtitle for {uid}")),
            author: rich("test-author"),
            banner: Some(RawImage {
                url: format!("https://images.test/{uid}.png"),
            }),
            content: vec![
                RawContentBlock {
                    heading: "Section one".to_string(),
                    body: RichText(vec![
                        RichTextSpan {
                            kind: "paragraph".to_string(),
                            text: "First paragraph.".to_string(),
                        },
                        RichTextSpan {
                            kind: "paragraph".to_string(),
                            text: "Second paragraph.".to_string(),
                        },
                    ]),
                },
                RawContentBlock {
                    heading: "Section two".to_string(),
                    body: rich("Closing paragraph."),
                },
            ],
        },
    }
}
