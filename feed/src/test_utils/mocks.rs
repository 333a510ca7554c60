//! Mock implementation of the content source port
//!
//! An in-memory source configured with scripted pages keyed by cursor.
//! Failure injection flips every fetch into an error until cleared, which
//! lets tests exercise the last-known-good-state contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{PageCursor, PostDetail, PostPage};
use crate::domain::ports::PostSource;
use crate::error::SourceError;

#[derive(Default)]
pub struct InMemoryPostSource {
    first_page: Arc<RwLock<Option<PostPage>>>,
    pages: Arc<RwLock<HashMap<String, PostPage>>>,
    details: Arc<RwLock<HashMap<String, PostDetail>>>,
    failing: Arc<AtomicBool>,
    fetch_count: Arc<AtomicUsize>,
}

impl InMemoryPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response to `fetch_first_page`
    pub fn with_first_page(self, page: PostPage) -> Self {
        *self.first_page.write().unwrap() = Some(page);
        self
    }

    /// Script the page behind a cursor
    pub fn with_page(self, cursor: &str, page: PostPage) -> Self {
        self.pages.write().unwrap().insert(cursor.to_string(), page);
        self
    }

    /// Script a detail document
    pub fn with_detail(self, detail: PostDetail) -> Self {
        self.details
            .write()
            .unwrap()
            .insert(detail.uid.clone(), detail);
        self
    }

    /// Start in the failing state
    pub fn failing(self) -> Self {
        self.set_failing(true);
        self
    }

    /// Toggle failure injection; while set, every fetch returns an error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of fetches performed so far, across all methods
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    fn record_fetch(&self) -> Result<(), SourceError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Api {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PostSource for InMemoryPostSource {
    async fn fetch_first_page(&self) -> Result<PostPage, SourceError> {
        self.record_fetch()?;
        Ok(self
            .first_page
            .read()
            .unwrap()
            .clone()
            .unwrap_or(PostPage {
                posts: vec![],
                next_page: None,
            }))
    }

    async fn fetch_page(&self, cursor: &PageCursor) -> Result<PostPage, SourceError> {
        self.record_fetch()?;
        self.pages
            .read()
            .unwrap()
            .get(cursor.as_str())
            .cloned()
            .ok_or_else(|| SourceError::Api {
                status: 404,
                message: format!("no page behind cursor {cursor}"),
            })
    }

    async fn fetch_detail(&self, uid: &str) -> Result<Option<PostDetail>, SourceError> {
        self.record_fetch()?;
        Ok(self.details.read().unwrap().get(uid).cloned())
    }
}
