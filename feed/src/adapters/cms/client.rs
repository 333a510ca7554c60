//! Content API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::{PageCursor, PostDetail, PostPage};
use crate::domain::ports::PostSource;
use crate::error::SourceError;

use super::records::{RawDocument, SearchResponse};
use super::translate::Translator;

/// HTTP implementation of the content source port
pub struct HttpPostSource {
    http: Client,
    base_url: String,
    access_token: Option<String>,
    page_size: usize,
    translator: Translator,
}

impl HttpPostSource {
    pub fn new(
        base_url: String,
        access_token: Option<String>,
        page_size: usize,
        translator: Translator,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            page_size,
            translator,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.content_api_url.clone(),
            config.content_api_token.clone(),
            config.page_size,
            Translator::new(config.date_format.clone()),
        )
    }

    fn search_url(&self) -> String {
        let mut url = format!(
            "{}/documents/search?type=posts&page_size={}",
            self.base_url, self.page_size
        );
        if let Some(token) = &self.access_token {
            url.push_str(&format!("&access_token={}", encode(token)));
        }
        url
    }

    fn detail_url(&self, uid: &str) -> String {
        let mut url = format!("{}/documents/{}", self.base_url, encode(uid));
        if let Some(token) = &self.access_token {
            url.push_str(&format!("?access_token={}", encode(token)));
        }
        url
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, SourceError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| SourceError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(SourceError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(SourceError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(SourceError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Fetch one listing page and translate every document in it.
    async fn fetch_listing(&self, url: &str) -> Result<PostPage, SourceError> {
        let response = self.http.get(url).send().await?;
        let envelope: SearchResponse = self.handle_response(response).await?;

        let posts = envelope
            .results
            .iter()
            .map(|doc| self.translator.summary(doc))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PostPage {
            posts,
            next_page: envelope.next_page.map(PageCursor::new),
        })
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_first_page(&self) -> Result<PostPage, SourceError> {
        self.fetch_listing(&self.search_url()).await
    }

    async fn fetch_page(&self, cursor: &PageCursor) -> Result<PostPage, SourceError> {
        // cursors are the absolute next-page URLs the backend issues
        self.fetch_listing(cursor.as_str()).await
    }

    async fn fetch_detail(&self, uid: &str) -> Result<Option<PostDetail>, SourceError> {
        let response = self.http.get(self.detail_url(uid)).send().await?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }

        let doc: RawDocument = self.handle_response(response).await?;
        Ok(Some(self.translator.detail(&doc)?))
    }
}
