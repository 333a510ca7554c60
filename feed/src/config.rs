use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the content API (e.g. `https://cms.example.com/api/v2`)
    pub content_api_url: String,
    /// Access token for private repositories, if the backend requires one
    pub content_api_token: Option<String>,
    /// Page size requested from the listing endpoint
    pub page_size: usize,
    /// chrono format string for displayed publication dates
    pub date_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            content_api_url: env::var("CONTENT_API_URL").expect("CONTENT_API_URL must be set"),
            content_api_token: env::var("CONTENT_API_TOKEN").ok(),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            date_format: env::var("DATE_FORMAT").unwrap_or_else(|_| "%d %b %Y".to_string()),
        }
    }
}
