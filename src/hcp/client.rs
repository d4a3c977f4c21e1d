//! TFE HTTP client for API interactions

use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// TFE API client
///
/// Carries everything a request needs (API root, token, timeout), so each
/// operation receives its configuration explicitly through `&self`.
pub struct TfeClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TfeClient {
    /// Create a new TFE client for the given API URL
    ///
    /// `url` is the server root (e.g. `https://app.terraform.io`); the API
    /// base path is appended here.
    pub fn new(token: String, url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = url.trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| TfeError::Config(format!("invalid URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TfeError::Config(format!(
                "invalid URL '{}': scheme must be http or https",
                url
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            token,
            base_url: format!("{}{}", trimmed, api::BASE_PATH),
        })
    }

    /// Base URL for API requests (server root + `/api/v2`)
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Parse an API response, returning error for any status other than 200
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status().as_u16();
        if status != 200 {
            return Err(TfeError::Api {
                status,
                message: format!("Failed to get {}", error_context),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| TfeError::Json(format!("Failed to parse {}: {}", error_context, e)))
    }

    /// Fetch all pages of a collection by following `links.next`
    ///
    /// Items are returned in page order. A missing or null `next` link ends
    /// the walk; any non-200 page aborts it.
    pub async fn fetch_all_pages<T, R>(&self, url: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let mut all_items = Vec::new();
        let mut next_page = Some(url.to_string());
        let mut page_num: u32 = 0;

        while let Some(page_url) = next_page {
            page_num += 1;
            debug!("Fetching page {} from: {}", page_num, page_url);

            let response = self.get(&page_url).send().await?;
            let page: R = self.parse_api_response(response, error_context).await?;

            next_page = page.next_page().map(str::to_string);
            let items = page.into_data();
            debug!("Page {} returned {} items", page_num, items.len());
            all_items.extend(items);
        }

        debug!(
            "Fetched {} total items for {} ({} pages)",
            all_items.len(),
            error_context,
            page_num
        );
        Ok(all_items)
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client pointed at a mock server root
    pub fn test_client(url: &str) -> Self {
        Self::new(
            "test-token".to_string(),
            url,
            Duration::from_secs(defaults::TIMEOUT_SECS),
        )
        .expect("mock server URL is valid")
    }
}
