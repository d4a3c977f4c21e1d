//! Common traits for TFE API responses

use serde::Deserialize;

use crate::hcp::PaginationLinks;

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any `XResponse` struct to enable use with
/// `TfeClient::fetch_all_pages()` helper.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;

    /// Get reference to pagination links
    fn links(&self) -> Option<&PaginationLinks>;

    /// URL of the next page, if any
    fn next_page(&self) -> Option<&str> {
        self.links().and_then(|l| l.next.as_deref())
    }
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: Option<PaginationLinks>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn links(&self) -> Option<&PaginationLinks> {
        self.links.as_ref()
    }
}
