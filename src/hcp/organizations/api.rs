//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Organization;

impl TfeClient {
    /// Get all organizations accessible to the token, following pagination
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let url = format!("{}/{}", self.base_url(), api::ORGANIZATIONS);
        debug!("Fetching organizations from: {}", url);

        self.fetch_all_pages::<Organization, ApiListResponse<Organization>>(&url, "organizations")
            .await
    }
}
