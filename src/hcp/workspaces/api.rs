//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::{Organization, TfeClient};

use super::models::{Workspace, WorkspaceData};

impl TfeClient {
    /// Get all workspaces of every given organization, in organization order
    pub async fn list_workspaces(&self, orgs: &[Organization]) -> Result<Vec<Workspace>> {
        let mut workspaces = Vec::new();
        for org in orgs {
            let org_workspaces = self.list_org_workspaces(org).await?;
            debug!(
                "Found {} workspaces for org '{}'",
                org_workspaces.len(),
                org.id
            );
            workspaces.extend(org_workspaces);
        }
        Ok(workspaces)
    }

    /// Get all workspaces of a single organization, following pagination
    pub async fn list_org_workspaces(&self, org: &Organization) -> Result<Vec<Workspace>> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            org.id,
            api::WORKSPACES
        );
        let error_context = format!("workspaces for organization '{}'", org.id);

        let items = self
            .fetch_all_pages::<WorkspaceData, ApiListResponse<WorkspaceData>>(&url, &error_context)
            .await?;

        Ok(items
            .into_iter()
            .map(|data| Workspace::new(org, data))
            .collect())
    }
}
