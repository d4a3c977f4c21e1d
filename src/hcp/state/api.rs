//! State API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::{TfeClient, Workspace};

use super::models::{CurrentStateVersionResponse, Resource, TerraformState};

impl TfeClient {
    /// Get current state version of a workspace
    pub async fn get_current_state_version(
        &self,
        workspace: &Workspace,
    ) -> Result<CurrentStateVersionResponse> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            workspace.id,
            api::CURRENT_STATE_VERSION
        );

        debug!("Fetching current state version for: {}", workspace.id);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("state for workspace '{}'", workspace.name))
            .await
    }

    /// Download a state document from its hosted URL
    pub async fn download_state(
        &self,
        download_url: &str,
        workspace: &Workspace,
    ) -> Result<TerraformState> {
        debug!("Downloading state from: {}", download_url);

        let response = self.get(download_url).send().await?;
        self.parse_api_response(
            response,
            &format!("state file for workspace '{}'", workspace.name),
        )
        .await
    }

    /// Extract resource instances from the current state of each workspace
    ///
    /// State documents are not paginated: one version lookup and one download
    /// per workspace.
    pub async fn list_resources(&self, workspaces: &[Workspace]) -> Result<Vec<Resource>> {
        let mut resources = Vec::new();
        for workspace in workspaces {
            let workspace_resources = self.list_workspace_resources(workspace).await?;
            debug!(
                "Found {} resource instances in workspace '{}' ({})",
                workspace_resources.len(),
                workspace.name,
                workspace.id
            );
            resources.extend(workspace_resources);
        }
        Ok(resources)
    }

    /// Extract resource instances from the current state of one workspace
    pub async fn list_workspace_resources(&self, workspace: &Workspace) -> Result<Vec<Resource>> {
        let version = self.get_current_state_version(workspace).await?;
        let state = self
            .download_state(&version.data.attributes.hosted_state_download_url, workspace)
            .await?;
        Ok(state.resources_for(workspace))
    }
}
