//! State version and state document models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::hcp::Workspace;

/// Response wrapper for current state version
#[derive(Deserialize, Debug)]
pub struct CurrentStateVersionResponse {
    pub data: CurrentStateVersion,
}

/// State version data from TFE API
#[derive(Deserialize, Debug)]
pub struct CurrentStateVersion {
    pub id: Option<String>,
    pub attributes: StateVersionAttributes,
}

/// State version attributes from TFE API
#[derive(Deserialize, Debug)]
pub struct StateVersionAttributes {
    #[serde(rename = "hosted-state-download-url")]
    pub hosted_state_download_url: String,

    pub serial: Option<u64>,
}

/// Downloaded Terraform state file structure
///
/// Only the parts needed for the inventory are modelled.
#[derive(Deserialize, Debug)]
pub struct TerraformState {
    pub resources: Vec<StateResource>,
}

/// A resource block in the state document
#[derive(Deserialize, Debug)]
pub struct StateResource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub instances: Vec<StateInstance>,
}

/// One instance of a resource block
#[derive(Deserialize, Debug)]
pub struct StateInstance {
    pub attributes: Map<String, Value>,
}

impl StateInstance {
    /// Cloud identifier of the instance, taken from a top-level `arn` attribute
    pub fn identifier(&self) -> Option<String> {
        match self.attributes.get("arn")? {
            Value::Null => None,
            Value::String(arn) => Some(arn.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl TerraformState {
    /// Flatten the state into one row per resource instance, in document order
    pub fn resources_for(&self, workspace: &Workspace) -> Vec<Resource> {
        self.resources
            .iter()
            .flat_map(|resource| {
                resource
                    .instances
                    .iter()
                    .map(move |instance| Resource::new(resource, instance, workspace))
            })
            .collect()
    }
}

/// One inventory row: a resource instance and the workspace it lives in
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub identifier: Option<String>,
    pub org: String,
    pub workspace_id: String,
    pub workspace_name: String,
}

impl Resource {
    fn new(resource: &StateResource, instance: &StateInstance, workspace: &Workspace) -> Self {
        Self {
            name: resource.name.clone(),
            resource_type: resource.resource_type.clone(),
            identifier: instance.identifier(),
            org: workspace.org.clone(),
            workspace_id: workspace.id.clone(),
            workspace_name: workspace.name.clone(),
        }
    }
}
