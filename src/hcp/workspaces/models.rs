//! Workspace data models

use serde::Deserialize;

use crate::hcp::Organization;

/// Workspace item as returned by the list endpoint
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceData {
    pub id: String,
    pub attributes: WorkspaceAttributes,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,
    #[serde(rename = "created-at")]
    pub created_at: String,
    #[serde(rename = "updated-at")]
    pub updated_at: String,
}

/// A workspace bound to the organization it was listed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    /// Owning organization id
    pub org: String,
    pub date_created: String,
    pub date_changed: String,
}

impl Workspace {
    /// Build a workspace record from an API item and its organization
    pub fn new(org: &Organization, data: WorkspaceData) -> Self {
        Self {
            id: data.id,
            name: data.attributes.name,
            org: org.id.clone(),
            date_created: data.attributes.created_at,
            date_changed: data.attributes.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcp::organizations::OrganizationAttributes;

    fn org(id: &str) -> Organization {
        Organization {
            id: id.to_string(),
            attributes: OrganizationAttributes {
                created_at: "2024-01-01T00:00:00Z".to_string(),
            },
        }
    }

    #[test]
    fn test_workspace_from_api_item() {
        let data: WorkspaceData = serde_json::from_value(serde_json::json!({
            "id": "ws-abc123",
            "type": "workspaces",
            "attributes": {
                "name": "prod",
                "created-at": "2024-01-02T00:00:00Z",
                "updated-at": "2024-05-06T00:00:00Z",
                "resource-count": 12
            }
        }))
        .unwrap();

        let ws = Workspace::new(&org("org1"), data);

        assert_eq!(ws.id, "ws-abc123");
        assert_eq!(ws.name, "prod");
        assert_eq!(ws.org, "org1");
        assert_eq!(ws.date_created, "2024-01-02T00:00:00Z");
        assert_eq!(ws.date_changed, "2024-05-06T00:00:00Z");
    }

    #[test]
    fn test_workspace_missing_name_is_error() {
        let result: std::result::Result<WorkspaceData, _> =
            serde_json::from_value(serde_json::json!({
                "id": "ws-abc123",
                "attributes": {
                    "created-at": "2024-01-02T00:00:00Z",
                    "updated-at": "2024-05-06T00:00:00Z"
                }
            }));
        assert!(result.is_err());
    }
}
