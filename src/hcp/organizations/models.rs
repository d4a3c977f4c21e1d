//! Organization data models

use serde::Deserialize;

/// Organization data from TFE API
///
/// For organizations the API `id` is the organization name.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: String,
    pub attributes: OrganizationAttributes,
}

/// Organization attributes from TFE API
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OrganizationAttributes {
    #[serde(rename = "created-at")]
    pub created_at: String,
}

impl Organization {
    /// Get created_at from attributes
    pub fn created_at(&self) -> &str {
        &self.attributes.created_at
    }
}
