/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Current state version sub-resource of a workspace
    pub const CURRENT_STATE_VERSION: &str = "current-state-version";

    /// Content type sent with every request
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "TFE_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default API URL (HCP Terraform)
    pub const URL: &str = "https://app.terraform.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default per-request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// CSV output layout
pub mod output {
    /// Column order of the inventory file
    pub const CSV_HEADER: &[&str] = &[
        "name",
        "type",
        "identifier",
        "org",
        "workspace_id",
        "workspace_name",
    ];
}
