use serde::{Deserialize, Serialize};
use textura_rbac::{Guard, Permission, PermissionDomain, SessionClaims};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SystemInfo {
    pub service: String,
    pub api_version: String,
    pub permission_count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    pub id: Permission,
    pub label: String,
    pub domain: PermissionDomain,
}

impl From<Permission> for PermissionEntry {
    fn from(permission: Permission) -> Self {
        Self {
            id: permission,
            label: permission.label().to_string(),
            domain: permission.domain(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GrantList {
    pub subject: String,
    pub permissions: Vec<Permission>,
}

// Principals arrive in the upstream claims shape and are resolved with
// `Principal::from_claims`, so unknown departments grant nothing and unknown
// roles count as no principal.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EffectivePermissionsRequest {
    pub principal: SessionClaims,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EffectivePermissionsResponse {
    pub permissions: Vec<Permission>,
}

// Permissions arrive as raw strings so unknown ids can be reported as
// validation errors instead of body rejections.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckRequest {
    #[serde(default)]
    pub principal: Option<SessionClaims>,
    pub guard: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckResponse {
    pub allowed: bool,
    pub guard: Guard,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RouteCheckRequest {
    #[serde(default)]
    pub principal: Option<SessionClaims>,
    pub route: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RouteCheckResponse {
    pub route: String,
    pub public: bool,
    pub allowed: bool,
}
