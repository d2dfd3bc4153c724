//! Catalog and grant-table handlers.
//!
//! # Purpose and responsibility
//! Lets dashboards render permission labels and preview what a role or
//! department receives without duplicating the grant tables client-side.
use crate::api::error::ApiError;
use crate::api::types::{GrantList, PermissionEntry};
use axum::Json;
use axum::extract::Path;
use textura_rbac::{
    Department, Permission, Role, all_permissions, department_grants, role_grants,
};

/// List every permission with its label and domain, in catalog order.
pub(crate) async fn list_permissions() -> Json<Vec<PermissionEntry>> {
    Json(
        all_permissions()
            .iter()
            .copied()
            .map(PermissionEntry::from)
            .collect(),
    )
}

/// Look up a single permission's label and domain.
///
/// # Errors
/// - 404 `not_found` for an unknown permission id.
pub(crate) async fn permission_entry(
    Path(permission): Path<String>,
) -> Result<Json<PermissionEntry>, ApiError> {
    let permission: Permission = permission.parse()?;
    Ok(Json(PermissionEntry::from(permission)))
}

/// Role-level grants for `role`.
///
/// # Errors
/// - 404 `not_found` for an unknown role name.
pub(crate) async fn role_permissions(
    Path(role): Path<String>,
) -> Result<Json<GrantList>, ApiError> {
    let role: Role = role.parse()?;
    Ok(Json(GrantList {
        subject: role.to_string(),
        permissions: role_grants(role).to_vec(),
    }))
}

/// Department-level grants for `department`.
///
/// # Errors
/// - 404 `not_found` for an unknown department name.
pub(crate) async fn department_permissions(
    Path(department): Path<String>,
) -> Result<Json<GrantList>, ApiError> {
    let department: Department = department.parse()?;
    Ok(Json(GrantList {
        subject: department.to_string(),
        permissions: department_grants(Some(department)).to_vec(),
    }))
}
