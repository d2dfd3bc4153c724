//! Fail-fast authorization guards.
//!
//! # Purpose
//! Turns evaluator decisions into preconditions. Each `require_*` function
//! returns `Ok(())` or an [`AuthorizationDenied`] describing the first failing
//! rule; nothing is partially authorized.
//!
//! # How it fits
//! Operation handlers call a guard before any side effect, or wrap themselves
//! with [`guarded`] / [`guarded_async`], which only invoke the handler once
//! the guard has passed.
//!
//! # Key invariants
//! - An absent principal is always denied with [`DenialReason::NoPrincipal`].
//! - A custom message, when supplied, replaces the generated one for every
//!   denial reason.
//! - [`require_same_company_or_permission`] bypasses company scoping for
//!   [`Role::Admin`] only; company owners are still company-scoped.
//!
//! # Examples
//! ```rust
//! use textura_rbac::{DenialReason, Guard, Permission, Principal, Role, guarded};
//!
//! let customer = Principal::new(Role::IndividualCustomer, 7);
//! let guard = Guard::Permission { permission: Permission::OrderApprove };
//! let err = guarded(Some(&customer), &guard, None, || "approved").unwrap_err();
//! assert_eq!(err.reason(), DenialReason::PermissionMissing);
//! ```
use crate::errors::{AuthorizationDenied, AuthzResult, DenialReason};
use crate::evaluator::{has_all_permissions, has_any_permission, has_permission};
use crate::permission::Permission;
use crate::principal::Principal;
use crate::role::Role;
use crate::types::{CompanyId, UserId};
use serde::{Deserialize, Serialize};
use std::future::Future;

const NO_PRINCIPAL_MESSAGE: &str = "authentication required";

fn deny(
    reason: DenialReason,
    message: Option<&str>,
    generated: impl FnOnce() -> String,
) -> AuthorizationDenied {
    let message = match message {
        Some(custom) => custom.to_string(),
        None => generated(),
    };
    AuthorizationDenied::new(reason, message)
}

fn authenticated<'a>(
    principal: Option<&'a Principal>,
    message: Option<&str>,
) -> AuthzResult<&'a Principal> {
    principal.ok_or_else(|| {
        deny(DenialReason::NoPrincipal, message, || {
            NO_PRINCIPAL_MESSAGE.to_string()
        })
    })
}

fn join(permissions: &[Permission]) -> String {
    permissions
        .iter()
        .map(|permission| permission.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn require_permission(
    principal: Option<&Principal>,
    permission: Permission,
    message: Option<&str>,
) -> AuthzResult<()> {
    let principal = authenticated(principal, message)?;
    if has_permission(principal, permission) {
        return Ok(());
    }
    Err(deny(DenialReason::PermissionMissing, message, || {
        format!("missing permission: {permission}")
    }))
}

pub fn require_any_permission(
    principal: Option<&Principal>,
    permissions: &[Permission],
    message: Option<&str>,
) -> AuthzResult<()> {
    let principal = authenticated(principal, message)?;
    if has_any_permission(principal, permissions) {
        return Ok(());
    }
    Err(deny(DenialReason::NoneOfRequired, message, || {
        format!("requires any of: [{}]", join(permissions))
    }))
}

pub fn require_all_permissions(
    principal: Option<&Principal>,
    permissions: &[Permission],
    message: Option<&str>,
) -> AuthzResult<()> {
    let principal = authenticated(principal, message)?;
    if has_all_permissions(principal, permissions) {
        return Ok(());
    }
    Err(deny(DenialReason::NotAllRequired, message, || {
        let missing: Vec<Permission> = permissions
            .iter()
            .copied()
            .filter(|permission| !has_permission(principal, *permission))
            .collect();
        format!("missing permissions: [{}]", join(&missing))
    }))
}

/// Pass when the principal owns the resource or holds `permission`.
///
/// Ownership is plain equality of user ids.
pub fn require_owner_or_permission(
    principal: Option<&Principal>,
    resource_owner_id: &UserId,
    permission: Permission,
    message: Option<&str>,
) -> AuthzResult<()> {
    let principal = authenticated(principal, message)?;
    if &principal.user_id == resource_owner_id || has_permission(principal, permission) {
        return Ok(());
    }
    Err(deny(DenialReason::NotOwner, message, || {
        format!("not the resource owner and missing permission: {permission}")
    }))
}

/// Which rule let a principal through company scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyAccess {
    AdminBypass,
    SameCompany,
    Permission,
}

/// Resolve company scoping for `principal`, or `None` when every rule fails.
///
/// Only [`Role::Admin`] takes the bypass; company owners go through the
/// company comparison and the permission fallback like everyone else.
pub fn company_access(
    principal: &Principal,
    resource_company_id: &CompanyId,
    permission: Permission,
) -> Option<CompanyAccess> {
    if principal.role == Role::Admin {
        return Some(CompanyAccess::AdminBypass);
    }
    if principal.company_id.as_ref() == Some(resource_company_id) {
        return Some(CompanyAccess::SameCompany);
    }
    if has_permission(principal, permission) {
        return Some(CompanyAccess::Permission);
    }
    None
}

/// Pass for platform administrators, for principals in the resource's
/// company, or for principals holding `permission`.
pub fn require_same_company_or_permission(
    principal: Option<&Principal>,
    resource_company_id: &CompanyId,
    permission: Permission,
    message: Option<&str>,
) -> AuthzResult<()> {
    let principal = authenticated(principal, message)?;
    match company_access(principal, resource_company_id, permission) {
        Some(_) => Ok(()),
        None => Err(deny(DenialReason::DifferentCompany, message, || {
            format!("resource belongs to another company and missing permission: {permission}")
        })),
    }
}

/// A precondition described as data, checked with [`Guard::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Guard {
    Permission {
        permission: Permission,
    },
    Any {
        permissions: Vec<Permission>,
    },
    All {
        permissions: Vec<Permission>,
    },
    OwnerOr {
        owner_id: UserId,
        permission: Permission,
    },
    SameCompanyOr {
        company_id: CompanyId,
        permission: Permission,
    },
}

impl Guard {
    pub fn check(&self, principal: Option<&Principal>, message: Option<&str>) -> AuthzResult<()> {
        match self {
            Guard::Permission { permission } => require_permission(principal, *permission, message),
            Guard::Any { permissions } => require_any_permission(principal, permissions, message),
            Guard::All { permissions } => require_all_permissions(principal, permissions, message),
            Guard::OwnerOr {
                owner_id,
                permission,
            } => require_owner_or_permission(principal, owner_id, *permission, message),
            Guard::SameCompanyOr {
                company_id,
                permission,
            } => require_same_company_or_permission(principal, company_id, *permission, message),
        }
    }

    /// Short name of the guard shape, used as a metrics/log label.
    pub fn kind(&self) -> &'static str {
        match self {
            Guard::Permission { .. } => "permission",
            Guard::Any { .. } => "any",
            Guard::All { .. } => "all",
            Guard::OwnerOr { .. } => "owner_or",
            Guard::SameCompanyOr { .. } => "same_company_or",
        }
    }
}

/// Run `handler` only after `guard` has passed.
pub fn guarded<T>(
    principal: Option<&Principal>,
    guard: &Guard,
    message: Option<&str>,
    handler: impl FnOnce() -> T,
) -> AuthzResult<T> {
    guard.check(principal, message)?;
    Ok(handler())
}

/// Async counterpart of [`guarded`]; the future is not created on denial.
pub async fn guarded_async<T, F, Fut>(
    principal: Option<&Principal>,
    guard: &Guard,
    message: Option<&str>,
    handler: F,
) -> AuthzResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    guard.check(principal, message)?;
    Ok(handler().await)
}

pub fn with_permission<T>(
    principal: Option<&Principal>,
    permission: Permission,
    handler: impl FnOnce() -> T,
) -> AuthzResult<T> {
    require_permission(principal, permission, None)?;
    Ok(handler())
}

pub fn with_any_permission<T>(
    principal: Option<&Principal>,
    permissions: &[Permission],
    handler: impl FnOnce() -> T,
) -> AuthzResult<T> {
    require_any_permission(principal, permissions, None)?;
    Ok(handler())
}
