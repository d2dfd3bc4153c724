//! Authorization decisions.
//!
//! # Purpose
//! Combines a [`Principal`] with the grant tables to answer "may this
//! principal do X". Every function is pure: identical inputs always produce
//! identical answers.
//!
//! # Key invariants
//! - Full-access roles are checked first and short-circuit every lookup.
//! - Department grants apply only to company employees with a department.
//! - `has_any_permission(p, [])` is `false`; `has_all_permissions(p, [])` is
//!   `true`. Guards rely on both conventions.
//!
//! # Examples
//! ```rust
//! use textura_rbac::{Department, Permission, Principal, Role, has_permission};
//!
//! let inspector = Principal::new(Role::CompanyEmployee, 7).with_department(Department::Quality);
//! assert!(has_permission(&inspector, Permission::QualityApprove));
//! assert!(!has_permission(&inspector, Permission::ProductionManage));
//! ```
use crate::grants::{department_grants, role_grants};
use crate::permission::Permission;
use crate::principal::Principal;
use crate::role::Role;
use crate::routes::{RouteAccess, route_guard};
use std::collections::BTreeSet;

/// Grant table that applies to `principal`, following the same precedence
/// as [`has_permission`].
fn applicable_grants(principal: &Principal) -> &'static [Permission] {
    if principal.role.has_full_access() {
        return Permission::ALL;
    }
    match (principal.role, principal.department) {
        (Role::CompanyEmployee, Some(department)) => department_grants(Some(department)),
        (role, _) => role_grants(role),
    }
}

pub fn has_permission(principal: &Principal, permission: Permission) -> bool {
    if principal.role.has_full_access() {
        return true;
    }
    applicable_grants(principal).contains(&permission)
}

/// `true` when at least one permission is held; `false` for an empty list.
pub fn has_any_permission(principal: &Principal, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .any(|permission| has_permission(principal, *permission))
}

/// `true` when every permission is held; `true` for an empty list.
pub fn has_all_permissions(principal: &Principal, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .all(|permission| has_permission(principal, *permission))
}

/// Full set of permissions `principal` currently holds.
pub fn effective_permissions(principal: &Principal) -> BTreeSet<Permission> {
    applicable_grants(principal).iter().copied().collect()
}

pub fn can_access_route(principal: &Principal, route: &str) -> bool {
    match route_guard(route) {
        RouteAccess::Public => true,
        RouteAccess::Requires(required) => has_any_permission(principal, required),
    }
}
