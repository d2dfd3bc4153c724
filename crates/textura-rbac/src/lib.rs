//! Role and department based access control for the Textura workflow platform.
//!
//! # Purpose
//! Decides whether a principal (role, optional department, user and company)
//! may perform an operation or open a dashboard route.
//!
//! # How it fits
//! Resolvers build a [`Principal`] from claims verified elsewhere, then call
//! the evaluator or a guard before touching any data. This crate performs no
//! I/O and holds no mutable state; all tables are `'static`.
//!
//! # Key invariants
//! - Administrators and company owners hold every permission in the catalog.
//! - Company employees are resolved through their department; without one
//!   they hold nothing.
//! - Routes without a guard entry are public.
//!
//! # Examples
//! ```rust
//! use textura_rbac::{Department, Permission, Principal, Role, can_access_route, require_permission};
//!
//! let planner = Principal::new(Role::CompanyEmployee, 7).with_department(Department::Production);
//! assert!(can_access_route(&planner, "/production/manage"));
//! assert!(require_permission(Some(&planner), Permission::SettingsManage, None).is_err());
//! ```
//!
//! # Common pitfalls
//! - Guards must run before the guarded operation's side effects.
//! - [`require_same_company_or_permission`] only bypasses company scoping for
//!   administrators, not for company owners.

mod errors;
mod evaluator;
mod grants;
mod guard;
mod permission;
mod principal;
mod role;
mod routes;
mod types;

pub use errors::{AuthorizationDenied, AuthzResult, DenialReason, ParseError};
pub use evaluator::{
    can_access_route, effective_permissions, has_all_permissions, has_any_permission,
    has_permission,
};
pub use grants::{department_grants, role_grants};
pub use guard::{
    CompanyAccess, Guard, company_access, guarded, guarded_async, require_all_permissions,
    require_any_permission, require_owner_or_permission, require_permission,
    require_same_company_or_permission, with_any_permission, with_permission,
};
pub use permission::{Permission, PermissionDomain, all_permissions, label_of};
pub use principal::{Principal, SessionClaims};
pub use role::{Department, Role};
pub use routes::{RouteAccess, guarded_routes, route_guard};
pub use types::{CompanyId, UserId};
