//! Route guard table.
//!
//! Maps dashboard routes to the permissions that unlock them. A principal may
//! open a route when it holds at least one of the listed permissions. Routes
//! without an entry are public.
use crate::permission::Permission;
use std::collections::HashMap;
use std::sync::OnceLock;

use Permission::*;

const ROUTE_PERMISSIONS: &[(&str, &[Permission])] = &[
    ("/collections", &[CollectionView]),
    ("/collections/create", &[CollectionCreate]),
    ("/samples", &[SampleView]),
    ("/samples/create", &[SampleCreate]),
    ("/samples/approve", &[SampleApprove]),
    ("/orders", &[OrderView]),
    ("/orders/create", &[OrderCreate]),
    ("/orders/approve", &[OrderApprove]),
    ("/production", &[ProductionView]),
    ("/production/manage", &[ProductionManage]),
    ("/quality", &[QualityView]),
    ("/quality/inspect", &[QualityInspect, QualityApprove]),
    ("/analytics", &[AnalyticsView]),
    ("/reports", &[ReportsView, ReportsExport]),
    ("/company", &[CompanyView, CompanyManage]),
    ("/users", &[UserView, UserManage]),
    ("/settings", &[SettingsView, SettingsManage]),
];

static ROUTE_TABLE: OnceLock<HashMap<&'static str, &'static [Permission]>> = OnceLock::new();

fn route_table() -> &'static HashMap<&'static str, &'static [Permission]> {
    ROUTE_TABLE.get_or_init(|| ROUTE_PERMISSIONS.iter().copied().collect())
}

/// Result of looking up a route in the guard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No entry (or an empty entry); anyone may open the route.
    Public,
    /// Holding any one of these permissions opens the route.
    Requires(&'static [Permission]),
}

impl RouteAccess {
    pub fn is_public(self) -> bool {
        matches!(self, RouteAccess::Public)
    }
}

/// Look up the permissions that gate `route`.
pub fn route_guard(route: &str) -> RouteAccess {
    let key = normalize(route);
    match route_table().get(key) {
        Some(required) if !required.is_empty() => RouteAccess::Requires(required),
        _ => RouteAccess::Public,
    }
}

/// Every guarded route with its required permissions, in declaration order.
pub fn guarded_routes() -> &'static [(&'static str, &'static [Permission])] {
    ROUTE_PERMISSIONS
}

fn normalize(route: &str) -> &str {
    if route.len() > 1 {
        route.strip_suffix('/').unwrap_or(route)
    } else {
        route
    }
}
