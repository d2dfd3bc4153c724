//! Permission catalog.
//!
//! # Purpose
//! Defines the closed set of permission identifiers granted across the
//! platform, together with their display labels.
//!
//! # How it fits
//! Grant tables, route guards, and the evaluator all refer to permissions by
//! enum variant, never by string, so a typo cannot create a permission that
//! nothing else knows about.
//!
//! # Key invariants
//! - Identifiers follow the `domain:action` pattern.
//! - [`Permission::ALL`] is produced by the same macro expansion as the enum
//!   itself and therefore always lists every variant exactly once.
//! - Every permission has exactly one label.
//!
//! # Examples
//! ```rust
//! use textura_rbac::{Permission, PermissionDomain};
//!
//! let perm: Permission = "order:approve".parse().unwrap();
//! assert_eq!(perm, Permission::OrderApprove);
//! assert_eq!(perm.domain(), PermissionDomain::Order);
//! assert_eq!(perm.label(), "Approve orders");
//! ```
//!
//! # Common pitfalls
//! - Adding a permission only extends the full-access grants automatically;
//!   department and role subsets must be reviewed by hand.
use crate::errors::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Top-level namespace of a permission identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionDomain {
    Sample,
    Order,
    Production,
    Quality,
    Collection,
    Company,
    User,
    Analytics,
    Reports,
    Settings,
}

impl PermissionDomain {
    pub const ALL: &'static [PermissionDomain] = &[
        PermissionDomain::Sample,
        PermissionDomain::Order,
        PermissionDomain::Production,
        PermissionDomain::Quality,
        PermissionDomain::Collection,
        PermissionDomain::Company,
        PermissionDomain::User,
        PermissionDomain::Analytics,
        PermissionDomain::Reports,
        PermissionDomain::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionDomain::Sample => "sample",
            PermissionDomain::Order => "order",
            PermissionDomain::Production => "production",
            PermissionDomain::Quality => "quality",
            PermissionDomain::Collection => "collection",
            PermissionDomain::Company => "company",
            PermissionDomain::User => "user",
            PermissionDomain::Analytics => "analytics",
            PermissionDomain::Reports => "reports",
            PermissionDomain::Settings => "settings",
        }
    }

    /// Catalog entries that belong to this domain, in catalog order.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::ALL
            .iter()
            .copied()
            .filter(move |permission| permission.domain() == self)
    }
}

impl std::fmt::Display for PermissionDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// One row per permission keeps the enum, the universe, the wire ids and the
// labels in lockstep.
macro_rules! permission_catalog {
    ($($variant:ident => $domain:ident, $id:literal, $label:literal;)+) => {
        /// Atomic capability identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Permission {
            $($variant,)+
        }

        impl Permission {
            /// The full permission universe.
            pub const ALL: &'static [Permission] = &[$(Permission::$variant,)+];

            /// Canonical `domain:action` identifier.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Permission::$variant => $id,)+
                }
            }

            /// Human-readable label shown in dashboards.
            pub fn label(self) -> &'static str {
                match self {
                    $(Permission::$variant => $label,)+
                }
            }

            pub fn domain(self) -> PermissionDomain {
                match self {
                    $(Permission::$variant => PermissionDomain::$domain,)+
                }
            }
        }

        impl std::str::FromStr for Permission {
            type Err = ParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($id => Ok(Permission::$variant),)+
                    _ => Err(ParseError::UnknownPermission(value.to_string())),
                }
            }
        }
    };
}

permission_catalog! {
    SampleView => Sample, "sample:view", "View samples";
    SampleCreate => Sample, "sample:create", "Request samples";
    SampleUpdate => Sample, "sample:update", "Update samples";
    SampleDelete => Sample, "sample:delete", "Delete samples";
    SampleApprove => Sample, "sample:approve", "Approve samples";

    OrderView => Order, "order:view", "View orders";
    OrderCreate => Order, "order:create", "Place orders";
    OrderUpdate => Order, "order:update", "Update orders";
    OrderDelete => Order, "order:delete", "Cancel and delete orders";
    OrderApprove => Order, "order:approve", "Approve orders";

    ProductionView => Production, "production:view", "View production tracking";
    ProductionManage => Production, "production:manage", "Plan and manage production";
    ProductionUpdate => Production, "production:update", "Update production stages";

    QualityView => Quality, "quality:view", "View quality reports";
    QualityInspect => Quality, "quality:inspect", "Record quality inspections";
    QualityApprove => Quality, "quality:approve", "Approve quality checks";

    CollectionView => Collection, "collection:view", "View collections";
    CollectionCreate => Collection, "collection:create", "Create collections";
    CollectionUpdate => Collection, "collection:update", "Edit collections";
    CollectionDelete => Collection, "collection:delete", "Delete collections";

    CompanyView => Company, "company:view", "View company profile";
    CompanyManage => Company, "company:manage", "Manage company profile";

    UserView => User, "user:view", "View team members";
    UserManage => User, "user:manage", "Manage team members";
    UserInvite => User, "user:invite", "Invite team members";

    AnalyticsView => Analytics, "analytics:view", "View analytics";

    ReportsView => Reports, "reports:view", "View reports";
    ReportsExport => Reports, "reports:export", "Export reports";

    SettingsView => Settings, "settings:view", "View settings";
    SettingsManage => Settings, "settings:manage", "Manage settings";
}

impl Permission {
    /// The `action` half of the identifier.
    pub fn action(self) -> &'static str {
        match self.as_str().split_once(':') {
            Some((_, action)) => action,
            None => self.as_str(),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Every defined permission.
pub fn all_permissions() -> &'static [Permission] {
    Permission::ALL
}

/// Display label for a permission.
pub fn label_of(permission: Permission) -> &'static str {
    permission.label()
}
