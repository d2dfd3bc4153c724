//! Role and department grant matrices.
//!
//! # Purpose
//! Static tables describing which permissions each role and each department
//! receives.
//!
//! # How it fits
//! The evaluator consults these tables and never hard-codes permissions of its
//! own. The tables are `'static` data, so any number of threads may read them
//! concurrently without synchronization.
//!
//! # Key invariants
//! - Administrator, company owner and the management department map to
//!   [`Permission::ALL`] rather than a hand-written copy of it.
//! - [`Role::CompanyEmployee`] has no role-level grants; employees are
//!   resolved through their department.
//! - An absent department yields the empty set.
use crate::permission::Permission;
use crate::role::{Department, Role};

use Permission::*;

const INDIVIDUAL_CUSTOMER: &[Permission] = &[
    CollectionView,
    SampleView,
    SampleCreate,
    OrderView,
    OrderCreate,
];

const MANUFACTURER: &[Permission] = &[
    CollectionView,
    CollectionCreate,
    CollectionUpdate,
    CollectionDelete,
    SampleView,
    SampleUpdate,
    SampleApprove,
    OrderView,
    OrderUpdate,
    OrderApprove,
    ProductionView,
    ProductionManage,
    ProductionUpdate,
    QualityView,
    QualityInspect,
    AnalyticsView,
];

const CUSTOMER: &[Permission] = &[
    CollectionView,
    SampleView,
    SampleCreate,
    OrderView,
    OrderCreate,
    ProductionView,
];

const PURCHASING: &[Permission] = &[
    OrderView,
    OrderCreate,
    OrderUpdate,
    OrderApprove,
    SampleView,
    SampleCreate,
    CollectionView,
    CompanyView,
    ReportsView,
];

const PRODUCTION: &[Permission] = &[
    ProductionView,
    ProductionManage,
    ProductionUpdate,
    OrderView,
    SampleView,
    SampleUpdate,
    CollectionView,
    QualityView,
];

const QUALITY: &[Permission] = &[
    QualityView,
    QualityInspect,
    QualityApprove,
    SampleView,
    SampleApprove,
    ProductionView,
    OrderView,
    CollectionView,
    ReportsView,
];

const DESIGN: &[Permission] = &[
    CollectionView,
    CollectionCreate,
    CollectionUpdate,
    CollectionDelete,
    SampleView,
    SampleCreate,
    SampleUpdate,
    OrderView,
];

const SALES: &[Permission] = &[
    OrderView,
    OrderCreate,
    OrderUpdate,
    SampleView,
    SampleCreate,
    CollectionView,
    CompanyView,
    AnalyticsView,
    ReportsView,
    ReportsExport,
];

/// Role-level grants.
pub fn role_grants(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin | Role::CompanyOwner => Permission::ALL,
        Role::CompanyEmployee => &[],
        Role::IndividualCustomer => INDIVIDUAL_CUSTOMER,
        Role::Manufacturer => MANUFACTURER,
        Role::Customer => CUSTOMER,
    }
}

/// Department-level grants; `None` grants nothing.
pub fn department_grants(department: Option<Department>) -> &'static [Permission] {
    let Some(department) = department else {
        return &[];
    };
    match department {
        Department::Management => Permission::ALL,
        Department::Purchasing => PURCHASING,
        Department::Production => PRODUCTION,
        Department::Quality => QUALITY,
        Department::Design => DESIGN,
        Department::Sales => SALES,
    }
}
