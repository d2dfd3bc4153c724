use crate::errors::ParseError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    CompanyOwner,
    CompanyEmployee,
    IndividualCustomer,
    /// Legacy alias kept for accounts created before company onboarding.
    Manufacturer,
    /// Legacy alias kept for accounts created before company onboarding.
    Customer,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::Admin,
        Role::CompanyOwner,
        Role::CompanyEmployee,
        Role::IndividualCustomer,
        Role::Manufacturer,
        Role::Customer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::CompanyOwner => "COMPANY_OWNER",
            Role::CompanyEmployee => "COMPANY_EMPLOYEE",
            Role::IndividualCustomer => "INDIVIDUAL_CUSTOMER",
            Role::Manufacturer => "MANUFACTURER",
            Role::Customer => "CUSTOMER",
        }
    }

    pub fn is_legacy(self) -> bool {
        matches!(self, Role::Manufacturer | Role::Customer)
    }

    /// Roles whose permission check bypasses every table lookup.
    pub fn has_full_access(self) -> bool {
        matches!(self, Role::Admin | Role::CompanyOwner)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Role::Admin),
            "COMPANY_OWNER" => Ok(Role::CompanyOwner),
            "COMPANY_EMPLOYEE" => Ok(Role::CompanyEmployee),
            "INDIVIDUAL_CUSTOMER" => Ok(Role::IndividualCustomer),
            "MANUFACTURER" => Ok(Role::Manufacturer),
            "CUSTOMER" => Ok(Role::Customer),
            _ => Err(ParseError::UnknownRole(value.to_string())),
        }
    }
}

/// Sub-classification of [`Role::CompanyEmployee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    Purchasing,
    Production,
    Quality,
    Design,
    Sales,
    Management,
}

impl Department {
    pub const ALL: &'static [Department] = &[
        Department::Purchasing,
        Department::Production,
        Department::Quality,
        Department::Design,
        Department::Sales,
        Department::Management,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Purchasing => "PURCHASING",
            Department::Production => "PRODUCTION",
            Department::Quality => "QUALITY",
            Department::Design => "DESIGN",
            Department::Sales => "SALES",
            Department::Management => "MANAGEMENT",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Department {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PURCHASING" => Ok(Department::Purchasing),
            "PRODUCTION" => Ok(Department::Production),
            "QUALITY" => Ok(Department::Quality),
            "DESIGN" => Ok(Department::Design),
            "SALES" => Ok(Department::Sales),
            "MANAGEMENT" => Ok(Department::Management),
            _ => Err(ParseError::UnknownDepartment(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_string_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(role.as_str()).ok(), Some(*role));
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn department_string_roundtrip() {
        for department in Department::ALL {
            assert_eq!(
                Department::from_str(department.as_str()).ok(),
                Some(*department)
            );
        }
    }

    #[test]
    fn unknown_strings_are_rejected() {
        assert!(Role::from_str("admin").is_err());
        assert!(Department::from_str("HR").is_err());
    }

    #[test]
    fn legacy_and_full_access_flags() {
        assert!(Role::Manufacturer.is_legacy());
        assert!(Role::Customer.is_legacy());
        assert!(!Role::IndividualCustomer.is_legacy());
        assert!(Role::Admin.has_full_access());
        assert!(Role::CompanyOwner.has_full_access());
        assert!(!Role::CompanyEmployee.has_full_access());
    }

    #[test]
    fn serde_matches_wire_strings() {
        let json = serde_json::to_string(&Role::CompanyEmployee).expect("serialize");
        assert_eq!(json, "\"COMPANY_EMPLOYEE\"");
        let dept: Department = serde_json::from_str("\"QUALITY\"").expect("deserialize");
        assert_eq!(dept, Department::Quality);
    }
}
