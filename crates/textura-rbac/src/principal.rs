//! Principal model and construction from session claims.
//!
//! # Purpose
//! Describes the subject of an authorization decision. A principal is built
//! fresh for each request from claims that an external verifier has already
//! validated, and is dropped once the decision has been made.
//!
//! # Key invariants
//! - A department is only carried for [`Role::CompanyEmployee`].
//! - Unknown department strings resolve to no department, which grants
//!   nothing.
use crate::errors::ParseError;
use crate::role::{Department, Role};
use crate::types::{CompanyId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub role: Role,
    #[serde(default)]
    pub department: Option<Department>,
    pub user_id: UserId,
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    #[serde(default)]
    pub is_company_owner: bool,
}

impl Principal {
    pub fn new(role: Role, user_id: impl Into<UserId>) -> Self {
        Self {
            role,
            department: None,
            user_id: user_id.into(),
            company_id: None,
            is_company_owner: false,
        }
    }

    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    pub fn with_company(mut self, company_id: impl Into<CompanyId>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    pub fn company_owner(mut self) -> Self {
        self.is_company_owner = true;
        self
    }

    /// Build a principal from verified session claims.
    ///
    /// # Errors
    /// - [`ParseError::UnknownRole`] if the role string is not recognized.
    ///   Callers should treat this like an absent principal.
    pub fn from_claims(claims: SessionClaims) -> Result<Self, ParseError> {
        let role: Role = claims.role.parse()?;
        // Departments only qualify company employees.
        let department = match (role, claims.department.as_deref()) {
            (Role::CompanyEmployee, Some(raw)) => raw.parse().ok(),
            _ => None,
        };
        Ok(Self {
            role,
            department,
            user_id: claims.id,
            company_id: claims.company_id,
            is_company_owner: claims.is_company_owner,
        })
    }
}

/// Claims produced by the external token verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub id: UserId,
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    #[serde(default)]
    pub is_company_owner: bool,
}
