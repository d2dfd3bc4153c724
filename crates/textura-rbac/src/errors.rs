use thiserror::Error;

/// Which rule produced an authorization denial.
///
/// Callers should treat every reason as "forbidden"; the tag exists for
/// diagnostics and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    NoPrincipal,
    PermissionMissing,
    NoneOfRequired,
    NotAllRequired,
    NotOwner,
    DifferentCompany,
}

impl DenialReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenialReason::NoPrincipal => "no_principal",
            DenialReason::PermissionMissing => "permission_missing",
            DenialReason::NoneOfRequired => "none_of_required",
            DenialReason::NotAllRequired => "not_all_required",
            DenialReason::NotOwner => "not_owner",
            DenialReason::DifferentCompany => "different_company",
        }
    }
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single failure kind raised by the `require_*` guards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthorizationDenied {
    reason: DenialReason,
    message: String,
}

impl AuthorizationDenied {
    pub fn new(reason: DenialReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    pub fn reason(&self) -> DenialReason {
        self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Transport-neutral classification; always `forbidden`.
    pub fn code(&self) -> &'static str {
        "forbidden"
    }
}

pub type AuthzResult<T> = Result<T, AuthorizationDenied>;

/// Failure to parse an identifier received from outside the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown permission: {0}")]
    UnknownPermission(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown department: {0}")]
    UnknownDepartment(String),
}
