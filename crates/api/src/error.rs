// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use splits_core::CoreError;
use splits_domain::DomainError;
use splits_persistence::PersistenceError;
use tracing::error;

/// Message returned when a job is missing, deleted or invisible to the caller.
pub const JOB_NOT_FOUND: &str = "Job not found";

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// `Display` renders the message clients see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The route requires a caller identity and none was presented.
    AuthenticationRequired,
    /// The caller may not perform the action.
    Forbidden {
        /// The reason the action was refused.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The request was malformed or a field held an unknown value.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
    /// The requested resource does not exist or is not visible.
    ResourceNotFound {
        /// The type of resource (e.g., "job", "company").
        resource_type: String,
        /// A human-readable message.
        message: String,
    },
    /// Persistence or another collaborator failed.
    Internal {
        /// A description of the failure.
        message: String,
    },
}

impl ApiError {
    #[must_use]
    pub fn job_not_found() -> Self {
        Self::ResourceNotFound {
            resource_type: String::from("job"),
            message: String::from(JOB_NOT_FOUND),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationRequired => write!(f, "Authentication required"),
            Self::Forbidden { reason } => write!(f, "Forbidden: {reason}"),
            Self::DomainRuleViolation { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::ResourceNotFound { message, .. }
            | Self::Internal { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingTitle => ApiError::InvalidInput {
            field: String::from("title"),
            message,
        },
        DomainError::MissingCompanyId => ApiError::InvalidInput {
            field: String::from("company_id"),
            message,
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidEmploymentType(_) => ApiError::InvalidInput {
            field: String::from("employment_type"),
            message,
        },
        DomainError::InvalidUserRole(_) => ApiError::InvalidInput {
            field: String::from("x-user-role"),
            message,
        },
        DomainError::InvalidRequirementType(_) => ApiError::InvalidInput {
            field: String::from("requirements"),
            message,
        },
        DomainError::InvalidQuestionType(_) => ApiError::InvalidInput {
            field: String::from("pre_screen_questions"),
            message,
        },
        DomainError::NegativeSalary { field, .. } | DomainError::InvalidFeePercentage { field } => {
            ApiError::InvalidInput {
                field: field.to_string(),
                message,
            }
        }
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message,
        },
        DomainError::InvalidInitialStatus(_) => ApiError::DomainRuleViolation {
            rule: String::from("initial_status"),
            message,
        },
        DomainError::HiringManagerCannotClose => ApiError::DomainRuleViolation {
            rule: String::from("hiring_manager_close"),
            message,
        },
        DomainError::SalaryRangeInverted { .. } => ApiError::DomainRuleViolation {
            rule: String::from("salary_range"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Forbidden(reason) => ApiError::Forbidden { reason },
        CoreError::CompanyNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("company"),
            message: String::from("Company not found"),
        },
        CoreError::LookupFailed(message) => {
            error!(%message, "Access lookup failed");
            ApiError::Internal { message }
        }
    }
}

/// Translates a persistence error into an API error.
///
/// Guarded writes that matched no row become 404s carrying the repository's
/// message; everything else is an internal failure.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("job"),
            message,
        },
        other => {
            error!(error = %other, "Persistence failure");
            ApiError::Internal {
                message: other.to_string(),
            }
        }
    }
}
