// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// The `Display` output of each variant is the exact message surfaced to
/// API clients, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A job was submitted without a title.
    MissingTitle,
    /// A job was submitted without a company.
    MissingCompanyId,
    /// A status string is not one of the known job statuses.
    InvalidStatus(String),
    /// The requested status change is not in the transition table.
    InvalidStatusTransition {
        /// The stored status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// New jobs may only start as draft or active.
    InvalidInitialStatus(String),
    /// Hiring managers may never close a job.
    HiringManagerCannotClose,
    /// The effective minimum salary exceeds the effective maximum.
    SalaryRangeInverted {
        /// Effective minimum salary.
        min: i64,
        /// Effective maximum salary.
        max: i64,
    },
    /// A salary bound is negative.
    NegativeSalary {
        /// The offending field.
        field: &'static str,
        /// The offending value.
        value: i64,
    },
    /// A fee percentage lies outside `[0, 100]`.
    InvalidFeePercentage {
        /// The offending field.
        field: &'static str,
    },
    /// An employment type string is not recognised.
    InvalidEmploymentType(String),
    /// A role string is not recognised.
    InvalidUserRole(String),
    /// A requirement type string is not recognised.
    InvalidRequirementType(String),
    /// A pre-screen question type string is not recognised.
    InvalidQuestionType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Job title is required"),
            Self::MissingCompanyId => write!(f, "Company ID is required"),
            Self::InvalidStatus(status) => write!(f, "Invalid job status: {status}"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Invalid status transition: {from} -> {to}")
            }
            Self::InvalidInitialStatus(status) => {
                write!(
                    f,
                    "Invalid initial status: {status}. New jobs must be draft or active"
                )
            }
            Self::HiringManagerCannotClose => write!(f, "Hiring managers cannot close jobs"),
            Self::SalaryRangeInverted { .. } => {
                write!(f, "salary_min cannot exceed salary_max")
            }
            Self::NegativeSalary { field, value } => {
                write!(f, "{field} cannot be negative (got {value})")
            }
            Self::InvalidFeePercentage { field } => {
                write!(f, "{field} must be between 0 and 100")
            }
            Self::InvalidEmploymentType(value) => {
                write!(f, "Invalid employment type: {value}")
            }
            Self::InvalidUserRole(value) => write!(f, "Invalid user role: {value}"),
            Self::InvalidRequirementType(value) => {
                write!(f, "Invalid requirement type: {value}")
            }
            Self::InvalidQuestionType(value) => write!(f, "Invalid question type: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
