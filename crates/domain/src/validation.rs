// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::job_status::JobStatus;
use crate::types::UserRole;

/// Validates the fields every new job must carry.
///
/// The title is checked before the company so that a request missing both
/// reports the title first.
///
/// # Errors
///
/// Returns an error if:
/// - The title is missing or blank
/// - The company id is missing
pub fn validate_new_job_fields(
    title: Option<&str>,
    company_id: Option<i64>,
) -> Result<(), DomainError> {
    if title.is_none_or(|t| t.trim().is_empty()) {
        return Err(DomainError::MissingTitle);
    }
    if company_id.is_none() {
        return Err(DomainError::MissingCompanyId);
    }
    Ok(())
}

/// Validates the status a new job starts in.
///
/// # Errors
///
/// Returns an error unless the status is `draft` or `active`.
pub fn validate_initial_status(status: JobStatus) -> Result<(), DomainError> {
    if status.is_valid_initial() {
        Ok(())
    } else {
        Err(DomainError::InvalidInitialStatus(status.as_str().to_string()))
    }
}

/// Validates a complete salary range.
///
/// # Errors
///
/// Returns an error if either bound is negative, or if both are present and
/// the minimum exceeds the maximum.
pub fn validate_salary_range(min: Option<i64>, max: Option<i64>) -> Result<(), DomainError> {
    if let Some(value) = min.filter(|v| *v < 0) {
        return Err(DomainError::NegativeSalary {
            field: "salary_min",
            value,
        });
    }
    if let Some(value) = max.filter(|v| *v < 0) {
        return Err(DomainError::NegativeSalary {
            field: "salary_max",
            value,
        });
    }
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(DomainError::SalaryRangeInverted { min, max }),
        _ => Ok(()),
    }
}

/// Validates a partial salary update against the stored salary range.
///
/// Three cases are checked:
/// - both bounds supplied: compared with each other
/// - only the minimum supplied: compared with the stored maximum
/// - only the maximum supplied: compared with the stored minimum
///
/// # Errors
///
/// Returns `DomainError::SalaryRangeInverted` if the effective minimum
/// exceeds the effective maximum, or `DomainError::NegativeSalary` for a
/// negative supplied bound.
pub fn validate_salary_update(
    update_min: Option<i64>,
    update_max: Option<i64>,
    existing_min: Option<i64>,
    existing_max: Option<i64>,
) -> Result<(), DomainError> {
    match (update_min, update_max) {
        (None, None) => Ok(()),
        (Some(_), Some(_)) => validate_salary_range(update_min, update_max),
        (Some(_), None) => validate_salary_range(update_min, existing_max),
        (None, Some(_)) => validate_salary_range(existing_min, update_max),
    }
}

/// Validates a fee percentage.
///
/// # Errors
///
/// Returns an error if the value is not a finite number in `[0, 100]`.
pub fn validate_fee_percentage(field: &'static str, value: Option<f64>) -> Result<(), DomainError> {
    match value {
        Some(v) if !v.is_finite() || !(0.0..=100.0).contains(&v) => {
            Err(DomainError::InvalidFeePercentage { field })
        }
        _ => Ok(()),
    }
}

/// Validates a requested status change for an existing job.
///
/// Requesting the status the job already has is accepted without
/// consulting the transition table.
///
/// # Errors
///
/// Returns an error if:
/// - The transition is not in the transition table
/// - A hiring manager attempts to close the job
pub fn validate_status_change(
    current: JobStatus,
    requested: JobStatus,
    role: Option<UserRole>,
) -> Result<(), DomainError> {
    if current == requested {
        return Ok(());
    }

    current.validate_transition(requested)?;

    if requested == JobStatus::Closed && role == Some(UserRole::HiringManager) {
        return Err(DomainError::HiringManagerCannotClose);
    }

    Ok(())
}
