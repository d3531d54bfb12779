// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, JobStatus, UserRole, validate_fee_percentage, validate_initial_status,
    validate_new_job_fields, validate_salary_range, validate_salary_update,
    validate_status_change,
};

#[test]
fn test_new_job_requires_title() {
    assert_eq!(
        validate_new_job_fields(None, Some(1)),
        Err(DomainError::MissingTitle)
    );
    assert_eq!(
        validate_new_job_fields(Some("   "), Some(1)),
        Err(DomainError::MissingTitle)
    );
}

#[test]
fn test_new_job_requires_company() {
    assert_eq!(
        validate_new_job_fields(Some("Engineer"), None),
        Err(DomainError::MissingCompanyId)
    );
}

#[test]
fn test_missing_title_reported_before_missing_company() {
    assert_eq!(
        validate_new_job_fields(None, None),
        Err(DomainError::MissingTitle)
    );
}

#[test]
fn test_new_job_with_title_and_company() {
    assert!(validate_new_job_fields(Some("Engineer"), Some(1)).is_ok());
}

#[test]
fn test_initial_status() {
    assert!(validate_initial_status(JobStatus::Draft).is_ok());
    assert!(validate_initial_status(JobStatus::Active).is_ok());
    assert_eq!(
        validate_initial_status(JobStatus::Filled),
        Err(DomainError::InvalidInitialStatus(String::from("filled")))
    );
}

#[test]
fn test_salary_range() {
    assert!(validate_salary_range(None, None).is_ok());
    assert!(validate_salary_range(Some(100), None).is_ok());
    assert!(validate_salary_range(Some(100), Some(100)).is_ok());
    assert_eq!(
        validate_salary_range(Some(200), Some(100)),
        Err(DomainError::SalaryRangeInverted { min: 200, max: 100 })
    );
    assert_eq!(
        validate_salary_range(Some(-1), None),
        Err(DomainError::NegativeSalary {
            field: "salary_min",
            value: -1
        })
    );
}

#[test]
fn test_salary_update_both_supplied() {
    // Stored values are ignored when both bounds are supplied.
    assert!(validate_salary_update(Some(10), Some(20), Some(500), Some(1)).is_ok());
    assert!(validate_salary_update(Some(30), Some(20), None, None).is_err());
}

#[test]
fn test_salary_update_only_min_supplied() {
    assert!(validate_salary_update(Some(90), None, Some(10), Some(100)).is_ok());
    assert_eq!(
        validate_salary_update(Some(110), None, Some(10), Some(100)),
        Err(DomainError::SalaryRangeInverted { min: 110, max: 100 })
    );
    assert!(validate_salary_update(Some(110), None, Some(10), None).is_ok());
}

#[test]
fn test_salary_update_only_max_supplied() {
    assert!(validate_salary_update(None, Some(100), Some(50), Some(60)).is_ok());
    assert_eq!(
        validate_salary_update(None, Some(40), Some(50), Some(60)),
        Err(DomainError::SalaryRangeInverted { min: 50, max: 40 })
    );
}

#[test]
fn test_salary_update_without_salary_fields() {
    // A stored inverted range is not re-checked by unrelated updates.
    assert!(validate_salary_update(None, None, Some(500), Some(1)).is_ok());
}

#[test]
fn test_fee_percentage() {
    assert!(validate_fee_percentage("fee_percentage", None).is_ok());
    assert!(validate_fee_percentage("fee_percentage", Some(0.0)).is_ok());
    assert!(validate_fee_percentage("fee_percentage", Some(100.0)).is_ok());
    assert!(validate_fee_percentage("fee_percentage", Some(100.5)).is_err());
    assert!(validate_fee_percentage("splits_fee_percentage", Some(-0.1)).is_err());
    assert!(validate_fee_percentage("splits_fee_percentage", Some(f64::NAN)).is_err());
}

#[test]
fn test_status_change_same_status_is_accepted() {
    for status in JobStatus::ALL {
        assert!(validate_status_change(status, status, None).is_ok());
    }
}

#[test]
fn test_status_change_follows_transition_table() {
    assert!(validate_status_change(JobStatus::Draft, JobStatus::Active, None).is_ok());
    assert_eq!(
        validate_status_change(JobStatus::Draft, JobStatus::Filled, None),
        Err(DomainError::InvalidStatusTransition {
            from: String::from("draft"),
            to: String::from("filled"),
        })
    );
}

#[test]
fn test_hiring_manager_cannot_close() {
    for from in [JobStatus::Draft, JobStatus::Active, JobStatus::Paused, JobStatus::Filled] {
        assert_eq!(
            validate_status_change(from, JobStatus::Closed, Some(UserRole::HiringManager)),
            Err(DomainError::HiringManagerCannotClose)
        );
    }
}

#[test]
fn test_other_roles_may_close() {
    assert!(
        validate_status_change(
            JobStatus::Active,
            JobStatus::Closed,
            Some(UserRole::CompanyAdmin)
        )
        .is_ok()
    );
    assert!(validate_status_change(JobStatus::Active, JobStatus::Closed, None).is_ok());
}

#[test]
fn test_hiring_manager_may_make_other_transitions() {
    assert!(
        validate_status_change(
            JobStatus::Active,
            JobStatus::Paused,
            Some(UserRole::HiringManager)
        )
        .is_ok()
    );
}
