// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingTitle;
    assert_eq!(format!("{err}"), "Job title is required");

    let err: DomainError = DomainError::MissingCompanyId;
    assert_eq!(format!("{err}"), "Company ID is required");

    let err: DomainError = DomainError::InvalidStatusTransition {
        from: String::from("closed"),
        to: String::from("paused"),
    };
    assert_eq!(format!("{err}"), "Invalid status transition: closed -> paused");

    let err: DomainError = DomainError::SalaryRangeInverted {
        min: 120_000,
        max: 90_000,
    };
    assert_eq!(format!("{err}"), "salary_min cannot exceed salary_max");

    let err: DomainError = DomainError::HiringManagerCannotClose;
    assert_eq!(format!("{err}"), "Hiring managers cannot close jobs");

    let err: DomainError = DomainError::InvalidFeePercentage {
        field: "fee_percentage",
    };
    assert_eq!(format!("{err}"), "fee_percentage must be between 0 and 100");

    let err: DomainError = DomainError::InvalidEmploymentType(String::from("gig"));
    assert_eq!(format!("{err}"), "Invalid employment type: gig");
}
