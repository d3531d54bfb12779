// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, Pagination, require_caller, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
use splits_core::CoreError;
use splits_domain::DomainError;
use splits_persistence::PersistenceError;

use super::helpers::create_seeded_persistence;

#[test]
fn test_missing_identity_requires_authentication() {
    let mut persistence = create_seeded_persistence();

    let result = require_caller(&mut persistence, None);

    assert_eq!(result, Err(ApiError::AuthenticationRequired));
}

#[test]
fn test_domain_errors_keep_their_message() {
    let err = translate_domain_error(DomainError::HiringManagerCannotClose);

    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
    assert_eq!(err.to_string(), "Hiring managers cannot close jobs");
}

#[test]
fn test_core_errors_translate_by_kind() {
    assert_eq!(
        translate_core_error(CoreError::Forbidden(String::from("nope"))).to_string(),
        "Forbidden: nope"
    );
    assert!(matches!(
        translate_core_error(CoreError::LookupFailed(String::from("database is locked"))),
        ApiError::Internal { .. }
    ));
    assert!(matches!(
        translate_core_error(CoreError::DomainViolation(DomainError::MissingTitle)),
        ApiError::InvalidInput { ref field, .. } if field == "title"
    ));
}

#[test]
fn test_persistence_not_found_keeps_message() {
    let not_found = translate_persistence_error(PersistenceError::NotFound(String::from(
        "Job not found or access denied",
    )));
    let internal =
        translate_persistence_error(PersistenceError::QueryFailed(String::from("disk I/O")));

    assert_eq!(not_found.to_string(), "Job not found or access denied");
    assert!(matches!(internal, ApiError::Internal { .. }));
}

#[test]
fn test_total_pages_rounds_up() {
    assert_eq!(Pagination::new(0, 1, 25).total_pages, 0);
    assert_eq!(Pagination::new(25, 1, 25).total_pages, 1);
    assert_eq!(Pagination::new(51, 3, 25).total_pages, 3);
}
