// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_seeded_persistence;
use splits_core::{AccessContext, AccessResolver, AccessScope};
use splits_domain::UserRole;

#[test]
fn test_unknown_caller_resolves_to_empty_context() {
    let mut persistence = create_seeded_persistence();
    let context = persistence.resolve_access_context("user_ghost").unwrap();

    assert_eq!(context, AccessContext::unknown(String::from("user_ghost")));
    assert_eq!(AccessScope::resolve(Some(&context)), AccessScope::NoRole);
}

#[test]
fn test_platform_admin_flag() {
    let mut persistence = create_seeded_persistence();
    let context = persistence.resolve_access_context("user_admin").unwrap();

    assert!(context.is_platform_admin);
    assert_eq!(context.identity_user_id, Some(1));
}

#[test]
fn test_company_member_roles_and_organizations() {
    let mut persistence = create_seeded_persistence();
    let context = persistence.resolve_access_context("user_acme_hm").unwrap();

    assert_eq!(context.organization_ids, vec![1]);
    assert_eq!(context.roles, vec![UserRole::HiringManager]);
    assert!(!context.is_platform_admin);
}

#[test]
fn test_active_recruiter_gets_recruiter_id() {
    let mut persistence = create_seeded_persistence();
    let context = persistence.resolve_access_context("user_recruiter").unwrap();

    assert_eq!(context.recruiter_id, Some(1));
    assert!(context.has_role(UserRole::Recruiter));
}

#[test]
fn test_inactive_recruiter_has_no_recruiter_access() {
    let mut persistence = create_seeded_persistence();
    let context = persistence
        .resolve_access_context("user_inactive_recruiter")
        .unwrap();

    assert_eq!(context.recruiter_id, None);
    assert_eq!(AccessScope::resolve(Some(&context)), AccessScope::NoRole);
}

#[test]
fn test_candidate_is_resolved() {
    let mut persistence = create_seeded_persistence();
    let context = persistence.resolve_access_context("user_candidate").unwrap();

    assert_eq!(context.candidate_id, Some(1));
    assert_eq!(
        AccessScope::resolve(Some(&context)),
        AccessScope::Candidate { candidate_id: 1 }
    );
}

#[test]
fn test_reference_existence_checks() {
    let mut persistence = create_seeded_persistence();

    assert!(persistence.identity_user_exists(3).unwrap());
    assert!(!persistence.identity_user_exists(9999).unwrap());
    assert!(persistence.recruiter_exists(2).unwrap());
    assert!(!persistence.recruiter_exists(9999).unwrap());
}
