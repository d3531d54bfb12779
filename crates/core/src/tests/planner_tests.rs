// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_lookups, normalized};
use crate::{
    AccessScope, CoreError, JobListFilters, JobQuery, JobQueryPlan, SortField, SortOrder,
    plan_job_query,
};
use splits_domain::JobStatus;

fn expect_query(plan: JobQueryPlan) -> JobQuery {
    match plan {
        JobQueryPlan::Query(query) => query,
        JobQueryPlan::Empty => panic!("expected a query, got an empty plan"),
    }
}

fn company_scope(organization_ids: Vec<i64>) -> AccessScope {
    AccessScope::CompanyUser {
        identity_user_id: Some(7),
        organization_ids,
    }
}

#[test]
fn test_anonymous_is_pinned_to_active() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters::default());

    let query = expect_query(plan_job_query(&AccessScope::Anonymous, &filters, &mut lookups).unwrap());

    assert_eq!(query.status, Some(JobStatus::Active));
    assert_eq!(query.company_ids, None);
    assert_eq!(lookups.calls, 0);
}

#[test]
fn test_status_filter_cannot_widen_active_restriction() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters {
        status: Some(String::from("draft")),
        ..JobListFilters::default()
    });

    let plan = plan_job_query(
        &AccessScope::Candidate { candidate_id: 3 },
        &filters,
        &mut lookups,
    )
    .unwrap();

    assert_eq!(plan, JobQueryPlan::Empty);
}

#[test]
fn test_admin_keeps_every_filter() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters {
        status: Some(String::from("draft")),
        company_id: Some(20),
        location: Some(String::from("Berlin")),
        sort_by: Some(String::from("title")),
        sort_order: Some(String::from("asc")),
        ..JobListFilters::default()
    });

    let query =
        expect_query(plan_job_query(&AccessScope::PlatformAdmin, &filters, &mut lookups).unwrap());

    assert_eq!(query.status, Some(JobStatus::Draft));
    assert_eq!(query.company_id, Some(20));
    assert_eq!(query.location.as_deref(), Some("Berlin"));
    assert_eq!(query.sort_by, SortField::Title);
    assert_eq!(query.sort_order, SortOrder::Asc);
}

#[test]
fn test_search_overrides_sort_and_location() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters {
        search: Some(String::from("platform engineer")),
        location: Some(String::from("Berlin")),
        sort_by: Some(String::from("title")),
        sort_order: Some(String::from("asc")),
        ..JobListFilters::default()
    });

    let query =
        expect_query(plan_job_query(&AccessScope::PlatformAdmin, &filters, &mut lookups).unwrap());

    assert_eq!(query.search_terms, vec!["platform", "engineer"]);
    assert_eq!(query.location, None);
    assert_eq!(query.sort_by, SortField::CreatedAt);
    assert_eq!(query.sort_order, SortOrder::Desc);
}

#[test]
fn test_no_role_sees_nothing() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters::default());

    let plan = plan_job_query(&AccessScope::NoRole, &filters, &mut lookups).unwrap();

    assert_eq!(plan, JobQueryPlan::Empty);
    assert_eq!(lookups.calls, 0);
}

#[test]
fn test_recruiter_without_owner_filter_sees_all_active() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters::default());

    let query = expect_query(
        plan_job_query(
            &AccessScope::Recruiter { recruiter_id: 4 },
            &filters,
            &mut lookups,
        )
        .unwrap(),
    );

    assert_eq!(query.status, Some(JobStatus::Active));
    assert_eq!(query.job_ids, None);
    assert_eq!(lookups.calls, 0);
}

#[test]
fn test_recruiter_assigned_unions_all_sources() {
    let mut lookups = create_test_lookups();
    lookups.applications = vec![
        (4, 100, String::from("interview")),
        (4, 101, String::from("rejected")),
        (4, 102, String::from("screen")),
        (5, 103, String::from("offer")),
    ];
    lookups.placements = vec![(4, 104), (4, 100)];
    lookups.owned_jobs.insert(4, vec![105]);
    let filters = normalized(&JobListFilters {
        job_owner_filter: Some(String::from("assigned")),
        ..JobListFilters::default()
    });

    let query = expect_query(
        plan_job_query(
            &AccessScope::Recruiter { recruiter_id: 4 },
            &filters,
            &mut lookups,
        )
        .unwrap(),
    );

    assert_eq!(query.job_ids, Some(vec![100, 102, 104, 105]));
    assert_eq!(query.status, Some(JobStatus::Active));
}

#[test]
fn test_recruiter_assigned_with_no_jobs_short_circuits() {
    let mut lookups = create_test_lookups();
    lookups.applications = vec![(4, 101, String::from("hired"))];
    let filters = normalized(&JobListFilters {
        job_owner_filter: Some(String::from("assigned")),
        ..JobListFilters::default()
    });

    let plan = plan_job_query(
        &AccessScope::Recruiter { recruiter_id: 4 },
        &filters,
        &mut lookups,
    )
    .unwrap();

    assert_eq!(plan, JobQueryPlan::Empty);
    assert_eq!(lookups.calls, 3);
}

#[test]
fn test_company_user_is_restricted_to_organization_companies() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters {
        status: Some(String::from("draft")),
        company_id: Some(20),
        ..JobListFilters::default()
    });

    let query =
        expect_query(plan_job_query(&company_scope(vec![1]), &filters, &mut lookups).unwrap());

    // The company filter narrows further; it never escapes the organization.
    assert_eq!(query.company_ids, Some(vec![10, 11]));
    assert_eq!(query.company_id, Some(20));
    assert_eq!(query.status, Some(JobStatus::Draft));
}

#[test]
fn test_company_user_without_companies_sees_nothing() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters::default());

    let plan = plan_job_query(&company_scope(vec![99]), &filters, &mut lookups).unwrap();

    assert_eq!(plan, JobQueryPlan::Empty);
}

#[test]
fn test_company_user_assigned_filters_by_owner() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters {
        job_owner_filter: Some(String::from("assigned")),
        ..JobListFilters::default()
    });

    let query =
        expect_query(plan_job_query(&company_scope(vec![2]), &filters, &mut lookups).unwrap());

    assert_eq!(query.job_owner_id, Some(7));
    assert_eq!(query.company_ids, Some(vec![20]));
}

#[test]
fn test_lookup_failures_propagate() {
    let mut lookups = create_test_lookups();
    lookups.fail = true;
    let filters = normalized(&JobListFilters::default());

    let result = plan_job_query(&company_scope(vec![1]), &filters, &mut lookups);

    assert_eq!(
        result,
        Err(CoreError::LookupFailed(String::from("database is locked")))
    );
    assert_eq!(lookups.calls, 1);
}

#[test]
fn test_pagination_is_carried_into_query() {
    let mut lookups = create_test_lookups();
    let filters = normalized(&JobListFilters {
        page: Some(2),
        limit: Some(5),
        ..JobListFilters::default()
    });

    let query =
        expect_query(plan_job_query(&AccessScope::PlatformAdmin, &filters, &mut lookups).unwrap());

    assert_eq!(query.limit, 5);
    assert_eq!(query.offset, 5);
}
