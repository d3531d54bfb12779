// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use splits_core::AccessContext;
use splits_persistence::{DEMO_SEED_JSON, Persistence, SeedData};

use crate::{CreateJobRequest, ListJobsRequest, ListJobsResponse, list_jobs, require_caller};

pub fn create_seeded_persistence() -> Persistence {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let seed = SeedData::from_json(DEMO_SEED_JSON).unwrap();
    persistence.load_seed(&seed).unwrap();
    persistence
}

/// Resolves one of the demo identities (e.g. `user_admin`).
pub fn caller(persistence: &mut Persistence, clerk_user_id: &str) -> AccessContext {
    require_caller(persistence, Some(clerk_user_id)).unwrap()
}

pub fn create_valid_request(company_id: i64) -> CreateJobRequest {
    CreateJobRequest {
        title: Some(String::from("Staff Backend Engineer")),
        company_id: Some(company_id),
        salary_min: Some(100_000),
        salary_max: Some(140_000),
        employment_type: Some(String::from("full_time")),
        location: Some(String::from("Lisbon")),
        ..CreateJobRequest::default()
    }
}

pub fn listed_ids(
    persistence: &mut Persistence,
    clerk_user_id: Option<&str>,
    request: ListJobsRequest,
) -> Vec<i64> {
    list_as(persistence, clerk_user_id, request)
        .data
        .into_iter()
        .map(|j| j.job.id)
        .collect()
}

pub fn list_as(
    persistence: &mut Persistence,
    clerk_user_id: Option<&str>,
    request: ListJobsRequest,
) -> ListJobsResponse {
    let context = clerk_user_id.map(|id| caller(persistence, id));
    list_jobs(persistence, context.as_ref(), request).unwrap()
}
