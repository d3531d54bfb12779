// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod identity_tests;
mod initialization_tests;
mod job_tests;

use splits_core::{JobQuery, SortField, SortOrder};
use splits_events::Actor;

use crate::{DEMO_SEED_JSON, Persistence, SeedData};

pub fn create_seeded_persistence() -> Persistence {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let seed = SeedData::from_json(DEMO_SEED_JSON).unwrap();
    persistence.load_seed(&seed).unwrap();
    persistence
}

/// An unscoped query: every live job, newest first.
pub fn create_base_query() -> JobQuery {
    JobQuery {
        status: None,
        company_ids: None,
        job_ids: None,
        company_id: None,
        job_owner_id: None,
        location: None,
        employment_type: None,
        search_terms: Vec::new(),
        sort_by: SortField::CreatedAt,
        sort_order: SortOrder::Desc,
        limit: 25,
        offset: 0,
    }
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("user_admin"), String::from("platform_admin"))
}

pub fn job_ids(persistence: &mut Persistence, query: &JobQuery) -> Vec<i64> {
    persistence
        .list_jobs(query)
        .unwrap()
        .jobs
        .into_iter()
        .map(|j| j.id)
        .collect()
}
