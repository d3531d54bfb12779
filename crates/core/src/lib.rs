// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod access;
mod error;
mod filters;
mod planner;

#[cfg(test)]
mod tests;

pub use access::{AccessContext, AccessResolver, AccessScope};
pub use error::CoreError;
pub use filters::{
    DEFAULT_LIMIT, DEFAULT_PAGE, JobListFilters, JobOwnerFilter, MAX_LIMIT, NormalizedFilters,
    SortField, SortOrder,
};
pub use planner::{
    CompanyRef, JobQuery, JobQueryPlan, ManagementGrant, RECRUITER_ACTIVE_STAGES, ScopeLookups,
    authorize_job_management, plan_job_query,
};
