// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Splits Network jobs service.
//!
//! Operations here are transport-agnostic: they take a `Persistence`, the
//! resolved caller and a request DTO, and return a response DTO or an
//! `ApiError`. The HTTP server wraps them in routes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod jobs;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, JOB_NOT_FOUND, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use jobs::{
    ApiResult, create_job, delete_job, get_job, list_job_events, list_jobs, require_caller,
    resolve_caller, update_job,
};
pub use request_response::{
    CreateJobRequest, DeleteJobResponse, GetJobRequest, JobIncludes, JobResponse,
    ListJobsRequest, ListJobsResponse, Pagination, PreScreenQuestionInput, RequirementInput,
    UpdateJobRequest, parse_employment_type, parse_pre_screen_questions, parse_requirements,
    parse_status,
};
