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

mod error;
mod job_status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use job_status::JobStatus;
pub use types::{
    EmploymentType, Job, JobRequirement, PreScreenQuestion, QuestionType, RequirementType,
    UserRole,
};
pub use validation::{
    validate_fee_percentage, validate_initial_status, validate_new_job_fields,
    validate_salary_range, validate_salary_update, validate_status_change,
};
