// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Enumerated fields arrive as strings and are parsed at the boundary so
//! that unknown values are reported with the offending field.

use serde::{Deserialize, Serialize};
use splits_core::JobListFilters;
use splits_domain::{
    DomainError, EmploymentType, Job, JobRequirement, JobStatus, PreScreenQuestion, QuestionType,
    RequirementType,
};
use splits_persistence::CompanyData;

/// Query parameters of `GET /api/v2/jobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListJobsRequest {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub company_id: Option<i64>,
    /// `all` (default) or `assigned`.
    pub job_owner_filter: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<ListJobsRequest> for JobListFilters {
    fn from(request: ListJobsRequest) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            search: request.search,
            status: request.status,
            location: request.location,
            employment_type: request.employment_type,
            company_id: request.company_id,
            job_owner_filter: request.job_owner_filter,
            sort_by: request.sort_by,
            sort_order: request.sort_order,
        }
    }
}

/// Query parameters of `GET /api/v2/jobs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetJobRequest {
    /// Comma-separated relations to embed.
    pub include: Option<String>,
}

/// Related records that may be embedded in a job response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobIncludes {
    pub company: bool,
    pub requirements: bool,
    pub pre_screen_questions: bool,
}

impl JobIncludes {
    /// Requirements and pre-screen questions; embedded in responses to writes.
    pub const DETAILS: Self = Self {
        company: false,
        requirements: true,
        pre_screen_questions: true,
    };

    /// Parses a comma-separated include list. Unknown names are ignored.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        let mut includes = Self::default();
        for name in value.unwrap_or_default().split(',').map(str::trim) {
            match name {
                "company" => includes.company = true,
                "requirements" => includes.requirements = true,
                "pre_screen_questions" => includes.pre_screen_questions = true,
                _ => {}
            }
        }
        includes
    }
}

/// A requirement as submitted by clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequirementInput {
    pub requirement_type: String,
    pub description: String,
    /// Defaults to the position in the submitted list.
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// A pre-screen question as submitted by clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreScreenQuestionInput {
    pub question: String,
    pub question_type: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    /// Defaults to the position in the submitted list.
    #[serde(default)]
    pub sort_order: Option<i32>,
}

fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// Parses submitted requirements, assigning list positions where no sort
/// order was given.
///
/// # Errors
///
/// Returns an error if a requirement type is unknown.
pub fn parse_requirements(
    inputs: &[RequirementInput],
) -> Result<Vec<JobRequirement>, DomainError> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            Ok(JobRequirement {
                requirement_type: input.requirement_type.parse::<RequirementType>()?,
                description: input.description.clone(),
                sort_order: input.sort_order.unwrap_or_else(|| position(index)),
            })
        })
        .collect()
}

/// Parses submitted pre-screen questions.
///
/// # Errors
///
/// Returns an error if a question type is unknown.
pub fn parse_pre_screen_questions(
    inputs: &[PreScreenQuestionInput],
) -> Result<Vec<PreScreenQuestion>, DomainError> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            Ok(PreScreenQuestion {
                question: input.question.clone(),
                question_type: input.question_type.parse::<QuestionType>()?,
                is_required: input.is_required,
                options: input.options.clone(),
                sort_order: input.sort_order.unwrap_or_else(|| position(index)),
            })
        })
        .collect()
}

/// Parses an optional status string.
///
/// # Errors
///
/// Returns an error if the status is unknown.
pub fn parse_status(value: Option<&str>) -> Result<Option<JobStatus>, DomainError> {
    value.map(str::parse::<JobStatus>).transpose()
}

/// Parses an optional employment type string.
///
/// # Errors
///
/// Returns an error if the employment type is unknown.
pub fn parse_employment_type(value: Option<&str>) -> Result<Option<EmploymentType>, DomainError> {
    value.map(str::parse::<EmploymentType>).transpose()
}

/// Body of `POST /api/v2/jobs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company_id: Option<i64>,
    /// `draft` (default) or `active`.
    pub status: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub fee_percentage: Option<f64>,
    pub splits_fee_percentage: Option<f64>,
    pub job_owner_id: Option<i64>,
    pub company_recruiter_id: Option<i64>,
    pub requirements: Vec<RequirementInput>,
    pub pre_screen_questions: Vec<PreScreenQuestionInput>,
}

/// Body of `PATCH /api/v2/jobs/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub fee_percentage: Option<f64>,
    pub splits_fee_percentage: Option<f64>,
    pub job_owner_id: Option<i64>,
    pub company_recruiter_id: Option<i64>,
    /// Replaces the stored requirements when present.
    pub requirements: Option<Vec<RequirementInput>>,
    /// Replaces the stored pre-screen questions when present.
    pub pre_screen_questions: Option<Vec<PreScreenQuestionInput>>,
}

/// A job with any requested relations embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResponse {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<JobRequirement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_screen_questions: Option<Vec<PreScreenQuestion>>,
}

impl JobResponse {
    #[must_use]
    pub const fn bare(job: Job) -> Self {
        Self {
            job,
            company: None,
            requirements: None,
            pre_screen_questions: None,
        }
    }
}

/// Pagination block of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

impl Pagination {
    #[must_use]
    pub fn new(total: i64, page: u32, limit: u32) -> Self {
        let per_page: i64 = i64::from(limit.max(1));
        Self {
            total,
            page,
            limit,
            total_pages: (total + per_page - 1) / per_page,
        }
    }
}

/// Response of `GET /api/v2/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListJobsResponse {
    pub data: Vec<JobResponse>,
    pub pagination: Pagination,
}

/// Response of `DELETE /api/v2/jobs/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    pub id: i64,
    pub deleted: bool,
}
