// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::job_status::JobStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Employment arrangement offered by a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    TempToHire,
}

impl EmploymentType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
            Self::TempToHire => "temp_to_hire",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_time" => Ok(Self::FullTime),
            "part_time" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            "temp_to_hire" => Ok(Self::TempToHire),
            _ => Err(DomainError::InvalidEmploymentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a caller acts under.
///
/// Roles come from organization memberships, recruiter and candidate
/// records, or from the `x-user-role` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Unrestricted visibility across all jobs.
    PlatformAdmin,
    /// Manages the jobs of an organization's companies.
    CompanyAdmin,
    /// Works on an organization's jobs but may not close them.
    HiringManager,
    /// Sources candidates for active jobs.
    Recruiter,
    /// Applies to active jobs.
    Candidate,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlatformAdmin => "platform_admin",
            Self::CompanyAdmin => "company_admin",
            Self::HiringManager => "hiring_manager",
            Self::Recruiter => "recruiter",
            Self::Candidate => "candidate",
        }
    }

    /// Returns true for roles held through an organization membership.
    #[must_use]
    pub const fn is_company_role(&self) -> bool {
        matches!(self, Self::CompanyAdmin | Self::HiringManager)
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "platform_admin" => Ok(Self::PlatformAdmin),
            "company_admin" => Ok(Self::CompanyAdmin),
            "hiring_manager" => Ok(Self::HiringManager),
            "recruiter" => Ok(Self::Recruiter),
            "candidate" => Ok(Self::Candidate),
            _ => Err(DomainError::InvalidUserRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a job requirement must be met or is a nice-to-have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementType {
    Mandatory,
    Preferred,
}

impl RequirementType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Preferred => "preferred",
        }
    }
}

impl FromStr for RequirementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mandatory" => Ok(Self::Mandatory),
            "preferred" => Ok(Self::Preferred),
            _ => Err(DomainError::InvalidRequirementType(s.to_string())),
        }
    }
}

/// Answer format of a pre-screen question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    YesNo,
    Select,
    MultiSelect,
}

impl QuestionType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::YesNo => "yes_no",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
        }
    }
}

impl FromStr for QuestionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "yes_no" => Ok(Self::YesNo),
            "select" => Ok(Self::Select),
            "multi_select" => Ok(Self::MultiSelect),
            _ => Err(DomainError::InvalidQuestionType(s.to_string())),
        }
    }
}

/// A single line of a job's requirements list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub requirement_type: RequirementType,
    pub description: String,
    pub sort_order: i32,
}

/// A question candidates answer when applying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreScreenQuestion {
    pub question: String,
    pub question_type: QuestionType,
    pub is_required: bool,
    /// Choices for `select` and `multi_select` questions.
    pub options: Vec<String>,
    pub sort_order: i32,
}

/// A job posting as stored.
///
/// Requirements and pre-screen questions live in their own tables and are
/// only loaded when a caller asks for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub company_id: i64,
    pub status: JobStatus,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub employment_type: Option<EmploymentType>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub fee_percentage: Option<f64>,
    pub splits_fee_percentage: Option<f64>,
    /// Identity user responsible for the posting on the company side.
    pub job_owner_id: Option<i64>,
    /// Recruiter who owns the posting.
    pub job_owner_recruiter_id: Option<i64>,
    /// Recruiter working the posting on behalf of the company.
    pub company_recruiter_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    /// Set when the job has been soft-deleted.
    pub deleted_at: Option<String>,
}

impl Job {
    /// Returns true if the job has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns true if the given recruiter owns or co-owns this job.
    #[must_use]
    pub fn is_recruiter_assigned(&self, recruiter_id: i64) -> bool {
        self.job_owner_recruiter_id == Some(recruiter_id)
            || self.company_recruiter_id == Some(recruiter_id)
    }
}
