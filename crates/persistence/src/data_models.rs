// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use splits_domain::{EmploymentType, Job, JobRequirement, JobStatus, PreScreenQuestion};

/// Everything needed to insert a job.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
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
    pub job_owner_id: Option<i64>,
    pub job_owner_recruiter_id: Option<i64>,
    pub company_recruiter_id: Option<i64>,
    pub requirements: Vec<JobRequirement>,
    pub pre_screen_questions: Vec<PreScreenQuestion>,
}

impl NewJob {
    /// Creates a draft job with only the required fields set.
    #[must_use]
    pub const fn new(title: String, company_id: i64) -> Self {
        Self {
            title,
            description: None,
            company_id,
            status: JobStatus::Draft,
            salary_min: None,
            salary_max: None,
            employment_type: None,
            location: None,
            department: None,
            fee_percentage: None,
            splits_fee_percentage: None,
            job_owner_id: None,
            job_owner_recruiter_id: None,
            company_recruiter_id: None,
            requirements: Vec::new(),
            pre_screen_questions: Vec::new(),
        }
    }
}

/// A partial update. `None` leaves the stored value untouched.
///
/// `requirements` and `pre_screen_questions` replace the stored lists
/// wholesale when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<JobStatus>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub employment_type: Option<EmploymentType>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub fee_percentage: Option<f64>,
    pub splits_fee_percentage: Option<f64>,
    pub job_owner_id: Option<i64>,
    pub company_recruiter_id: Option<i64>,
    pub requirements: Option<Vec<JobRequirement>>,
    pub pre_screen_questions: Option<Vec<PreScreenQuestion>>,
}

impl JobChanges {
    /// Returns the names of the fields this update touches, in column order.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<String> {
        let present: [(&str, bool); 14] = [
            ("title", self.title.is_some()),
            ("description", self.description.is_some()),
            ("status", self.status.is_some()),
            ("salary_min", self.salary_min.is_some()),
            ("salary_max", self.salary_max.is_some()),
            ("employment_type", self.employment_type.is_some()),
            ("location", self.location.is_some()),
            ("department", self.department.is_some()),
            ("fee_percentage", self.fee_percentage.is_some()),
            ("splits_fee_percentage", self.splits_fee_percentage.is_some()),
            ("job_owner_id", self.job_owner_id.is_some()),
            ("company_recruiter_id", self.company_recruiter_id.is_some()),
            ("requirements", self.requirements.is_some()),
            ("pre_screen_questions", self.pre_screen_questions.is_some()),
        ];
        present
            .into_iter()
            .filter(|(_, is_present)| *is_present)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

/// One page of a job list plus the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total: i64,
}

impl JobPage {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            jobs: Vec::new(),
            total: 0,
        }
    }
}

/// A company as embedded in job responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyData {
    pub id: i64,
    pub name: String,
    pub identity_organization_id: Option<i64>,
}

/// An outbox entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEventRecord {
    pub event_id: i64,
    pub job_id: i64,
    pub event_name: String,
    pub actor_id: String,
    pub actor_type: String,
    pub payload: Value,
    pub created_at: String,
}
