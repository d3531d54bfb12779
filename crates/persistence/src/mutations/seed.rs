// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixture loading.
//!
//! The service exposes no endpoints for organizations, companies,
//! recruiters, candidates, applications or placements. A seed document
//! populates them (and optionally jobs) with explicit ids so that
//! references inside the document are stable.

use diesel::SqliteConnection;
use diesel::prelude::*;
use serde::Deserialize;
use splits_domain::{EmploymentType, JobStatus};
use tracing::info;

use super::current_timestamp;
use crate::diesel_schema::{
    applications, candidates, companies, jobs, memberships, organizations, placements,
    recruiter_companies, recruiters, users,
};
use crate::error::PersistenceError;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedOrganization {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: i64,
    pub clerk_user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_platform_admin: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedMembership {
    pub user_id: i64,
    pub organization_id: i64,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCompany {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub identity_organization_id: Option<i64>,
}

fn default_active() -> String {
    String::from("active")
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecruiter {
    pub id: i64,
    pub user_id: i64,
    #[serde(default = "default_active")]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecruiterCompany {
    pub recruiter_id: i64,
    pub company_id: i64,
    #[serde(default = "default_active")]
    pub status: String,
    #[serde(default)]
    pub can_manage_company_jobs: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCandidate {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedJob {
    pub id: i64,
    pub title: String,
    pub company_id: i64,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary_min: Option<i64>,
    #[serde(default)]
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub fee_percentage: Option<f64>,
    #[serde(default)]
    pub splits_fee_percentage: Option<f64>,
    #[serde(default)]
    pub job_owner_id: Option<i64>,
    #[serde(default)]
    pub job_owner_recruiter_id: Option<i64>,
    #[serde(default)]
    pub company_recruiter_id: Option<i64>,
    /// Defaults to the load time.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedApplication {
    pub job_id: i64,
    pub candidate_id: i64,
    #[serde(default)]
    pub recruiter_id: Option<i64>,
    pub stage: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedPlacement {
    pub job_id: i64,
    pub candidate_id: i64,
    pub recruiter_id: i64,
}

/// A complete fixture document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub organizations: Vec<SeedOrganization>,
    pub users: Vec<SeedUser>,
    pub memberships: Vec<SeedMembership>,
    pub companies: Vec<SeedCompany>,
    pub recruiters: Vec<SeedRecruiter>,
    pub recruiter_companies: Vec<SeedRecruiterCompany>,
    pub candidates: Vec<SeedCandidate>,
    pub jobs: Vec<SeedJob>,
    pub applications: Vec<SeedApplication>,
    pub placements: Vec<SeedPlacement>,
}

impl SeedData {
    /// Parses a seed document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid seed JSON.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        serde_json::from_str(json).map_err(|e| PersistenceError::SeedFailed(e.to_string()))
    }
}

fn insert_jobs(
    conn: &mut SqliteConnection,
    seed_jobs: &[SeedJob],
    now: &str,
) -> Result<(), PersistenceError> {
    for job in seed_jobs {
        let created_at: &str = job.created_at.as_deref().unwrap_or(now);
        diesel::insert_into(jobs::table)
            .values((
                jobs::job_id.eq(job.id),
                jobs::title.eq(&job.title),
                jobs::description.eq(job.description.as_deref()),
                jobs::company_id.eq(job.company_id),
                jobs::status.eq(job.status.as_str()),
                jobs::salary_min.eq(job.salary_min),
                jobs::salary_max.eq(job.salary_max),
                jobs::employment_type.eq(job.employment_type.map(|e| e.as_str())),
                jobs::location.eq(job.location.as_deref()),
                jobs::department.eq(job.department.as_deref()),
                jobs::fee_percentage.eq(job.fee_percentage),
                jobs::splits_fee_percentage.eq(job.splits_fee_percentage),
                jobs::job_owner_id.eq(job.job_owner_id),
                jobs::job_owner_recruiter_id.eq(job.job_owner_recruiter_id),
                jobs::company_recruiter_id.eq(job.company_recruiter_id),
                jobs::created_at.eq(created_at),
                jobs::updated_at.eq(created_at),
                jobs::deleted_at.eq(job.deleted_at.as_deref()),
            ))
            .execute(conn)?;
    }
    Ok(())
}

/// Loads a seed document in a single transaction.
///
/// # Errors
///
/// Returns an error if any row violates a constraint; nothing is written
/// in that case.
pub fn load_seed(conn: &mut SqliteConnection, seed: &SeedData) -> Result<(), PersistenceError> {
    let now: String = current_timestamp()?;

    conn.transaction(|conn| {
        for org in &seed.organizations {
            diesel::insert_into(organizations::table)
                .values((
                    organizations::organization_id.eq(org.id),
                    organizations::name.eq(&org.name),
                ))
                .execute(conn)?;
        }

        for user in &seed.users {
            diesel::insert_into(users::table)
                .values((
                    users::user_id.eq(user.id),
                    users::clerk_user_id.eq(&user.clerk_user_id),
                    users::email.eq(user.email.as_deref()),
                    users::is_platform_admin.eq(i32::from(user.is_platform_admin)),
                ))
                .execute(conn)?;
        }

        for membership in &seed.memberships {
            diesel::insert_into(memberships::table)
                .values((
                    memberships::user_id.eq(membership.user_id),
                    memberships::organization_id.eq(membership.organization_id),
                    memberships::role.eq(&membership.role),
                ))
                .execute(conn)?;
        }

        for company in &seed.companies {
            diesel::insert_into(companies::table)
                .values((
                    companies::company_id.eq(company.id),
                    companies::name.eq(&company.name),
                    companies::identity_organization_id.eq(company.identity_organization_id),
                ))
                .execute(conn)?;
        }

        for recruiter in &seed.recruiters {
            diesel::insert_into(recruiters::table)
                .values((
                    recruiters::recruiter_id.eq(recruiter.id),
                    recruiters::user_id.eq(recruiter.user_id),
                    recruiters::status.eq(&recruiter.status),
                ))
                .execute(conn)?;
        }

        for relationship in &seed.recruiter_companies {
            diesel::insert_into(recruiter_companies::table)
                .values((
                    recruiter_companies::recruiter_id.eq(relationship.recruiter_id),
                    recruiter_companies::company_id.eq(relationship.company_id),
                    recruiter_companies::status.eq(&relationship.status),
                    recruiter_companies::can_manage_company_jobs
                        .eq(i32::from(relationship.can_manage_company_jobs)),
                ))
                .execute(conn)?;
        }

        for candidate in &seed.candidates {
            diesel::insert_into(candidates::table)
                .values((
                    candidates::candidate_id.eq(candidate.id),
                    candidates::user_id.eq(candidate.user_id),
                    candidates::full_name.eq(&candidate.full_name),
                ))
                .execute(conn)?;
        }

        insert_jobs(conn, &seed.jobs, &now)?;

        for application in &seed.applications {
            diesel::insert_into(applications::table)
                .values((
                    applications::job_id.eq(application.job_id),
                    applications::candidate_id.eq(application.candidate_id),
                    applications::recruiter_id.eq(application.recruiter_id),
                    applications::stage.eq(&application.stage),
                ))
                .execute(conn)?;
        }

        for placement in &seed.placements {
            diesel::insert_into(placements::table)
                .values((
                    placements::job_id.eq(placement.job_id),
                    placements::candidate_id.eq(placement.candidate_id),
                    placements::recruiter_id.eq(placement.recruiter_id),
                ))
                .execute(conn)?;
        }

        info!(
            organizations = seed.organizations.len(),
            users = seed.users.len(),
            companies = seed.companies.len(),
            jobs = seed.jobs.len(),
            "Loaded seed data"
        );
        Ok(())
    })
}
