// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job mutations.
//!
//! Writes are guarded on `deleted_at IS NULL`; a guarded write that touches
//! no row is reported as `PersistenceError::NotFound`. Each write appends its
//! lifecycle events to the outbox in the same transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use splits_domain::{Job, JobRequirement, PreScreenQuestion};
use splits_events::JobEvent;
use tracing::{debug, info};

use super::current_timestamp;
use super::events::append_job_events;
use crate::data_models::{JobChanges, NewJob};
use crate::diesel_schema::{job_pre_screen_questions, job_requirements, jobs};
use crate::error::PersistenceError;
use crate::queries::jobs::get_job;

/// Message reported when a guarded job write matches nothing.
pub const JOB_NOT_FOUND_OR_DENIED: &str = "Job not found or access denied";

#[derive(Insertable)]
#[diesel(table_name = jobs)]
struct NewJobRow<'a> {
    title: &'a str,
    description: Option<&'a str>,
    company_id: i64,
    status: &'static str,
    salary_min: Option<i64>,
    salary_max: Option<i64>,
    employment_type: Option<&'static str>,
    location: Option<&'a str>,
    department: Option<&'a str>,
    fee_percentage: Option<f64>,
    splits_fee_percentage: Option<f64>,
    job_owner_id: Option<i64>,
    job_owner_recruiter_id: Option<i64>,
    company_recruiter_id: Option<i64>,
    created_at: &'a str,
    updated_at: &'a str,
}

/// Changeset for guarded updates. `None` fields are left untouched.
#[derive(AsChangeset)]
#[diesel(table_name = jobs)]
struct JobChangeset<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    status: Option<&'static str>,
    salary_min: Option<i64>,
    salary_max: Option<i64>,
    employment_type: Option<&'static str>,
    location: Option<&'a str>,
    department: Option<&'a str>,
    fee_percentage: Option<f64>,
    splits_fee_percentage: Option<f64>,
    job_owner_id: Option<i64>,
    company_recruiter_id: Option<i64>,
    updated_at: &'a str,
}

fn replace_requirements(
    conn: &mut SqliteConnection,
    job_id: i64,
    requirements: &[JobRequirement],
) -> Result<(), PersistenceError> {
    diesel::delete(job_requirements::table.filter(job_requirements::job_id.eq(job_id)))
        .execute(conn)?;

    for requirement in requirements {
        diesel::insert_into(job_requirements::table)
            .values((
                job_requirements::job_id.eq(job_id),
                job_requirements::requirement_type.eq(requirement.requirement_type.as_str()),
                job_requirements::description.eq(&requirement.description),
                job_requirements::sort_order.eq(requirement.sort_order),
            ))
            .execute(conn)?;
    }

    debug!(job_id, count = requirements.len(), "Stored job requirements");
    Ok(())
}

fn replace_pre_screen_questions(
    conn: &mut SqliteConnection,
    job_id: i64,
    questions: &[PreScreenQuestion],
) -> Result<(), PersistenceError> {
    diesel::delete(
        job_pre_screen_questions::table.filter(job_pre_screen_questions::job_id.eq(job_id)),
    )
    .execute(conn)?;

    for question in questions {
        let options_json: String = serde_json::to_string(&question.options)?;
        diesel::insert_into(job_pre_screen_questions::table)
            .values((
                job_pre_screen_questions::job_id.eq(job_id),
                job_pre_screen_questions::question.eq(&question.question),
                job_pre_screen_questions::question_type.eq(question.question_type.as_str()),
                job_pre_screen_questions::is_required.eq(i32::from(question.is_required)),
                job_pre_screen_questions::options_json.eq(&options_json),
                job_pre_screen_questions::sort_order.eq(question.sort_order),
            ))
            .execute(conn)?;
    }

    debug!(job_id, count = questions.len(), "Stored pre-screen questions");
    Ok(())
}

fn reload(conn: &mut SqliteConnection, job_id: i64) -> Result<Job, PersistenceError> {
    get_job(conn, job_id)?
        .ok_or_else(|| PersistenceError::NotFound(JOB_NOT_FOUND_OR_DENIED.to_string()))
}

/// Inserts a job with its requirements and pre-screen questions, then
/// records the events `events_for` builds from the stored job.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is written in that case.
pub fn create_job<F>(
    conn: &mut SqliteConnection,
    new_job: &NewJob,
    events_for: F,
) -> Result<(Job, Vec<JobEvent>), PersistenceError>
where
    F: FnOnce(&Job) -> Vec<JobEvent>,
{
    let now: String = current_timestamp()?;

    conn.transaction(|conn| {
        let job_id: i64 = diesel::insert_into(jobs::table)
            .values(NewJobRow {
                title: &new_job.title,
                description: new_job.description.as_deref(),
                company_id: new_job.company_id,
                status: new_job.status.as_str(),
                salary_min: new_job.salary_min,
                salary_max: new_job.salary_max,
                employment_type: new_job.employment_type.map(|e| e.as_str()),
                location: new_job.location.as_deref(),
                department: new_job.department.as_deref(),
                fee_percentage: new_job.fee_percentage,
                splits_fee_percentage: new_job.splits_fee_percentage,
                job_owner_id: new_job.job_owner_id,
                job_owner_recruiter_id: new_job.job_owner_recruiter_id,
                company_recruiter_id: new_job.company_recruiter_id,
                created_at: &now,
                updated_at: &now,
            })
            .returning(jobs::job_id)
            .get_result(conn)?;

        replace_requirements(conn, job_id, &new_job.requirements)?;
        replace_pre_screen_questions(conn, job_id, &new_job.pre_screen_questions)?;

        let job: Job = reload(conn, job_id)?;
        let events: Vec<JobEvent> = events_for(&job);
        append_job_events(conn, &events)?;

        info!(job_id, company_id = new_job.company_id, "Created job");
        Ok((job, events))
    })
}

/// Applies a partial update to a live job, bumps `updated_at` and records
/// `events`.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the job is missing or deleted,
/// or an error if any write fails; nothing is written in that case.
pub fn update_job(
    conn: &mut SqliteConnection,
    job_id: i64,
    changes: &JobChanges,
    events: &[JobEvent],
) -> Result<Job, PersistenceError> {
    let now: String = current_timestamp()?;

    conn.transaction(|conn| {
        let changeset = JobChangeset {
            title: changes.title.as_deref(),
            description: changes.description.as_deref(),
            status: changes.status.map(|s| s.as_str()),
            salary_min: changes.salary_min,
            salary_max: changes.salary_max,
            employment_type: changes.employment_type.map(|e| e.as_str()),
            location: changes.location.as_deref(),
            department: changes.department.as_deref(),
            fee_percentage: changes.fee_percentage,
            splits_fee_percentage: changes.splits_fee_percentage,
            job_owner_id: changes.job_owner_id,
            company_recruiter_id: changes.company_recruiter_id,
            updated_at: &now,
        };

        let updated: usize = diesel::update(
            jobs::table
                .filter(jobs::job_id.eq(job_id))
                .filter(jobs::deleted_at.is_null()),
        )
        .set(&changeset)
        .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::NotFound(
                JOB_NOT_FOUND_OR_DENIED.to_string(),
            ));
        }

        if let Some(requirements) = &changes.requirements {
            replace_requirements(conn, job_id, requirements)?;
        }
        if let Some(questions) = &changes.pre_screen_questions {
            replace_pre_screen_questions(conn, job_id, questions)?;
        }
        append_job_events(conn, events)?;

        info!(job_id, fields = ?changes.changed_fields(), "Updated job");
        reload(conn, job_id)
    })
}

/// Soft-deletes a live job by setting `deleted_at`, then records `events`.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the job is missing or already
/// deleted, or an error if a write fails; nothing is written in that case.
pub fn soft_delete_job(
    conn: &mut SqliteConnection,
    job_id: i64,
    events: &[JobEvent],
) -> Result<(), PersistenceError> {
    let now: String = current_timestamp()?;

    conn.transaction(|conn| {
        let deleted: usize = diesel::update(
            jobs::table
                .filter(jobs::job_id.eq(job_id))
                .filter(jobs::deleted_at.is_null()),
        )
        .set((jobs::deleted_at.eq(&now), jobs::updated_at.eq(&now)))
        .execute(conn)?;

        if deleted == 0 {
            return Err(PersistenceError::NotFound(
                JOB_NOT_FOUND_OR_DENIED.to_string(),
            ));
        }
        append_job_events(conn, events)?;

        info!(job_id, "Soft-deleted job");
        Ok(())
    })
}
