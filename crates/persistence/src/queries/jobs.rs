// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job queries.
//!
//! Soft-deleted rows are filtered out here so that nothing above this
//! module can accidentally return them.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use splits_core::{JobQuery, SortField, SortOrder};
use splits_domain::{
    EmploymentType, Job, JobRequirement, JobStatus, PreScreenQuestion, QuestionType,
    RequirementType,
};
use tracing::debug;

use crate::backend::fold_case;
use crate::data_models::{CompanyData, JobPage};
use crate::diesel_schema::{companies, job_pre_screen_questions, job_requirements, jobs};
use crate::error::PersistenceError;

/// Diesel Queryable struct for job rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct JobRow {
    job_id: i64,
    title: String,
    description: Option<String>,
    company_id: i64,
    status: String,
    salary_min: Option<i64>,
    salary_max: Option<i64>,
    employment_type: Option<String>,
    location: Option<String>,
    department: Option<String>,
    fee_percentage: Option<f64>,
    splits_fee_percentage: Option<f64>,
    job_owner_id: Option<i64>,
    job_owner_recruiter_id: Option<i64>,
    company_recruiter_id: Option<i64>,
    created_at: String,
    updated_at: String,
    deleted_at: Option<String>,
}

fn invalid_job_row(err: &impl std::fmt::Display) -> PersistenceError {
    PersistenceError::InvalidRow {
        table: "jobs",
        reason: err.to_string(),
    }
}

impl TryFrom<JobRow> for Job {
    type Error = PersistenceError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let status: JobStatus = row.status.parse().map_err(|e| invalid_job_row(&e))?;
        let employment_type: Option<EmploymentType> = row
            .employment_type
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e| invalid_job_row(&e))?;

        Ok(Self {
            id: row.job_id,
            title: row.title,
            description: row.description,
            company_id: row.company_id,
            status,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            employment_type,
            location: row.location,
            department: row.department,
            fee_percentage: row.fee_percentage,
            splits_fee_percentage: row.splits_fee_percentage,
            job_owner_id: row.job_owner_id,
            job_owner_recruiter_id: row.job_owner_recruiter_id,
            company_recruiter_id: row.company_recruiter_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = job_requirements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct RequirementRow {
    requirement_type: String,
    description: String,
    sort_order: i32,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = job_pre_screen_questions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct QuestionRow {
    question: String,
    question_type: String,
    is_required: i32,
    options_json: String,
    sort_order: i32,
}

/// Builds a `LIKE` pattern matching `term` anywhere, with wildcards escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Applies every scope and filter constraint of a planned query.
///
/// Generic over the selection so the page query and the count query share
/// exactly the same predicate.
fn apply_constraints<'a, ST: 'a>(
    mut boxed: jobs::BoxedQuery<'a, Sqlite, ST>,
    query: &JobQuery,
) -> jobs::BoxedQuery<'a, Sqlite, ST> {
    boxed = boxed.filter(jobs::deleted_at.is_null());

    if let Some(status) = query.status {
        boxed = boxed.filter(jobs::status.eq(status.as_str()));
    }
    if let Some(company_ids) = &query.company_ids {
        boxed = boxed.filter(jobs::company_id.eq_any(company_ids.clone()));
    }
    if let Some(job_ids) = &query.job_ids {
        boxed = boxed.filter(jobs::job_id.eq_any(job_ids.clone()));
    }
    if let Some(company_id) = query.company_id {
        boxed = boxed.filter(jobs::company_id.eq(company_id));
    }
    if let Some(owner_id) = query.job_owner_id {
        boxed = boxed.filter(jobs::job_owner_id.eq(owner_id));
    }
    if let Some(location) = &query.location {
        boxed = boxed.filter(
            fold_case(jobs::location)
                .like(contains_pattern(&location.to_lowercase()))
                .escape('\\'),
        );
    }
    if let Some(employment_type) = query.employment_type {
        boxed = boxed.filter(jobs::employment_type.eq(employment_type.as_str()));
    }
    // Terms arrive lower-cased; columns are folded to match.
    for term in &query.search_terms {
        let pattern: String = contains_pattern(term);
        boxed = boxed.filter(
            fold_case(jobs::title.nullable())
                .like(pattern.clone())
                .escape('\\')
                .or(fold_case(jobs::description).like(pattern.clone()).escape('\\'))
                .or(fold_case(jobs::department).like(pattern.clone()).escape('\\'))
                .or(fold_case(jobs::location).like(pattern).escape('\\')),
        );
    }

    boxed
}

fn apply_ordering<'a, ST: 'a>(
    boxed: jobs::BoxedQuery<'a, Sqlite, ST>,
    sort_by: SortField,
    sort_order: SortOrder,
) -> jobs::BoxedQuery<'a, Sqlite, ST> {
    let ordered = match (sort_by, sort_order) {
        (SortField::CreatedAt, SortOrder::Asc) => boxed.order_by(jobs::created_at.asc()),
        (SortField::CreatedAt, SortOrder::Desc) => boxed.order_by(jobs::created_at.desc()),
        (SortField::UpdatedAt, SortOrder::Asc) => boxed.order_by(jobs::updated_at.asc()),
        (SortField::UpdatedAt, SortOrder::Desc) => boxed.order_by(jobs::updated_at.desc()),
        (SortField::Title, SortOrder::Asc) => boxed.order_by(jobs::title.asc()),
        (SortField::Title, SortOrder::Desc) => boxed.order_by(jobs::title.desc()),
        (SortField::SalaryMin, SortOrder::Asc) => boxed.order_by(jobs::salary_min.asc()),
        (SortField::SalaryMin, SortOrder::Desc) => boxed.order_by(jobs::salary_min.desc()),
        (SortField::SalaryMax, SortOrder::Asc) => boxed.order_by(jobs::salary_max.asc()),
        (SortField::SalaryMax, SortOrder::Desc) => boxed.order_by(jobs::salary_max.desc()),
        (SortField::Status, SortOrder::Asc) => boxed.order_by(jobs::status.asc()),
        (SortField::Status, SortOrder::Desc) => boxed.order_by(jobs::status.desc()),
    };

    // Ties break on insertion order in the same direction.
    match sort_order {
        SortOrder::Asc => ordered.then_order_by(jobs::job_id.asc()),
        SortOrder::Desc => ordered.then_order_by(jobs::job_id.desc()),
    }
}

/// Runs a planned job query, returning one page and the total match count.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_jobs(
    conn: &mut SqliteConnection,
    query: &JobQuery,
) -> Result<JobPage, PersistenceError> {
    let total: i64 = apply_constraints(jobs::table.count().into_boxed(), query).get_result(conn)?;

    let rows: Vec<JobRow> = apply_ordering(
        apply_constraints(jobs::table.select(JobRow::as_select()).into_boxed(), query),
        query.sort_by,
        query.sort_order,
    )
    .limit(query.limit)
    .offset(query.offset)
    .load(conn)?;

    debug!(total, returned = rows.len(), "Listed jobs");

    let jobs: Vec<Job> = rows
        .into_iter()
        .map(Job::try_from)
        .collect::<Result<_, _>>()?;
    Ok(JobPage { jobs, total })
}

/// Retrieves a job that has not been soft-deleted.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the job does not exist or was deleted.
pub fn get_job(conn: &mut SqliteConnection, job_id: i64) -> Result<Option<Job>, PersistenceError> {
    debug!(job_id, "Looking up job");

    let row: Option<JobRow> = jobs::table
        .filter(jobs::job_id.eq(job_id))
        .filter(jobs::deleted_at.is_null())
        .select(JobRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Job::try_from).transpose()
}

/// Retrieves a job's requirements in display order.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn get_requirements(
    conn: &mut SqliteConnection,
    job_id: i64,
) -> Result<Vec<JobRequirement>, PersistenceError> {
    let rows: Vec<RequirementRow> = job_requirements::table
        .filter(job_requirements::job_id.eq(job_id))
        .order((
            job_requirements::sort_order.asc(),
            job_requirements::requirement_id.asc(),
        ))
        .select(RequirementRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let requirement_type: RequirementType =
                row.requirement_type
                    .parse()
                    .map_err(|e: splits_domain::DomainError| PersistenceError::InvalidRow {
                        table: "job_requirements",
                        reason: e.to_string(),
                    })?;
            Ok(JobRequirement {
                requirement_type,
                description: row.description,
                sort_order: row.sort_order,
            })
        })
        .collect()
}

/// Retrieves a job's pre-screen questions in display order.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn get_pre_screen_questions(
    conn: &mut SqliteConnection,
    job_id: i64,
) -> Result<Vec<PreScreenQuestion>, PersistenceError> {
    let rows: Vec<QuestionRow> = job_pre_screen_questions::table
        .filter(job_pre_screen_questions::job_id.eq(job_id))
        .order((
            job_pre_screen_questions::sort_order.asc(),
            job_pre_screen_questions::question_id.asc(),
        ))
        .select(QuestionRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let question_type: QuestionType =
                row.question_type
                    .parse()
                    .map_err(|e: splits_domain::DomainError| PersistenceError::InvalidRow {
                        table: "job_pre_screen_questions",
                        reason: e.to_string(),
                    })?;
            let options: Vec<String> = serde_json::from_str(&row.options_json)?;
            Ok(PreScreenQuestion {
                question: row.question,
                question_type,
                is_required: row.is_required != 0,
                options,
                sort_order: row.sort_order,
            })
        })
        .collect()
}

/// Retrieves a company.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the company does not exist.
pub fn get_company(
    conn: &mut SqliteConnection,
    company_id: i64,
) -> Result<Option<CompanyData>, PersistenceError> {
    let row: Option<(i64, String, Option<i64>)> = companies::table
        .filter(companies::company_id.eq(company_id))
        .select((
            companies::company_id,
            companies::name,
            companies::identity_organization_id,
        ))
        .first(conn)
        .optional()?;

    Ok(row.map(|(id, name, identity_organization_id)| CompanyData {
        id,
        name,
        identity_organization_id,
    }))
}
