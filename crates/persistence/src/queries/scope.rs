// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lookups that back access scoping and job management checks.

use diesel::SqliteConnection;
use diesel::prelude::*;
use splits_core::CompanyRef;

use crate::diesel_schema::{applications, companies, jobs, placements, recruiter_companies};
use crate::error::PersistenceError;

/// Relationship status that lets a recruiter act for a company.
pub const ACTIVE_RELATIONSHIP_STATUS: &str = "active";

/// Returns the ids of companies owned by any of the organizations.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn company_ids_for_organizations(
    conn: &mut SqliteConnection,
    organization_ids: &[i64],
) -> Result<Vec<i64>, PersistenceError> {
    if organization_ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(companies::table
        .filter(companies::identity_organization_id.eq_any(organization_ids.to_vec()))
        .select(companies::company_id)
        .order(companies::company_id.asc())
        .load(conn)?)
}

/// Returns the job ids of a recruiter's applications in the given stages.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recruiter_application_job_ids(
    conn: &mut SqliteConnection,
    recruiter_id: i64,
    stages: &[&str],
) -> Result<Vec<i64>, PersistenceError> {
    Ok(applications::table
        .filter(applications::recruiter_id.eq(recruiter_id))
        .filter(applications::stage.eq_any(stages.to_vec()))
        .select(applications::job_id)
        .distinct()
        .load(conn)?)
}

/// Returns the job ids of a recruiter's placements.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recruiter_placement_job_ids(
    conn: &mut SqliteConnection,
    recruiter_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    Ok(placements::table
        .filter(placements::recruiter_id.eq(recruiter_id))
        .select(placements::job_id)
        .distinct()
        .load(conn)?)
}

/// Returns the ids of live jobs a recruiter owns or works for the company.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recruiter_owned_job_ids(
    conn: &mut SqliteConnection,
    recruiter_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    Ok(jobs::table
        .filter(jobs::deleted_at.is_null())
        .filter(
            jobs::job_owner_recruiter_id
                .eq(recruiter_id)
                .or(jobs::company_recruiter_id.eq(recruiter_id)),
        )
        .select(jobs::job_id)
        .load(conn)?)
}

/// Looks up a company's organization link.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn company_ref(
    conn: &mut SqliteConnection,
    company_id: i64,
) -> Result<Option<CompanyRef>, PersistenceError> {
    let row: Option<(i64, Option<i64>)> = companies::table
        .filter(companies::company_id.eq(company_id))
        .select((companies::company_id, companies::identity_organization_id))
        .first(conn)
        .optional()?;

    Ok(row.map(|(id, identity_organization_id)| CompanyRef {
        id,
        identity_organization_id,
    }))
}

/// Returns true if an active relationship lets the recruiter manage the
/// company's jobs.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recruiter_can_manage_company(
    conn: &mut SqliteConnection,
    recruiter_id: i64,
    company_id: i64,
) -> Result<bool, PersistenceError> {
    let matches: i64 = recruiter_companies::table
        .filter(recruiter_companies::recruiter_id.eq(recruiter_id))
        .filter(recruiter_companies::company_id.eq(company_id))
        .filter(recruiter_companies::status.eq(ACTIVE_RELATIONSHIP_STATUS))
        .filter(recruiter_companies::can_manage_company_jobs.eq(1))
        .count()
        .get_result(conn)?;
    Ok(matches > 0)
}
