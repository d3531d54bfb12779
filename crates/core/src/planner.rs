// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns an access scope and list filters into a concrete job query.
//!
//! The planner never touches the jobs table. It only consults
//! [`ScopeLookups`] for the ids a scope is allowed to see, and returns
//! [`JobQueryPlan::Empty`] when those lookups prove nothing can match.

use std::collections::BTreeSet;

use splits_domain::{EmploymentType, JobStatus};
use tracing::debug;

use crate::access::{AccessContext, AccessScope};
use crate::error::CoreError;
use crate::filters::{JobOwnerFilter, NormalizedFilters, SortField, SortOrder};

/// Application stages in which a recruiter is still working a candidate.
pub const RECRUITER_ACTIVE_STAGES: [&str; 4] = ["screen", "submitted", "interview", "offer"];

/// The organization link of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyRef {
    pub id: i64,
    pub identity_organization_id: Option<i64>,
}

/// Read-only lookups the planner and the management gate depend on.
pub trait ScopeLookups {
    type Error: std::fmt::Display;

    /// Returns the ids of companies owned by any of the organizations.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn company_ids_for_organizations(
        &mut self,
        organization_ids: &[i64],
    ) -> Result<Vec<i64>, Self::Error>;

    /// Returns job ids of the recruiter's applications in any of the stages.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn recruiter_application_job_ids(
        &mut self,
        recruiter_id: i64,
        stages: &[&str],
    ) -> Result<Vec<i64>, Self::Error>;

    /// Returns job ids of the recruiter's placements.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn recruiter_placement_job_ids(&mut self, recruiter_id: i64) -> Result<Vec<i64>, Self::Error>;

    /// Returns ids of live jobs the recruiter owns or works for the company.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn recruiter_owned_job_ids(&mut self, recruiter_id: i64) -> Result<Vec<i64>, Self::Error>;

    /// Looks up a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn company(&mut self, company_id: i64) -> Result<Option<CompanyRef>, Self::Error>;

    /// Returns true if an active relationship lets the recruiter manage the
    /// company's jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn recruiter_can_manage_company(
        &mut self,
        recruiter_id: i64,
        company_id: i64,
    ) -> Result<bool, Self::Error>;
}

fn lookup_failed<E: std::fmt::Display>(err: E) -> CoreError {
    CoreError::LookupFailed(err.to_string())
}

/// A fully scoped job query. Soft-deleted jobs are always excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub status: Option<JobStatus>,
    /// When set, only jobs of these companies match.
    pub company_ids: Option<Vec<i64>>,
    /// When set, only these jobs match.
    pub job_ids: Option<Vec<i64>>,
    pub company_id: Option<i64>,
    pub job_owner_id: Option<i64>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    /// Each term must match title, description, department or location.
    pub search_terms: Vec<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

/// The outcome of planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobQueryPlan {
    /// Nothing can match; the jobs table need not be queried.
    Empty,
    Query(JobQuery),
}

impl JobQuery {
    fn from_filters(filters: &NormalizedFilters) -> Self {
        let searching = filters.has_search();
        let (sort_by, sort_order) = if searching {
            (SortField::CreatedAt, SortOrder::Desc)
        } else {
            (filters.sort_by, filters.sort_order)
        };

        Self {
            status: filters.status,
            company_ids: None,
            job_ids: None,
            company_id: filters.company_id,
            job_owner_id: None,
            // Search replaces the location filter.
            location: if searching {
                None
            } else {
                filters.location.clone()
            },
            employment_type: filters.employment_type,
            search_terms: filters.search_terms.clone(),
            sort_by,
            sort_order,
            limit: i64::from(filters.limit),
            offset: filters.offset(),
        }
    }

    /// Pins the query to active jobs. A different requested status can then
    /// never match.
    fn restrict_to_active(mut self) -> JobQueryPlan {
        match self.status {
            Some(requested) if requested != JobStatus::Active => JobQueryPlan::Empty,
            _ => {
                self.status = Some(JobStatus::Active);
                JobQueryPlan::Query(self)
            }
        }
    }
}

/// Plans the list query for a scope.
///
/// # Errors
///
/// Returns `CoreError::LookupFailed` if any scope lookup fails.
pub fn plan_job_query<L: ScopeLookups>(
    scope: &AccessScope,
    filters: &NormalizedFilters,
    lookups: &mut L,
) -> Result<JobQueryPlan, CoreError> {
    let query = JobQuery::from_filters(filters);

    let plan = match scope {
        AccessScope::PlatformAdmin => JobQueryPlan::Query(query),
        AccessScope::Anonymous | AccessScope::Candidate { .. } => query.restrict_to_active(),
        AccessScope::NoRole => JobQueryPlan::Empty,
        AccessScope::Recruiter { recruiter_id } => {
            plan_recruiter_query(*recruiter_id, query, filters.job_owner_filter, lookups)?
        }
        AccessScope::CompanyUser {
            identity_user_id,
            organization_ids,
        } => plan_company_query(
            *identity_user_id,
            organization_ids,
            query,
            filters.job_owner_filter,
            lookups,
        )?,
    };

    debug!(
        scope = scope.label(),
        empty = matches!(plan, JobQueryPlan::Empty),
        "Planned job list query"
    );
    Ok(plan)
}

fn plan_recruiter_query<L: ScopeLookups>(
    recruiter_id: i64,
    mut query: JobQuery,
    owner_filter: JobOwnerFilter,
    lookups: &mut L,
) -> Result<JobQueryPlan, CoreError> {
    if owner_filter == JobOwnerFilter::Assigned {
        let mut job_ids: BTreeSet<i64> = BTreeSet::new();
        job_ids.extend(
            lookups
                .recruiter_application_job_ids(recruiter_id, &RECRUITER_ACTIVE_STAGES)
                .map_err(lookup_failed)?,
        );
        job_ids.extend(
            lookups
                .recruiter_placement_job_ids(recruiter_id)
                .map_err(lookup_failed)?,
        );
        job_ids.extend(
            lookups
                .recruiter_owned_job_ids(recruiter_id)
                .map_err(lookup_failed)?,
        );

        if job_ids.is_empty() {
            debug!(recruiter_id, "Recruiter has no assigned jobs");
            return Ok(JobQueryPlan::Empty);
        }
        query.job_ids = Some(job_ids.into_iter().collect());
    }

    Ok(query.restrict_to_active())
}

fn plan_company_query<L: ScopeLookups>(
    identity_user_id: Option<i64>,
    organization_ids: &[i64],
    mut query: JobQuery,
    owner_filter: JobOwnerFilter,
    lookups: &mut L,
) -> Result<JobQueryPlan, CoreError> {
    let company_ids = lookups
        .company_ids_for_organizations(organization_ids)
        .map_err(lookup_failed)?;
    if company_ids.is_empty() {
        debug!(?organization_ids, "Organizations own no companies");
        return Ok(JobQueryPlan::Empty);
    }
    query.company_ids = Some(company_ids);

    if owner_filter == JobOwnerFilter::Assigned {
        match identity_user_id {
            Some(user_id) => query.job_owner_id = Some(user_id),
            None => return Ok(JobQueryPlan::Empty),
        }
    }

    Ok(JobQueryPlan::Query(query))
}

/// The right under which a caller may create or delete a company's jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagementGrant {
    PlatformAdmin,
    /// The recruiter holds a managing relationship with the company.
    Recruiter { recruiter_id: i64 },
    /// The caller belongs to the organization owning the company.
    CompanyMember { identity_user_id: Option<i64> },
}

/// Decides whether the caller may manage jobs of a company.
///
/// Every right the caller holds is considered, not just the one their list
/// scope resolves to.
///
/// # Errors
///
/// Returns an error if:
/// - The company does not exist
/// - The caller holds no managing right over it
/// - A lookup fails
pub fn authorize_job_management<L: ScopeLookups>(
    context: &AccessContext,
    company_id: i64,
    lookups: &mut L,
) -> Result<ManagementGrant, CoreError> {
    let company = lookups
        .company(company_id)
        .map_err(lookup_failed)?
        .ok_or(CoreError::CompanyNotFound(company_id))?;

    if context.is_platform_admin {
        return Ok(ManagementGrant::PlatformAdmin);
    }

    if let Some(recruiter_id) = context.recruiter_id {
        if lookups
            .recruiter_can_manage_company(recruiter_id, company.id)
            .map_err(lookup_failed)?
        {
            return Ok(ManagementGrant::Recruiter { recruiter_id });
        }
    }

    if company
        .identity_organization_id
        .is_some_and(|org| context.is_member_of(org))
    {
        return Ok(ManagementGrant::CompanyMember {
            identity_user_id: context.identity_user_id,
        });
    }

    let reason = if context.recruiter_id.is_some() {
        "recruiter does not have permission to manage jobs for this company"
    } else if context.organization_ids.is_empty() {
        "insufficient permissions to manage jobs"
    } else {
        "company does not belong to your organization"
    };
    Err(CoreError::Forbidden(reason.to_string()))
}
