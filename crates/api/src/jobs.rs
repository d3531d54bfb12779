// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job operations at the API boundary.
//!
//! Each operation resolves the caller's access scope, applies validation and
//! authorization, and calls into persistence. Writes commit their lifecycle
//! events to the outbox with the change itself and hand them back to the
//! caller for publishing.

use splits_core::{
    AccessContext, AccessResolver, AccessScope, CoreError, JobListFilters, JobQueryPlan,
    ManagementGrant, NormalizedFilters, ScopeLookups, authorize_job_management, plan_job_query,
};
use splits_domain::{
    DomainError, Job, UserRole, validate_fee_percentage, validate_initial_status,
    validate_new_job_fields, validate_salary_range, validate_salary_update, validate_status_change,
};
use splits_events::{Actor, JobEvent};
use splits_persistence::{
    JOB_NOT_FOUND_OR_DENIED, JobChanges, JobEventRecord, JobPage, NewJob, Persistence,
    PersistenceError,
};
use tracing::{debug, info};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    CreateJobRequest, DeleteJobResponse, JobIncludes, JobResponse, ListJobsRequest,
    ListJobsResponse, Pagination, UpdateJobRequest, parse_employment_type,
    parse_pre_screen_questions, parse_requirements, parse_status,
};

/// The result of a write that includes both the response and the events it
/// produced.
///
/// The events were committed to the outbox together with the write.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The lifecycle events emitted by this operation, in emission order.
    pub events: Vec<JobEvent>,
}

/// Resolves the caller behind an optional identity header.
///
/// A missing or blank header yields `None` (an anonymous caller).
///
/// # Errors
///
/// Returns an error if the identity lookup fails.
pub fn resolve_caller(
    persistence: &mut Persistence,
    clerk_user_id: Option<&str>,
) -> Result<Option<AccessContext>, ApiError> {
    let Some(clerk_user_id) = clerk_user_id.map(str::trim).filter(|id| !id.is_empty()) else {
        return Ok(None);
    };
    let context: AccessContext = persistence
        .resolve_access_context(clerk_user_id)
        .map_err(translate_persistence_error)?;
    Ok(Some(context))
}

/// Resolves the caller of a route that requires an identity.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationRequired` if no identity was presented,
/// or an error if the identity lookup fails.
pub fn require_caller(
    persistence: &mut Persistence,
    clerk_user_id: Option<&str>,
) -> Result<AccessContext, ApiError> {
    resolve_caller(persistence, clerk_user_id)?.ok_or(ApiError::AuthenticationRequired)
}

fn actor_for(context: &AccessContext) -> Actor {
    let scope: AccessScope = AccessScope::resolve(Some(context));
    Actor::new(context.clerk_user_id.clone(), scope.label().to_string())
}

fn parse_user_role(user_role: Option<&str>) -> Result<Option<UserRole>, ApiError> {
    user_role
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::parse::<UserRole>)
        .transpose()
        .map_err(translate_domain_error)
}

fn load_includes(
    persistence: &mut Persistence,
    job: Job,
    includes: JobIncludes,
) -> Result<JobResponse, ApiError> {
    let mut response = JobResponse::bare(job);
    if includes.company {
        response.company = persistence
            .get_company(response.job.company_id)
            .map_err(translate_persistence_error)?;
    }
    if includes.requirements {
        response.requirements = Some(
            persistence
                .get_requirements(response.job.id)
                .map_err(translate_persistence_error)?,
        );
    }
    if includes.pre_screen_questions {
        response.pre_screen_questions = Some(
            persistence
                .get_pre_screen_questions(response.job.id)
                .map_err(translate_persistence_error)?,
        );
    }
    Ok(response)
}

/// Rejects owner and recruiter references that point at no record.
fn validate_references(
    persistence: &mut Persistence,
    job_owner_id: Option<i64>,
    company_recruiter_id: Option<i64>,
) -> Result<(), ApiError> {
    let owner_exists: Option<bool> = job_owner_id
        .map(|user_id| persistence.identity_user_exists(user_id))
        .transpose()
        .map_err(translate_persistence_error)?;
    if let (Some(user_id), Some(false)) = (job_owner_id, owner_exists) {
        return Err(ApiError::InvalidInput {
            field: String::from("job_owner_id"),
            message: format!("Job owner not found: {user_id}"),
        });
    }

    let recruiter_exists: Option<bool> = company_recruiter_id
        .map(|recruiter_id| persistence.recruiter_exists(recruiter_id))
        .transpose()
        .map_err(translate_persistence_error)?;
    if let (Some(recruiter_id), Some(false)) = (company_recruiter_id, recruiter_exists) {
        return Err(ApiError::InvalidInput {
            field: String::from("company_recruiter_id"),
            message: format!("Company recruiter not found: {recruiter_id}"),
        });
    }
    Ok(())
}

/// The role the closing rule is checked against.
///
/// A claimed hiring-manager role always applies. Otherwise a caller whose
/// only right over the company is a hiring-manager membership is treated as
/// one, whatever role they claim.
fn closing_role(
    persistence: &mut Persistence,
    caller: &AccessContext,
    claimed: Option<UserRole>,
    company_id: i64,
) -> Result<Option<UserRole>, ApiError> {
    if claimed == Some(UserRole::HiringManager) || !caller.is_hiring_manager_only() {
        return Ok(claimed);
    }
    let manages_as_recruiter: bool = match caller.recruiter_id {
        Some(recruiter_id) => persistence
            .recruiter_can_manage_company(recruiter_id, company_id)
            .map_err(translate_persistence_error)?,
        None => false,
    };
    if manages_as_recruiter {
        return Ok(claimed);
    }
    debug!(company_id, "Applying hiring manager rules from memberships");
    Ok(Some(UserRole::HiringManager))
}

/// Lists the jobs visible to the caller.
///
/// # Errors
///
/// Returns an error if:
/// - A status or employment type filter is unknown
/// - A scope lookup or the job query fails
pub fn list_jobs(
    persistence: &mut Persistence,
    caller: Option<&AccessContext>,
    request: ListJobsRequest,
) -> Result<ListJobsResponse, ApiError> {
    let filters: NormalizedFilters = JobListFilters::from(request)
        .normalize()
        .map_err(translate_domain_error)?;
    let scope: AccessScope = AccessScope::resolve(caller);

    let plan: JobQueryPlan =
        plan_job_query(&scope, &filters, persistence).map_err(translate_core_error)?;

    let page: JobPage = match plan {
        JobQueryPlan::Empty => JobPage::empty(),
        JobQueryPlan::Query(query) => persistence
            .list_jobs(&query)
            .map_err(translate_persistence_error)?,
    };

    info!(
        scope = scope.label(),
        total = page.total,
        returned = page.jobs.len(),
        "Listed jobs"
    );

    Ok(ListJobsResponse {
        data: page.jobs.into_iter().map(JobResponse::bare).collect(),
        pagination: Pagination::new(page.total, filters.page, filters.limit),
    })
}

/// Retrieves a single job if the caller may see it.
///
/// # Errors
///
/// Returns `Job not found` if the job is missing, deleted or invisible to
/// the caller, or an error if a lookup fails.
pub fn get_job(
    persistence: &mut Persistence,
    caller: Option<&AccessContext>,
    job_id: i64,
    includes: JobIncludes,
) -> Result<JobResponse, ApiError> {
    let job: Job = persistence
        .get_job(job_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(ApiError::job_not_found)?;

    let scope: AccessScope = AccessScope::resolve(caller);
    let company_organization_id: Option<i64> = persistence
        .company(job.company_id)
        .map_err(translate_persistence_error)?
        .and_then(|company| company.identity_organization_id);

    if !scope.can_view(&job, company_organization_id) {
        debug!(job_id, scope = scope.label(), "Job hidden from caller");
        return Err(ApiError::job_not_found());
    }

    load_includes(persistence, job, includes)
}

/// Creates a job on behalf of the caller.
///
/// # Errors
///
/// Returns an error if:
/// - The title or company is missing
/// - The initial status, employment type, salary range or fees are invalid
/// - The company does not exist
/// - The caller may not manage jobs of the company
/// - A job owner or company recruiter reference points at no record
/// - Persistence fails
pub fn create_job(
    persistence: &mut Persistence,
    caller: &AccessContext,
    request: &CreateJobRequest,
) -> Result<ApiResult<JobResponse>, ApiError> {
    validate_new_job_fields(request.title.as_deref(), request.company_id)
        .map_err(translate_domain_error)?;
    let title: &str = request.title.as_deref().unwrap_or_default().trim();
    let company_id: i64 = request.company_id.unwrap_or_default();

    let status = parse_status(request.status.as_deref())
        .map_err(translate_domain_error)?
        .unwrap_or_default();
    validate_initial_status(status).map_err(translate_domain_error)?;
    let employment_type =
        parse_employment_type(request.employment_type.as_deref()).map_err(translate_domain_error)?;
    validate_salary_range(request.salary_min, request.salary_max)
        .map_err(translate_domain_error)?;
    validate_fee_percentage("fee_percentage", request.fee_percentage)
        .map_err(translate_domain_error)?;
    validate_fee_percentage("splits_fee_percentage", request.splits_fee_percentage)
        .map_err(translate_domain_error)?;
    let requirements = parse_requirements(&request.requirements).map_err(translate_domain_error)?;
    let pre_screen_questions =
        parse_pre_screen_questions(&request.pre_screen_questions).map_err(translate_domain_error)?;

    let grant: ManagementGrant =
        authorize_job_management(caller, company_id, persistence).map_err(translate_core_error)?;

    let mut new_job = NewJob::new(title.to_string(), company_id);
    new_job.description.clone_from(&request.description);
    new_job.status = status;
    new_job.salary_min = request.salary_min;
    new_job.salary_max = request.salary_max;
    new_job.employment_type = employment_type;
    new_job.location.clone_from(&request.location);
    new_job.department.clone_from(&request.department);
    new_job.fee_percentage = request.fee_percentage;
    new_job.splits_fee_percentage = request.splits_fee_percentage;
    new_job.job_owner_id = request.job_owner_id;
    new_job.company_recruiter_id = request.company_recruiter_id;
    new_job.requirements = requirements;
    new_job.pre_screen_questions = pre_screen_questions;

    match grant {
        ManagementGrant::PlatformAdmin => {}
        ManagementGrant::Recruiter { recruiter_id } => {
            new_job.job_owner_recruiter_id = Some(recruiter_id);
        }
        ManagementGrant::CompanyMember { identity_user_id } => {
            new_job.job_owner_id = new_job.job_owner_id.or(identity_user_id);
        }
    }

    validate_references(
        persistence,
        request.job_owner_id,
        request.company_recruiter_id,
    )?;

    let actor: Actor = actor_for(caller);
    let (job, events): (Job, Vec<JobEvent>) = persistence
        .create_job(&new_job, |job| {
            vec![JobEvent::Created {
                job_id: job.id,
                company_id: job.company_id,
                status: job.status,
                actor,
            }]
        })
        .map_err(translate_persistence_error)?;

    info!(
        job_id = job.id,
        company_id = job.company_id,
        grant = ?grant,
        "Job created"
    );

    let response: JobResponse = load_includes(persistence, job, JobIncludes::DETAILS)?;
    Ok(ApiResult { response, events })
}

fn build_changes(request: &UpdateJobRequest) -> Result<JobChanges, ApiError> {
    if request
        .title
        .as_deref()
        .is_some_and(|title| title.trim().is_empty())
    {
        return Err(translate_domain_error(DomainError::MissingTitle));
    }

    Ok(JobChanges {
        title: request.title.as_deref().map(|t| t.trim().to_string()),
        description: request.description.clone(),
        status: parse_status(request.status.as_deref()).map_err(translate_domain_error)?,
        salary_min: request.salary_min,
        salary_max: request.salary_max,
        employment_type: parse_employment_type(request.employment_type.as_deref())
            .map_err(translate_domain_error)?,
        location: request.location.clone(),
        department: request.department.clone(),
        fee_percentage: request.fee_percentage,
        splits_fee_percentage: request.splits_fee_percentage,
        job_owner_id: request.job_owner_id,
        company_recruiter_id: request.company_recruiter_id,
        requirements: request
            .requirements
            .as_deref()
            .map(parse_requirements)
            .transpose()
            .map_err(translate_domain_error)?,
        pre_screen_questions: request
            .pre_screen_questions
            .as_deref()
            .map(parse_pre_screen_questions)
            .transpose()
            .map_err(translate_domain_error)?,
    })
}

/// Applies a partial update to a job.
///
/// `user_role` is the role the caller claims to act under; it only affects
/// the hiring-manager closing rule. Without it the rule follows the caller's
/// memberships.
///
/// # Errors
///
/// Returns an error if:
/// - The job is missing or deleted
/// - A field or the role holds an unknown value
/// - The status transition, salary range or fees are invalid
/// - The caller may not manage the job's company
/// - A job owner or company recruiter reference points at no record
/// - Persistence fails
pub fn update_job(
    persistence: &mut Persistence,
    caller: &AccessContext,
    job_id: i64,
    request: &UpdateJobRequest,
    user_role: Option<&str>,
) -> Result<ApiResult<JobResponse>, ApiError> {
    let current: Job = persistence
        .get_job(job_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(ApiError::job_not_found)?;

    let claimed_role: Option<UserRole> = parse_user_role(user_role)?;
    let changes: JobChanges = build_changes(request)?;

    let status_change = changes.status.filter(|requested| *requested != current.status);
    if let Some(requested) = status_change {
        let role: Option<UserRole> =
            closing_role(persistence, caller, claimed_role, current.company_id)?;
        validate_status_change(current.status, requested, role).map_err(translate_domain_error)?;
    }
    validate_salary_update(
        changes.salary_min,
        changes.salary_max,
        current.salary_min,
        current.salary_max,
    )
    .map_err(translate_domain_error)?;
    validate_fee_percentage("fee_percentage", changes.fee_percentage)
        .map_err(translate_domain_error)?;
    validate_fee_percentage("splits_fee_percentage", changes.splits_fee_percentage)
        .map_err(translate_domain_error)?;

    if let Err(err) = authorize_job_management(caller, current.company_id, persistence) {
        return match err {
            CoreError::LookupFailed(_) => Err(translate_core_error(err)),
            _ => {
                debug!(job_id, reason = %err, "Update refused");
                Err(ApiError::ResourceNotFound {
                    resource_type: String::from("job"),
                    message: String::from(JOB_NOT_FOUND_OR_DENIED),
                })
            }
        };
    }

    validate_references(persistence, changes.job_owner_id, changes.company_recruiter_id)?;

    let actor: Actor = actor_for(caller);
    let mut events: Vec<JobEvent> = Vec::with_capacity(2);
    if let Some(new_status) = status_change {
        events.push(JobEvent::StatusChanged {
            job_id,
            previous_status: current.status,
            new_status,
            actor: actor.clone(),
        });
    }
    events.push(JobEvent::Updated {
        job_id,
        changed_fields: changes.changed_fields(),
        actor,
    });

    let job: Job = persistence
        .update_job(job_id, &changes, &events)
        .map_err(translate_persistence_error)?;

    info!(job_id, fields = ?changes.changed_fields(), "Job updated");

    let response: JobResponse = load_includes(persistence, job, JobIncludes::DETAILS)?;
    Ok(ApiResult { response, events })
}

/// Soft-deletes a job.
///
/// # Errors
///
/// Returns an error if:
/// - The job is missing or already deleted
/// - The caller may not manage the job's company
/// - Persistence fails
pub fn delete_job(
    persistence: &mut Persistence,
    caller: &AccessContext,
    job_id: i64,
) -> Result<ApiResult<DeleteJobResponse>, ApiError> {
    let job: Job = persistence
        .get_job(job_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(ApiError::job_not_found)?;

    authorize_job_management(caller, job.company_id, persistence).map_err(translate_core_error)?;

    let events: Vec<JobEvent> = vec![JobEvent::Deleted {
        job_id,
        actor: actor_for(caller),
    }];
    persistence
        .soft_delete_job(job_id, &events)
        .map_err(|err| match err {
            PersistenceError::NotFound(_) => ApiError::job_not_found(),
            other => translate_persistence_error(other),
        })?;

    info!(job_id, "Job deleted");

    Ok(ApiResult {
        response: DeleteJobResponse {
            id: job_id,
            deleted: true,
        },
        events,
    })
}

/// Lists the outbox entries recorded for a job. Platform admins only.
///
/// # Errors
///
/// Returns an error if the caller is not a platform admin or the query
/// fails.
pub fn list_job_events(
    persistence: &mut Persistence,
    caller: &AccessContext,
    job_id: i64,
) -> Result<Vec<JobEventRecord>, ApiError> {
    if !caller.is_platform_admin {
        return Err(ApiError::Forbidden {
            reason: String::from("platform admin access required"),
        });
    }

    persistence
        .list_job_events(job_id)
        .map_err(translate_persistence_error)
}
