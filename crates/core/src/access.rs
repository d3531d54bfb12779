// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity and the access scope derived from it.

use splits_domain::{Job, JobStatus, UserRole};

/// Everything known about a caller after resolving their external id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessContext {
    /// The external identity id the caller presented.
    pub clerk_user_id: String,
    /// Internal identity user id, when the caller is known.
    pub identity_user_id: Option<i64>,
    pub candidate_id: Option<i64>,
    /// Set only for recruiters whose record is active.
    pub recruiter_id: Option<i64>,
    /// Organizations the caller is a member of.
    pub organization_ids: Vec<i64>,
    pub roles: Vec<UserRole>,
    pub is_platform_admin: bool,
}

impl AccessContext {
    /// Creates a context for a caller with no identity record.
    #[must_use]
    pub const fn unknown(clerk_user_id: String) -> Self {
        Self {
            clerk_user_id,
            identity_user_id: None,
            candidate_id: None,
            recruiter_id: None,
            organization_ids: Vec::new(),
            roles: Vec::new(),
            is_platform_admin: false,
        }
    }

    #[must_use]
    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    /// Returns true if the caller's only company role is hiring manager and
    /// they are not a platform admin.
    #[must_use]
    pub fn is_hiring_manager_only(&self) -> bool {
        !self.is_platform_admin
            && self.has_role(UserRole::HiringManager)
            && self
                .roles
                .iter()
                .filter(|role| role.is_company_role())
                .all(|role| *role == UserRole::HiringManager)
    }

    #[must_use]
    pub fn is_member_of(&self, organization_id: i64) -> bool {
        self.organization_ids.contains(&organization_id)
    }
}

/// Resolves an external caller id to an [`AccessContext`].
pub trait AccessResolver {
    type Error: std::fmt::Display;

    /// Resolves the caller.
    ///
    /// Unknown callers resolve to [`AccessContext::unknown`], not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying lookup fails.
    fn resolve_access_context(&mut self, clerk_user_id: &str)
    -> Result<AccessContext, Self::Error>;
}

/// The single access variant a request is evaluated under.
///
/// Resolution is fixed-priority: platform admin, recruiter, company user,
/// candidate, then no role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessScope {
    /// No caller identity was presented.
    Anonymous,
    PlatformAdmin,
    Recruiter {
        recruiter_id: i64,
    },
    CompanyUser {
        identity_user_id: Option<i64>,
        organization_ids: Vec<i64>,
    },
    Candidate {
        candidate_id: i64,
    },
    /// Identified, but holding no role that grants visibility.
    NoRole,
}

impl AccessScope {
    /// Picks the scope for an optional caller context.
    #[must_use]
    pub fn resolve(context: Option<&AccessContext>) -> Self {
        let Some(context) = context else {
            return Self::Anonymous;
        };

        if context.is_platform_admin {
            return Self::PlatformAdmin;
        }
        if let Some(recruiter_id) = context.recruiter_id {
            return Self::Recruiter { recruiter_id };
        }
        if !context.organization_ids.is_empty() {
            return Self::CompanyUser {
                identity_user_id: context.identity_user_id,
                organization_ids: context.organization_ids.clone(),
            };
        }
        if let Some(candidate_id) = context.candidate_id {
            return Self::Candidate { candidate_id };
        }
        Self::NoRole
    }

    /// Returns the label recorded as the actor type on events.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::PlatformAdmin => "platform_admin",
            Self::Recruiter { .. } => "recruiter",
            Self::CompanyUser { .. } => "company_user",
            Self::Candidate { .. } => "candidate",
            Self::NoRole => "no_role",
        }
    }

    /// Returns true if list queries under this scope only see active jobs.
    #[must_use]
    pub const fn is_restricted_to_active(&self) -> bool {
        matches!(
            self,
            Self::Anonymous | Self::Recruiter { .. } | Self::Candidate { .. }
        )
    }

    /// Decides whether a single job is visible under this scope.
    ///
    /// `company_organization_id` is the organization owning the job's
    /// company, if any. Soft-deleted jobs are never visible.
    #[must_use]
    pub fn can_view(&self, job: &Job, company_organization_id: Option<i64>) -> bool {
        if job.is_deleted() {
            return false;
        }
        let is_active = job.status == JobStatus::Active;
        match self {
            Self::PlatformAdmin => true,
            Self::Recruiter { recruiter_id } => {
                is_active || job.is_recruiter_assigned(*recruiter_id)
            }
            Self::CompanyUser {
                organization_ids, ..
            } => {
                is_active
                    || company_organization_id.is_some_and(|org| organization_ids.contains(&org))
            }
            Self::Anonymous | Self::Candidate { .. } | Self::NoRole => is_active,
        }
    }
}
