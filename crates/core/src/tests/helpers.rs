// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use crate::{AccessContext, CompanyRef, JobListFilters, NormalizedFilters, ScopeLookups};

/// In-memory lookups that also count how often they were consulted.
#[derive(Debug, Default)]
pub struct InMemoryLookups {
    pub companies: Vec<CompanyRef>,
    /// (`recruiter_id`, `job_id`, stage)
    pub applications: Vec<(i64, i64, String)>,
    /// (`recruiter_id`, `job_id`)
    pub placements: Vec<(i64, i64)>,
    pub owned_jobs: HashMap<i64, Vec<i64>>,
    /// (`recruiter_id`, `company_id`) pairs with a managing relationship.
    pub managing: Vec<(i64, i64)>,
    pub calls: usize,
    pub fail: bool,
}

impl InMemoryLookups {
    fn check(&mut self) -> Result<(), String> {
        self.calls += 1;
        if self.fail {
            Err(String::from("database is locked"))
        } else {
            Ok(())
        }
    }
}

impl ScopeLookups for InMemoryLookups {
    type Error = String;

    fn company_ids_for_organizations(
        &mut self,
        organization_ids: &[i64],
    ) -> Result<Vec<i64>, Self::Error> {
        self.check()?;
        Ok(self
            .companies
            .iter()
            .filter(|c| {
                c.identity_organization_id
                    .is_some_and(|org| organization_ids.contains(&org))
            })
            .map(|c| c.id)
            .collect())
    }

    fn recruiter_application_job_ids(
        &mut self,
        recruiter_id: i64,
        stages: &[&str],
    ) -> Result<Vec<i64>, Self::Error> {
        self.check()?;
        Ok(self
            .applications
            .iter()
            .filter(|(r, _, stage)| *r == recruiter_id && stages.contains(&stage.as_str()))
            .map(|(_, job, _)| *job)
            .collect())
    }

    fn recruiter_placement_job_ids(&mut self, recruiter_id: i64) -> Result<Vec<i64>, Self::Error> {
        self.check()?;
        Ok(self
            .placements
            .iter()
            .filter(|(r, _)| *r == recruiter_id)
            .map(|(_, job)| *job)
            .collect())
    }

    fn recruiter_owned_job_ids(&mut self, recruiter_id: i64) -> Result<Vec<i64>, Self::Error> {
        self.check()?;
        Ok(self.owned_jobs.get(&recruiter_id).cloned().unwrap_or_default())
    }

    fn company(&mut self, company_id: i64) -> Result<Option<CompanyRef>, Self::Error> {
        self.check()?;
        Ok(self.companies.iter().find(|c| c.id == company_id).copied())
    }

    fn recruiter_can_manage_company(
        &mut self,
        recruiter_id: i64,
        company_id: i64,
    ) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.managing.contains(&(recruiter_id, company_id)))
    }
}

pub fn create_test_lookups() -> InMemoryLookups {
    InMemoryLookups {
        companies: vec![
            CompanyRef {
                id: 10,
                identity_organization_id: Some(1),
            },
            CompanyRef {
                id: 11,
                identity_organization_id: Some(1),
            },
            CompanyRef {
                id: 20,
                identity_organization_id: Some(2),
            },
        ],
        ..InMemoryLookups::default()
    }
}

pub fn admin_context() -> AccessContext {
    AccessContext {
        identity_user_id: Some(1),
        is_platform_admin: true,
        ..AccessContext::unknown(String::from("user_admin"))
    }
}

pub fn recruiter_context(recruiter_id: i64) -> AccessContext {
    AccessContext {
        identity_user_id: Some(100 + recruiter_id),
        recruiter_id: Some(recruiter_id),
        ..AccessContext::unknown(format!("user_recruiter_{recruiter_id}"))
    }
}

pub fn company_context(identity_user_id: i64, organization_ids: Vec<i64>) -> AccessContext {
    AccessContext {
        identity_user_id: Some(identity_user_id),
        organization_ids,
        ..AccessContext::unknown(format!("user_company_{identity_user_id}"))
    }
}

pub fn normalized(filters: &JobListFilters) -> NormalizedFilters {
    filters.normalize().unwrap()
}
