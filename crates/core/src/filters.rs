// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use splits_domain::{DomainError, EmploymentType, JobStatus};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 25;
pub const MAX_LIMIT: u32 = 100;

/// Caller-supplied list filters, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobListFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub company_id: Option<i64>,
    pub job_owner_filter: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Columns a job list may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    SalaryMin,
    SalaryMax,
    Status,
}

impl SortField {
    /// Parses a sort column, falling back to `created_at` for anything unknown.
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("updated_at") => Self::UpdatedAt,
            Some("title") => Self::Title,
            Some("salary_min") => Self::SalaryMin,
            Some("salary_max") => Self::SalaryMax,
            Some("status") => Self::Status,
            _ => Self::CreatedAt,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
            Self::SalaryMin => "salary_min",
            Self::SalaryMax => "salary_max",
            Self::Status => "status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses a sort direction, case-insensitively, defaulting to descending.
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// Which jobs a caller wants relative to their own involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobOwnerFilter {
    #[default]
    All,
    /// Only jobs the caller owns or is working on.
    Assigned,
}

impl JobOwnerFilter {
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("assigned") => Self::Assigned,
            _ => Self::All,
        }
    }
}

/// Filters after defaults, clamping and parsing have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFilters {
    pub page: u32,
    pub limit: u32,
    /// Lower-cased search terms; empty when no search was given.
    pub search_terms: Vec<String>,
    pub status: Option<JobStatus>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub company_id: Option<i64>,
    pub job_owner_filter: JobOwnerFilter,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl NormalizedFilters {
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search_terms.is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl JobListFilters {
    /// Applies defaults and parses enumerated filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the status or employment type filter names an
    /// unknown value.
    pub fn normalize(&self) -> Result<NormalizedFilters, DomainError> {
        let status = non_blank(self.status.as_deref())
            .map(str::parse::<JobStatus>)
            .transpose()?;
        let employment_type = non_blank(self.employment_type.as_deref())
            .map(str::parse::<EmploymentType>)
            .transpose()?;

        let search_terms: Vec<String> = self
            .search
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        Ok(NormalizedFilters {
            page: self.page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            search_terms,
            status,
            location: non_blank(self.location.as_deref()).map(str::to_string),
            employment_type,
            company_id: self.company_id,
            job_owner_filter: JobOwnerFilter::parse_or_default(self.job_owner_filter.as_deref()),
            sort_by: SortField::parse_or_default(self.sort_by.as_deref()),
            sort_order: SortOrder::parse_or_default(self.sort_order.as_deref()),
        })
    }
}
