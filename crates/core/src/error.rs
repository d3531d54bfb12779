// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use splits_domain::DomainError;

/// Errors that can occur while scoping or authorizing job access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The caller may not act on the target company.
    Forbidden(String),
    /// The target company does not exist.
    CompanyNotFound(i64),
    /// A collaborator lookup failed.
    LookupFailed(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            Self::CompanyNotFound(id) => write!(f, "Company {id} not found"),
            Self::LookupFailed(msg) => write!(f, "Lookup failed: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
