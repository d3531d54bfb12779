// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job status tracking and transition logic.
//!
//! A job moves through a fixed directed graph of statuses. Moving to the
//! status a job already has is not a transition and is never checked.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Posting status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Being written; not visible to recruiters or candidates.
    #[default]
    Draft,
    /// Open and visible on the marketplace.
    Active,
    /// Temporarily not accepting submissions.
    Paused,
    /// Closed without a hire.
    Closed,
    /// Closed with a placement.
    Filled,
}

impl JobStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Active,
        Self::Paused,
        Self::Closed,
        Self::Filled,
    ];

    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Closed => "closed",
            Self::Filled => "filled",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "closed" => Ok(Self::Closed),
            "filled" => Ok(Self::Filled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns true if the transition table permits moving from `self` to `target`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Active | Self::Closed)
                | (Self::Active, Self::Paused | Self::Closed | Self::Filled)
                | (Self::Paused, Self::Active | Self::Closed | Self::Filled)
                | (Self::Closed, Self::Active | Self::Filled)
                | (Self::Filled, Self::Active | Self::Closed)
        )
    }

    /// Validates a transition from this status to another.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the pair is not in
    /// the transition table.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.can_transition_to(new_status) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
            })
        }
    }

    /// Returns true if a new job may be created with this status.
    #[must_use]
    pub const fn is_valid_initial(&self) -> bool {
        matches!(self, Self::Draft | Self::Active)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
