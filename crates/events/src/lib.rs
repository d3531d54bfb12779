// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job lifecycle events.
//!
//! Every successful job mutation produces one or more events. Events carry
//! the actor who caused them and a JSON payload, and are handed to an
//! [`EventPublisher`] on a fire-and-forget basis.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod publisher;

pub use publisher::{
    EventPublisher, NoopPublisher, PublishError, PublishedEvent, RecordingPublisher,
    TracingPublisher, publish_all,
};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use splits_domain::JobStatus;

/// Represents the entity performing an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The external identity id of the caller (the Clerk user id).
    pub id: String,
    /// The scope the caller acted under (e.g., "`platform_admin`", "recruiter").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The external identity id of the caller
    /// * `actor_type` - The scope the caller acted under
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// A job lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    /// A job was created.
    Created {
        job_id: i64,
        company_id: i64,
        status: JobStatus,
        actor: Actor,
    },
    /// One or more fields of a job changed.
    Updated {
        job_id: i64,
        /// Names of the fields present in the update, in column order.
        changed_fields: Vec<String>,
        actor: Actor,
    },
    /// A job moved to a different status.
    StatusChanged {
        job_id: i64,
        previous_status: JobStatus,
        new_status: JobStatus,
        actor: Actor,
    },
    /// A job was soft-deleted.
    Deleted { job_id: i64, actor: Actor },
}

impl JobEvent {
    pub const CREATED: &'static str = "job.created";
    pub const UPDATED: &'static str = "job.updated";
    pub const STATUS_CHANGED: &'static str = "job.status_changed";
    pub const DELETED: &'static str = "job.deleted";

    /// Returns the published event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Created { .. } => Self::CREATED,
            Self::Updated { .. } => Self::UPDATED,
            Self::StatusChanged { .. } => Self::STATUS_CHANGED,
            Self::Deleted { .. } => Self::DELETED,
        }
    }

    /// Returns the id of the job this event concerns.
    #[must_use]
    pub const fn job_id(&self) -> i64 {
        match self {
            Self::Created { job_id, .. }
            | Self::Updated { job_id, .. }
            | Self::StatusChanged { job_id, .. }
            | Self::Deleted { job_id, .. } => *job_id,
        }
    }

    /// Returns the actor who caused this event.
    #[must_use]
    pub const fn actor(&self) -> &Actor {
        match self {
            Self::Created { actor, .. }
            | Self::Updated { actor, .. }
            | Self::StatusChanged { actor, .. }
            | Self::Deleted { actor, .. } => actor,
        }
    }

    /// Builds the JSON payload handed to publishers.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Created {
                job_id,
                company_id,
                status,
                actor,
            } => json!({
                "job_id": job_id,
                "company_id": company_id,
                "status": status.as_str(),
                "created_by": actor.id,
            }),
            Self::Updated {
                job_id,
                changed_fields,
                actor,
            } => json!({
                "job_id": job_id,
                "changed_fields": changed_fields,
                "updated_by": actor.id,
            }),
            Self::StatusChanged {
                job_id,
                previous_status,
                new_status,
                actor,
            } => json!({
                "job_id": job_id,
                "previous_status": previous_status.as_str(),
                "new_status": new_status.as_str(),
                "changed_by": actor.id,
            }),
            Self::Deleted { job_id, actor } => json!({
                "job_id": job_id,
                "deleted_by": actor.id,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_actor() -> Actor {
        Actor::new(String::from("user_2abc"), String::from("company_user"))
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = create_test_actor();

        assert_eq!(actor.id, "user_2abc");
        assert_eq!(actor.actor_type, "company_user");
    }

    #[test]
    fn test_event_names() {
        let actor = create_test_actor();
        let created = JobEvent::Created {
            job_id: 1,
            company_id: 2,
            status: JobStatus::Draft,
            actor: actor.clone(),
        };
        let deleted = JobEvent::Deleted { job_id: 1, actor };

        assert_eq!(created.name(), "job.created");
        assert_eq!(deleted.name(), "job.deleted");
    }

    #[test]
    fn test_status_changed_payload() {
        let event = JobEvent::StatusChanged {
            job_id: 9,
            previous_status: JobStatus::Draft,
            new_status: JobStatus::Active,
            actor: create_test_actor(),
        };

        assert_eq!(event.name(), "job.status_changed");
        assert_eq!(event.job_id(), 9);
        assert_eq!(
            event.payload(),
            json!({
                "job_id": 9,
                "previous_status": "draft",
                "new_status": "active",
                "changed_by": "user_2abc",
            })
        );
    }

    #[test]
    fn test_updated_payload_lists_changed_fields() {
        let event = JobEvent::Updated {
            job_id: 4,
            changed_fields: vec![String::from("title"), String::from("salary_max")],
            actor: create_test_actor(),
        };

        assert_eq!(event.payload()["changed_fields"], json!(["title", "salary_max"]));
        assert_eq!(event.payload()["updated_by"], json!("user_2abc"));
        assert_eq!(event.actor().actor_type, "company_user");
    }
}
