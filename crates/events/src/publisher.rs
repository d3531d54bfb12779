// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event publishing.
//!
//! Publishing is fire-and-forget: a failed publish is logged and never
//! propagated to the request that produced the event.

use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

use crate::JobEvent;

/// Errors a publisher may report.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The downstream broker refused or dropped the event.
    #[error("event broker rejected {event_name}: {reason}")]
    Rejected {
        /// The event that was rejected.
        event_name: String,
        /// Why the broker rejected it.
        reason: String,
    },
    /// The publisher is unusable.
    #[error("event publisher unavailable: {0}")]
    Unavailable(String),
}

/// Sink for job lifecycle events.
pub trait EventPublisher: Send + Sync {
    /// Publishes one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be handed off.
    fn publish(&self, event_name: &str, payload: &Value) -> Result<(), PublishError>;
}

/// Publishes each event in order, logging failures instead of returning them.
///
/// Returns the number of events that were handed off successfully.
pub fn publish_all(publisher: &dyn EventPublisher, events: &[JobEvent]) -> usize {
    let mut published: usize = 0;
    for event in events {
        match publisher.publish(event.name(), &event.payload()) {
            Ok(()) => published += 1,
            Err(e) => {
                warn!(
                    event = event.name(),
                    job_id = event.job_id(),
                    error = %e,
                    "Failed to publish job event"
                );
            }
        }
    }
    published
}

/// Writes every event to the log as a structured line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPublisher;

impl EventPublisher for TracingPublisher {
    fn publish(&self, event_name: &str, payload: &Value) -> Result<(), PublishError> {
        info!(event = event_name, payload = %payload, "Published job event");
        Ok(())
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event_name: &str, _payload: &Value) -> Result<(), PublishError> {
        Ok(())
    }
}

/// An event captured by a [`RecordingPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEvent {
    pub name: String,
    pub payload: Value,
}

/// Keeps published events in memory.
///
/// When constructed with [`RecordingPublisher::failing`] every publish is
/// rejected, which lets callers exercise the fire-and-forget path.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<PublishedEvent>>,
    fail: bool,
}

impl RecordingPublisher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher that rejects every event.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns a copy of everything published so far.
    #[must_use]
    pub fn events(&self) -> Vec<PublishedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the names of everything published so far, in order.
    #[must_use]
    pub fn event_names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event_name: &str, payload: &Value) -> Result<(), PublishError> {
        if self.fail {
            return Err(PublishError::Rejected {
                event_name: event_name.to_string(),
                reason: String::from("recording publisher configured to fail"),
            });
        }
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(PublishedEvent {
                name: event_name.to_string(),
                payload: payload.clone(),
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Actor;
    use splits_domain::JobStatus;

    fn create_test_events() -> Vec<JobEvent> {
        let actor = Actor::new(String::from("user_admin"), String::from("platform_admin"));
        vec![
            JobEvent::StatusChanged {
                job_id: 3,
                previous_status: JobStatus::Draft,
                new_status: JobStatus::Active,
                actor: actor.clone(),
            },
            JobEvent::Updated {
                job_id: 3,
                changed_fields: vec![String::from("status")],
                actor,
            },
        ]
    }

    #[test]
    fn test_recording_publisher_keeps_order() {
        let publisher = RecordingPublisher::new();
        let published = publish_all(&publisher, &create_test_events());

        assert_eq!(published, 2);
        assert_eq!(
            publisher.event_names(),
            vec!["job.status_changed", "job.updated"]
        );
        assert_eq!(publisher.events()[0].payload["new_status"], "active");
    }

    #[test]
    fn test_failures_are_swallowed() {
        let publisher = RecordingPublisher::failing();
        let published = publish_all(&publisher, &create_test_events());

        assert_eq!(published, 0);
        assert!(publisher.events().is_empty());
    }

    #[test]
    fn test_tracing_and_noop_publishers_accept_everything() {
        assert_eq!(publish_all(&TracingPublisher, &create_test_events()), 2);
        assert_eq!(publish_all(&NoopPublisher, &create_test_events()), 2);
    }
}
