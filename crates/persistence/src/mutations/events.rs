// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use splits_events::JobEvent;
use tracing::debug;

use super::current_timestamp;
use crate::diesel_schema::job_events;
use crate::error::PersistenceError;

/// Appends events to the outbox in order, returning their ids.
///
/// # Errors
///
/// Returns an error if serialization or any insert fails; nothing is
/// written in that case.
pub fn append_job_events(
    conn: &mut SqliteConnection,
    events: &[JobEvent],
) -> Result<Vec<i64>, PersistenceError> {
    let now: String = current_timestamp()?;

    conn.transaction(|conn| {
        let mut ids: Vec<i64> = Vec::with_capacity(events.len());
        for event in events {
            let payload_json: String = serde_json::to_string(&event.payload())?;
            let event_id: i64 = diesel::insert_into(job_events::table)
                .values((
                    job_events::job_id.eq(event.job_id()),
                    job_events::event_name.eq(event.name()),
                    job_events::actor_id.eq(&event.actor().id),
                    job_events::actor_type.eq(&event.actor().actor_type),
                    job_events::payload_json.eq(&payload_json),
                    job_events::created_at.eq(&now),
                ))
                .returning(job_events::event_id)
                .get_result(conn)?;
            debug!(event_id, event = event.name(), "Appended job event");
            ids.push(event_id);
        }
        Ok(ids)
    })
}
