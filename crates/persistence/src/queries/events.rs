// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::JobEventRecord;
use crate::diesel_schema::job_events;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = job_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct JobEventRow {
    event_id: i64,
    job_id: i64,
    event_name: String,
    actor_id: String,
    actor_type: String,
    payload_json: String,
    created_at: String,
}

/// Lists the outbox entries for a job in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails or a payload cannot be
/// deserialized.
pub fn list_job_events(
    conn: &mut SqliteConnection,
    job_id: i64,
) -> Result<Vec<JobEventRecord>, PersistenceError> {
    let rows: Vec<JobEventRow> = job_events::table
        .filter(job_events::job_id.eq(job_id))
        .order(job_events::event_id.asc())
        .select(JobEventRow::as_select())
        .load(conn)?;

    debug!(job_id, count = rows.len(), "Loaded job events");

    rows.into_iter()
        .map(|row| {
            Ok(JobEventRecord {
                event_id: row.event_id,
                job_id: row.job_id,
                event_name: row.event_name,
                actor_id: row.actor_id,
                actor_type: row.actor_type,
                payload: serde_json::from_str(&row.payload_json)?,
                created_at: row.created_at,
            })
        })
        .collect()
}
