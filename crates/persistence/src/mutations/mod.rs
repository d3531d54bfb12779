// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `jobs` — job creation, guarded updates and soft deletion
//! - `events` — the job event outbox
//! - `seed` — fixture loading for referenced entities

pub mod events;
pub mod jobs;
pub mod seed;

use time::OffsetDateTime;
use time::format_description::FormatItem;

use crate::error::PersistenceError;

/// Fixed-width UTC timestamps so that text ordering matches time ordering.
const TIMESTAMP_FORMAT: &[FormatItem<'_>] = time::macros::format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
);

/// Returns the current UTC time as an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn current_timestamp() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}
