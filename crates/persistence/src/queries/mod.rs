// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `jobs` — job lookup and scoped listing
//! - `identity` — caller access context resolution
//! - `scope` — the lookups behind access scoping and management checks
//! - `events` — the job event outbox

pub mod events;
pub mod identity;
pub mod jobs;
pub mod scope;
