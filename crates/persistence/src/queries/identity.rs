// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity resolution.

use diesel::SqliteConnection;
use diesel::prelude::*;
use splits_core::AccessContext;
use splits_domain::UserRole;
use tracing::{debug, warn};

use crate::diesel_schema::{candidates, memberships, recruiters, users};
use crate::error::PersistenceError;

/// Recruiter record status that grants recruiter access.
pub const ACTIVE_RECRUITER_STATUS: &str = "active";

/// Builds the access context for an external caller id.
///
/// An unknown caller resolves to an empty context rather than an error.
///
/// # Errors
///
/// Returns an error if any of the database queries fail.
pub fn resolve_access_context(
    conn: &mut SqliteConnection,
    clerk_user_id: &str,
) -> Result<AccessContext, PersistenceError> {
    let user: Option<(i64, i32)> = users::table
        .filter(users::clerk_user_id.eq(clerk_user_id))
        .select((users::user_id, users::is_platform_admin))
        .first(conn)
        .optional()?;

    let Some((user_id, is_platform_admin_flag)) = user else {
        debug!(clerk_user_id, "Caller has no identity record");
        return Ok(AccessContext::unknown(clerk_user_id.to_string()));
    };

    let membership_rows: Vec<(i64, String)> = memberships::table
        .filter(memberships::user_id.eq(user_id))
        .select((memberships::organization_id, memberships::role))
        .order(memberships::membership_id.asc())
        .load(conn)?;

    let mut organization_ids: Vec<i64> = Vec::new();
    let mut roles: Vec<UserRole> = Vec::new();
    for (organization_id, role) in membership_rows {
        if !organization_ids.contains(&organization_id) {
            organization_ids.push(organization_id);
        }
        match role.parse::<UserRole>() {
            Ok(role) if !roles.contains(&role) => roles.push(role),
            Ok(_) => {}
            Err(e) => warn!(user_id, error = %e, "Ignoring unknown membership role"),
        }
    }

    let recruiter_id: Option<i64> = recruiters::table
        .filter(recruiters::user_id.eq(user_id))
        .filter(recruiters::status.eq(ACTIVE_RECRUITER_STATUS))
        .select(recruiters::recruiter_id)
        .first(conn)
        .optional()?;
    if recruiter_id.is_some() {
        roles.push(UserRole::Recruiter);
    }

    let candidate_id: Option<i64> = candidates::table
        .filter(candidates::user_id.eq(user_id))
        .select(candidates::candidate_id)
        .first(conn)
        .optional()?;
    if candidate_id.is_some() {
        roles.push(UserRole::Candidate);
    }

    let is_platform_admin: bool =
        is_platform_admin_flag != 0 || roles.contains(&UserRole::PlatformAdmin);

    debug!(
        user_id,
        is_platform_admin,
        ?recruiter_id,
        organizations = organization_ids.len(),
        "Resolved access context"
    );

    Ok(AccessContext {
        clerk_user_id: clerk_user_id.to_string(),
        identity_user_id: Some(user_id),
        candidate_id,
        recruiter_id,
        organization_ids,
        roles,
        is_platform_admin,
    })
}

/// Returns true if an identity user with this id exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn identity_user_exists(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<bool, PersistenceError> {
    let matches: i64 = users::table
        .filter(users::user_id.eq(user_id))
        .count()
        .get_result(conn)?;
    Ok(matches > 0)
}

/// Returns true if a recruiter with this id exists, whatever its status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recruiter_exists(
    conn: &mut SqliteConnection,
    recruiter_id: i64,
) -> Result<bool, PersistenceError> {
    let matches: i64 = recruiters::table
        .filter(recruiters::recruiter_id.eq(recruiter_id))
        .count()
        .get_result(conn)?;
    Ok(matches > 0)
}
