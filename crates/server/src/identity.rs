// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity extraction.
//!
//! Authentication happens upstream. The gateway forwards the authenticated
//! Clerk user id in `x-clerk-user-id` and, for company users, the role they
//! act under in `x-user-role`. Both headers are optional here; routes that
//! need an identity enforce it through `splits_api::require_caller`.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use tracing::{debug, warn};

use crate::HttpError;

pub const CLERK_USER_ID_HEADER: &str = "x-clerk-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Identity headers presented with a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerHeaders {
    pub clerk_user_id: Option<String>,
    pub user_role: Option<String>,
}

fn header_value(parts: &Parts, name: &'static str) -> Result<Option<String>, HttpError> {
    let Some(value) = parts.headers.get(name) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| {
        warn!(header = name, "Invalid header encoding");
        HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid {name} header"),
        }
    })?;
    Ok(Some(value.to_string()))
}

impl<S: Send + Sync> FromRequestParts<S> for CallerHeaders {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = Self {
            clerk_user_id: header_value(parts, CLERK_USER_ID_HEADER)?,
            user_role: header_value(parts, USER_ROLE_HEADER)?,
        };
        debug!(
            clerk_user_id = ?headers.clerk_user_id,
            user_role = ?headers.user_role,
            "Extracted caller headers"
        );
        Ok(headers)
    }
}
