// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use splits_events::EventPublisher;
use splits_persistence::{DEMO_SEED_JSON, Persistence, SeedData};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::{AppState, build_router};

/// Helper to create test app state with the demo network loaded.
pub fn create_test_app_state(publisher: Arc<dyn EventPublisher>) -> AppState {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    let seed = SeedData::from_json(DEMO_SEED_JSON).unwrap();
    persistence.load_seed(&seed).unwrap();
    AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        publisher,
    }
}

/// Sends a request through the router and decodes the JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    clerk_user_id: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_as_role(app, method, uri, clerk_user_id, None, body).await
}

pub async fn send_as_role(
    app: &Router,
    method: &str,
    uri: &str,
    clerk_user_id: Option<&str>,
    user_role: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = clerk_user_id {
        builder = builder.header("x-clerk-user-id", id);
    }
    if let Some(role) = user_role {
        builder = builder.header("x-user-role", role);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub fn build_test_router(publisher: Arc<dyn EventPublisher>) -> Router {
    build_router(create_test_app_state(publisher))
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|job| job["id"].as_i64().unwrap())
        .collect()
}
