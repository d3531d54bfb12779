// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod identity;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use splits_api::{
    ApiError, ApiResult, CreateJobRequest, DeleteJobResponse, GetJobRequest, JobIncludes,
    JobResponse, ListJobsRequest, ListJobsResponse, UpdateJobRequest, create_job, delete_job,
    get_job, list_job_events, list_jobs, require_caller, resolve_caller, update_job,
};
use splits_events::{EventPublisher, TracingPublisher, publish_all};
use splits_persistence::{DEMO_SEED_JSON, JobEventRecord, Persistence, SeedData};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::identity::CallerHeaders;

/// Splits Network jobs service - HTTP server for `/api/v2/jobs`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seed document to load at startup: a JSON file path, or `demo` for the
    /// built-in demo network
    #[arg(short, long)]
    seed: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

/// Application state shared across handlers.
///
/// Persistence sits behind a Mutex; every request takes the lock for the
/// duration of its database work and releases it before publishing events.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
    /// Receives lifecycle events after they reach the outbox.
    publisher: Arc<dyn EventPublisher>,
}

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: ErrorBody {
                message: self.message,
            },
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. }
            | ApiError::DomainRuleViolation { .. }
            | ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

/// Hands the events of a completed write to the publisher.
fn publish<T>(app_state: &AppState, result: &ApiResult<T>) {
    let published: usize = publish_all(app_state.publisher.as_ref(), &result.events);
    info!(
        emitted = result.events.len(),
        published, "Published job events"
    );
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET `/api/v2/jobs`.
///
/// Lists the jobs visible to the caller; anonymous callers see active jobs.
async fn handle_list_jobs(
    AxumState(app_state): AxumState<AppState>,
    caller: CallerHeaders,
    query: Result<Query<ListJobsRequest>, QueryRejection>,
) -> Result<Json<ListJobsResponse>, HttpError> {
    let Query(request) = query?;
    info!(
        clerk_user_id = ?caller.clerk_user_id,
        page = ?request.page,
        limit = ?request.limit,
        "Handling list_jobs request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let context = resolve_caller(&mut persistence, caller.clerk_user_id.as_deref())?;
    let response: ListJobsResponse = list_jobs(&mut persistence, context.as_ref(), request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/v2/jobs/{id}`.
async fn handle_get_job(
    AxumState(app_state): AxumState<AppState>,
    caller: CallerHeaders,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<GetJobRequest>, QueryRejection>,
) -> Result<Json<DataResponse<JobResponse>>, HttpError> {
    let Path(job_id) = path?;
    let Query(request) = query?;
    info!(
        job_id,
        clerk_user_id = ?caller.clerk_user_id,
        include = ?request.include,
        "Handling get_job request"
    );

    let includes: JobIncludes = JobIncludes::parse(request.include.as_deref());
    let mut persistence = app_state.persistence.lock().await;
    let context = resolve_caller(&mut persistence, caller.clerk_user_id.as_deref())?;
    let response: JobResponse = get_job(&mut persistence, context.as_ref(), job_id, includes)?;
    drop(persistence);

    Ok(Json(DataResponse { data: response }))
}

/// Handler for POST `/api/v2/jobs`.
async fn handle_create_job(
    AxumState(app_state): AxumState<AppState>,
    caller: CallerHeaders,
    body: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<JobResponse>>), HttpError> {
    let Json(request) = body?;
    info!(
        clerk_user_id = ?caller.clerk_user_id,
        company_id = ?request.company_id,
        "Handling create_job request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let context = require_caller(&mut persistence, caller.clerk_user_id.as_deref())?;
    let result: ApiResult<JobResponse> = create_job(&mut persistence, &context, &request)?;
    drop(persistence);

    publish(&app_state, &result);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: result.response,
        }),
    ))
}

/// Handler for PATCH `/api/v2/jobs/{id}`.
async fn handle_update_job(
    AxumState(app_state): AxumState<AppState>,
    caller: CallerHeaders,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateJobRequest>, JsonRejection>,
) -> Result<Json<DataResponse<JobResponse>>, HttpError> {
    let Path(job_id) = path?;
    let Json(request) = body?;
    info!(
        job_id,
        clerk_user_id = ?caller.clerk_user_id,
        user_role = ?caller.user_role,
        "Handling update_job request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let context = require_caller(&mut persistence, caller.clerk_user_id.as_deref())?;
    let result: ApiResult<JobResponse> = update_job(
        &mut persistence,
        &context,
        job_id,
        &request,
        caller.user_role.as_deref(),
    )?;
    drop(persistence);

    publish(&app_state, &result);
    Ok(Json(DataResponse {
        data: result.response,
    }))
}

/// Handler for DELETE `/api/v2/jobs/{id}`.
async fn handle_delete_job(
    AxumState(app_state): AxumState<AppState>,
    caller: CallerHeaders,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DataResponse<DeleteJobResponse>>, HttpError> {
    let Path(job_id) = path?;
    info!(
        job_id,
        clerk_user_id = ?caller.clerk_user_id,
        "Handling delete_job request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let context = require_caller(&mut persistence, caller.clerk_user_id.as_deref())?;
    let result: ApiResult<DeleteJobResponse> = delete_job(&mut persistence, &context, job_id)?;
    drop(persistence);

    publish(&app_state, &result);
    Ok(Json(DataResponse {
        data: result.response,
    }))
}

/// Handler for GET `/api/v2/jobs/{id}/events`.
///
/// Platform admins only.
async fn handle_list_job_events(
    AxumState(app_state): AxumState<AppState>,
    caller: CallerHeaders,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DataResponse<Vec<JobEventRecord>>>, HttpError> {
    let Path(job_id) = path?;
    info!(
        job_id,
        clerk_user_id = ?caller.clerk_user_id,
        "Handling list_job_events request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let context = require_caller(&mut persistence, caller.clerk_user_id.as_deref())?;
    let events: Vec<JobEventRecord> = list_job_events(&mut persistence, &context, job_id)?;
    drop(persistence);

    Ok(Json(DataResponse { data: events }))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/api/v2/jobs",
            get(handle_list_jobs).post(handle_create_job),
        )
        .route(
            "/api/v2/jobs/{id}",
            get(handle_get_job)
                .patch(handle_update_job)
                .delete(handle_delete_job),
        )
        .route("/api/v2/jobs/{id}/events", get(handle_list_job_events))
        .with_state(app_state)
}

fn init_tracing(log_json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Loads a seed document named on the command line.
fn load_seed(persistence: &mut Persistence, seed: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json: String = if seed == "demo" {
        DEMO_SEED_JSON.to_string()
    } else {
        std::fs::read_to_string(seed)?
    };
    let seed_data: SeedData = SeedData::from_json(&json)?;
    persistence.load_seed(&seed_data)?;
    info!(seed, "Seed loaded");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();
    init_tracing(args.log_json);

    info!("Initializing Splits jobs server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let Some(seed) = &args.seed {
        load_seed(&mut persistence, seed)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        publisher: Arc::new(TracingPublisher),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
