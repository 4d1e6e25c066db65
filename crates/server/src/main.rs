// Copyright (C) 2026 The shift-sched authors
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

use axum::{
    Json, Router,
    extract::{Query, State as AxumState, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde_json::Value;
use shift_sched::CommandResult;
use shift_sched_api::{
    ApiError, EmployeeRegistry, HttpEmployeeRegistry, LoginRequest, OrganizationQuery,
    RegisterEmployeeRequest, SeedData, SeededOrganization, ShiftRequest, StatusResponse,
    add_shift, get_organization_info, get_shift, login, register_employee, remove_shift, seed,
};
use shift_sched_persistence::Persistence;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Body of `/`, `/index` and `/home`.
const WELCOME_MESSAGE: &str =
    "Welcome, in order to make an API call direct your browser or Postman to an endpoint.";

/// shift-sched server - HTTP server for employee shift scheduling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[cfg(feature = "mysql")]
    #[arg(long)]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Base URL of the employee registry service
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    registry_url: String,

    /// JSON file of organizations and employees to create at startup
    #[arg(long)]
    seed: Option<String>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The scheduling store, serialized behind a mutex.
    persistence: Arc<Mutex<Persistence>>,
    /// The external employee registry.
    registry: Arc<dyn EmployeeRegistry>,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The client-facing message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(StatusResponse::failed(self.message))).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.message().to_string(),
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(rejection = %rejection, "Rejected malformed query parameters");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Pairs a command result with its status code.
fn command_response(
    result: CommandResult,
    success: StatusCode,
) -> (StatusCode, Json<CommandResult>) {
    let status: StatusCode = if result.is_success() {
        success
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(result))
}

/// Handler for GET `/`, `/index` and `/home`.
async fn handle_index() -> &'static str {
    WELCOME_MESSAGE
}

/// Handler for POST `/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<LoginRequest>, QueryRejection>,
) -> Result<Json<StatusResponse>, HttpError> {
    let Query(req) = query?;
    info!(eid = %req.eid, "Handling login request");
    let response: StatusResponse = login(app_state.registry.as_ref(), &req).await?;
    Ok(Json(response))
}

/// Handler for POST `/register`.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<RegisterEmployeeRequest>, QueryRejection>,
) -> Result<(StatusCode, Json<StatusResponse>), HttpError> {
    let Query(req) = query?;
    info!(
        department_id = req.department_id,
        position = %req.position,
        "Handling register request"
    );
    let response: StatusResponse = register_employee(app_state.registry.as_ref(), &req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/getOrgInfo`.
async fn handle_get_org_info(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<OrganizationQuery>, QueryRejection>,
) -> Result<Json<Value>, HttpError> {
    let Query(req) = query?;
    let document: Value = get_organization_info(app_state.registry.as_ref(), &req).await?;
    Ok(Json(document))
}

/// Handler for POST `/addShift`.
///
/// 201 when the shift was added, 400 with the failed result otherwise.
async fn handle_add_shift(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ShiftRequest>, QueryRejection>,
) -> Result<(StatusCode, Json<CommandResult>), HttpError> {
    let Query(req) = query?;
    info!(
        employee_id = req.employee_id,
        day_of_week = req.day_of_week,
        time_slot = req.time_slot,
        "Handling add_shift request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: CommandResult = add_shift(&mut *persistence, &req)?;
    drop(persistence);

    if !result.is_success() {
        warn!(message = %result.message, "add_shift failed");
    }
    Ok(command_response(result, StatusCode::CREATED))
}

/// Handler for GET `/getShift`.
async fn handle_get_shift(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<OrganizationQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<CommandResult>), HttpError> {
    let Query(req) = query?;
    let mut persistence = app_state.persistence.lock().await;
    let result: CommandResult = get_shift(&mut *persistence, &req)?;
    drop(persistence);

    Ok(command_response(result, StatusCode::OK))
}

/// Handler for DELETE `/removeShift`.
async fn handle_remove_shift(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ShiftRequest>, QueryRejection>,
) -> Result<(StatusCode, Json<CommandResult>), HttpError> {
    let Query(req) = query?;
    info!(
        employee_id = req.employee_id,
        day_of_week = req.day_of_week,
        time_slot = req.time_slot,
        "Handling remove_shift request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: CommandResult = remove_shift(&mut *persistence, &req)?;
    drop(persistence);

    Ok(command_response(result, StatusCode::OK))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/index", get(handle_index))
        .route("/home", get(handle_index))
        .route("/login", post(handle_login))
        .route("/register", post(handle_register))
        .route("/getOrgInfo", get(handle_get_org_info))
        .route("/addShift", post(handle_add_shift))
        .route("/getShift", get(handle_get_shift))
        .route("/removeShift", delete(handle_remove_shift))
        .with_state(app_state)
}

/// Opens the store selected on the command line.
fn open_persistence(args: &Args) -> Result<Persistence, Box<dyn std::error::Error>> {
    #[cfg(feature = "mysql")]
    {
        if let Some(url) = &args.mysql_url {
            info!("Using MySQL/MariaDB database");
            return Ok(Persistence::new_with_mysql(url)?);
        }
    }

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing shift-sched server");

    let mut persistence: Persistence = open_persistence(&args)?;

    if let Some(seed_path) = &args.seed {
        let contents: String = std::fs::read_to_string(seed_path)?;
        let data: SeedData = serde_json::from_str(&contents)?;
        let seeded: Vec<SeededOrganization> = seed(&mut persistence, &data)?;
        for organization in &seeded {
            info!(
                name = %organization.organization.name,
                cid = %organization.cid,
                employees = organization.employees.len(),
                "Organization available"
            );
        }
    }

    info!(registry_url = %args.registry_url, "Using employee registry");
    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        registry: Arc::new(HttpEmployeeRegistry::new(&args.registry_url)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
