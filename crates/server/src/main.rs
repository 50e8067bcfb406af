// Copyright (C) 2026 Fred Clausen
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
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use escala_api::{
    ApiError, CreateOverrideRequest, DayScheduleResponse, EmployeeResponse,
    MonthScheduleResponse, OverrideResponse, create_override, day_schedule, delete_override,
    eligible_employees, import_roster_csv, list_overrides, list_roster, month_schedule,
};
use escala_domain::{Employee, ScheduleOverride};
use escala_persistence::{OverrideStore, RemoteConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Escala Server - HTTP server for the Escala work-status engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the roster CSV file
    #[arg(short, long)]
    roster: String,

    /// Path to the local override cache file
    #[arg(short, long, default_value = "overrides.json")]
    cache: String,

    /// Base URL of the remote override document store
    #[arg(long)]
    remote_url: Option<String>,

    /// Master key for the remote override document store
    #[arg(long)]
    remote_key: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The roster is immutable configuration; the store takes `&self` for all
/// operations, so neither needs a lock.
#[derive(Clone)]
struct AppState {
    /// The override store.
    store: Arc<OverrideStore>,
    /// The configured roster.
    roster: Arc<Vec<Employee>>,
}

/// API response for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteResponse {
    /// Success indicator.
    success: bool,
    /// A success message.
    message: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/schedule/{date}` endpoint.
///
/// Returns the roster partitioned by resolved status for one date.
async fn handle_day_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayScheduleResponse>, HttpError> {
    info!(date = %date, "Handling day_schedule request");

    let overrides: Vec<ScheduleOverride> = app_state.store.load().await;
    let response: DayScheduleResponse = day_schedule(&app_state.roster, &date, &overrides)?;

    Ok(Json(response))
}

/// Handler for GET `/schedule/month/{year}/{month}` endpoint.
///
/// Returns per-day summaries for a calendar month.
async fn handle_month_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<MonthScheduleResponse>, HttpError> {
    info!(year = year, month = month, "Handling month_schedule request");

    let overrides: Vec<ScheduleOverride> = app_state.store.load().await;
    let response: MonthScheduleResponse =
        month_schedule(&app_state.roster, year, month, &overrides)?;

    Ok(Json(response))
}

/// Handler for GET `/eligible/{kind}/{date}` endpoint.
///
/// Lists the employees for whom creating an override of the given kind on
/// the given date is legal.
async fn handle_eligible(
    AxumState(app_state): AxumState<AppState>,
    Path((kind, date)): Path<(String, String)>,
) -> Result<Json<Vec<EmployeeResponse>>, HttpError> {
    info!(kind = %kind, date = %date, "Handling eligible request");

    let overrides: Vec<ScheduleOverride> = app_state.store.load().await;
    let response: Vec<EmployeeResponse> =
        eligible_employees(&kind, &date, &app_state.roster, &overrides)?;

    Ok(Json(response))
}

/// Handler for GET `/overrides` endpoint.
///
/// Lists the current override collection.
async fn handle_list_overrides(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<OverrideResponse>> {
    info!("Handling list_overrides request");

    Json(list_overrides(&app_state.store).await)
}

/// Handler for POST `/overrides` endpoint.
///
/// Creates a new override after validating the creation rules.
async fn handle_create_override(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateOverrideRequest>,
) -> Result<Json<OverrideResponse>, HttpError> {
    info!(
        date = %req.date,
        employee = %req.employee_name,
        kind = %req.kind,
        "Handling create_override request"
    );

    let created: OverrideResponse =
        create_override(&app_state.store, &app_state.roster, req).await?;

    Ok(Json(created))
}

/// Handler for DELETE `/overrides/{id}` endpoint.
async fn handle_delete_override(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(id = %id, "Handling delete_override request");

    delete_override(&app_state.store, &id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: format!("Deleted override {id}"),
    }))
}

/// Handler for GET `/roster` endpoint.
///
/// Lists the configured roster with trade glyph names.
async fn handle_roster(AxumState(app_state): AxumState<AppState>) -> Json<Vec<EmployeeResponse>> {
    info!("Handling roster request");

    Json(list_roster(&app_state.roster))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/schedule/{date}", get(handle_day_schedule))
        .route("/schedule/month/{year}/{month}", get(handle_month_schedule))
        .route("/eligible/{kind}/{date}", get(handle_eligible))
        .route("/overrides", get(handle_list_overrides))
        .route("/overrides", post(handle_create_override))
        .route("/overrides/{id}", delete(handle_delete_override))
        .route("/roster", get(handle_roster))
        .with_state(app_state)
}

/// Builds the override store from CLI arguments.
///
/// Remote sync needs both the URL and the master key; if only one is given
/// the server runs local-only and says so.
fn build_store(args: &Args) -> OverrideStore {
    match (&args.remote_url, &args.remote_key) {
        (Some(base_url), Some(master_key)) => {
            info!("Remote override sync enabled against {base_url}");
            OverrideStore::with_remote(
                &args.cache,
                RemoteConfig {
                    base_url: base_url.clone(),
                    master_key: master_key.clone(),
                },
            )
        }
        (None, None) => {
            info!("No remote configured, overrides are local-only");
            OverrideStore::local_only(&args.cache)
        }
        _ => {
            warn!("Remote sync needs both --remote-url and --remote-key, running local-only");
            OverrideStore::local_only(&args.cache)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Escala Server");

    // Load the roster once; it is immutable configuration
    let csv_content: String = std::fs::read_to_string(&args.roster)?;
    let roster: Vec<Employee> = import_roster_csv(&csv_content)?;
    info!(
        "Loaded roster with {} employees from {}",
        roster.len(),
        args.roster
    );

    let store: OverrideStore = build_store(&args);

    let app_state: AppState = AppState {
        store: Arc::new(store),
        roster: Arc::new(roster),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
