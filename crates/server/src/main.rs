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
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{Datelike, Utc};
use clap::Parser;
use plant_kpi_api::{
    ApiError, CoverageRequest, CoverageResponse, EvidenceAttachment, EvidencePolicy,
    LogTailRequest, LogTailResponse, MatrixRequest, MatrixResponse, RankingRequest,
    RankingResponse, SubmitInspectionRequest, SubmitInspectionResponse, get_compliance_matrix,
    get_coverage_summary, get_log_tail, get_ranking, submit_inspection,
};
use plant_kpi_domain::{PLANT_TZ, Roster};
use plant_kpi_storage::{
    CsvEventLog, DirFileStore, EventLog, FileStore, MemoryEventLog, MemoryFileStore, load_roster,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Plant KPI Server - HTTP server for the inspection compliance dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON roster configuration file.
    #[arg(short, long)]
    roster: String,

    /// Path to the CSV event log file. If not provided, uses an in-memory log.
    #[arg(short, long)]
    log: Option<String>,

    /// Directory for evidence file backups. If not provided, uses an
    /// in-memory store.
    #[arg(short, long)]
    evidence_dir: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The collaborators sit behind Mutexes to allow safe concurrent access;
/// appends from concurrent sessions simply interleave, which is fine
/// because aggregation is order-independent.
#[derive(Clone)]
struct AppState {
    /// The roster, loaded once at startup.
    roster: Arc<Roster>,
    /// The evidence file policy.
    policy: Arc<EvidencePolicy>,
    /// The event log collaborator.
    log: Arc<Mutex<Box<dyn EventLog + Send>>>,
    /// The file store collaborator.
    store: Arc<Mutex<Box<dyn FileStore + Send>>>,
}

/// HTTP request body for recording an inspection.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SubmitInspectionHttpRequest {
    /// The inspector performing the inspection.
    inspector: String,
    /// The zone or machine that was inspected.
    zone: String,
    /// Optional evidence attachment.
    evidence: Option<EvidenceHttpAttachment>,
}

/// An evidence attachment as carried over HTTP.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct EvidenceHttpAttachment {
    /// The original file name.
    file_name: String,
    /// The declared content type.
    mime_type: String,
    /// The file content, base64-encoded.
    content_base64: String,
}

/// Query parameters for the matrix view.
#[derive(Debug, Clone, Deserialize)]
struct MatrixQuery {
    /// The row axis ("inspectors" or "zones"). Defaults to "inspectors".
    axis: Option<String>,
    /// The year filter. Defaults to the current plant-zone year.
    year: Option<u16>,
    /// The cell mode. Defaults to "percent" for inspectors and "status"
    /// for zones.
    mode: Option<String>,
}

/// Query parameters for the coverage and ranking views.
#[derive(Debug, Clone, Deserialize)]
struct MonthQuery {
    /// The target month (1-12). Defaults to the current plant-zone month.
    month: Option<u8>,
    /// The year filter. Defaults to the current plant-zone year.
    year: Option<u16>,
}

/// Query parameters for the log tail view.
#[derive(Debug, Clone, Deserialize)]
struct TailQuery {
    /// Maximum number of entries to return.
    limit: Option<usize>,
}

/// JSON body returned for any failed request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Always true.
    error: bool,
    /// A human-readable error message.
    message: String,
}

/// JSON body for the health endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct HealthResponse {
    /// Always "ok".
    status: String,
}

/// An HTTP-mapped error.
struct HttpError {
    status: StatusCode,
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
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::EvidencePolicyViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::UploadQuotaExceeded { .. } => Self {
                status: StatusCode::INSUFFICIENT_STORAGE,
                message: err.to_string(),
            },
            ApiError::LogReadFailed { .. }
            | ApiError::LogWriteFailed { .. }
            | ApiError::UploadFailed { .. }
            | ApiError::Internal { .. } => {
                error!(error = %err, "Collaborator error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Returns the current year in the plant time zone.
fn current_plant_year() -> u16 {
    u16::try_from(Utc::now().with_timezone(&PLANT_TZ).year()).unwrap_or_default()
}

/// Returns the current month (1-12) in the plant time zone.
fn current_plant_month() -> u8 {
    u8::try_from(Utc::now().with_timezone(&PLANT_TZ).month()).unwrap_or(1)
}

/// The mode the dashboard pairs with each axis by default: quota
/// percentages for inspectors, readiness statuses for zones.
fn default_mode_for(axis: &str) -> String {
    if axis == "zones" {
        String::from("status")
    } else {
        String::from("percent")
    }
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

async fn handle_submit_inspection(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<SubmitInspectionHttpRequest>,
) -> Result<Json<SubmitInspectionResponse>, HttpError> {
    let evidence: Option<EvidenceAttachment> = match request.evidence {
        Some(attachment) => {
            let bytes: Vec<u8> =
                BASE64
                    .decode(attachment.content_base64.as_bytes())
                    .map_err(|err| HttpError {
                        status: StatusCode::BAD_REQUEST,
                        message: format!("Evidence content is not valid base64: {err}"),
                    })?;
            Some(EvidenceAttachment {
                file_name: attachment.file_name,
                mime_type: attachment.mime_type,
                bytes,
            })
        }
        None => None,
    };

    let api_request: SubmitInspectionRequest = SubmitInspectionRequest {
        inspector: request.inspector,
        zone: request.zone,
        evidence,
    };
    let now = Utc::now().with_timezone(&PLANT_TZ);

    let mut log = state.log.lock().await;
    let mut store = state.store.lock().await;
    let response: SubmitInspectionResponse = submit_inspection(
        &mut *log,
        &mut *store,
        &state.roster,
        &state.policy,
        api_request,
        now,
    )?;
    Ok(Json(response))
}

async fn handle_get_matrix(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MatrixQuery>,
) -> Result<Json<MatrixResponse>, HttpError> {
    let axis: String = query.axis.unwrap_or_else(|| String::from("inspectors"));
    let mode: String = query.mode.unwrap_or_else(|| default_mode_for(&axis));
    let year: u16 = query.year.unwrap_or_else(current_plant_year);

    let log = state.log.lock().await;
    let response: MatrixResponse =
        get_compliance_matrix(&*log, &state.roster, MatrixRequest { axis, year, mode })?;
    Ok(Json(response))
}

async fn handle_get_coverage(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CoverageResponse>, HttpError> {
    let request: CoverageRequest = CoverageRequest {
        month: query.month.unwrap_or_else(current_plant_month),
        year: query.year.unwrap_or_else(current_plant_year),
    };

    let log = state.log.lock().await;
    let response: CoverageResponse = get_coverage_summary(&*log, &state.roster, request)?;
    Ok(Json(response))
}

async fn handle_get_ranking(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<RankingResponse>, HttpError> {
    let request: RankingRequest = RankingRequest {
        month: query.month.unwrap_or_else(current_plant_month),
        year: query.year.unwrap_or_else(current_plant_year),
    };

    let log = state.log.lock().await;
    let response: RankingResponse = get_ranking(&*log, &state.roster, request)?;
    Ok(Json(response))
}

async fn handle_get_log_tail(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<TailQuery>,
) -> Result<Json<LogTailResponse>, HttpError> {
    let log = state.log.lock().await;
    let response: LogTailResponse = get_log_tail(&*log, LogTailRequest { limit: query.limit })?;
    Ok(Json(response))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/inspections", post(handle_submit_inspection))
        .route("/matrix", get(handle_get_matrix))
        .route("/coverage", get(handle_get_coverage))
        .route("/ranking", get(handle_get_ranking))
        .route("/log/tail", get(handle_get_log_tail))
        .with_state(app_state)
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

    info!("Initializing Plant KPI Server");

    // Load the roster once at startup; a bad config is a startup failure
    let roster: Roster = load_roster(std::path::Path::new(&args.roster))?;

    // Initialize the event log (in-memory or file-based based on CLI argument)
    let log: Box<dyn EventLog + Send> = if let Some(log_path) = &args.log {
        info!("Using CSV event log at: {}", log_path);
        Box::new(CsvEventLog::new(log_path))
    } else {
        info!("Using in-memory event log");
        Box::new(MemoryEventLog::new())
    };

    // Initialize the evidence store
    let store: Box<dyn FileStore + Send> = if let Some(dir) = &args.evidence_dir {
        info!("Using evidence backup directory: {}", dir);
        Box::new(DirFileStore::new(dir))
    } else {
        info!("Using in-memory evidence store");
        Box::new(MemoryFileStore::new())
    };

    let app_state: AppState = AppState {
        roster: Arc::new(roster),
        policy: Arc::new(EvidencePolicy::default()),
        log: Arc::new(Mutex::new(log)),
        store: Arc::new(Mutex::new(store)),
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
