use crate::charts::{placeholder_series, ChartRange, Series};
use crate::error::AppError;
use crate::gateway::SubmissionGateway;
use crate::settings::ds::{DashboardSettings, MapPosition, Subsystem, SubsystemUpdate, TimeOfDay};
use crate::settings::store::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnknownSubsystem(_) | AppError::UnknownChartRange(_) => StatusCode::NOT_FOUND,
            AppError::InFlight => StatusCode::CONFLICT,
            AppError::Rejected(_) | AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

fn parse_subsystem(name: &str) -> Result<Subsystem, AppError> {
    name.parse().map_err(|_| AppError::UnknownSubsystem(name.to_owned()))
}

pub async fn get_settings<G>(State(app_state): State<Arc<AppState<G>>>) -> Json<DashboardSettings>
where
    G: SubmissionGateway + 'static,
{
    Json(app_state.store.read().await.snapshot_all())
}

pub async fn get_subsystem<G>(
    State(app_state): State<Arc<AppState<G>>>,
    Path(name): Path<String>,
) -> Result<Json<SubsystemUpdate>, AppError>
where
    G: SubmissionGateway + 'static,
{
    let subsystem = parse_subsystem(&name)?;
    Ok(Json(app_state.store.read().await.snapshot(subsystem)))
}

pub async fn put_subsystem<G>(
    State(app_state): State<Arc<AppState<G>>>,
    Path(name): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SubsystemUpdate>, AppError>
where
    G: SubmissionGateway + 'static,
{
    let subsystem = parse_subsystem(&name)?;
    let update = SubsystemUpdate::from_value(subsystem, body)?;
    let mut store = app_state.store.write().await;
    store.update(update)?;
    Ok(Json(store.snapshot(subsystem)))
}

pub async fn put_time_range<G>(
    State(app_state): State<Arc<AppState<G>>>,
    Path(name): Path<String>,
    Json(window): Json<TimeOfDay>,
) -> Result<Json<SubsystemUpdate>, AppError>
where
    G: SubmissionGateway + 'static,
{
    let subsystem = parse_subsystem(&name)?;
    let mut store = app_state.store.write().await;
    store.update_time_range(subsystem, window)?;
    Ok(Json(store.snapshot(subsystem)))
}

pub async fn get_position<G>(State(app_state): State<Arc<AppState<G>>>) -> Json<MapPosition>
where
    G: SubmissionGateway + 'static,
{
    Json(app_state.store.read().await.position())
}

pub async fn put_position<G>(
    State(app_state): State<Arc<AppState<G>>>,
    Json(position): Json<MapPosition>,
) -> Result<Json<MapPosition>, AppError>
where
    G: SubmissionGateway + 'static,
{
    let mut store = app_state.store.write().await;
    store.set_position(position)?;
    Ok(Json(store.position()))
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplyResponse {
    pub applied: bool,
    pub error: Option<String>,
}

/// Submits the current snapshot to the backend. The outcome is always
/// reported in the body so the page can show it, success or not.
pub async fn apply_settings<G>(State(app_state): State<Arc<AppState<G>>>) -> Json<ApplyResponse>
where
    G: SubmissionGateway + 'static,
{
    match app_state.apply().await {
        Ok(()) => Json(ApplyResponse { applied: true, error: None }),
        Err(e) => Json(ApplyResponse { applied: false, error: Some(e.to_string()) }),
    }
}

pub async fn get_charts(Path(range): Path<String>) -> Result<Json<Vec<Series>>, AppError> {
    let range: ChartRange = range.parse().map_err(|_| AppError::UnknownChartRange(range.clone()))?;
    Ok(Json(placeholder_series(range)))
}

pub fn router<G>(app_state: Arc<AppState<G>>) -> Router
where
    G: SubmissionGateway + 'static,
{
    Router::new()
        .route("/settings", get(get_settings))
        .route("/settings/:subsystem", get(get_subsystem).put(put_subsystem))
        .route("/settings/:subsystem/time", put(put_time_range))
        .route("/position", get(get_position).put(put_position))
        .route("/apply", post(apply_settings))
        .route("/charts/:range", get(get_charts))
        .with_state(app_state)
}

pub async fn run_web_server<G>(app_state: Arc<AppState<G>>, addr: SocketAddr) -> Result<(), AppError>
where
    G: SubmissionGateway + 'static,
{
    info!("Starting HTTP server on http://{}", addr);
    axum_server::Server::bind(addr).serve(router(app_state).into_make_service()).await?;
    Ok(())
}
