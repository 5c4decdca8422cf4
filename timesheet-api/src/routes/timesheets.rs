use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use timesheet::{CheckRequest, CheckResult, ExpectedTimesheet, ExtractedTimesheet, StoredMetadata};
use tracing::instrument;

use super::ApiError;
use crate::{domain::TimesheetId, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check", post(check_timesheet))
        .route("/:tid", get(get_timesheet))
        .route("/:tid/meta", get(get_timesheet_meta))
        .route("/:tid/check", post(check_stored_timesheet))
}

#[instrument(name = "POST /timesheet/check", skip(app_state, request))]
async fn check_timesheet(
    State(app_state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Json<CheckResult> {
    Json(app_state.timesheet_service.check(&request))
}

#[instrument(name = "GET /timesheet/:tid", skip(app_state))]
async fn get_timesheet(
    State(app_state): State<AppState>,
    Path(tid): Path<i32>,
) -> Result<Json<ExtractedTimesheet>, ApiError> {
    let extracted = app_state
        .timesheet_service
        .extracted(TimesheetId::new(tid))
        .await?;

    Ok(Json(extracted))
}

#[instrument(name = "GET /timesheet/:tid/meta", skip(app_state))]
async fn get_timesheet_meta(
    State(app_state): State<AppState>,
    Path(tid): Path<i32>,
) -> Result<Json<StoredMetadata>, ApiError> {
    let meta = app_state
        .timesheet_service
        .stored_meta(TimesheetId::new(tid))
        .await?;

    Ok(Json(meta))
}

#[derive(Debug, Default, Deserialize)]
struct CheckStoredBody {
    #[serde(default)]
    expected: ExpectedTimesheet,
}

#[instrument(name = "POST /timesheet/:tid/check", skip(app_state, body))]
async fn check_stored_timesheet(
    State(app_state): State<AppState>,
    Path(tid): Path<i32>,
    Json(body): Json<CheckStoredBody>,
) -> Result<Json<CheckResult>, ApiError> {
    let result = app_state
        .timesheet_service
        .check_stored(TimesheetId::new(tid), body.expected)
        .await?;

    Ok(Json(result))
}
