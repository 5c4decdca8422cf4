use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use super::ApiError;
use crate::{domain::MetadataExtras, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/save-meta-json", post(save_meta_json))
}

/// Upload body. The record may arrive under `meta_data` or `meta`.
#[derive(Debug, Deserialize)]
struct SaveMetaBody {
    meta_data: Option<Value>,
    meta: Option<Value>,
    status: Option<String>,
    filename: Option<String>,
    pdf_text: Option<String>,
    notes: Option<String>,
}

#[derive(Debug, Serialize)]
struct SaveMetaResponse {
    success: bool,
    tid: i32,
}

#[instrument(name = "POST /api/save-meta-json", skip(app_state, body))]
async fn save_meta_json(
    State(app_state): State<AppState>,
    Json(body): Json<SaveMetaBody>,
) -> Result<Json<SaveMetaResponse>, ApiError> {
    let meta = body.meta_data.or(body.meta).unwrap_or(Value::Null);
    let extras = MetadataExtras {
        filename: body.filename,
        pdf_text: body.pdf_text,
        notes: body.notes,
    };

    let tid = app_state
        .timesheet_service
        .save_meta(meta, body.status, extras)
        .await?;

    Ok(Json(SaveMetaResponse {
        success: true,
        tid: tid.as_i32(),
    }))
}
