use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use timesheet::CheckConfig;
use tower::ServiceExt;

use crate::{config::ApplicationSettings, repositories::MemoryTimesheetRepository, router, AppState};

/// A finished week for Jane Citizen: 40.5 hours over 2025-08-11..2025-08-17,
/// with 9.5 hours on Thursday.
pub fn sample_meta() -> Value {
    let entry = |weekday: &str, day: u32, total: &str, decimal: f64| {
        json!({
            "weekday": weekday,
            "date_original": format!("{day}-Aug-25"),
            "date_iso": format!("2025-08-{day}"),
            "morning": { "start": "", "finish": "", "time": "" },
            "afternoon": { "start": "", "finish": "", "time": "" },
            "extra_in_out": { "morning": "0:00", "afternoon": "0:00" },
            "total_daily_hours": total,
            "total_daily_decimal": decimal
        })
    };

    json!({
        "base": { "po_number": "123456", "client": "Government", "supervisor": "James" },
        "employee": { "name": "Jane Citizen", "company": "Employer Pty Ltd" },
        "work_entries": [
            entry("Monday", 11, "7:30", 7.5),
            entry("Tuesday", 12, "8:30", 8.5),
            entry("Wednesday", 13, "7:30", 7.5),
            entry("Thursday", 14, "9:30", 9.5),
            entry("Friday", 15, "7:30", 7.5),
            entry("Saturday", 16, "0:00", 0.0),
            entry("Sunday", 17, "0:00", 0.0)
        ],
        "weekly_total": { "total_hours": "40:30", "total_decimal_hours": 40.5 },
        "date": "8/15/2025"
    })
}

pub fn test_settings() -> ApplicationSettings {
    ApplicationSettings {
        port: 0,
        host: "127.0.0.1".to_string(),
        app_url: "http://localhost:5173".to_string(),
        cors_allowed_origin_suffix: None,
    }
}

pub fn test_app() -> Router {
    let app_state = AppState::new(
        Arc::new(MemoryTimesheetRepository::default()),
        CheckConfig::default(),
    );

    router::create(app_state, &test_settings())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::get(uri).body(Body::empty()).unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
