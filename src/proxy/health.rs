use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn now() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// `GET /api/health`
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}
