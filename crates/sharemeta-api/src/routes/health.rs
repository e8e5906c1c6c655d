use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
}

/// Health check endpoint
///
/// Upstream reachability is not probed; resolution degrades on its own.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let environment = if state.env.is_development {
        "development"
    } else {
        "production"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: environment.to_string(),
    })
}
