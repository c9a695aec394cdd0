//! Request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use scan_gate_core::ImageIdentity;
use scan_gate_storage::{FeatureToggle, ScannerToggle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Stands in for the proxied registry: echoes the image that was admitted
pub async fn get_manifest(identity: Option<Extension<ImageIdentity>>) -> Response {
    match identity {
        Some(Extension(img)) => {
            tracing::debug!("Serving manifest {}:{}", img.repository, img.reference);
            Json(img).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "code": "NOT_FOUND",
                "message": "not a manifest request"
            })),
        )
            .into_response(),
    }
}

/// Scanner integration state, read and written by the admin routes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScannerSetting {
    pub enabled: bool,
}

/// Report whether the scanner integration is active
pub async fn get_scanner(State(toggle): State<Arc<ScannerToggle>>) -> Json<ScannerSetting> {
    Json(ScannerSetting {
        enabled: toggle.is_enabled(),
    })
}

/// Switch the scanner integration on or off without a restart
pub async fn set_scanner(
    State(toggle): State<Arc<ScannerToggle>>,
    Json(setting): Json<ScannerSetting>,
) -> Json<ScannerSetting> {
    toggle.set(setting.enabled);
    Json(setting)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "scan-gate"
    }))
}
