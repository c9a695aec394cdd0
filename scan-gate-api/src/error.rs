//! Denial responses written by the gate

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scan_gate_core::Severity;
use scan_gate_storage::StorageError;
use serde::Serialize;
use thiserror::Error;

/// Error code clients receive on every gate denial
pub const PROJECT_POLICY_VIOLATION: &str = "PROJECT_POLICY_VIOLATION";

/// Reasons the gate refuses a pull
///
/// The display text is the message sent to the client, so lookup causes
/// are kept out of it.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Failed to get ImgScanOverview.")]
    OverviewUnavailable(#[source] StorageError),

    #[error("Cannot get the image severity.")]
    SeverityUndetermined,

    #[error("The severity of vulnerability of the image: \"{severity}\" is equal or higher than the threshold in project setting: \"{threshold}\".")]
    SeverityExceeded {
        severity: Severity,
        threshold: Severity,
    },
}

impl GateError {
    pub fn code(&self) -> &'static str {
        PROJECT_POLICY_VIOLATION
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::PRECONDITION_FAILED
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        });

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_severity_labels() {
        let err = GateError::SeverityExceeded {
            severity: Severity::HIGH,
            threshold: Severity::LOW,
        };
        assert_eq!(
            err.to_string(),
            "The severity of vulnerability of the image: \"High\" is equal or higher than the threshold in project setting: \"Low\"."
        );
    }

    #[test]
    fn test_lookup_cause_not_in_message() {
        let err = GateError::OverviewUnavailable(StorageError::Connection("db down".into()));
        assert_eq!(err.to_string(), "Failed to get ImgScanOverview.");
    }

    #[tokio::test]
    async fn test_response_shape() {
        let response = GateError::SeverityUndetermined.into_response();
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "PROJECT_POLICY_VIOLATION");
        assert_eq!(body["message"], "Cannot get the image severity.");
    }
}
