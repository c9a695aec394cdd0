//! Vulnerability severity gate
//!
//! Sits between identity resolution and the registry handler. A pull is
//! forwarded untouched when the gate does not apply to it (no identity,
//! scanner off, no digest, project not enforcing). Once the gate does
//! apply it fails closed: a failed lookup, a missing overview or an
//! unscanned image is denied just like an image at or over the threshold.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use scan_gate_core::ImageIdentity;
use scan_gate_storage::{FeatureToggle, PolicyChecker, ScanOverviewStore};
use std::sync::Arc;

use crate::GateError;

#[derive(Clone)]
pub struct VulnerabilityGate {
    toggle: Arc<dyn FeatureToggle>,
    policies: Arc<dyn PolicyChecker>,
    overviews: Arc<dyn ScanOverviewStore>,
}

impl VulnerabilityGate {
    pub fn new(
        toggle: Arc<dyn FeatureToggle>,
        policies: Arc<dyn PolicyChecker>,
        overviews: Arc<dyn ScanOverviewStore>,
    ) -> Self {
        Self {
            toggle,
            policies,
            overviews,
        }
    }

    /// Decide whether a request for `identity` may proceed.
    pub async fn check(&self, identity: Option<&ImageIdentity>) -> Result<(), GateError> {
        let img = match identity {
            Some(img) if self.toggle.is_enabled() => img,
            _ => return Ok(()),
        };
        if !img.has_digest() {
            tracing::debug!("No digest for {}:{}, skipping severity check", img.repository, img.reference);
            return Ok(());
        }

        let policy = self.policies.vulnerability_policy(&img.project_name).await;
        if !policy.enabled {
            return Ok(());
        }

        let overview = match self.overviews.get_overview(&img.digest).await {
            Ok(overview) => overview,
            Err(e) => {
                tracing::error!(
                    "Failed to get ImgScanOverview with repo: {}, reference: {}, digest: {}. Error: {}",
                    img.repository,
                    img.reference,
                    img.digest,
                    e
                );
                return Err(GateError::OverviewUnavailable(e));
            }
        };

        // An unscanned image says nothing about its vulnerabilities.
        let severity = match overview {
            Some(o) if !o.severity.is_unscanned() => o.severity,
            _ => {
                tracing::info!(
                    "Cannot determine severity of {}@{}, denying pull",
                    img.repository,
                    img.digest
                );
                return Err(GateError::SeverityUndetermined);
            }
        };

        if policy.is_violated_by(severity) {
            tracing::info!(
                "Image severity {} of {}@{} is at or above project {} threshold {}, denying pull",
                severity,
                img.repository,
                img.digest,
                img.project_name,
                policy.threshold
            );
            return Err(GateError::SeverityExceeded {
                severity,
                threshold: policy.threshold,
            });
        }

        Ok(())
    }
}

/// Middleware entry point, see [`crate::create_router`].
pub async fn vulnerability_gate(
    State(gate): State<Arc<VulnerabilityGate>>,
    request: Request,
    next: Next,
) -> Response {
    let identity = request.extensions().get::<ImageIdentity>().cloned();
    match gate.check(identity.as_ref()).await {
        Ok(()) => next.run(request).await,
        Err(e) => e.into_response(),
    }
}
