//! Scan Gate
//!
//! Registry front that refuses image pulls whose vulnerability scan
//! severity reaches the owning project's threshold.

pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod identity;
pub mod state;

pub use config::GateConfig;
pub use error::{GateError, PROJECT_POLICY_VIOLATION};
pub use gate::VulnerabilityGate;
pub use state::AppState;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Layers run outermost first: identity resolution, then the gate.
    let registry = Router::new()
        .route("/v2/*path", get(handlers::get_manifest))
        .layer(middleware::from_fn_with_state(
            app_state.gate.clone(),
            gate::vulnerability_gate,
        ))
        .layer(middleware::from_fn_with_state(
            app_state.resolver.clone(),
            identity::resolve_identity,
        ));

    let admin = Router::new()
        .route(
            "/api/scanner",
            get(handlers::get_scanner).put(handlers::set_scanner),
        )
        .with_state(app_state.toggle.clone());

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(admin)
        .merge(registry)
        .layer(TraceLayer::new_for_http())
}
