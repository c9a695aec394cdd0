//! Resolves which image a registry request refers to

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use scan_gate_core::ImageIdentity;
use scan_gate_storage::DigestResolver;
use std::sync::Arc;

const PREFIX: &str = "/v2/";
const MANIFESTS: &str = "/manifests/";

/// `sha256:<hex>` style content reference, as opposed to a tag
pub fn is_digest(reference: &str) -> bool {
    match reference.split_once(':') {
        Some((algorithm, encoded)) => {
            !algorithm.is_empty()
                && !encoded.is_empty()
                && algorithm
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '_' | '-'))
                && encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '=' || c == '_' || c == '-')
        }
        None => false,
    }
}

/// Parse `/v2/<name>/manifests/<reference>`.
///
/// The digest is filled in only when the reference itself is a digest.
pub fn parse_manifest_path(path: &str) -> Option<ImageIdentity> {
    let rest = path.strip_prefix(PREFIX)?;
    let (repository, reference) = rest.rsplit_once(MANIFESTS)?;
    if repository.is_empty() || reference.is_empty() || reference.contains('/') {
        return None;
    }
    let project_name = repository.split('/').next()?;

    let digest = if is_digest(reference) {
        reference.to_string()
    } else {
        String::new()
    };

    Some(ImageIdentity::new(
        repository.to_string(),
        reference.to_string(),
        project_name.to_string(),
        digest,
    ))
}

/// Attach an [`ImageIdentity`] to manifest requests, resolving tags to
/// digests. Requests for anything else go through without one.
pub async fn resolve_identity(
    State(resolver): State<Arc<dyn DigestResolver>>,
    mut request: Request,
    next: Next,
) -> Response {
    let parsed = parse_manifest_path(request.uri().path());
    if let Some(mut identity) = parsed {
        if !identity.has_digest() {
            match resolver.resolve(&identity.repository, &identity.reference).await {
                Ok(Some(digest)) => identity.digest = digest,
                Ok(None) => {
                    tracing::debug!("Tag {}:{} not found", identity.repository, identity.reference);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to resolve {}:{} to a digest: {}",
                        identity.repository,
                        identity.reference,
                        e
                    );
                }
            }
        }
        request.extensions_mut().insert(identity);
    }

    next.run(request).await
}
