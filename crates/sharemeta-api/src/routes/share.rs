use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue},
    response::Html,
    Json,
};
use sharemeta_resolver::Resolution;
use sharemeta_types::MetadataDocument;
use std::sync::Arc;

use crate::{render, state::AppState};

/// Response header reporting which tier produced the document
pub const RESOLUTION_HEADER: &str = "x-share-resolution";

/// Metadata document for a shared thread
///
/// The decoded path segment is the thread id as-is; any id yields a document.
pub async fn get_metadata(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> (HeaderMap, Json<MetadataDocument>) {
    let (document, tier) = resolve_within_deadline(&state, &thread_id).await;

    (resolution_headers(tier), Json(document))
}

/// `<head>` fragment for a shared thread
pub async fn get_head(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> (HeaderMap, Html<String>) {
    let (document, tier) = resolve_within_deadline(&state, &thread_id).await;

    (
        resolution_headers(tier),
        Html(render::head_tags(&document).into_string()),
    )
}

/// Resolve under the configured deadline; past it, serve the fallback document
async fn resolve_within_deadline(
    state: &AppState,
    thread_id: &str,
) -> (MetadataDocument, &'static str) {
    let deadline = state.resolve_timeout();

    match tokio::time::timeout(deadline, state.resolver.resolve_detailed(thread_id, &state.env))
        .await
    {
        Ok(Resolution::Full(document)) => (document, "full"),
        Ok(Resolution::Fallback { document, .. }) => (document, "fallback"),
        Err(_) => {
            tracing::warn!(
                thread_id = %thread_id,
                timeout_ms = %deadline.as_millis(),
                "Share metadata resolution exceeded deadline"
            );
            (state.resolver.fallback(thread_id, &state.env), "fallback")
        }
    }
}

fn resolution_headers(tier: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(RESOLUTION_HEADER, HeaderValue::from_static(tier));
    headers
}
