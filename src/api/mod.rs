// API module entry
// Read-only resource API under /api

mod handlers;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

use crate::config::AppState;

/// Dispatch an API request to its resource handler
///
/// The server layer has already gated methods to GET/HEAD; `is_head`
/// selects a headers-only response. The identifier is taken verbatim from
/// the path segment; identifiers never contain '/'.
pub async fn handle_api_request(
    path: &str,
    state: &Arc<AppState>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let rest = path.strip_prefix("/api/").unwrap_or_default();
    let (resource, id) = match rest.split_once('/') {
        Some((resource, id)) => (resource, Some(id)),
        None => (rest, None),
    };

    match (resource, id) {
        ("products", None) => handlers::list_products(&state.products, is_head).await,
        ("products", Some(id)) if !id.contains('/') => {
            handlers::get_product(&state.products, id, is_head).await
        }
        ("posts", None) => handlers::list_posts(&state.posts, is_head).await,
        ("posts", Some(id)) if !id.contains('/') => {
            handlers::get_post(&state.posts, id, is_head).await
        }
        ("contacts", None) => handlers::list_contacts(&state.contacts, is_head).await,
        ("contacts", Some(id)) if !id.contains('/') => {
            handlers::get_contact(&state.contacts, id, is_head).await
        }
        _ => response::unknown_route(is_head),
    }
}
