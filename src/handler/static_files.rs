//! Static file serving module
//!
//! Serves the frontend bundle: file loading with directory traversal
//! protection, index file resolution, MIME detection, conditional requests,
//! and single-range partial responses.

use crate::config::AssetsConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParseResult};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a frontend asset for the request path
///
/// "/" and directory paths resolve through the configured index files.
/// A miss is a plain 404.
pub async fn serve_asset(ctx: &RequestContext<'_>, assets: &AssetsConfig) -> Response<Full<Bytes>> {
    match load_asset(&assets.dir, ctx.path, &assets.index_files).await {
        Some((content, content_type)) => build_asset_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
            ctx.range_header.as_deref(),
        ),
        None => http::build_404_response(),
    }
}

/// Resolve and read an asset from the bundle directory
///
/// Returns the file content and its Content-Type, or None when the path
/// does not resolve to a file inside the bundle.
pub async fn load_asset(
    asset_dir: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    // Traversal segments are caught by the canonicalized containment
    // check below; the path itself is taken as-is so filenames with
    // inner dots stay servable
    let relative_path = path.trim_start_matches('/');
    let mut file_path = Path::new(asset_dir).join(relative_path);

    let asset_dir_canonical = match Path::new(asset_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset directory not found or inaccessible '{asset_dir}': {e}"
            ));
            return None;
        }
    };

    // Directory paths (including "/") resolve through index files
    if file_path.is_dir() || relative_path.is_empty() || relative_path.ends_with('/') {
        file_path = resolve_index(&file_path, index_files)?;
    }

    // A miss here is an ordinary 404, not worth a warning
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&asset_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type =
        mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// First existing index file under the directory, if any
fn resolve_index(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    index_files
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Build asset response with `ETag` and Range support
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
    range_header: Option<&str>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    let total_size = data.len();

    // Client already holds the current version
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    match http::parse_range_header(range_header, total_size) {
        RangeParseResult::Valid(range) => {
            let start = range.start;
            let end = range.end_position(total_size);

            // Builders empty the body for HEAD while keeping the headers
            http::response::build_partial_response(
                Bytes::from(data[start..=end].to_vec()),
                content_type,
                &etag,
                start,
                end,
                total_size,
                is_head,
            )
        }
        RangeParseResult::NotSatisfiable => http::build_416_response(total_size),
        RangeParseResult::None => http::response::build_cached_response(
            Bytes::from(data.to_owned()),
            content_type,
            &etag,
            is_head,
        ),
    }
}
