// JSON response utility functions for the resource API

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build a JSON response from any serializable body
///
/// HEAD requests get the headers (including Content-Length) with an
/// empty body.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"success":false,"message":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    let content_length = json.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(json)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Plain message body, e.g. `{"message":"Product not found"}`
pub fn message_response(status: StatusCode, message: &str, is_head: bool) -> Response<Full<Bytes>> {
    json_response(status, &serde_json::json!({ "message": message }), is_head)
}

/// Failure body carrying the `success` flag, e.g.
/// `{"success":false,"message":"No products found."}`
pub fn failure_response(status: StatusCode, message: &str, is_head: bool) -> Response<Full<Bytes>> {
    json_response(
        status,
        &serde_json::json!({ "success": false, "message": message }),
        is_head,
    )
}

/// 404 for paths under /api that match no resource route
pub fn unknown_route(is_head: bool) -> Response<Full<Bytes>> {
    message_response(StatusCode::NOT_FOUND, "Unknown API route", is_head)
}
