//! Request handling module
//!
//! Routes inbound requests to the resource API or the static frontend
//! bundle and emits access log entries.

mod router;
pub mod static_files;

pub use router::handle_request;
