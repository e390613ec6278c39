//! Data access layer
//!
//! One contract, two backings: the persisted product collection re-reads its
//! JSON document file per query, while posts and contacts live in ordered
//! in-memory sequences seeded once at startup. Handlers depend only on the
//! `Repository` trait so either backing can be swapped or faked in tests.

mod json_file;
mod memory;
mod model;

pub use json_file::JsonCollection;
pub use memory::MemoryStore;
pub use model::{Contact, Post, Product};

use std::fmt;

/// A record with a string identifier
///
/// Identifiers are intended to be unique within a collection, but the store
/// does not enforce it; lookups return the first match in backing order.
pub trait Record {
    fn id(&self) -> &str;
}

/// Repository contract shared by all backings
///
/// Both operations are read-only; listing preserves the backing collection's
/// order and lookup is a linear scan.
pub trait Repository<T> {
    async fn list_all(&self) -> Result<Vec<T>, StoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError>;
}

/// Data-access failure of a backing file
#[derive(Debug)]
pub enum StoreError {
    /// Backing file could not be read
    Io(std::io::Error),
    /// Backing file is not a valid JSON array of records
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read backing file: {e}"),
            Self::Parse(e) => write!(f, "failed to parse backing file: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}
