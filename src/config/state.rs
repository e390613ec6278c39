// Application state module
// Holds the loaded configuration and the per-resource data stores

use super::types::Config;
use crate::logger;
use crate::store::{Contact, JsonCollection, MemoryStore, Post, Product};

/// Application state shared by all request handlers
///
/// Stores are injected here once at startup; handlers receive them as
/// explicit dependencies instead of reaching for globals.
pub struct AppState {
    pub config: Config,
    /// Persisted product collection, queried per request
    pub products: JsonCollection<Product>,
    /// In-memory posts, seeded at startup, lost on restart
    pub posts: MemoryStore<Post>,
    /// In-memory contacts, same lifecycle as posts
    pub contacts: MemoryStore<Contact>,
}

impl AppState {
    /// Build application state from configuration
    ///
    /// Opens the product collection (probe only, queries re-read the file)
    /// and seeds the in-memory stores. A missing or malformed seed file
    /// leaves the corresponding store empty rather than failing startup.
    pub async fn new(config: Config) -> Self {
        let products = JsonCollection::open(&config.store.products_path).await;

        let posts = match &config.store.posts_path {
            Some(path) => MemoryStore::from_seed_file(path).await,
            None => MemoryStore::empty(),
        };
        let contacts = match &config.store.contacts_path {
            Some(path) => MemoryStore::from_seed_file(path).await,
            None => MemoryStore::empty(),
        };

        logger::log_store_summary(posts.len(), contacts.len());

        Self {
            config,
            products,
            posts,
            contacts,
        }
    }
}
