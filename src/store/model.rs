// Entity definitions for the three served resources

use serde::{Deserialize, Serialize};

use super::Record;

/// Persisted product record
///
/// Identifiers are SKU-style strings (e.g. "SKU20050").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

/// In-memory post record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// In-memory contact record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Contact {
    fn id(&self) -> &str {
        &self.id
    }
}
