// Per-resource request handlers
//
// Each handler maps one lookup over its repository to a JSON response.
// Stores are passed in explicitly so tests can substitute fakes.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::response::{failure_response, json_response, message_response};
use crate::logger;
use crate::store::{Contact, Post, Product, Repository};

/// GET /api/products
///
/// An empty collection is reported as a 404 failure object rather than an
/// empty array; clients depend on that contract. Data-access faults are a
/// server-side problem and surface as 500.
pub async fn list_products<R: Repository<Product>>(
    repo: &R,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match repo.list_all().await {
        Ok(products) if products.is_empty() => {
            failure_response(StatusCode::NOT_FOUND, "No products found.", is_head)
        }
        Ok(products) => json_response(StatusCode::OK, &products, is_head),
        Err(e) => {
            logger::log_error(&format!("Product listing failed: {e}"));
            failure_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching products from server.",
                is_head,
            )
        }
    }
}

/// GET /api/products/:id
pub async fn get_product<R: Repository<Product>>(
    repo: &R,
    id: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match repo.find_by_id(id).await {
        Ok(Some(product)) => json_response(StatusCode::OK, &product, is_head),
        Ok(None) => message_response(StatusCode::NOT_FOUND, "Product not found", is_head),
        Err(e) => {
            logger::log_error(&format!("Product lookup '{id}' failed: {e}"));
            failure_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching products from server.",
                is_head,
            )
        }
    }
}

/// GET /api/posts
pub async fn list_posts<R: Repository<Post>>(repo: &R, is_head: bool) -> Response<Full<Bytes>> {
    list_collection(repo, is_head).await
}

/// GET /api/posts/:id
pub async fn get_post<R: Repository<Post>>(
    repo: &R,
    id: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    find_in_collection(repo, id, "Post ID cannot be empty.", "Post not found", is_head).await
}

/// GET /api/contacts
pub async fn list_contacts<R: Repository<Contact>>(
    repo: &R,
    is_head: bool,
) -> Response<Full<Bytes>> {
    list_collection(repo, is_head).await
}

/// GET /api/contacts/:id
pub async fn get_contact<R: Repository<Contact>>(
    repo: &R,
    id: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    find_in_collection(
        repo,
        id,
        "Contact ID cannot be empty.",
        "Contact not found",
        is_head,
    )
    .await
}

/// List a collection as a JSON array; an empty collection is a 200 with `[]`
async fn list_collection<T, R>(repo: &R, is_head: bool) -> Response<Full<Bytes>>
where
    T: Serialize,
    R: Repository<T>,
{
    match repo.list_all().await {
        Ok(records) => json_response(StatusCode::OK, &records, is_head),
        Err(e) => {
            logger::log_error(&format!("Collection listing failed: {e}"));
            failure_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching records from server.",
                is_head,
            )
        }
    }
}

/// Find one record by identifier
///
/// A blank or whitespace-only identifier is rejected with 400 before the
/// store is consulted. The same check applies to every in-memory resource.
async fn find_in_collection<T, R>(
    repo: &R,
    id: &str,
    blank_message: &str,
    not_found_message: &str,
    is_head: bool,
) -> Response<Full<Bytes>>
where
    T: Serialize,
    R: Repository<T>,
{
    if id.trim().is_empty() {
        return message_response(StatusCode::BAD_REQUEST, blank_message, is_head);
    }

    match repo.find_by_id(id).await {
        Ok(Some(record)) => json_response(StatusCode::OK, &record, is_head),
        Ok(None) => message_response(StatusCode::NOT_FOUND, not_found_message, is_head),
        Err(e) => {
            logger::log_error(&format!("Record lookup '{id}' failed: {e}"));
            failure_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching records from server.",
                is_head,
            )
        }
    }
}
