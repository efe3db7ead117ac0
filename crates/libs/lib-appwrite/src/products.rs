//! # Product Documents
//!
//! Create, read, list, update and delete documents in the product collection.
//! Reads fail with [`AppError::RemoteRead`], writes with
//! [`AppError::RemoteWrite`]. Nothing is retried and updates carry no
//! concurrency token, so the last write wins.

use lib_core::{AppError, Result};
use reqwest::{Method, RequestBuilder};
use shared::dto::document::{CreateDocumentRequest, DocumentList, UpdateDocumentRequest};
use shared::dto::product::{ProductData, ProductDataForUpdate, ProductDocument};

use super::client::{send, send_json, unique_id, AppwriteClient};
use super::queries::{query_params, Query, LIST_LIMIT};

fn collection(client: &AppwriteClient) -> String {
    client.documents_path(&client.config().product_collection_id)
}

// region:    --- Requests

fn create_request(client: &AppwriteClient, data: &ProductData) -> Result<RequestBuilder> {
    if data.image1.trim().is_empty() {
        return Err(AppError::Validation("A product needs at least one image".to_string()));
    }

    let request = CreateDocumentRequest {
        document_id: unique_id(),
        data,
        permissions: None,
    };
    Ok(client.request(Method::POST, &collection(client)).json(&request))
}

fn document_request(client: &AppwriteClient, method: Method, id: &str) -> RequestBuilder {
    client.request(method, &format!("{}/{}", collection(client), id))
}

/// List request, newest first, at most [`LIST_LIMIT`] documents.
fn list_request(client: &AppwriteClient, mut queries: Vec<Query>) -> RequestBuilder {
    queries.push(Query::order_desc("$createdAt"));
    queries.push(Query::limit(LIST_LIMIT));

    client
        .request(Method::GET, &collection(client))
        .query(&query_params(&queries))
}

fn category_queries(category: &str) -> Vec<Query> {
    vec![Query::equal("category", category)]
}

fn price_range_queries(min: u64, max: u64) -> Result<Vec<Query>> {
    if min > max {
        return Err(AppError::Validation(format!(
            "Minimum price {} is above maximum price {}",
            min, max
        )));
    }
    Ok(vec![Query::between("price", min, max)])
}

/// `None` for a blank search, which lists everything.
fn name_queries(query: &str) -> Option<Vec<Query>> {
    let query = query.trim();
    (!query.is_empty()).then(|| vec![Query::search("product_name", query)])
}

fn update_request(
    client: &AppwriteClient,
    id: &str,
    update: &ProductDataForUpdate,
) -> Result<RequestBuilder> {
    if update.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }
    Ok(document_request(client, Method::PATCH, id).json(&UpdateDocumentRequest { data: update }))
}

// endregion: --- Requests

/// Create a product document with a fresh id.
#[tracing::instrument(skip(client, data), fields(name = %data.product_name, price = data.price))]
pub async fn create_product(client: &AppwriteClient, data: &ProductData) -> Result<ProductDocument> {
    send_json(create_request(client, data)?, AppError::RemoteWrite, "create_product").await
}

#[tracing::instrument(skip(client))]
pub async fn read_product_by_id(client: &AppwriteClient, id: &str) -> Result<ProductDocument> {
    send_json(
        document_request(client, Method::GET, id),
        AppError::RemoteRead,
        "read_product_by_id",
    )
    .await
}

/// Newest products first, up to [`LIST_LIMIT`].
#[tracing::instrument(skip(client))]
pub async fn list_products(client: &AppwriteClient) -> Result<Vec<ProductDocument>> {
    list_with(client, Vec::new(), "list_products").await
}

/// Products whose top-level category is `category`, subcategorized or not.
#[tracing::instrument(skip(client))]
pub async fn list_products_by_category(
    client: &AppwriteClient,
    category: &str,
) -> Result<Vec<ProductDocument>> {
    list_with(client, category_queries(category), "list_products_by_category").await
}

/// Products priced within `min..=max`.
#[tracing::instrument(skip(client))]
pub async fn list_products_by_price_range(
    client: &AppwriteClient,
    min: u64,
    max: u64,
) -> Result<Vec<ProductDocument>> {
    list_with(client, price_range_queries(min, max)?, "list_products_by_price_range").await
}

#[tracing::instrument(skip(client))]
pub async fn search_products_by_name(
    client: &AppwriteClient,
    query: &str,
) -> Result<Vec<ProductDocument>> {
    match name_queries(query) {
        Some(queries) => list_with(client, queries, "search_products_by_name").await,
        None => list_products(client).await,
    }
}

async fn list_with(
    client: &AppwriteClient,
    queries: Vec<Query>,
    action: &'static str,
) -> Result<Vec<ProductDocument>> {
    let list: DocumentList<ProductData> =
        send_json(list_request(client, queries), AppError::RemoteRead, action).await?;

    tracing::debug!(total = list.total, returned = list.documents.len(), "Products listed");
    Ok(list.documents)
}

#[tracing::instrument(skip(client, update))]
pub async fn update_product(
    client: &AppwriteClient,
    id: &str,
    update: &ProductDataForUpdate,
) -> Result<ProductDocument> {
    send_json(update_request(client, id, update)?, AppError::RemoteWrite, "update_product").await
}

#[tracing::instrument(skip(client))]
pub async fn delete_product_by_id(client: &AppwriteClient, id: &str) -> Result<()> {
    send(
        document_request(client, Method::DELETE, id),
        AppError::RemoteWrite,
        "delete_product_by_id",
    )
    .await?;

    tracing::info!(product_id = %id, "Product deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{body_json, query_values, test_client};
    use serde_json::json;

    const COLLECTION_URL: &str =
        "https://cloud.appwrite.io/v1/databases/db-1/collections/products/documents";

    // ========== Request Tests ==========

    #[test]
    fn test_create_request_body() {
        let data = ProductData::new("user-1", "Vehicles", "Road Bike", "Carbon", 120, vec!["a.png".to_string()])
            .with_subcategory("Bicycles");
        let request = create_request(&test_client(), &data).unwrap().build().unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), COLLECTION_URL);

        let body = body_json(&request);
        assert_eq!(body["documentId"].as_str().map(str::len), Some(32));
        assert_eq!(body["data"]["category"], "Vehicles");
        assert_eq!(body["data"]["subcategory"], "Bicycles");
        assert_eq!(body["data"]["userId"], "user-1");
    }

    #[test]
    fn test_create_request_needs_an_image() {
        let data = ProductData::new("user-1", "Vehicles", "Car", "", 1, Vec::new());
        assert!(matches!(create_request(&test_client(), &data), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_list_request_queries() {
        let request = list_request(&test_client(), Vec::new()).build().unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            query_values(&request),
            vec![
                json!({"method": "orderDesc", "attribute": "$createdAt"}),
                json!({"method": "limit", "values": [LIST_LIMIT]}),
            ]
        );
    }

    #[test]
    fn test_category_query_matches_subcategorized_listing() {
        let listing = lib_core::ProductForCreate::new("Road Bike", "Vehicles", 120)
            .subcategory("Bicycles")
            .to_product_data("user-1");
        let request = list_request(&test_client(), category_queries("Vehicles"))
            .build()
            .unwrap();

        let filter = &query_values(&request)[0];
        assert_eq!(filter, &json!({"method": "equal", "attribute": "category", "values": ["Vehicles"]}));
        assert_eq!(filter["values"][0], listing.category.as_str());
    }

    #[test]
    fn test_price_range_queries() {
        assert_eq!(
            price_range_queries(100, 500).unwrap(),
            vec![Query::between("price", 100u64, 500u64)]
        );
        assert_eq!(price_range_queries(7, 7).unwrap().len(), 1);
        assert!(matches!(price_range_queries(500, 100), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_name_queries() {
        assert_eq!(
            name_queries("  laptop "),
            Some(vec![Query::search("product_name", "laptop")])
        );
        assert_eq!(name_queries("   "), None);
    }

    #[test]
    fn test_update_request_wraps_data() {
        let update = ProductDataForUpdate {
            price: Some(450),
            ..ProductDataForUpdate::new()
        };
        let request = update_request(&test_client(), "doc-1", &update).unwrap().build().unwrap();

        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(request.url().as_str(), format!("{}/doc-1", COLLECTION_URL));
        assert_eq!(body_json(&request), json!({"data": {"price": 450}}));

        assert!(matches!(
            update_request(&test_client(), "doc-1", &ProductDataForUpdate::new()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_delete_request() {
        let request = document_request(&test_client(), Method::DELETE, "doc-9").build().unwrap();
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.url().as_str(), format!("{}/doc-9", COLLECTION_URL));
    }
}
