//! # Purchase Request Documents
//!
//! Offers sent to sellers, and the seller inbox operations on them.

use lib_core::{AppError, Result};
use reqwest::{Method, RequestBuilder};
use shared::dto::document::{CreateDocumentRequest, DocumentList, UpdateDocumentRequest};
use shared::dto::purchase_request::{
    PurchaseRequestData, PurchaseRequestDocument, PurchaseRequestForUpdate,
};

use super::client::{send, send_json, unique_id, AppwriteClient};
use super::queries::{query_params, Query, LIST_LIMIT};

fn collection(client: &AppwriteClient) -> String {
    client.documents_path(&client.config().purchase_request_collection_id)
}

fn create_request(client: &AppwriteClient, data: &PurchaseRequestData) -> RequestBuilder {
    let request = CreateDocumentRequest {
        document_id: unique_id(),
        data,
        permissions: None,
    };
    client.request(Method::POST, &collection(client)).json(&request)
}

fn document_request(client: &AppwriteClient, method: Method, id: &str) -> RequestBuilder {
    client.request(method, &format!("{}/{}", collection(client), id))
}

fn seller_inbox_request(client: &AppwriteClient, seller_id: &str) -> RequestBuilder {
    let queries = [
        Query::equal("to", seller_id),
        Query::order_desc("$createdAt"),
        Query::limit(LIST_LIMIT),
    ];
    client
        .request(Method::GET, &collection(client))
        .query(&query_params(&queries))
}

#[tracing::instrument(skip(client, data), fields(product = %data.product, to = %data.to))]
pub async fn create_purchase_request(
    client: &AppwriteClient,
    data: &PurchaseRequestData,
) -> Result<PurchaseRequestDocument> {
    send_json(create_request(client, data), AppError::RemoteWrite, "create_purchase_request").await
}

/// Partially update a request, e.g. [`PurchaseRequestForUpdate::mark_read`].
#[tracing::instrument(skip(client, update))]
pub async fn update_purchase_request(
    client: &AppwriteClient,
    id: &str,
    update: &PurchaseRequestForUpdate,
) -> Result<PurchaseRequestDocument> {
    send_json(
        document_request(client, Method::PATCH, id).json(&UpdateDocumentRequest { data: update }),
        AppError::RemoteWrite,
        "update_purchase_request",
    )
    .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_purchase_request_by_id(client: &AppwriteClient, id: &str) -> Result<()> {
    send(
        document_request(client, Method::DELETE, id),
        AppError::RemoteWrite,
        "delete_purchase_request_by_id",
    )
    .await?;

    tracing::info!(request_id = %id, "Purchase request deleted");
    Ok(())
}

/// Requests addressed to `seller_id`, newest first.
#[tracing::instrument(skip(client))]
pub async fn list_purchase_requests_for_seller(
    client: &AppwriteClient,
    seller_id: &str,
) -> Result<Vec<PurchaseRequestDocument>> {
    let list: DocumentList<PurchaseRequestData> = send_json(
        seller_inbox_request(client, seller_id),
        AppError::RemoteRead,
        "list_purchase_requests_for_seller",
    )
    .await?;

    Ok(list.documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{body_json, query_values, test_client};
    use serde_json::json;

    const COLLECTION_URL: &str =
        "https://cloud.appwrite.io/v1/databases/db-1/collections/product_requests/documents";

    // ========== Request Tests ==========

    #[test]
    fn test_create_request_body() {
        let data = PurchaseRequestData {
            product: "doc-1".to_string(),
            to: "seller-1".to_string(),
            bid_price: 450,
            name: "Sam".to_string(),
            message: "Still available?".to_string(),
            contact_no: "0123456789".to_string(),
            is_read: false,
        };
        let request = create_request(&test_client(), &data).build().unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), COLLECTION_URL);

        let body = body_json(&request);
        assert_eq!(body["data"]["to"], "seller-1");
        assert_eq!(body["data"]["bid_price"], 450);
        assert_eq!(body["data"]["isRead"], false);
        assert!(body["documentId"].is_string());
    }

    #[test]
    fn test_mark_read_request() {
        let request = document_request(&test_client(), Method::PATCH, "req-1")
            .json(&UpdateDocumentRequest { data: PurchaseRequestForUpdate::mark_read() })
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(request.url().as_str(), format!("{}/req-1", COLLECTION_URL));
        assert_eq!(body_json(&request), json!({"data": {"isRead": true}}));
    }

    #[test]
    fn test_seller_inbox_queries() {
        let request = seller_inbox_request(&test_client(), "seller-1").build().unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            query_values(&request),
            vec![
                json!({"method": "equal", "attribute": "to", "values": ["seller-1"]}),
                json!({"method": "orderDesc", "attribute": "$createdAt"}),
                json!({"method": "limit", "values": [LIST_LIMIT]}),
            ]
        );
    }
}
