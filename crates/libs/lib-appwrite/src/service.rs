//! # Backend Trait
//!
//! [`StorefrontBackend`] covers every remote wrapper so flows such as
//! [`publish_listing`](crate::listing::publish_listing) can run against an
//! in-memory fake in tests.
//!
//! In the browser, request futures are not `Send`, so the trait drops the
//! `Send` bound there.

use async_trait::async_trait;
use lib_core::Result;
use shared::dto::account::{AccountUser, Session};
use shared::dto::product::{ProductData, ProductDataForUpdate, ProductDocument};
use shared::dto::purchase_request::{
    PurchaseRequestData, PurchaseRequestDocument, PurchaseRequestForUpdate,
};

use crate::client::AppwriteClient;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StorefrontBackend {
    // Products
    async fn create_product(&self, data: &ProductData) -> Result<ProductDocument>;
    async fn read_product_by_id(&self, id: &str) -> Result<ProductDocument>;
    async fn list_products(&self) -> Result<Vec<ProductDocument>>;
    async fn list_products_by_category(&self, category: &str) -> Result<Vec<ProductDocument>>;
    async fn list_products_by_price_range(&self, min: u64, max: u64) -> Result<Vec<ProductDocument>>;
    async fn search_products_by_name(&self, query: &str) -> Result<Vec<ProductDocument>>;
    async fn update_product(&self, id: &str, update: &ProductDataForUpdate) -> Result<ProductDocument>;
    async fn delete_product_by_id(&self, id: &str) -> Result<()>;

    // Purchase requests
    async fn create_purchase_request(&self, data: &PurchaseRequestData) -> Result<PurchaseRequestDocument>;
    async fn update_purchase_request(
        &self,
        id: &str,
        update: &PurchaseRequestForUpdate,
    ) -> Result<PurchaseRequestDocument>;
    async fn delete_purchase_request_by_id(&self, id: &str) -> Result<()>;
    async fn list_purchase_requests_for_seller(&self, seller_id: &str) -> Result<Vec<PurchaseRequestDocument>>;

    // Storage
    /// Upload image bytes and return the view URL.
    async fn upload_image(&self, bytes: Vec<u8>, file_name: &str, mime_type: &str) -> Result<String>;

    // Account
    async fn login(&self, email: &str, password: &str) -> Result<Session>;
    async fn sign_up(&self, email: &str, password: &str, name: Option<&str>) -> Result<AccountUser>;
    async fn get_user(&self) -> Result<AccountUser>;
    async fn logout(&self) -> Result<()>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StorefrontBackend for AppwriteClient {
    async fn create_product(&self, data: &ProductData) -> Result<ProductDocument> {
        crate::products::create_product(self, data).await
    }

    async fn read_product_by_id(&self, id: &str) -> Result<ProductDocument> {
        crate::products::read_product_by_id(self, id).await
    }

    async fn list_products(&self) -> Result<Vec<ProductDocument>> {
        crate::products::list_products(self).await
    }

    async fn list_products_by_category(&self, category: &str) -> Result<Vec<ProductDocument>> {
        crate::products::list_products_by_category(self, category).await
    }

    async fn list_products_by_price_range(&self, min: u64, max: u64) -> Result<Vec<ProductDocument>> {
        crate::products::list_products_by_price_range(self, min, max).await
    }

    async fn search_products_by_name(&self, query: &str) -> Result<Vec<ProductDocument>> {
        crate::products::search_products_by_name(self, query).await
    }

    async fn update_product(&self, id: &str, update: &ProductDataForUpdate) -> Result<ProductDocument> {
        crate::products::update_product(self, id, update).await
    }

    async fn delete_product_by_id(&self, id: &str) -> Result<()> {
        crate::products::delete_product_by_id(self, id).await
    }

    async fn create_purchase_request(&self, data: &PurchaseRequestData) -> Result<PurchaseRequestDocument> {
        crate::purchase_requests::create_purchase_request(self, data).await
    }

    async fn update_purchase_request(
        &self,
        id: &str,
        update: &PurchaseRequestForUpdate,
    ) -> Result<PurchaseRequestDocument> {
        crate::purchase_requests::update_purchase_request(self, id, update).await
    }

    async fn delete_purchase_request_by_id(&self, id: &str) -> Result<()> {
        crate::purchase_requests::delete_purchase_request_by_id(self, id).await
    }

    async fn list_purchase_requests_for_seller(&self, seller_id: &str) -> Result<Vec<PurchaseRequestDocument>> {
        crate::purchase_requests::list_purchase_requests_for_seller(self, seller_id).await
    }

    async fn upload_image(&self, bytes: Vec<u8>, file_name: &str, mime_type: &str) -> Result<String> {
        crate::storage::upload_image(self, bytes, file_name, mime_type).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        crate::account::login(self, email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str, name: Option<&str>) -> Result<AccountUser> {
        crate::account::sign_up(self, email, password, name).await
    }

    async fn get_user(&self) -> Result<AccountUser> {
        crate::account::get_user(self).await
    }

    async fn logout(&self) -> Result<()> {
        crate::account::logout(self).await
    }
}
