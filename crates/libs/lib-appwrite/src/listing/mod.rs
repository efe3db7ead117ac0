//! # Listing Publication
//!
//! Turns a validated sell-form submission into a remote product document:
//!
//! 1. Each `data:` image is uploaded in order; remote URLs pass through as-is
//! 2. The product document is created, owned by the signed-in user
//! 3. The returned fields carry the uploaded image URLs, the new document id
//!    and its creation time, ready for `Storefront::add_product`
//!
//! If any step fails the error is returned and no document is created. Files
//! uploaded before the failure stay in the bucket.
//!
//! [`clear_products`] empties the product collection for catalog reseeding.

use std::collections::HashSet;

use lib_core::{AppError, ProductForCreate, Result};
use lib_utils::b64::{decode_data_url, is_data_url};
use lib_utils::time::parse_utc;

use crate::service::StorefrontBackend;


/// Publish `listing` as a product document owned by `owner_id`.
#[tracing::instrument(skip(backend, listing), fields(name = %listing.name, images = listing.images.len()))]
pub async fn publish_listing<B>(
    backend: &B,
    owner_id: &str,
    listing: ProductForCreate,
) -> Result<ProductForCreate>
where
    B: StorefrontBackend + ?Sized,
{
    if owner_id.trim().is_empty() {
        return Err(AppError::Auth("Sign in to publish a listing".to_string()));
    }

    let mut image_urls = Vec::with_capacity(listing.images.len());
    for (index, image) in listing.images.iter().enumerate() {
        if !is_data_url(image) {
            image_urls.push(image.clone());
            continue;
        }

        let decoded = decode_data_url(image)?;
        let file_name = format!("listing-{}.{}", index + 1, decoded.extension());
        let url = backend
            .upload_image(decoded.bytes, &file_name, &decoded.mime_type)
            .await?;
        tracing::debug!(index, url = %url, "Listing image uploaded");
        image_urls.push(url);
    }

    let mut published = listing.images(image_urls);
    let document = backend
        .create_product(&published.to_product_data(owner_id))
        .await?;

    tracing::info!(document_id = %document.id(), "Listing published");

    published.remote_id = Some(document.id().to_string());
    published.owner_id = Some(owner_id.to_string());
    published.listed_at = document
        .meta
        .created_at
        .as_deref()
        .and_then(|created_at| parse_utc(created_at).ok());

    Ok(published)
}

/// Delete every product document and return how many were deleted.
///
/// A list call returns at most one page, so this lists and deletes until the
/// collection comes back empty.
#[tracing::instrument(skip(backend))]
pub async fn clear_products<B>(backend: &B) -> Result<usize>
where
    B: StorefrontBackend + ?Sized,
{
    let mut deleted: HashSet<String> = HashSet::new();
    loop {
        let page = backend.list_products().await?;
        if page.is_empty() {
            break;
        }
        if page.iter().all(|document| deleted.contains(document.id())) {
            return Err(AppError::RemoteWrite(format!(
                "{} deleted product(s) are still listed",
                page.len()
            )));
        }

        for document in &page {
            backend.delete_product_by_id(document.id()).await?;
            deleted.insert(document.id().to_string());
        }
        tracing::debug!(deleted = deleted.len(), "Product page deleted");
    }

    tracing::info!(deleted = deleted.len(), "Product collection cleared");
    Ok(deleted.len())
}
