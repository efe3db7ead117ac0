//! # Sell Form
//!
//! Form state behind "sell an item" and the checks a submission must pass
//! before it reaches [`Storefront::add_product`](crate::Storefront::add_product)
//! or remote publication.
//!
//! ## Rules
//!
//! - Price is a whole number greater than zero (`"120"` ok; `"0"`, `"-5"`,
//!   `"3.5"` rejected)
//! - Name and description must not be blank
//! - A seller name, when collected, must not be blank
//! - Choosing a category clears the subcategory; a subcategory must belong to
//!   the chosen category
//! - At most [`MAX_LISTING_IMAGES`] images; extra picks are dropped silently
//! - No images at all falls back to the placeholder image
//! - No submission while picked files are still being read

use lib_utils::validation::validate_not_empty;
use shared::dto::product::MAX_DOCUMENT_IMAGES;

use crate::error::{AppError, Result};
use crate::model::{ProductForCreate, SellerProfile, Taxonomy, PLACEHOLDER_IMAGE};

#[cfg(test)]
mod tests;

/// Most images one listing can carry.
pub const MAX_LISTING_IMAGES: usize = MAX_DOCUMENT_IMAGES;

/// Parse a price field into whole currency units.
///
/// Only ASCII digits are accepted (surrounding whitespace is ignored), and the
/// value must be greater than zero.
pub fn parse_price(input: &str) -> Result<u64> {
    let input = input.trim();
    let invalid = || AppError::Validation("Price must be a whole number greater than 0".to_string());

    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match input.parse::<u64>() {
        Ok(0) => Err(invalid()),
        Ok(price) => Ok(price),
        Err(_) => Err(AppError::Validation("Price is too large".to_string())),
    }
}

/// Editable sell-form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellForm {
    pub name: String,
    /// Raw price text as typed.
    pub price: String,
    pub description: String,
    category: String,
    subcategory: Option<String>,
    /// `None` when the form does not collect a seller name.
    pub seller_name: Option<String>,
    images: Vec<String>,
    /// File reads started by the image picker and not yet finished.
    pending_reads: usize,
}

impl SellForm {
    /// Empty form with the taxonomy's first category selected.
    pub fn new(taxonomy: &Taxonomy) -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            description: String::new(),
            category: taxonomy.first_category().to_string(),
            subcategory: None,
            seller_name: None,
            images: Vec::new(),
            pending_reads: 0,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Select a category. Always clears the chosen subcategory.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.subcategory = None;
    }

    /// Select a subcategory; a blank value clears it.
    pub fn select_subcategory(&mut self, subcategory: impl Into<String>) {
        let subcategory = subcategory.into();
        self.subcategory = if subcategory.trim().is_empty() {
            None
        } else {
            Some(subcategory)
        };
    }

    /// Append image references up to the cap and return how many were kept.
    pub fn add_images(&mut self, images: impl IntoIterator<Item = String>) -> usize {
        let room = MAX_LISTING_IMAGES.saturating_sub(self.images.len());
        let before = self.images.len();
        self.images.extend(images.into_iter().take(room));
        self.images.len() - before
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    pub fn can_add_images(&self) -> bool {
        self.images.len() < MAX_LISTING_IMAGES
    }

    /// Mark a batch of picked files as being read.
    pub fn begin_image_read(&mut self) {
        self.pending_reads += 1;
    }

    /// Finish a batch started with [`begin_image_read`](Self::begin_image_read)
    /// and add its images. Returns how many were kept.
    pub fn finish_image_read(&mut self, images: impl IntoIterator<Item = String>) -> usize {
        self.pending_reads = self.pending_reads.saturating_sub(1);
        self.add_images(images)
    }

    pub fn is_reading_images(&self) -> bool {
        self.pending_reads > 0
    }

    /// Back to an empty form, keeping whether a seller name is collected.
    pub fn reset(&mut self, taxonomy: &Taxonomy) {
        let collects_seller = self.seller_name.is_some();
        *self = Self::new(taxonomy);
        if collects_seller {
            self.seller_name = Some(String::new());
        }
    }

    /// Check the form and build the product fields.
    ///
    /// On error nothing should be added to the catalog or sent remotely.
    pub fn validate(&self, taxonomy: &Taxonomy) -> Result<ProductForCreate> {
        if self.is_reading_images() {
            return Err(AppError::Validation("Images are still loading".to_string()));
        }
        validate_not_empty(&self.name, "Product name").map_err(AppError::Validation)?;
        let price = parse_price(&self.price)?;
        validate_not_empty(&self.description, "Description").map_err(AppError::Validation)?;

        if !taxonomy.contains_category(&self.category) {
            return Err(AppError::Validation(format!(
                "Unknown category '{}'",
                self.category
            )));
        }
        if let Some(subcategory) = &self.subcategory {
            if !taxonomy.is_subcategory_of(&self.category, subcategory) {
                return Err(AppError::Validation(format!(
                    "'{}' is not a subcategory of '{}'",
                    subcategory, self.category
                )));
            }
        }

        let seller = match &self.seller_name {
            Some(seller_name) => {
                validate_not_empty(seller_name, "Seller name").map_err(AppError::Validation)?;
                Some(SellerProfile::new(seller_name.trim()))
            }
            None => None,
        };

        let images = if self.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            self.images.clone()
        };

        let mut fields = ProductForCreate::new(self.name.trim(), self.category.as_str(), price)
            .description(self.description.trim())
            .images(images);
        fields.subcategory = self.subcategory.clone();
        fields.seller = seller;

        Ok(fields)
    }
}
