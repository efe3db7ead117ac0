use serde::{Deserialize, Serialize};

use super::document::Document;

/// Most images a single product document can carry (`image1`..`image4`).
pub const MAX_DOCUMENT_IMAGES: usize = 4;

/// Product collection fields.
///
/// Only `image1` is required by the collection; the other image slots are
/// omitted from the JSON when empty.
///
/// `category` always holds the top-level category so it can be queried with a
/// plain `equal`; the optional `subcategory` attribute holds the finer level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductData {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub product_name: String,
    pub product_description: String,
    pub price: u64,
    pub image1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image4: Option<String>,
}

/// A product as stored remotely.
pub type ProductDocument = Document<ProductData>;

impl ProductData {
    /// Build product fields, spreading `images` over the four image slots.
    ///
    /// Images beyond the fourth are dropped. An empty list leaves `image1` empty.
    pub fn new(
        user_id: impl Into<String>,
        category: impl Into<String>,
        product_name: impl Into<String>,
        product_description: impl Into<String>,
        price: u64,
        images: Vec<String>,
    ) -> Self {
        let mut slots = images.into_iter().take(MAX_DOCUMENT_IMAGES);
        Self {
            user_id: user_id.into(),
            category: category.into(),
            subcategory: None,
            product_name: product_name.into(),
            product_description: product_description.into(),
            price,
            image1: slots.next().unwrap_or_default(),
            image2: slots.next(),
            image3: slots.next(),
            image4: slots.next(),
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Non-empty image references in slot order.
    pub fn images(&self) -> Vec<String> {
        std::iter::once(Some(&self.image1))
            .chain([self.image2.as_ref(), self.image3.as_ref(), self.image4.as_ref()])
            .flatten()
            .filter(|image| !image.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// Partial product update; only provided fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductDataForUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image4: Option<String>,
}

impl ProductDataForUpdate {
    /// Create a new empty update.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
