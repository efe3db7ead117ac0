use std::fmt;

use chrono::{DateTime, Utc};
use lib_utils::time::parse_utc;
use shared::dto::product::{ProductData, ProductDocument, MAX_DOCUMENT_IMAGES};

use super::taxonomy::Taxonomy;

/// Image shown when a product has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Seller label used when a product carries no seller profile.
pub const UNKNOWN_SELLER: &str = "Unknown Seller";

/// In-memory product identifier. Unique within one [`Storefront`](super::Storefront).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seller display info shown on the product detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerProfile {
    pub name: String,
    pub avatar: Option<String>,
}

impl SellerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// A catalog entry.
///
/// `images` is never empty once the product is in a catalog and holds at most
/// four references, each either a remote URL or a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    /// Whole currency units.
    pub price: u64,
    pub description: String,
    pub images: Vec<String>,
    pub seller: Option<SellerProfile>,
    /// Id of the remote document this product was loaded from or published as.
    pub remote_id: Option<String>,
    /// User id of the remote document's owner; offers are addressed to it.
    pub owner_id: Option<String>,
    pub listed_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Subcategory when present, category otherwise.
    pub fn display_category(&self) -> &str {
        self.subcategory.as_deref().unwrap_or(&self.category)
    }

    pub fn seller_name(&self) -> &str {
        self.seller
            .as_ref()
            .map(|seller| seller.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_SELLER)
    }

    pub fn seller_avatar(&self) -> Option<&str> {
        self.seller.as_ref().and_then(|seller| seller.avatar.as_deref())
    }
}

/// Fields for a product that has not been assigned an id yet.
///
/// Seed data, validated sell-form submissions and remote documents all
/// normalize into this shape before entering the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForCreate {
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub price: u64,
    pub description: String,
    pub images: Vec<String>,
    pub seller: Option<SellerProfile>,
    pub remote_id: Option<String>,
    pub owner_id: Option<String>,
    pub listed_at: Option<DateTime<Utc>>,
}

impl ProductForCreate {
    /// Create a new `ProductForCreate` with no images, description or seller.
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            subcategory: None,
            price,
            description: String::new(),
            images: Vec::new(),
            seller: None,
            remote_id: None,
            owner_id: None,
            listed_at: None,
        }
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the images, keeping at most the first four.
    pub fn images(mut self, images: impl IntoIterator<Item = String>) -> Self {
        self.images = images.into_iter().take(MAX_DOCUMENT_IMAGES).collect();
        self
    }

    pub fn seller(mut self, seller: SellerProfile) -> Self {
        self.seller = Some(seller);
        self
    }

    /// Normalize a remote product document.
    ///
    /// Documents carrying a `subcategory` attribute are taken as they are.
    /// Older documents stored only the most specific name in `category`; a
    /// value naming a known subcategory is split back into its parent category
    /// and the subcategory.
    pub fn from_document(document: &ProductDocument, taxonomy: &Taxonomy) -> Self {
        let data = &document.data;
        let subcategory = data
            .subcategory
            .as_deref()
            .map(str::trim)
            .filter(|subcategory| !subcategory.is_empty());
        let (category, subcategory) = match subcategory {
            Some(subcategory) => (data.category.trim().to_string(), Some(subcategory.to_string())),
            None => taxonomy.resolve(&data.category),
        };

        Self {
            name: data.product_name.trim().to_string(),
            category,
            subcategory,
            price: data.price,
            description: data.product_description.clone(),
            images: data.images(),
            seller: None,
            remote_id: Some(document.id().to_string()),
            owner_id: Some(data.user_id.clone()),
            listed_at: document
                .meta
                .created_at
                .as_deref()
                .and_then(|created_at| parse_utc(created_at).ok()),
        }
    }

    /// Remote document fields for this product, owned by `user_id`.
    ///
    /// `category` is always the top-level category; the subcategory, when
    /// chosen, goes in its own attribute.
    pub fn to_product_data(&self, user_id: &str) -> ProductData {
        let data = ProductData::new(
            user_id,
            self.category.as_str(),
            self.name.as_str(),
            self.description.as_str(),
            self.price,
            self.images.clone(),
        );
        match &self.subcategory {
            Some(subcategory) => data.with_subcategory(subcategory.as_str()),
            None => data,
        }
    }

    pub(crate) fn into_product(self, id: ProductId) -> Product {
        let images = if self.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            self.images
        };

        Product {
            id,
            name: self.name,
            category: self.category,
            subcategory: self.subcategory,
            price: self.price,
            description: self.description,
            images,
            seller: self.seller,
            remote_id: self.remote_id,
            owner_id: self.owner_id,
            listed_at: self.listed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::document::{Document, DocumentMeta};

    fn document(category: &str, created_at: Option<&str>) -> ProductDocument {
        Document {
            meta: DocumentMeta {
                id: "doc-7".to_string(),
                created_at: created_at.map(str::to_string),
                updated_at: None,
            },
            data: ProductData::new(
                "user-1",
                category,
                " Laptop ",
                "14 inch",
                500,
                vec!["https://example.com/a.png".to_string()],
            ),
        }
    }

    #[test]
    fn test_into_product_uses_placeholder_when_no_images() {
        let product = ProductForCreate::new("Chair", "Furniture", 250).into_product(ProductId(1));
        assert_eq!(product.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(product.primary_image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_images_capped_at_four() {
        let product = ProductForCreate::new("Car", "Vehicles", 2000)
            .images((1..=5).map(|i| format!("{i}.png")));
        assert_eq!(product.images.len(), 4);
        assert_eq!(product.images[3], "4.png");
    }

    #[test]
    fn test_seller_name_fallback() {
        let mut product = ProductForCreate::new("Bike", "Vehicles", 1500).into_product(ProductId(2));
        assert_eq!(product.seller_name(), UNKNOWN_SELLER);

        product.seller = Some(SellerProfile::new("   "));
        assert_eq!(product.seller_name(), UNKNOWN_SELLER);

        product.seller = Some(SellerProfile::new("Asha").with_avatar("a.png"));
        assert_eq!(product.seller_name(), "Asha");
        assert_eq!(product.seller_avatar(), Some("a.png"));
    }

    #[test]
    fn test_display_category_prefers_subcategory() {
        let product = ProductForCreate::new("Car", "Vehicles", 2000)
            .subcategory("Cars")
            .into_product(ProductId(1));
        assert_eq!(product.display_category(), "Cars");
    }

    #[test]
    fn test_from_document_splits_known_subcategory() {
        let taxonomy = Taxonomy::default();
        let product = ProductForCreate::from_document(
            &document("Computers & Laptops", Some("2025-03-04T10:15:00.000+00:00")),
            &taxonomy,
        );

        assert_eq!(product.name, "Laptop");
        assert_eq!(product.category, "Electronics & Appliances");
        assert_eq!(product.subcategory.as_deref(), Some("Computers & Laptops"));
        assert_eq!(product.remote_id.as_deref(), Some("doc-7"));
        assert_eq!(product.owner_id.as_deref(), Some("user-1"));
        assert!(product.listed_at.is_some());
    }

    #[test]
    fn test_from_document_keeps_unknown_category() {
        let product =
            ProductForCreate::from_document(&document("Clothing", Some("not a date")), &Taxonomy::default());
        assert_eq!(product.category, "Clothing");
        assert_eq!(product.subcategory, None);
        assert_eq!(product.listed_at, None);
    }

    #[test]
    fn test_to_product_data_keeps_top_level_category() {
        let product = ProductForCreate::new("Road Bike", "Vehicles", 120)
            .subcategory("Bicycles")
            .images(vec!["a.png".to_string()]);
        let data = product.to_product_data("user-9");

        assert_eq!(data.user_id, "user-9");
        assert_eq!(data.category, "Vehicles");
        assert_eq!(data.subcategory.as_deref(), Some("Bicycles"));
        assert_eq!(data.image1, "a.png");

        let plain = ProductForCreate::new("Car", "Vehicles", 2000).to_product_data("user-9");
        assert_eq!(plain.subcategory, None);
    }

    #[test]
    fn test_from_document_uses_subcategory_attribute() {
        let mut doc = document("Vehicles", None);
        doc.data.subcategory = Some("Bicycles".to_string());

        let product = ProductForCreate::from_document(&doc, &Taxonomy::default());
        assert_eq!(product.category, "Vehicles");
        assert_eq!(product.subcategory.as_deref(), Some("Bicycles"));
    }

    #[test]
    fn test_product_data_round_trip_through_document() {
        let taxonomy = Taxonomy::default();
        let original = ProductForCreate::new("Road Bike", "Vehicles", 120).subcategory("Bicycles");
        let mut doc = document("ignored", None);
        doc.data = original.to_product_data("user-1");

        let normalized = ProductForCreate::from_document(&doc, &taxonomy);
        assert_eq!(normalized.category, "Vehicles");
        assert_eq!(normalized.subcategory.as_deref(), Some("Bicycles"));
    }
}
