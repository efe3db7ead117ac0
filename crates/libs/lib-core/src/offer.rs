//! # Offer Form
//!
//! "Make an offer" on a product detail view. A valid offer becomes a remote
//! purchase-request document addressed to the product's owner.

use lib_utils::validation::validate_not_empty;
use shared::dto::purchase_request::PurchaseRequestData;

use crate::error::{AppError, Result};
use crate::listing::parse_price;
use crate::model::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferForm {
    /// Raw bid text as typed.
    pub bid_price: String,
    pub name: String,
    pub contact_no: String,
    pub message: String,
}

impl OfferForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer form pre-filled with the requester's name.
    pub fn for_requester(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check the form and build the purchase request for `product`.
    ///
    /// Only products that came from (or were published to) the remote
    /// catalog can receive offers.
    pub fn validate(&self, product: &Product) -> Result<PurchaseRequestData> {
        let (Some(remote_id), Some(owner_id)) = (&product.remote_id, &product.owner_id) else {
            return Err(AppError::Validation(
                "Offers can only be made on published listings".to_string(),
            ));
        };

        let bid_price = parse_price(&self.bid_price)?;
        validate_not_empty(&self.name, "Name").map_err(AppError::Validation)?;
        validate_not_empty(&self.contact_no, "Contact number").map_err(AppError::Validation)?;

        let contact_ok = self
            .contact_no
            .trim()
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
        if !contact_ok {
            return Err(AppError::Validation(
                "Contact number may only contain digits, spaces and + - ( )".to_string(),
            ));
        }

        Ok(PurchaseRequestData {
            product: remote_id.clone(),
            to: owner_id.clone(),
            bid_price,
            name: self.name.trim().to_string(),
            message: self.message.trim().to_string(),
            contact_no: self.contact_no.trim().to_string(),
            is_read: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductForCreate, Storefront, Taxonomy};

    fn remote_product() -> Product {
        let mut fields = ProductForCreate::new("Bike", "Vehicles", 1500);
        fields.remote_id = Some("doc-2".to_string());
        fields.owner_id = Some("seller-1".to_string());

        let mut storefront = Storefront::new(Taxonomy::default());
        storefront.add_product(fields)
    }

    fn filled() -> OfferForm {
        OfferForm {
            bid_price: "1200".to_string(),
            name: " Ravi ".to_string(),
            contact_no: "+91 98765 43210".to_string(),
            message: "Can pick up tomorrow".to_string(),
        }
    }

    #[test]
    fn test_offer_builds_purchase_request() {
        let request = filled().validate(&remote_product()).unwrap();

        assert_eq!(request.product, "doc-2");
        assert_eq!(request.to, "seller-1");
        assert_eq!(request.bid_price, 1200);
        assert_eq!(request.name, "Ravi");
        assert!(!request.is_read);
    }

    #[test]
    fn test_offer_on_local_product_is_rejected() {
        let mut storefront = Storefront::default();
        let local = storefront.add_product(ProductForCreate::new("Lamp", "Furniture", 30));
        assert!(matches!(filled().validate(&local), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_offer_validation() {
        let product = remote_product();

        let mut offer = filled();
        offer.bid_price = "0".to_string();
        assert!(offer.validate(&product).is_err());

        let mut offer = filled();
        offer.contact_no = "call me".to_string();
        assert!(offer.validate(&product).is_err());

        let mut offer = filled();
        offer.name = String::new();
        assert!(offer.validate(&product).is_err());
    }
}
