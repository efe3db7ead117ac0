use serde::{Deserialize, Serialize};

use super::document::Document;

/// Purchase-request collection fields: an offer sent to a product's seller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRequestData {
    /// Remote id of the product the offer is for.
    pub product: String,
    /// User id of the seller receiving the offer.
    pub to: String,
    pub bid_price: u64,
    /// Requester's display name.
    pub name: String,
    pub message: String,
    pub contact_no: String,
    #[serde(rename = "isRead", default)]
    pub is_read: bool,
}

/// A purchase request as stored remotely.
pub type PurchaseRequestDocument = Document<PurchaseRequestData>;

/// Partial purchase-request update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRequestForUpdate {
    #[serde(rename = "isRead", default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
}

impl PurchaseRequestForUpdate {
    /// Update that only marks the request as read.
    pub fn mark_read() -> Self {
        Self {
            is_read: Some(true),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_purchase_request_wire_names() {
        let data = PurchaseRequestData {
            product: "doc-1".to_string(),
            to: "seller-1".to_string(),
            bid_price: 1800,
            name: "Bob".to_string(),
            message: "Would you take 1800?".to_string(),
            contact_no: "555-0100".to_string(),
            is_read: false,
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["bid_price"], 1800);
        assert_eq!(value["contact_no"], "555-0100");
        assert_eq!(value["isRead"], false);
    }

    #[test]
    fn test_purchase_request_missing_is_read_defaults_false() {
        let value = json!({
            "product": "doc-1",
            "to": "seller-1",
            "bid_price": 10,
            "name": "Bob",
            "message": "hi",
            "contact_no": "555"
        });

        let data: PurchaseRequestData = serde_json::from_value(value).unwrap();
        assert!(!data.is_read);
    }

    #[test]
    fn test_mark_read_update() {
        assert_eq!(
            serde_json::to_value(PurchaseRequestForUpdate::mark_read()).unwrap(),
            json!({ "isRead": true })
        );
    }
}
