use super::*;
use crate::model::Storefront;

fn filled_form(taxonomy: &Taxonomy) -> SellForm {
    let mut form = SellForm::new(taxonomy);
    form.name = "  Road Bike ".to_string();
    form.price = "120".to_string();
    form.description = "Carbon frame, barely used".to_string();
    form.select_category("Vehicles");
    form.select_subcategory("Bicycles");
    form
}

// ========== Price Tests ==========

#[test]
fn test_parse_price_accepts_whole_numbers() {
    assert_eq!(parse_price("120").unwrap(), 120);
    assert_eq!(parse_price(" 7 ").unwrap(), 7);
}

#[test]
fn test_parse_price_rejects_invalid() {
    for input in ["0", "-5", "3.5", "", "12a", "+4", "1e3", "00"] {
        assert!(
            matches!(parse_price(input), Err(AppError::Validation(_))),
            "expected '{input}' to be rejected"
        );
    }
}

#[test]
fn test_parse_price_rejects_overflow() {
    assert!(parse_price("99999999999999999999999").is_err());
}

// ========== Category Tests ==========

#[test]
fn test_new_form_selects_first_category() {
    let taxonomy = Taxonomy::default();
    let form = SellForm::new(&taxonomy);
    assert_eq!(form.category(), "Vehicles");
    assert_eq!(form.subcategory(), None);
}

#[test]
fn test_select_category_resets_subcategory() {
    let taxonomy = Taxonomy::default();
    let mut form = filled_form(&taxonomy);
    assert_eq!(form.subcategory(), Some("Bicycles"));

    form.select_category("Properties");
    assert_eq!(form.subcategory(), None);

    form.select_category("Vehicles");
    assert_eq!(form.subcategory(), None);
}

#[test]
fn test_validate_rejects_foreign_subcategory() {
    let taxonomy = Taxonomy::default();
    let mut form = filled_form(&taxonomy);
    form.select_subcategory("Fridges");
    assert!(matches!(form.validate(&taxonomy), Err(AppError::Validation(_))));
}

#[test]
fn test_validate_rejects_unknown_category() {
    let taxonomy = Taxonomy::default();
    let mut form = filled_form(&taxonomy);
    form.select_category("Spaceships");
    assert!(form.validate(&taxonomy).is_err());
}

// ========== Image Tests ==========

#[test]
fn test_add_images_caps_at_four() {
    let taxonomy = Taxonomy::default();
    let mut form = SellForm::new(&taxonomy);

    assert_eq!(form.add_images(vec!["1".to_string(), "2".to_string(), "3".to_string()]), 3);
    assert_eq!(form.add_images(vec!["4".to_string(), "5".to_string()]), 1);
    assert_eq!(form.images(), ["1", "2", "3", "4"]);
    assert!(!form.can_add_images());
    assert_eq!(form.add_images(vec!["6".to_string()]), 0);
}

#[test]
fn test_remove_image() {
    let taxonomy = Taxonomy::default();
    let mut form = SellForm::new(&taxonomy);
    form.add_images(vec!["a".to_string(), "b".to_string()]);

    assert_eq!(form.remove_image(0).as_deref(), Some("a"));
    assert_eq!(form.remove_image(5), None);
    assert_eq!(form.images(), ["b"]);
}

#[test]
fn test_validate_uses_placeholder_without_images() {
    let taxonomy = Taxonomy::default();
    let fields = filled_form(&taxonomy).validate(&taxonomy).unwrap();
    assert_eq!(fields.images, vec![PLACEHOLDER_IMAGE.to_string()]);
}

#[test]
fn test_submit_waits_for_image_reads() {
    let taxonomy = Taxonomy::default();
    let mut form = filled_form(&taxonomy);

    form.begin_image_read();
    assert!(form.is_reading_images());
    assert!(matches!(form.validate(&taxonomy), Err(AppError::Validation(_))));

    assert_eq!(form.finish_image_read(vec!["data:image/png;base64,AAAA".to_string()]), 1);
    assert!(!form.is_reading_images());
    let fields = form.validate(&taxonomy).unwrap();
    assert_eq!(fields.images, vec!["data:image/png;base64,AAAA".to_string()]);
}

#[test]
fn test_overlapping_image_reads() {
    let taxonomy = Taxonomy::default();
    let mut form = filled_form(&taxonomy);

    form.begin_image_read();
    form.begin_image_read();
    form.finish_image_read(vec!["a".to_string()]);
    assert!(form.is_reading_images());

    form.finish_image_read(Vec::new());
    assert!(!form.is_reading_images());
    assert_eq!(form.images(), ["a"]);
}

// ========== Validation Tests ==========

#[test]
fn test_validate_builds_product_fields() {
    let taxonomy = Taxonomy::default();
    let mut form = filled_form(&taxonomy);
    form.seller_name = Some(" Priya ".to_string());
    form.add_images(vec!["data:image/png;base64,AAAA".to_string()]);

    let fields = form.validate(&taxonomy).unwrap();

    assert_eq!(fields.name, "Road Bike");
    assert_eq!(fields.price, 120);
    assert_eq!(fields.category, "Vehicles");
    assert_eq!(fields.subcategory.as_deref(), Some("Bicycles"));
    assert_eq!(fields.seller.map(|s| s.name), Some("Priya".to_string()));
    assert_eq!(fields.images.len(), 1);
}

#[test]
fn test_validate_rejects_blank_fields() {
    let taxonomy = Taxonomy::default();

    let mut form = filled_form(&taxonomy);
    form.name = "   ".to_string();
    assert!(form.validate(&taxonomy).is_err());

    let mut form = filled_form(&taxonomy);
    form.description.clear();
    assert!(form.validate(&taxonomy).is_err());

    let mut form = filled_form(&taxonomy);
    form.seller_name = Some("  ".to_string());
    assert_eq!(
        form.validate(&taxonomy),
        Err(AppError::Validation("Seller name cannot be empty".to_string()))
    );
}

#[test]
fn test_invalid_price_never_reaches_catalog() {
    let taxonomy = Taxonomy::default();
    let mut storefront = Storefront::default();
    let before = storefront.products().len();

    for price in ["0", "-5", "3.5"] {
        let mut form = filled_form(&taxonomy);
        form.price = price.to_string();
        if let Ok(fields) = form.validate(&taxonomy) {
            storefront.add_product(fields);
        }
    }
    assert_eq!(storefront.products().len(), before);

    let fields = filled_form(&taxonomy).validate(&taxonomy).unwrap();
    let added = storefront.add_product(fields);
    assert_eq!(storefront.products().len(), before + 1);
    assert_eq!(storefront.products()[0].id, added.id);
    assert_eq!(added.price, 120);
}

#[test]
fn test_reset_keeps_seller_collection() {
    let taxonomy = Taxonomy::default();
    let mut form = filled_form(&taxonomy);
    form.seller_name = Some("Priya".to_string());
    form.add_images(vec!["a".to_string()]);

    form.reset(&taxonomy);

    assert_eq!(form.name, "");
    assert!(form.images().is_empty());
    assert_eq!(form.seller_name.as_deref(), Some(""));
    assert_eq!(form.category(), "Vehicles");
}
