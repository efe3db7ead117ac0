use super::product::{ProductForCreate, PLACEHOLDER_IMAGE};

/// The built-in catalog shown before any remote products load.
///
/// Categories are kept exactly as listed, including ones outside the default
/// taxonomy. Once seeded remotely and loaded back, a value naming a
/// subcategory (e.g. "Accessories") is shown under its parent category;
/// search still finds it because it also matches subcategories.
pub fn seed_catalog() -> Vec<ProductForCreate> {
    [
        ("Car", "Vehicles", 2000),
        ("Bike", "Vehicles", 1500),
        ("Laptop", "Electronics", 500),
        ("Phone", "Electronics", 300),
        ("Watch", "Accessories", 150),
        ("Shoes", "Fashion", 100),
        ("T-Shirt", "Clothing", 50),
        ("Headphones", "Electronics", 200),
        ("Backpack", "Accessories", 80),
        ("Sunglasses", "Fashion", 120),
        ("Tablet", "Electronics", 400),
        ("Chair", "Furniture", 250),
    ]
    .into_iter()
    .map(|(name, category, price)| {
        ProductForCreate::new(name, category, price).images([PLACEHOLDER_IMAGE.to_string()])
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::filter_products;
    use crate::model::product::ProductId;
    use crate::model::taxonomy::Taxonomy;
    use shared::dto::document::{Document, DocumentMeta};

    #[test]
    fn test_seed_catalog_shape() {
        let seed = seed_catalog();
        assert_eq!(seed.len(), 12);
        assert_eq!(seed[0].name, "Car");
        assert_eq!(seed[11].price, 250);
        assert!(seed.iter().all(|p| p.price > 0 && p.images.len() == 1));
    }

    #[test]
    fn test_seed_category_search_survives_reload() {
        let taxonomy = Taxonomy::default();
        let reloaded: Vec<_> = seed_catalog()
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let document = Document {
                    meta: DocumentMeta {
                        id: format!("doc-{}", index + 1),
                        created_at: None,
                        updated_at: None,
                    },
                    data: product.to_product_data("seed"),
                };
                ProductForCreate::from_document(&document, &taxonomy).into_product(ProductId(index as u64 + 1))
            })
            .collect();

        let watch = reloaded.iter().find(|p| p.name == "Watch").unwrap();
        assert_eq!(watch.category, "Fashion");
        assert_eq!(watch.subcategory.as_deref(), Some("Accessories"));

        let names: Vec<&str> = filter_products(&reloaded, "accessories", "").map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Watch", "Backpack"]);
    }
}
