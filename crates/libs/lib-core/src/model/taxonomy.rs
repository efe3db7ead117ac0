use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A top-level category with its ordered subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl CategoryNode {
    pub fn new(name: &str, subcategories: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Two-level category → subcategory mapping used for browsing and selling.
///
/// JSON form is an array of `{ "name": ..., "subcategories": [...] }` objects so
/// that order survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    categories: Vec<CategoryNode>,
}

impl Taxonomy {
    /// Build a taxonomy, rejecting blank names and duplicate categories.
    ///
    /// A subcategory name must also be unique across the whole taxonomy and
    /// must not equal any category name, so a stored value resolves to exactly
    /// one place.
    pub fn new(categories: Vec<CategoryNode>) -> Result<Self> {
        if categories.is_empty() {
            return Err(AppError::Config("Taxonomy must have at least one category".to_string()));
        }

        for (index, node) in categories.iter().enumerate() {
            if node.name.trim().is_empty() {
                return Err(AppError::Config(format!("Category #{} has a blank name", index + 1)));
            }
            if categories[..index].iter().any(|other| other.name == node.name) {
                return Err(AppError::Config(format!("Duplicate category '{}'", node.name)));
            }
            if node.subcategories.iter().any(|sub| sub.trim().is_empty()) {
                return Err(AppError::Config(format!(
                    "Category '{}' has a blank subcategory",
                    node.name
                )));
            }
        }
        check_subcategory_names(&categories)?;

        Ok(Self { categories })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let categories: Vec<CategoryNode> = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Invalid taxonomy JSON: {e}")))?;
        Self::new(categories)
    }

    pub fn categories(&self) -> &[CategoryNode] {
        &self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|node| node.name.as_str())
    }

    pub fn first_category(&self) -> &str {
        self.categories.first().map(|node| node.name.as_str()).unwrap_or_default()
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.node(category).is_some()
    }

    /// Subcategories of `category` in order, `None` for an unknown category.
    pub fn subcategories(&self, category: &str) -> Option<&[String]> {
        self.node(category).map(|node| node.subcategories.as_slice())
    }

    pub fn is_subcategory_of(&self, category: &str, subcategory: &str) -> bool {
        self.subcategories(category)
            .is_some_and(|subs| subs.iter().any(|sub| sub == subcategory))
    }

    /// Category owning `subcategory`.
    pub fn parent_of(&self, subcategory: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|node| node.subcategories.iter().any(|sub| sub == subcategory))
            .map(|node| node.name.as_str())
    }

    /// Split a stored category value into `(category, subcategory)`.
    ///
    /// Category names win over subcategory names; unknown values are kept as a
    /// bare category.
    pub fn resolve(&self, value: &str) -> (String, Option<String>) {
        let value = value.trim();
        if self.contains_category(value) {
            return (value.to_string(), None);
        }
        match self.parent_of(value) {
            Some(parent) => (parent.to_string(), Some(value.to_string())),
            None => (value.to_string(), None),
        }
    }

    fn node(&self, category: &str) -> Option<&CategoryNode> {
        self.categories.iter().find(|node| node.name == category)
    }
}

fn check_subcategory_names(categories: &[CategoryNode]) -> Result<()> {
    let mut seen = HashSet::new();
    for node in categories {
        for sub in &node.subcategories {
            if categories.iter().any(|other| other.name == *sub) {
                return Err(AppError::Config(format!(
                    "Subcategory '{}' of '{}' is also a category",
                    sub, node.name
                )));
            }
            if !seen.insert(sub.as_str()) {
                return Err(AppError::Config(format!(
                    "Subcategory '{}' appears more than once",
                    sub
                )));
            }
        }
    }
    Ok(())
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryNode::new(
                    "Vehicles",
                    &["Cars", "Bikes", "Motorcycles", "Scooters", "Spare Parts", "Bicycles"],
                ),
                CategoryNode::new(
                    "Properties",
                    &[
                        "For Sale: Houses & Apartments",
                        "For Rent: Houses & Apartments",
                        "Lands & Plots",
                        "For Rent: Shops & Offices",
                        "For Sale: Shops & Offices",
                        "PG & Guest Houses",
                    ],
                ),
                CategoryNode::new(
                    "Electronics & Appliances",
                    &[
                        "TVs, Video - Audio",
                        "Kitchen & Other Appliances",
                        "Computers & Laptops",
                        "Cameras & Lenses",
                        "Games & Entertainment",
                        "Fridges",
                        "Computer Accessories",
                        "Hard Disks, Printers & Monitors",
                        "ACs",
                        "Washing Machines",
                    ],
                ),
                CategoryNode::new("Mobiles", &["Mobile Phones", "Tablets", "Mobile Accessories"]),
                CategoryNode::new(
                    "Fashion",
                    &["Men", "Women", "Kids", "Footwear", "Watches", "Bags", "Accessories"],
                ),
                CategoryNode::new(
                    "Furniture",
                    &["Sofa & Dining", "Beds & Wardrobes", "Home Decor & Garden", "Office Furniture"],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_order() {
        let taxonomy = Taxonomy::default();
        let names: Vec<&str> = taxonomy.category_names().collect();
        assert_eq!(names[..3], ["Vehicles", "Properties", "Electronics & Appliances"]);
        assert_eq!(taxonomy.first_category(), "Vehicles");
        assert_eq!(taxonomy.subcategories("Vehicles").map(|s| s[0].as_str()), Some("Cars"));
    }

    #[test]
    fn test_subcategory_membership() {
        let taxonomy = Taxonomy::default();
        assert!(taxonomy.is_subcategory_of("Vehicles", "Bikes"));
        assert!(!taxonomy.is_subcategory_of("Properties", "Bikes"));
        assert!(!taxonomy.is_subcategory_of("Unknown", "Bikes"));
        assert_eq!(taxonomy.parent_of("Fridges"), Some("Electronics & Appliances"));
    }

    #[test]
    fn test_resolve() {
        let taxonomy = Taxonomy::default();
        assert_eq!(taxonomy.resolve("Fashion"), ("Fashion".to_string(), None));
        assert_eq!(
            taxonomy.resolve("Watches"),
            ("Fashion".to_string(), Some("Watches".to_string()))
        );
        assert_eq!(taxonomy.resolve(" Clothing "), ("Clothing".to_string(), None));
    }

    #[test]
    fn test_from_json() {
        let taxonomy = Taxonomy::from_json(
            r#"[{"name": "Books", "subcategories": ["Fiction", "Comics"]}, {"name": "Toys"}]"#,
        )
        .expect("taxonomy JSON should parse");

        assert_eq!(taxonomy.categories().len(), 2);
        assert_eq!(taxonomy.subcategories("Toys"), Some(&[][..]));
        assert!(taxonomy.is_subcategory_of("Books", "Comics"));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(Taxonomy::from_json("{}").is_err());
        assert!(Taxonomy::from_json("[]").is_err());
        assert!(Taxonomy::from_json(r#"[{"name": "A"}, {"name": "A"}]"#).is_err());
        assert!(Taxonomy::from_json(r#"[{"name": " "}]"#).is_err());
    }

    #[test]
    fn test_subcategory_named_like_a_category_is_rejected() {
        let result = Taxonomy::new(vec![
            CategoryNode::new("Home", &["Garden"]),
            CategoryNode::new("Garden", &["Tools"]),
        ]);
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = Taxonomy::new(vec![CategoryNode::new("Home", &["Home"])]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_repeated_subcategory_is_rejected() {
        let result = Taxonomy::from_json(
            r#"[{"name": "Fashion", "subcategories": ["Bags"]}, {"name": "Travel", "subcategories": ["Bags"]}]"#,
        );
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = Taxonomy::new(vec![CategoryNode::new("Fashion", &["Bags", "Bags"])]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_default_taxonomy_is_valid() {
        let categories = Taxonomy::default().categories().to_vec();
        assert_eq!(Taxonomy::new(categories), Ok(Taxonomy::default()));
    }
}
