//! Catalog search and category filtering.
//!
//! A product passes when its name, category or subcategory contains the search
//! text (case-insensitive) AND the selector is empty or equals its category or
//! subcategory exactly. Source order is preserved.

use std::slice;

use super::product::Product;

/// Current search text and category/subcategory selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub selector: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Set the selector; a blank value clears it.
    pub fn set_selector(&mut self, selector: impl Into<String>) {
        let selector = selector.into();
        self.selector = if selector.is_empty() { None } else { Some(selector) };
    }

    pub fn clear_selector(&mut self) {
        self.selector = None;
    }

    /// Whether either the search text or the selector narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.selector.is_some()
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> ProductFilter<'a> {
        filter_products(products, &self.search, self.selector.as_deref().unwrap_or(""))
    }
}

/// Lazy view over the products that pass a filter.
///
/// Cloning yields an independent iterator from the same position, so a view can
/// be restarted by keeping a clone around.
#[derive(Debug, Clone)]
pub struct ProductFilter<'a> {
    products: slice::Iter<'a, Product>,
    needle: String,
    selector: String,
}

impl<'a> ProductFilter<'a> {
    pub fn matches(&self, product: &Product) -> bool {
        let text_match = self.needle.is_empty()
            || product.name.to_lowercase().contains(&self.needle)
            || product.category.to_lowercase().contains(&self.needle)
            || product
                .subcategory
                .as_deref()
                .is_some_and(|sub| sub.to_lowercase().contains(&self.needle));

        let selector_match = self.selector.is_empty()
            || product.category == self.selector
            || product.subcategory.as_deref() == Some(self.selector.as_str());

        text_match && selector_match
    }
}

impl<'a> Iterator for ProductFilter<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let product = self.products.next()?;
            if self.matches(product) {
                return Some(product);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.products.size_hint().1)
    }
}

/// Filter `products` by search text and an optional selector (`""` for none).
pub fn filter_products<'a>(products: &'a [Product], search: &str, selector: &str) -> ProductFilter<'a> {
    ProductFilter {
        products: products.iter(),
        needle: search.to_lowercase(),
        selector: selector.to_string(),
    }
}

/// What the catalog grid should show.
#[derive(Debug, Clone)]
pub enum CatalogView<'a> {
    /// No filter active: the whole catalog, possibly empty.
    Unfiltered(&'a [Product]),
    /// A filter is active and some products pass it.
    Matches(Vec<&'a Product>),
    /// A filter is active and nothing passes it.
    NoMatches,
}

impl<'a> CatalogView<'a> {
    pub fn new(products: &'a [Product], filter: &FilterState) -> Self {
        if !filter.is_active() {
            return CatalogView::Unfiltered(products);
        }

        let matches: Vec<&Product> = filter.apply(products).collect();
        if matches.is_empty() {
            CatalogView::NoMatches
        } else {
            CatalogView::Matches(matches)
        }
    }

    /// Whether the grid should render the "No products found" notice.
    pub fn is_empty(&self) -> bool {
        match self {
            CatalogView::Unfiltered(products) => products.is_empty(),
            CatalogView::Matches(matches) => matches.is_empty(),
            CatalogView::NoMatches => true,
        }
    }

    pub fn products(&self) -> Vec<&'a Product> {
        match self {
            CatalogView::Unfiltered(products) => products.iter().collect(),
            CatalogView::Matches(matches) => matches.clone(),
            CatalogView::NoMatches => Vec::new(),
        }
    }
}
