//! # Storefront State
//!
//! [`Storefront`] owns the catalog, the cart, the filter and the taxonomy. The
//! presentation layer keeps a single instance and re-renders after each
//! mutation. Every operation either completes fully or leaves the state as it
//! was.

use std::collections::{HashMap, HashSet};

use super::cart::{Cart, CartLine};
use super::filter::{CatalogView, FilterState, ProductFilter};
use super::product::{Product, ProductForCreate, ProductId};
use super::seed::seed_catalog;
use super::taxonomy::Taxonomy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    products: Vec<Product>,
    cart: Cart,
    filter: FilterState,
    taxonomy: Taxonomy,
    /// Products listed in this session, as opposed to seeded or loaded ones.
    local_ids: HashSet<ProductId>,
    next_id: u64,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::with_catalog(Taxonomy::default(), seed_catalog())
    }
}

impl Storefront {
    /// An empty storefront.
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            products: Vec::new(),
            cart: Cart::new(),
            filter: FilterState::new(),
            taxonomy,
            local_ids: HashSet::new(),
            next_id: 1,
        }
    }

    /// A storefront whose catalog is `products` in the given order, with ids
    /// assigned from 1.
    pub fn with_catalog(taxonomy: Taxonomy, products: Vec<ProductForCreate>) -> Self {
        let mut storefront = Self::new(taxonomy);
        for fields in products {
            let id = storefront.allocate_id();
            storefront.products.push(fields.into_product(id));
        }
        storefront
    }

    // region:    --- Queries

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Number of cart lines, as shown on the navbar badge.
    pub fn cart_item_count(&self) -> usize {
        self.cart.line_count()
    }

    pub fn cart_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Products passing the current filter, lazily.
    pub fn visible_products(&self) -> ProductFilter<'_> {
        self.filter.apply(&self.products)
    }

    pub fn catalog_view(&self) -> CatalogView<'_> {
        CatalogView::new(&self.products, &self.filter)
    }

    // endregion: --- Queries

    // region:    --- Catalog mutations

    /// Assign the next id and put the product at the front of the catalog.
    ///
    /// Input is trusted; validation happens in the sell form. Nothing is
    /// persisted remotely.
    pub fn add_product(&mut self, fields: ProductForCreate) -> Product {
        let id = self.allocate_id();
        let product = fields.into_product(id);
        tracing::debug!(product_id = %id, name = %product.name, "Product added to catalog");

        self.local_ids.insert(id);
        self.products.insert(0, product.clone());
        product
    }

    /// Swap the catalog for freshly loaded products, keeping their order.
    ///
    /// Products listed in this session that the load does not contain (never
    /// published, or published after the fetch) stay at the front. Seeded
    /// products are dropped. Products whose remote id is already in the
    /// catalog keep their old id so cart lines still merge; all others get new
    /// ids. Ids are never reused.
    pub fn replace_catalog(&mut self, products: Vec<ProductForCreate>) {
        let known: HashMap<String, ProductId> = self
            .products
            .iter()
            .filter_map(|product| product.remote_id.clone().map(|remote_id| (remote_id, product.id)))
            .collect();

        let mut replaced: Vec<Product> = {
            let loaded: HashSet<&str> = products
                .iter()
                .filter_map(|fields| fields.remote_id.as_deref())
                .collect();
            self.products
                .iter()
                .filter(|product| self.local_ids.contains(&product.id))
                .filter(|product| {
                    product
                        .remote_id
                        .as_deref()
                        .map_or(true, |remote_id| !loaded.contains(remote_id))
                })
                .cloned()
                .collect()
        };
        self.local_ids = replaced.iter().map(|product| product.id).collect();
        let carried = replaced.len();

        for fields in products {
            let id = match fields.remote_id.as_ref().and_then(|remote_id| known.get(remote_id)) {
                Some(id) if !replaced.iter().any(|p: &Product| p.id == *id) => *id,
                _ => self.allocate_id(),
            };
            replaced.push(fields.into_product(id));
        }

        tracing::debug!(count = replaced.len(), carried, "Catalog replaced");
        self.products = replaced;
    }

    // endregion: --- Catalog mutations

    // region:    --- Cart mutations

    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        self.cart.add(product, quantity);
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartLine> {
        self.cart.remove(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // endregion: --- Cart mutations

    // region:    --- Filter mutations

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
    }

    pub fn set_selector(&mut self, selector: impl Into<String>) {
        self.filter.set_selector(selector);
    }

    pub fn clear_selector(&mut self) {
        self.filter.clear_selector();
    }

    // endregion: --- Filter mutations

    fn allocate_id(&mut self) -> ProductId {
        let id = ProductId(self.next_id);
        self.next_id += 1;
        id
    }
}
