//! Storefront state management
//!
//! The catalog, cart and filter live in one [`Storefront`] behind a signal;
//! every mutation goes through it so the invariants hold in one place. The
//! remaining signals are UI toggles.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{Product, ProductForCreate, ProductId, Storefront, Taxonomy};

use crate::utils::constants::{taxonomy, NOTICE_DURATION_MS};

/// Global storefront context
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub store: RwSignal<Storefront>,
    pub cart_open: RwSignal<bool>,
    pub sell_open: RwSignal<bool>,
    pub categories_open: RwSignal<bool>,
    pub notice: RwSignal<Option<String>>,
}

impl StorefrontContext {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            store: RwSignal::new(Storefront::with_catalog(taxonomy, lib_core::model::seed_catalog())),
            cart_open: RwSignal::new(false),
            sell_open: RwSignal::new(false),
            categories_open: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    pub fn taxonomy(&self) -> Taxonomy {
        self.store.with(|store| store.taxonomy().clone())
    }

    pub fn cart_item_count(&self) -> usize {
        self.store.with(|store| store.cart_item_count())
    }

    pub fn add_to_cart(&self, product: &Product, quantity: u32) {
        self.store.update(|store| store.add_to_cart(product, quantity));
        self.notify(format!("Added {} to cart", product.name));
    }

    pub fn remove_from_cart(&self, id: ProductId) {
        self.store.update(|store| {
            store.remove_from_cart(id);
        });
    }

    pub fn clear_cart(&self) {
        self.store.update(|store| store.clear_cart());
    }

    /// Prepend a new listing. `None` only once the app has been unmounted.
    pub fn add_product(&self, fields: ProductForCreate) -> Option<Product> {
        let product = self.store.try_update(|store| store.add_product(fields))?;
        self.notify(format!("{} is now listed", product.name));
        Some(product)
    }

    pub fn replace_catalog(&self, products: Vec<ProductForCreate>) {
        self.store.update(|store| store.replace_catalog(products));
    }

    pub fn set_search(&self, search: String) {
        self.store.update(|store| store.set_search(search));
    }

    /// Filter by a category or subcategory and close the browser.
    pub fn set_selector(&self, selector: String) {
        self.store.update(|store| store.set_selector(selector));
        self.categories_open.set(false);
    }

    pub fn clear_selector(&self) {
        self.store.update(|store| store.clear_selector());
    }

    pub fn toggle_cart(&self) {
        self.cart_open.update(|open| *open = !*open);
    }

    /// Show a transient message. A newer message is never cleared early by
    /// an older one's timer.
    pub fn notify(&self, message: String) {
        self.notice.set(Some(message.clone()));
        let notice = self.notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DURATION_MS).await;
            notice.update(|current| {
                if current.as_deref() == Some(message.as_str()) {
                    *current = None;
                }
            });
        });
    }
}

pub fn provide_storefront_context() -> StorefrontContext {
    let context = StorefrontContext::new(taxonomy());
    provide_context(context);
    context
}

pub fn use_storefront_context() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}
