//! Catalog page: the filtered product grid.

use leptos::prelude::*;
use lib_core::Product;

use crate::components::ProductCard;
use crate::state::storefront::use_storefront_context;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let storefront = use_storefront_context();

    let selector = move || storefront.store.with(|store| store.filter().selector.clone());

    // Owned copies, so no signal borrow is held while the cards render
    let visible = move || {
        storefront.store.with(|store| {
            let view = store.catalog_view();
            (!view.is_empty()).then(|| view.products().into_iter().cloned().collect::<Vec<Product>>())
        })
    };

    view! {
        <section class="catalog">
            <h1>"Our Products"</h1>

            {move || selector().map(|selector| view! {
                <div class="filter-bar">
                    <span>{format!("Category: {}", selector)}</span>
                    <button class="btn btn-link" on:click=move |_| storefront.clear_selector()>
                        "Clear Filter"
                    </button>
                </div>
            })}

            {move || match visible() {
                Some(products) => view! {
                    <div class="product-grid">
                        {products
                            .into_iter()
                            .map(|product| view! { <ProductCard product/> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                None => view! { <p class="no-products">"No products found"</p> }.into_any(),
            }}
        </section>
    }
}
