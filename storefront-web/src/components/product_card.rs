//! Product card for the catalog grid. Clicking the card body opens the
//! detail modal.

use leptos::prelude::*;
use lib_core::Product;
use shared::utils::format_price;

use crate::components::ProductModal;
use crate::state::storefront::use_storefront_context;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let storefront = use_storefront_context();
    let (show_details, set_show_details) = signal(false);

    let image = product.primary_image().to_string();
    let name = product.name.clone();
    let price = format_price(product.price);
    let category = product.display_category().to_string();
    let for_cart = product.clone();
    let for_modal = StoredValue::new(product);

    view! {
        <div class="product-card">
            <div class="product-card-body" on:click=move |_| set_show_details.set(true)>
                <img class="product-image" src=image alt=name.clone()/>
                <h3 class="product-name">{name.clone()}</h3>
                <p class="product-price">{price}</p>
                <p class="product-category">{category}</p>
            </div>
            <button class="btn" on:click=move |_| storefront.add_to_cart(&for_cart, 1)>
                "Add to Cart"
            </button>

            <Show when=move || show_details.get()>
                <ProductModal
                    product=for_modal.get_value()
                    on_close=Callback::new(move |_| set_show_details.set(false))
                />
            </Show>
        </div>
    }
}
