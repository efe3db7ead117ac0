//! Cart drawer: lines, subtotal and the checkout/clear/continue actions.

use leptos::prelude::*;
use lib_core::CartLine;
use shared::utils::{format_line_total, format_price};

use crate::state::storefront::use_storefront_context;
use crate::utils::format::format_item_count;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let storefront = use_storefront_context();

    let lines = move || storefront.store.with(|store| store.cart_lines().to_vec());
    let is_empty = move || storefront.store.with(|store| store.cart().is_empty());
    let subtotal = move || storefront.store.with(|store| format_price(store.cart_total()));
    let quantity = move || storefront.store.with(|store| format_item_count(store.cart_quantity()));

    let on_checkout = move |_| {
        storefront.notify("Checkout is not available yet".to_string());
    };

    view! {
        <div class="drawer-backdrop" on:click=move |_| storefront.cart_open.set(false)>
            <aside class="cart-drawer" on:click=|ev| ev.stop_propagation()>
                <h2>"Your Cart"</h2>

                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
                >
                    <ul class="cart-lines">
                        {move || lines().into_iter().map(|line| view! { <CartLineRow line/> }).collect_view()}
                    </ul>
                </Show>

                <div class="cart-summary">
                    <span>{quantity}</span>
                    <span class="cart-subtotal">"Subtotal: " {subtotal}</span>
                </div>

                <div class="cart-actions">
                    <button class="btn" disabled=is_empty on:click=on_checkout>"Checkout"</button>
                    <button class="btn btn-secondary" disabled=is_empty on:click=move |_| storefront.clear_cart()>
                        "Clear cart"
                    </button>
                    <button class="btn btn-link" on:click=move |_| storefront.cart_open.set(false)>
                        "Continue shopping"
                    </button>
                </div>
            </aside>
        </div>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let storefront = use_storefront_context();
    let id = line.product_id();

    view! {
        <li class="cart-line">
            <img class="cart-line-image" src=line.product.primary_image().to_string() alt=line.product.name.clone()/>
            <div class="cart-line-info">
                <span class="cart-line-name">{line.product.name.clone()}</span>
                <span class="cart-line-quantity">{format!("Qty: {}", line.quantity)}</span>
                <span class="cart-line-total">{format_line_total(line.product.price, line.quantity)}</span>
            </div>
            <button class="btn btn-link" on:click=move |_| storefront.remove_from_cart(id)>"Remove"</button>
        </li>
    }
}
