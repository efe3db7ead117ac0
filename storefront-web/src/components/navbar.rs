//! Navigation Bar Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::state::auth::use_auth_context;
use crate::state::storefront::use_storefront_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let storefront = use_storefront_context();
    let auth = use_auth_context();

    let search = move || storefront.store.with(|store| store.filter().search.clone());
    let cart_count = move || storefront.cart_item_count();

    let on_logout = move |_| spawn_local(auth.logout());

    view! {
        <nav class="navbar">
            <A href="/" attr:class="nav-link-clean">
                <span class="nav-title">"Storefront"</span>
            </A>

            <input
                class="search-input"
                type="search"
                placeholder="Search products or categories"
                prop:value=search
                on:input=move |ev| storefront.set_search(event_target_value(&ev))
            />

            <button
                class="btn btn-secondary"
                on:click=move |_| storefront.categories_open.update(|open| *open = !*open)
            >
                "All Categories"
            </button>

            <button class="btn btn-sell" on:click=move |_| storefront.sell_open.set(true)>
                "+ SELL"
            </button>

            <button class="btn btn-cart" on:click=move |_| storefront.toggle_cart()>
                "Cart"
                <Show when=move || { cart_count() > 0 }>
                    <span class="badge">{cart_count}</span>
                </Show>
            </button>

            <Show
                when=move || auth.is_signed_in()
                fallback=|| view! { <A href="/login" attr:class="nav-link">"Login"</A> }
            >
                <A href="/requests" attr:class="nav-link">"Requests"</A>
                <span class="nav-user">{move || auth.display_name().unwrap_or_default()}</span>
                <button class="btn btn-link" on:click=on_logout>"Logout"</button>
            </Show>
        </nav>
    }
}
