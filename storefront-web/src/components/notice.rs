//! Transient toast for cart and listing confirmations.

use leptos::prelude::*;

use crate::state::storefront::use_storefront_context;

#[component]
pub fn Notice() -> impl IntoView {
    let storefront = use_storefront_context();

    move || {
        storefront.notice.get().map(|message| {
            view! {
                <div class="notice" role="status" on:click=move |_| storefront.notice.set(None)>
                    {message}
                </div>
            }
        })
    }
}
