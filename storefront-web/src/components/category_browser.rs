//! Two-level category browser. Picking a category or one of its
//! subcategories filters the catalog.

use leptos::prelude::*;

use crate::state::storefront::use_storefront_context;

#[component]
pub fn CategoryBrowser() -> impl IntoView {
    let storefront = use_storefront_context();
    let taxonomy = storefront.taxonomy();

    let columns = taxonomy
        .categories()
        .iter()
        .map(|node| {
            let category = node.name.clone();
            let show_all = category.clone();
            let subcategories = node
                .subcategories
                .iter()
                .map(|subcategory| {
                    let selector = subcategory.clone();
                    view! {
                        <li>
                            <button
                                class="category-link"
                                on:click=move |_| storefront.set_selector(selector.clone())
                            >
                                {subcategory.clone()}
                            </button>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class="category-column">
                    <h3>{category.clone()}</h3>
                    <ul>
                        <li>
                            <button
                                class="category-link category-all"
                                on:click=move |_| storefront.set_selector(show_all.clone())
                            >
                                {format!("Show all {}", category)}
                            </button>
                        </li>
                        {subcategories}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="category-browser">
            <div class="category-grid">{columns}</div>
            <button class="btn btn-link" on:click=move |_| storefront.categories_open.set(false)>
                "Close"
            </button>
        </div>
    }
}
