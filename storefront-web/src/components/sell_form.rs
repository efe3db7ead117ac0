//! # Sell Form
//!
//! Modal form for listing a new product. On submit the form is validated;
//! when signed in the listing is published to the backend first, then it is
//! added to the local catalog, and the form resets and closes. Any error is
//! shown inline and leaves the form as it was. Submitting waits until picked
//! image files have been read.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_appwrite::publish_listing;
use lib_core::{ProductForCreate, Result, SellForm as SellFormState, SubmissionGuard, MAX_LISTING_IMAGES};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::services::images::{files_from_input, read_images};
use crate::state::auth::{use_auth_context, AuthContext};
use crate::state::storefront::use_storefront_context;

#[component]
pub fn SellForm() -> impl IntoView {
    let storefront = use_storefront_context();
    let auth = use_auth_context();
    let taxonomy = StoredValue::new(storefront.taxonomy());

    let mut initial = taxonomy.with_value(SellFormState::new);
    initial.seller_name = Some(auth.display_name().unwrap_or_default());
    let form = RwSignal::new(initial);

    let guard = StoredValue::new(SubmissionGuard::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let close = move || {
        storefront.sell_open.set(false);
        set_error.set(None);
    };

    let category_options = taxonomy.with_value(|taxonomy| {
        taxonomy
            .category_names()
            .map(|name| {
                let value = name.to_string();
                view! { <option value=value.clone()>{value.clone()}</option> }
            })
            .collect_view()
    });

    let subcategory_options = move || {
        let category = form.with(|f| f.category().to_string());
        let subcategories = taxonomy.with_value(|taxonomy| {
            taxonomy.subcategories(&category).map(<[String]>::to_vec).unwrap_or_default()
        });
        subcategories
            .into_iter()
            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
            .collect_view()
    };

    let on_files = move |ev: ev::Event| {
        let Some(input) = ev.target().and_then(|target| target.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let room = MAX_LISTING_IMAGES.saturating_sub(form.with_untracked(|f| f.images().len()));
        let files = files_from_input(&input, room);
        input.set_value("");

        form.update(|f| f.begin_image_read());
        spawn_local(async move {
            let images = read_images(files).await;
            form.update(|f| {
                f.finish_image_read(images);
            });
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = guard.with_value(|guard| guard.try_begin()) else {
            log::debug!("Sell form already submitting");
            return;
        };

        let fields = match form.with_untracked(|f| taxonomy.with_value(|taxonomy| f.validate(taxonomy))) {
            Ok(fields) => fields,
            Err(e) => {
                set_error.set(Some(e.user_message()));
                return;
            }
        };

        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            let _ticket = ticket;
            match publish_if_signed_in(auth, fields).await {
                Ok(fields) => {
                    if let Some(product) = storefront.add_product(fields) {
                        log::info!("Listed product {} ({})", product.id, product.name);
                    }
                    form.update(|f| taxonomy.with_value(|taxonomy| f.reset(taxonomy)));
                    close();
                }
                Err(e) => {
                    log::error!("Failed to publish listing: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_submitting.set(false);
        });
    };

    let previews = move || {
        form.with(|f| f.images().to_vec())
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                view! {
                    <div class="image-preview">
                        <img src=image alt=format!("Image {}", index + 1)/>
                        <button
                            type="button"
                            class="image-remove"
                            on:click=move |_| form.update(|f| {
                                f.remove_image(index);
                            })
                        >
                            "×"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="modal sell-modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| close()>"×"</button>
                <h2>"Sell an item"</h2>

                <form class="sell-form" on:submit=on_submit>
                    <label>"Product name"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />

                    <label>"Price"</label>
                    <input
                        type="number"
                        min="1"
                        step="1"
                        prop:value=move || form.with(|f| f.price.clone())
                        on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                    />

                    <label>"Category"</label>
                    <select
                        prop:value=move || form.with(|f| f.category().to_string())
                        on:change=move |ev| form.update(|f| f.select_category(event_target_value(&ev)))
                    >
                        {category_options}
                    </select>

                    <label>"Subcategory"</label>
                    <select
                        prop:value=move || form.with(|f| f.subcategory().unwrap_or_default().to_string())
                        on:change=move |ev| form.update(|f| f.select_subcategory(event_target_value(&ev)))
                    >
                        <option value="">"None"</option>
                        {subcategory_options}
                    </select>

                    <label>"Description"</label>
                    <textarea
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>

                    <label>"Seller name"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.seller_name.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.seller_name = Some(event_target_value(&ev)))
                    />

                    <label>{format!("Images (up to {})", MAX_LISTING_IMAGES)}</label>
                    <input
                        type="file"
                        accept="image/*"
                        multiple=true
                        disabled=move || !form.with(|f| f.can_add_images())
                        on:change=on_files
                    />
                    <div class="image-previews">{previews}</div>

                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <button
                        class="btn"
                        type="submit"
                        disabled=move || submitting.get() || form.with(|f| f.is_reading_images())
                    >
                        {move || {
                            if submitting.get() {
                                "Listing..."
                            } else if form.with(|f| f.is_reading_images()) {
                                "Loading images..."
                            } else {
                                "List item"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Publish remotely when someone is signed in; otherwise the listing stays
/// local to this browser session.
async fn publish_if_signed_in(auth: AuthContext, fields: ProductForCreate) -> Result<ProductForCreate> {
    match auth.user_id() {
        Some(user_id) => publish_listing(&auth.client(), &user_id, fields).await,
        None => {
            log::info!("Not signed in; listing kept locally");
            Ok(fields)
        }
    }
}
