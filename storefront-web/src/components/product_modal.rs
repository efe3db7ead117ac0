//! # Product Detail Modal
//!
//! Image carousel, quantity selector, seller details and the "Make an
//! offer" form. Escape or a click on the backdrop closes it.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_appwrite::StorefrontBackend;
use lib_core::{OfferForm, Product, SubmissionGuard};
use shared::utils::{format_line_total, format_price};

use crate::state::auth::use_auth_context;
use crate::state::storefront::use_storefront_context;
use crate::utils::carousel::{wrap_next, wrap_prev};
use crate::utils::format::format_listing_date;

#[component]
pub fn ProductModal(product: Product, on_close: Callback<()>) -> impl IntoView {
    let storefront = use_storefront_context();

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let images = product.images.clone();
    let image_count = images.len();
    let (image_index, set_image_index) = signal(0usize);
    let (quantity, set_quantity) = signal(1u32);

    let current_image = move || {
        images
            .get(image_index.get())
            .cloned()
            .unwrap_or_else(|| lib_core::model::PLACEHOLDER_IMAGE.to_string())
    };

    let price = product.price;
    let seller_name = product.seller_name().to_string();
    let seller_avatar = product.seller_avatar().map(str::to_string);
    let listed = format_listing_date(product.listed_at);
    let for_cart = product.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>

                <div class="carousel">
                    <img class="carousel-image" src=current_image alt=product.name.clone()/>
                    <Show when=move || { image_count > 1 }>
                        <button
                            class="carousel-prev"
                            on:click=move |_| set_image_index.update(|i| *i = wrap_prev(*i, image_count))
                        >
                            "‹"
                        </button>
                        <button
                            class="carousel-next"
                            on:click=move |_| set_image_index.update(|i| *i = wrap_next(*i, image_count))
                        >
                            "›"
                        </button>
                        <span class="carousel-position">
                            {move || format!("{} / {}", image_index.get() + 1, image_count)}
                        </span>
                    </Show>
                </div>

                <div class="modal-details">
                    <h2>{product.name.clone()}</h2>
                    <p class="product-category">{product.display_category().to_string()}</p>
                    <p class="product-price">{format_price(price)}</p>
                    <p class="product-description">{product.description.clone()}</p>

                    <div class="seller">
                        {seller_avatar.map(|avatar| view! { <img class="seller-avatar" src=avatar alt="Seller"/> })}
                        <span class="seller-name">{seller_name}</span>
                    </div>
                    <p class="listing-date">{listed}</p>

                    <div class="quantity">
                        <label for="quantity">"Quantity"</label>
                        <input
                            id="quantity"
                            type="number"
                            min="1"
                            prop:value=move || quantity.get().to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse::<u32>().unwrap_or(1);
                                set_quantity.set(value.max(1));
                            }
                        />
                        <span class="line-total">{move || format_line_total(price, quantity.get())}</span>
                    </div>

                    <button
                        class="btn"
                        on:click=move |_| {
                            storefront.add_to_cart(&for_cart, quantity.get_untracked());
                            on_close.run(());
                        }
                    >
                        "Add to Cart"
                    </button>

                    <OfferPanel product=product.clone()/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OfferPanel(product: Product) -> impl IntoView {
    let auth = use_auth_context();

    let can_offer = product.remote_id.is_some() && product.owner_id.is_some();
    let product = StoredValue::new(product);
    let guard = StoredValue::new(SubmissionGuard::new());

    let form = RwSignal::new(OfferForm::for_requester(auth.display_name().unwrap_or_default()));
    let (open, set_open) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (sent, set_sent) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = guard.with_value(|guard| guard.try_begin()) else {
            return;
        };

        let data = match product.with_value(|product| form.with_untracked(|form| form.validate(product))) {
            Ok(data) => data,
            Err(e) => {
                set_error.set(Some(e.user_message()));
                return;
            }
        };

        set_error.set(None);
        set_submitting.set(true);
        let client = auth.client();
        spawn_local(async move {
            let _ticket = ticket;
            match client.create_purchase_request(&data).await {
                Ok(document) => {
                    log::info!("Offer sent as request {}", document.id());
                    set_sent.set(true);
                }
                Err(e) => {
                    log::error!("Failed to send offer: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_submitting.set(false);
        });
    };

    let body = move || {
        if !can_offer {
            return view! { <p class="hint">"Offers are available on published listings."</p> }.into_any();
        }
        if !auth.is_signed_in() {
            return view! { <p class="hint">"Log in to make an offer."</p> }.into_any();
        }
        if sent.get() {
            return view! { <p class="success">"Your offer was sent to the seller."</p> }.into_any();
        }
        if !open.get() {
            return view! {
                <button class="btn btn-secondary" on:click=move |_| set_open.set(true)>
                    "Make an offer"
                </button>
            }
            .into_any();
        }

        view! {
            <form class="offer-form" on:submit=on_submit>
                <input
                    type="number"
                    min="1"
                    placeholder="Your price"
                    prop:value=move || form.with(|f| f.bid_price.clone())
                    on:input=move |ev| form.update(|f| f.bid_price = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="tel"
                    placeholder="Contact number"
                    prop:value=move || form.with(|f| f.contact_no.clone())
                    on:input=move |ev| form.update(|f| f.contact_no = event_target_value(&ev))
                />
                <textarea
                    placeholder="Message to the seller"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button class="btn" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send offer" }}
                </button>
            </form>
        }
        .into_any()
    };

    view! { <div class="offer-panel">{body}</div> }
}
