//! # Requests Page
//!
//! Inbox of purchase requests (offers) addressed to the signed-in seller.
//! Requests can be marked as read or deleted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_appwrite::StorefrontBackend;
use shared::dto::purchase_request::{PurchaseRequestDocument, PurchaseRequestForUpdate};
use shared::utils::format_price;

use crate::state::auth::{use_auth_context, AuthContext};
use crate::state::storefront::use_storefront_context;
use crate::utils::format::format_request_time;

#[derive(Clone, Copy)]
struct Inbox {
    requests: RwSignal<Vec<PurchaseRequestDocument>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
}

impl Inbox {
    fn new() -> Self {
        Self {
            requests: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    async fn load(self, auth: AuthContext, seller_id: String) {
        self.loading.set(true);
        match auth.client().list_purchase_requests_for_seller(&seller_id).await {
            Ok(requests) => {
                log::info!("Loaded {} purchase requests", requests.len());
                self.requests.set(requests);
                self.error.set(None);
            }
            Err(e) => {
                log::error!("Failed to load purchase requests: {}", e);
                self.error.set(Some(e.user_message()));
            }
        }
        self.loading.set(false);
    }

    async fn mark_read(self, auth: AuthContext, id: String) {
        match auth
            .client()
            .update_purchase_request(&id, &PurchaseRequestForUpdate::mark_read())
            .await
        {
            Ok(updated) => self.requests.update(|requests| {
                if let Some(slot) = requests.iter_mut().find(|r| r.id() == id) {
                    *slot = updated;
                }
            }),
            Err(e) => {
                log::error!("Failed to mark request {} as read: {}", id, e);
                self.error.set(Some(e.user_message()));
            }
        }
    }

    async fn delete(self, auth: AuthContext, id: String) {
        match auth.client().delete_purchase_request_by_id(&id).await {
            Ok(()) => self.requests.update(|requests| requests.retain(|r| r.id() != id)),
            Err(e) => {
                log::error!("Failed to delete request {}: {}", id, e);
                self.error.set(Some(e.user_message()));
            }
        }
    }
}

#[component]
pub fn RequestsPage() -> impl IntoView {
    let auth = use_auth_context();
    let inbox = Inbox::new();

    // Reload whenever the signed-in account changes
    Effect::new(move |_| {
        match auth.user_id() {
            Some(seller_id) => spawn_local(inbox.load(auth, seller_id)),
            None => inbox.requests.set(Vec::new()),
        }
    });

    let content = move || {
        if !auth.is_signed_in() {
            return view! {
                <p>"Log in to see offers on your listings. " <A href="/login">"Log in"</A></p>
            }
            .into_any();
        }
        if inbox.loading.get() {
            return view! { <p>"Loading requests..."</p> }.into_any();
        }

        let requests = inbox.requests.get();
        if requests.is_empty() {
            return view! { <p class="no-products">"No purchase requests yet."</p> }.into_any();
        }

        requests
            .into_iter()
            .map(|request| view! { <RequestRow request inbox/> })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="requests">
            <h1>"Purchase Requests"</h1>
            {move || inbox.error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <div class="request-list">{content}</div>
        </section>
    }
}

#[component]
fn RequestRow(request: PurchaseRequestDocument, inbox: Inbox) -> impl IntoView {
    let auth = use_auth_context();
    let storefront = use_storefront_context();

    let id = request.id().to_string();
    let mark_id = id.clone();
    let data = request.data;
    let product_name = storefront.store.with_untracked(|store| {
        store
            .products()
            .iter()
            .find(|p| p.remote_id.as_deref() == Some(data.product.as_str()))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Listing {}", data.product))
    });
    let received = format_request_time(request.meta.created_at.as_deref());
    let is_read = data.is_read;

    view! {
        <div class="request-card" class:unread=move || !is_read>
            <div class="request-header">
                <span class="request-product">{product_name}</span>
                <span class="request-time">{received}</span>
            </div>
            <p class="request-bid">{format!("Offer: {}", format_price(data.bid_price))}</p>
            <p class="request-from">{format!("From {} ({})", data.name, data.contact_no)}</p>
            <p class="request-message">{data.message}</p>
            <div class="request-actions">
                <Show when=move || !is_read>
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let mark_id = mark_id.clone();
                            move |_| spawn_local(inbox.mark_read(auth, mark_id.clone()))
                        }
                    >
                        "Mark as read"
                    </button>
                </Show>
                <button
                    class="btn btn-link"
                    on:click=move |_| spawn_local(inbox.delete(auth, id.clone()))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
