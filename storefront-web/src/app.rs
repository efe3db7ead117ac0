//! Storefront Web App - Leptos Frontend
//!
//! Root component: contexts, remote catalog load and routes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use lib_appwrite::StorefrontBackend;
use lib_core::ProductForCreate;

use crate::components::{CartDrawer, CategoryBrowser, Footer, Navbar, Notice, SellForm};
use crate::pages::{CatalogPage, LoginPage, RequestsPage};
use crate::state::auth::{provide_auth_context, AuthContext};
use crate::state::storefront::{provide_storefront_context, StorefrontContext};

#[component]
pub fn App() -> impl IntoView {
    let storefront = provide_storefront_context();
    let auth = provide_auth_context();

    spawn_local(auth.refresh());
    spawn_local(load_remote_catalog(storefront, auth));

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Show when=move || storefront.categories_open.get()>
                    <CategoryBrowser/>
                </Show>
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=CatalogPage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/requests") view=RequestsPage/>
                    </Routes>
                </main>
                <Show when=move || storefront.sell_open.get()>
                    <SellForm/>
                </Show>
                <Show when=move || storefront.cart_open.get()>
                    <CartDrawer/>
                </Show>
                <Notice/>
                <Footer/>
            </div>
        </Router>
    }
}

/// Replace the seed catalog with the remote one. The seed stays when the
/// backend is unreachable or holds no products yet.
async fn load_remote_catalog(storefront: StorefrontContext, auth: AuthContext) {
    let documents = match auth.client().list_products().await {
        Ok(documents) => documents,
        Err(e) => {
            log::warn!("Remote catalog unavailable, showing seed catalog: {}", e);
            return;
        }
    };

    if documents.is_empty() {
        log::info!("Remote catalog is empty; keeping seed catalog");
        return;
    }

    let taxonomy = storefront.taxonomy();
    let products: Vec<ProductForCreate> = documents
        .iter()
        .map(|document| ProductForCreate::from_document(document, &taxonomy))
        .collect();
    log::info!("Loaded {} products from the backend", products.len());
    storefront.replace_catalog(products);
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Back to the shop"</span>
            </A>
        </div>
    }
}
