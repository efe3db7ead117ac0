use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Buy and sell pre-loved goods near you."</p>
            <p class="footer-small">"© Storefront"</p>
        </footer>
    }
}
