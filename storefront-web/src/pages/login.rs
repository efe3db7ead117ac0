//! Login Page
//!
//! One form in two modes: log in to an existing account, or create one and
//! sign straight in.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use lib_appwrite::account::validate_credentials;

use crate::state::auth::use_auth_context;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    SignUp,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let (mode, set_mode) = signal(Mode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if let Err(e) = validate_credentials(&email, &password) {
            set_error.set(Some(e.user_message()));
            return;
        }

        let mode = mode.get_untracked();
        let name = Some(name.get_untracked().trim().to_string()).filter(|n| !n.is_empty());
        let navigate = navigate.clone();
        set_error.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let result = match mode {
                Mode::Login => auth.login(email, password).await,
                Mode::SignUp => auth.sign_up(email, password, name).await,
            };
            set_loading.set(false);

            match result {
                Ok(user) => {
                    log::info!("Signed in as {}", user.id);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::error!("Authentication failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    let toggle_mode = move |_| {
        set_error.set(None);
        set_mode.update(|mode| {
            *mode = match mode {
                Mode::Login => Mode::SignUp,
                Mode::SignUp => Mode::Login,
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="card">
                <h1>{move || if mode.get() == Mode::Login { "Log in" } else { "Create an account" }}</h1>

                <form on:submit=on_submit>
                    <Show when=move || mode.get() == Mode::SignUp>
                        <label>"Name"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </Show>

                    <label>"Email"</label>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label>"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <button class="btn" type="submit" disabled=move || loading.get()>
                        {move || match (loading.get(), mode.get()) {
                            (true, _) => "Please wait...",
                            (false, Mode::Login) => "Log in",
                            (false, Mode::SignUp) => "Sign up",
                        }}
                    </button>
                </form>

                <button class="btn btn-link" on:click=toggle_mode>
                    {move || if mode.get() == Mode::Login {
                        "No account yet? Sign up"
                    } else {
                        "Already have an account? Log in"
                    }}
                </button>
            </div>
        </div>
    }
}
