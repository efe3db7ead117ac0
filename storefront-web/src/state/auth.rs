//! Auth state management
//!
//! Holds the signed-in account and the single [`AppwriteClient`] every page
//! talks to the backend through.

use leptos::prelude::*;
use lib_appwrite::{AppwriteClient, StorefrontBackend};
use lib_core::{AppError, Result};
use shared::dto::account::AccountUser;

use crate::services::session::{clear_session, load_session, save_session};
use crate::utils::constants::backend_config;

/// Global auth context
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<AccountUser>>,
    client: StoredValue<AppwriteClient, LocalStorage>,
}

impl AuthContext {
    pub fn new(client: AppwriteClient) -> Self {
        Self {
            user: RwSignal::new(None),
            client: StoredValue::new_local(client),
        }
    }

    pub fn client(&self) -> AppwriteClient {
        self.client.get_value()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.with(|user| user.as_ref().map(|u| u.id.clone()))
    }

    pub fn display_name(&self) -> Option<String> {
        self.user
            .with(|user| user.as_ref().map(|u| u.display_name().to_string()))
    }

    /// Restore a persisted session and load its account. A rejected session
    /// is discarded.
    pub async fn refresh(self) {
        let client = self.client();
        client.restore_session(load_session());
        if client.session_token().is_none() {
            return;
        }

        match client.get_user().await {
            Ok(user) => {
                log::info!("Session restored for {}", user.id);
                self.user.set(Some(user));
            }
            Err(AppError::Auth(_)) | Err(AppError::NotFound(_)) => {
                log::info!("Stored session rejected; signing out");
                client.restore_session(None);
                clear_session();
            }
            Err(e) => log::warn!("Failed to restore session: {}", e),
        }
    }

    pub async fn login(self, email: String, password: String) -> Result<AccountUser> {
        let client = self.client();
        client.login(&email, &password).await?;
        if let Some(token) = client.session_token() {
            save_session(&token);
        }

        let user = client.get_user().await?;
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    /// Create the account, then sign in with the same credentials.
    pub async fn sign_up(self, email: String, password: String, name: Option<String>) -> Result<AccountUser> {
        self.client()
            .sign_up(&email, &password, name.as_deref())
            .await?;
        self.login(email, password).await
    }

    pub async fn logout(self) {
        if let Err(e) = self.client().logout().await {
            log::warn!("Remote logout failed: {}", e);
        }
        clear_session();
        self.user.set(None);
    }
}

pub fn provide_auth_context() -> AuthContext {
    let context = AuthContext::new(AppwriteClient::new(backend_config()));
    provide_context(context);
    context
}

pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
