//! # Account Endpoints
//!
//! Session lifecycle: login, sign-up, current user and logout. Failures are
//! [`AppError::Auth`] carrying the service's message.

use lib_core::{AppError, Result};
use lib_utils::validation::{validate_email, validate_min_length};
use reqwest::{Method, RequestBuilder};
use shared::dto::account::{AccountUser, EmailSessionRequest, Session, SignUpRequest};

use super::client::{send, send_json, unique_id, AppwriteClient};

/// Shortest password the account service accepts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Check credentials before any remote call.
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    validate_email(email).map_err(AppError::Validation)?;
    validate_min_length(password, MIN_PASSWORD_LEN, "Password").map_err(AppError::Validation)?;
    Ok(())
}

fn login_request(client: &AppwriteClient, email: &str, password: &str) -> Result<RequestBuilder> {
    validate_credentials(email, password)?;

    let request = EmailSessionRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    Ok(client
        .request(Method::POST, "/account/sessions/email")
        .json(&request))
}

fn sign_up_request(
    client: &AppwriteClient,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<RequestBuilder> {
    validate_credentials(email, password)?;

    let request = SignUpRequest {
        user_id: unique_id(),
        email: email.trim().to_string(),
        password: password.to_string(),
        name: name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string),
    };
    Ok(client.request(Method::POST, "/account").json(&request))
}

/// Create an email/password session.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &AppwriteClient, email: &str, password: &str) -> Result<Session> {
    tracing::info!("Attempting login");
    let response = send(login_request(client, email, password)?, AppError::Auth, "login").await?;
    client.remember_session(&response);

    response.json::<Session>().await.map_err(|e| {
        tracing::error!(error = %e, "Login response parse error");
        AppError::Decoding(format!("Failed to parse session: {}", e))
    })
}

/// Register a new account. Does not sign in.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn sign_up(
    client: &AppwriteClient,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<AccountUser> {
    send_json(sign_up_request(client, email, password, name)?, AppError::Auth, "sign_up").await
}

/// The signed-in user; fails with [`AppError::Auth`] when there is no session.
#[tracing::instrument(skip(client))]
pub async fn get_user(client: &AppwriteClient) -> Result<AccountUser> {
    send_json(client.request(Method::GET, "/account"), AppError::Auth, "get_user").await
}

/// Delete the current session. The local session is forgotten either way.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &AppwriteClient) -> Result<()> {
    let result = send(
        client.request(Method::DELETE, "/account/sessions/current"),
        AppError::Auth,
        "logout",
    )
    .await;
    client.forget_session();

    result.map(|_| ())
}
