use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use tokio::sync::oneshot;

use crate::{
    config::AuthConfig,
    info,
    server::{CallbackGate, start_callback_server},
    types::{AuthError, Token},
    warning,
};

const CALLBACK_WAIT: Duration = Duration::from_secs(60);

/// Runs the complete authorization-code flow and returns a bearer token.
///
/// Starts the one-shot callback server, opens the authorization URL in the
/// user's default browser (falling back to printing the URL if that fails),
/// waits for the single redirect and exchanges the received code for an
/// access token.
///
/// # Errors
///
/// - [`AuthError::NoCode`] if the redirect carried an `error` parameter,
///   no `code`, or did not arrive within 60 seconds
/// - [`AuthError::TokenExchangeFailed`] if the token endpoint did not
///   answer 200 with a parseable token body
pub async fn authorize(config: &AuthConfig) -> Result<Token, AuthError> {
    let code = await_authorization_code(config).await.ok_or(AuthError::NoCode)?;

    exchange_code(config, &code)
        .await
        .ok_or(AuthError::TokenExchangeFailed)
}

/// Opens the browser on the authorization URL and blocks until the local
/// callback server has seen exactly one redirect, returning its `code`
/// parameter. An error-flow redirect or a 60-second timeout yields `None`.
async fn await_authorization_code(config: &AuthConfig) -> Option<String> {
    let (done_tx, done_rx) = oneshot::channel();
    let gate = Arc::new(CallbackGate::new(done_tx));

    let server_gate = Arc::clone(&gate);
    let address = config.server_address.clone();
    let path = config.callback_path.clone();
    let mut server = tokio::spawn(async move {
        start_callback_server(&address, &path, server_gate, done_rx).await;
    });

    let auth_url = format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = config.auth_url,
        client_id = config.client_id,
        redirect_uri = urlencoding::encode(&config.redirect_uri),
        scope = urlencoding::encode(&config.scope),
    );

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    info!("Waiting for Spotify to redirect back...");

    // The server only returns once the callback fired the gate; bound the
    // wait so an abandoned browser window does not hang the run forever.
    if tokio::time::timeout(CALLBACK_WAIT, &mut server).await.is_err() {
        server.abort();
        warning!("No authorization redirect received within 60 seconds.");
        return None;
    }

    let callback = gate.result.lock().await.take()?;
    if let Some(err) = callback.error {
        warning!("Authorization was denied: {}", err);
        return None;
    }

    callback.code
}

/// Exchanges an authorization code for an access token.
///
/// Issues a single POST with the client credentials base64-encoded into an
/// `Authorization: Basic` header and the grant parameters form-encoded in
/// the body. Any non-200 answer or unparseable body yields `None`; the code
/// is single-use, so there is nothing to retry.
pub async fn exchange_code(config: &AuthConfig, code: &str) -> Option<Token> {
    let basic = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));

    let client = Client::new();
    let response = client
        .post(&config.token_url)
        .header("Authorization", format!("Basic {}", basic))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
        ])
        .send()
        .await;

    let response = match response {
        Ok(resp) if resp.status().is_success() => resp,
        Ok(resp) => {
            warning!("Token exchange answered {}.", resp.status());
            return None;
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return None;
        }
    };

    match response.json::<Token>().await {
        Ok(token) => Some(token),
        Err(e) => {
            warning!("Cannot parse token response: {}", e);
            None
        }
    }
}
