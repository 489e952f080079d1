use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::{Mutex, oneshot};

use crate::{api, error, types::AuthCallback};

/// Shared state between the auth flow and the callback handler. The handler
/// fills `result` with the redirect's query parameters and fires `done`;
/// firing it both wakes the waiting flow and shuts the server down, so the
/// listener handles exactly one callback.
pub struct CallbackGate {
    pub result: Mutex<Option<AuthCallback>>,
    pub done: Mutex<Option<oneshot::Sender<()>>>,
}

impl CallbackGate {
    pub fn new(done: oneshot::Sender<()>) -> Self {
        CallbackGate {
            result: Mutex::new(None),
            done: Mutex::new(Some(done)),
        }
    }
}

pub async fn start_callback_server(
    address: &str,
    callback_path: &str,
    gate: Arc<CallbackGate>,
    shutdown: oneshot::Receiver<()>,
) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route(callback_path, get(api::callback).layer(Extension(gate)));

    let addr = match SocketAddr::from_str(address) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await.ok();
        })
        .await
        .unwrap();
}
