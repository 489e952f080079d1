use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query};
use tokio::sync::oneshot;

use tabscout::{api, server::CallbackGate};

fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_callback_captures_code_and_fires_completion() {
    let (tx, rx) = oneshot::channel();
    let gate = Arc::new(CallbackGate::new(tx));

    api::callback(params(&[("code", "auth-code")]), Extension(Arc::clone(&gate))).await;

    assert!(rx.await.is_ok());
    let result = gate.result.lock().await.clone().unwrap();
    assert_eq!(result.code.as_deref(), Some("auth-code"));
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn test_callback_error_redirect_carries_no_code() {
    let (tx, _rx) = oneshot::channel();
    let gate = Arc::new(CallbackGate::new(tx));

    api::callback(
        params(&[("error", "access_denied")]),
        Extension(Arc::clone(&gate)),
    )
    .await;

    let result = gate.result.lock().await.clone().unwrap();
    assert_eq!(result.code, None);
    assert_eq!(result.error.as_deref(), Some("access_denied"));
}

#[tokio::test]
async fn test_first_callback_wins_exactly() {
    let (tx, rx) = oneshot::channel();
    let gate = Arc::new(CallbackGate::new(tx));

    api::callback(params(&[("code", "first-code")]), Extension(Arc::clone(&gate))).await;
    assert!(rx.await.is_ok());

    // A straggler arriving while the server drains must not overwrite the
    // captured result
    let response = api::callback(
        params(&[("code", "late-code")]),
        Extension(Arc::clone(&gate)),
    )
    .await;

    assert!(response.0.contains("already completed"));
    let result = gate.result.lock().await.clone().unwrap();
    assert_eq!(result.code.as_deref(), Some("first-code"));
}
