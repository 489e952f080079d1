use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use crate::{server::CallbackGate, types::AuthCallback};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(gate): Extension<Arc<CallbackGate>>,
) -> Html<&'static str> {
    let received = AuthCallback {
        code: params.get("code").cloned(),
        error: params.get("error").cloned(),
    };
    let ok = received.code.is_some();

    // First callback wins exactly: only the request that takes the sender
    // may write the result. Later redirects arriving while the server
    // drains cannot overwrite it.
    let Some(done) = gate.done.lock().await.take() else {
        return Html("<h4>Authorization already completed.</h4>");
    };

    {
        let mut result = gate.result.lock().await;
        *result = Some(received);
    }

    // Releasing the sender also stops the server.
    let _ = done.send(());

    if ok {
        Html("<h2>Authorization received.</h2><p>Close this browser window.</p>")
    } else {
        Html("<h4>Authorization denied.</h4>")
    }
}
