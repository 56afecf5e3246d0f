//! Effect handler implementations.
//!
//! Handlers are pure async functions returning the event to feed back
//! through the inbox; the runtime handles spawning.

use shep_core::client::{RegisterRequest, ShepherdClient};

use crate::events::UiEvent;

/// Sends an add-session request and wraps the decoded outcome.
pub async fn register_session(client: ShepherdClient, request: RegisterRequest) -> UiEvent {
    let outcome = client.register(&request).await;
    UiEvent::Registered { request, outcome }
}

/// Sends a release request for an already-removed row.
///
/// Failures are logged and nothing else: the row is gone either way.
pub async fn release_session(client: ShepherdClient, port: u16) -> UiEvent {
    if let Err(err) = client.release(port).await {
        tracing::warn!(port, error = %err, "release request failed");
    }
    UiEvent::Released { port }
}
