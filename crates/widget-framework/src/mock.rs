//! # Mock Handles
//!
//! Helpers for testing typed clients without spawning a [`ComponentActor`](crate::ComponentActor).
//!
//! [`create_mock_handle`] returns a real [`ComponentHandle`] wired to a receiver the
//! test controls. The `expect_*` helpers pull the next request off that receiver
//! and hand back its payload and responder, so the test decides what the
//! "component" answers (success, failure, nothing at all).
//!
//! ```rust,ignore
//! let (handle, mut receiver) = create_mock_handle::<MyWidget>(10);
//! let client = MyWidgetClient::new(handle);
//!
//! let task = tokio::spawn(async move { client.press().await });
//! let (interaction, responder) = expect_interact(&mut receiver).await.unwrap();
//! assert!(matches!(interaction, MyInteraction::Press));
//! responder.send(Ok(())).unwrap();
//! task.await.unwrap().unwrap();
//! ```

use crate::component::Html;
use crate::error::FrameworkError;
use crate::message::{ComponentRequest, Response};
use crate::stateful::StatefulComponent;
use crate::ComponentHandle;
use tokio::sync::{broadcast, mpsc};

/// Creates a handle whose requests arrive on the returned receiver.
pub fn create_mock_handle<T: StatefulComponent>(
    buffer_size: usize,
) -> (ComponentHandle<T>, mpsc::Receiver<ComponentRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (host_events, _) = broadcast::channel(16);
    (ComponentHandle::new(sender, host_events), receiver)
}

/// Next message must be an Interact request.
pub async fn expect_interact<T: StatefulComponent>(
    receiver: &mut mpsc::Receiver<ComponentRequest<T>>,
) -> Option<(T::Interaction, Response<()>)> {
    match receiver.recv().await {
        Some(ComponentRequest::Interact {
            interaction,
            respond_to,
        }) => Some((interaction, respond_to)),
        _ => None,
    }
}

/// Next message must be a Snapshot request.
pub async fn expect_snapshot<T: StatefulComponent>(
    receiver: &mut mpsc::Receiver<ComponentRequest<T>>,
) -> Option<Response<T::Snapshot>> {
    match receiver.recv().await {
        Some(ComponentRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be a Render request.
pub async fn expect_render<T: StatefulComponent>(
    receiver: &mut mpsc::Receiver<ComponentRequest<T>>,
) -> Option<Response<Html>> {
    match receiver.recv().await {
        Some(ComponentRequest::Render { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be a SetAttribute request.
pub async fn expect_set_attribute<T: StatefulComponent>(
    receiver: &mut mpsc::Receiver<ComponentRequest<T>>,
) -> Option<(String, Option<String>, Response<()>)> {
    match receiver.recv().await {
        Some(ComponentRequest::SetAttribute {
            name,
            value,
            respond_to,
        }) => Some((name, value, respond_to)),
        _ => None,
    }
}

/// Wraps a component error the way the actor would before replying.
pub fn component_error<E>(error: E) -> FrameworkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FrameworkError::ComponentError(Box::new(error))
}
