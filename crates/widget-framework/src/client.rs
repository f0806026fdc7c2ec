//! # Component Handle
//!
//! The host-side half of a mounted component.

use crate::component::Html;
use crate::error::FrameworkError;
use crate::event::Notification;
use crate::message::ComponentRequest;
use crate::stateful::StatefulComponent;
use tokio::sync::{broadcast, mpsc, oneshot};

/// A cloneable, type-safe handle to a [`ComponentActor`](crate::ComponentActor).
///
/// Holds only channel senders, so cloning is cheap. The actor shuts down once
/// every handle has been dropped.
pub struct ComponentHandle<T: StatefulComponent> {
    sender: mpsc::Sender<ComponentRequest<T>>,
    host_events: broadcast::Sender<Notification<T::Event>>,
}

impl<T: StatefulComponent> Clone for ComponentHandle<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            host_events: self.host_events.clone(),
        }
    }
}

impl<T: StatefulComponent> ComponentHandle<T> {
    pub fn new(
        sender: mpsc::Sender<ComponentRequest<T>>,
        host_events: broadcast::Sender<Notification<T::Event>>,
    ) -> Self {
        Self {
            sender,
            host_events,
        }
    }

    pub async fn render(&self) -> Result<Html, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Render { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<T::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn set_attribute(
        &self,
        name: impl Into<String>,
        value: Option<String>,
    ) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::SetAttribute {
                name: name.into(),
                value,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn attributes(&self) -> Result<Vec<(&'static str, String)>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Attributes { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn interact(&self, interaction: T::Interaction) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Interact {
                interaction,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Notifications that bubbled out of the component, in dispatch order.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification<T::Event>> {
        self.host_events.subscribe()
    }
}
