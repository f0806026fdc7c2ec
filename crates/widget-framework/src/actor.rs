//! # Component Actor
//!
//! The `ComponentActor` is the server half of a mounted component. It owns the
//! component, the receiving end of the request channel and the receivers for
//! descendant notifications and async completions, and applies all of them
//! sequentially on a single task.

use crate::client::ComponentHandle;
use crate::error::FrameworkError;
use crate::event::{EventKind, Notification};
use crate::message::ComponentRequest;
use crate::stateful::{Scope, ScopeReceivers, StatefulComponent};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Capacity of the host subscription channel.
const HOST_EVENT_CAPACITY: usize = 64;

/// Drives one [`StatefulComponent`].
///
/// # Ordering
///
/// Each loop iteration picks, in this priority order:
///
/// 1. a notification emitted by a descendant,
/// 2. the completion of a spawned future,
/// 3. a request from a host handle.
///
/// Notifications emitted while a request is handled are therefore reduced
/// before the next host request is looked at, so a host that clicks an item
/// and then asks for a snapshot always sees the selection applied.
///
/// # Usage Pattern
///
/// 1. **Create**: `ComponentActor::new(component, buffer)` returns the actor and a handle.
/// 2. **Wire**: pass the dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
pub struct ComponentActor<T: StatefulComponent> {
    component: T,
    receiver: mpsc::Receiver<ComponentRequest<T>>,
    scope: Scope<T>,
    scope_receivers: ScopeReceivers<T>,
    host_events: broadcast::Sender<Notification<T::Event>>,
}

impl<T: StatefulComponent> ComponentActor<T> {
    /// Creates the actor and its handle.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// handle calls wait for space.
    pub fn new(component: T, buffer_size: usize) -> (Self, ComponentHandle<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (scope, scope_receivers) = Scope::channel();
        let (host_events, _) = broadcast::channel(HOST_EVENT_CAPACITY);
        let handle = ComponentHandle::new(sender, host_events.clone());
        let actor = Self {
            component,
            receiver,
            scope,
            scope_receivers,
            host_events,
        };
        (actor, handle)
    }

    /// Runs the event loop until every handle has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let component = T::TAG;
        info!(component, "Component started");

        self.component.attach(&self.scope);
        self.component.connected();

        loop {
            tokio::select! {
                biased;

                Some(notification) = self.scope_receivers.events.recv() => {
                    debug!(component, origin = notification.origin, name = notification.event.name(), "Notification");
                    self.component.handle_event(&notification, &context, &self.scope);
                    self.component.updated();
                    if notification.init.reaches_host() {
                        // No subscriber is fine.
                        let _ = self.host_events.send(notification);
                    }
                }
                Some(completion) = self.scope_receivers.completions.recv() => {
                    debug!(component, ?completion, "Completion");
                    self.component.handle_completion(completion, &context, &self.scope);
                    self.component.updated();
                }
                request = self.receiver.recv() => {
                    let Some(request) = request else { break };
                    self.handle_request(request, &context);
                }
            }
        }

        self.component.disconnected();
        info!(component, "Shutdown");
    }

    fn handle_request(&mut self, request: ComponentRequest<T>, context: &T::Context) {
        let component = T::TAG;
        match request {
            ComponentRequest::Render { respond_to } => {
                debug!(component, "Render");
                let _ = respond_to.send(Ok(self.component.render()));
            }
            ComponentRequest::Snapshot { respond_to } => {
                debug!(component, "Snapshot");
                let _ = respond_to.send(Ok(self.component.snapshot()));
            }
            ComponentRequest::SetAttribute {
                name,
                value,
                respond_to,
            } => {
                debug!(component, %name, ?value, "SetAttribute");
                let result = self
                    .component
                    .attribute_changed(&name, value.as_deref())
                    .map_err(FrameworkError::from);
                match &result {
                    Ok(()) => self.component.updated(),
                    Err(e) => warn!(component, %name, error = %e, "Attribute rejected"),
                }
                let _ = respond_to.send(result);
            }
            ComponentRequest::Attributes { respond_to } => {
                let _ = respond_to.send(Ok(self.component.reflected_attributes()));
            }
            ComponentRequest::Interact {
                interaction,
                respond_to,
            } => {
                debug!(component, ?interaction, "Interact");
                let result = self
                    .component
                    .handle_interaction(interaction, context, &self.scope)
                    .map_err(|e| FrameworkError::ComponentError(Box::new(e)));
                match &result {
                    Ok(()) => self.component.updated(),
                    Err(e) => warn!(component, error = %e, "Interaction failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }
}
