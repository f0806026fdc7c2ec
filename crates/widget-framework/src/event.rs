//! # Notifications
//!
//! Child components never hold a reference to their parent. They hold an
//! [`Emitter`] and push [`Notification`]s into it; the owning
//! [`ComponentActor`](crate::ComponentActor) reduces them and, when the
//! notification bubbles and is composed, republishes it to host subscribers.

use std::fmt::Debug;
use tokio::sync::mpsc;

/// Propagation flags carried by every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventInit {
    pub bubbles: bool,
    pub composed: bool,
    pub cancelable: bool,
}

impl EventInit {
    /// Bubbles, crosses component boundaries and can be cancelled.
    pub const fn propagating() -> Self {
        Self {
            bubbles: true,
            composed: true,
            cancelable: true,
        }
    }

    /// Reaches host subscribers outside the owning component.
    pub fn reaches_host(&self) -> bool {
        self.bubbles && self.composed
    }
}

/// A tagged notification payload.
pub trait EventKind: Clone + Debug + Send + Sync + 'static {
    /// The event name as seen by the host page (e.g. `selected-product`).
    fn name(&self) -> &'static str;

    fn init(&self) -> EventInit {
        EventInit::propagating()
    }
}

/// An event together with where it came from and how it propagates.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification<E> {
    /// Tag of the component that dispatched the event.
    pub origin: &'static str,
    pub event: E,
    pub init: EventInit,
}

/// Sending half handed to child components.
#[derive(Debug)]
pub struct Emitter<E> {
    sender: mpsc::UnboundedSender<Notification<E>>,
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<E: EventKind> Emitter<E> {
    pub fn new(sender: mpsc::UnboundedSender<Notification<E>>) -> Self {
        Self { sender }
    }

    /// Creates an emitter and the receiver its notifications arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification<E>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    /// Dispatches `event`. Returns `false` when no listener is attached anymore.
    pub fn emit(&self, origin: &'static str, event: E) -> bool {
        let init = event.init();
        tracing::trace!(origin, name = event.name(), "Emit");
        self.sender
            .send(Notification {
                origin,
                event,
                init,
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Ping {
        Loud,
        Quiet,
    }

    impl EventKind for Ping {
        fn name(&self) -> &'static str {
            "ping"
        }

        fn init(&self) -> EventInit {
            match self {
                Ping::Loud => EventInit::propagating(),
                Ping::Quiet => EventInit::default(),
            }
        }
    }

    #[tokio::test]
    async fn test_emit_carries_origin_and_init() {
        let (emitter, mut receiver) = Emitter::channel();
        assert!(emitter.emit("x-pinger", Ping::Loud));
        assert!(emitter.clone().emit("x-pinger", Ping::Quiet));

        let loud = receiver.recv().await.unwrap();
        assert_eq!(loud.origin, "x-pinger");
        assert_eq!(loud.event, Ping::Loud);
        assert!(loud.init.reaches_host());

        let quiet = receiver.recv().await.unwrap();
        assert!(!quiet.init.reaches_host());
    }

    #[tokio::test]
    async fn test_emit_without_listener_reports_failure() {
        let (emitter, receiver) = Emitter::<Ping>::channel();
        drop(receiver);
        assert!(!emitter.emit("x-pinger", Ping::Loud));
    }
}
