//! # StatefulComponent Trait
//!
//! A [`StatefulComponent`] is a [`Component`] that owns mutable state and is
//! driven by a [`ComponentActor`](crate::ComponentActor). Every state transition
//! happens inside one of three reducers:
//!
//! - [`handle_interaction`](StatefulComponent::handle_interaction): a UI event
//!   from the host (a click on a button, an item, ...).
//! - [`handle_event`](StatefulComponent::handle_event): a notification emitted
//!   by a descendant through the [`Scope`] emitter.
//! - [`handle_completion`](StatefulComponent::handle_completion): the output of
//!   a future started with [`Scope::spawn`], e.g. a finished network request.
//!
//! All three run on the actor task, one at a time, so the component needs no
//! locking. Dependencies live in [`StatefulComponent::Context`] and are injected
//! when the actor starts running.

use crate::component::Component;
use crate::event::{Emitter, EventKind, Notification};
use std::fmt::Debug;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

pub trait StatefulComponent: Component + Sized + Send + 'static {
    /// Host-side UI events the component reacts to.
    type Interaction: Send + Debug;

    /// Notifications emitted by descendants.
    type Event: EventKind;

    /// Results of asynchronous work started through [`Scope::spawn`].
    type Completion: Send + Debug + 'static;

    /// Read-only view of the state handed to hosts and tests.
    type Snapshot: Clone + Send + Debug + 'static;

    /// Runtime dependencies. Use `()` if none are needed.
    type Context: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once on the actor task before any message is processed.
    fn attach(&mut self, _scope: &Scope<Self>) {}

    fn snapshot(&self) -> Self::Snapshot;

    fn handle_interaction(
        &mut self,
        interaction: Self::Interaction,
        ctx: &Self::Context,
        scope: &Scope<Self>,
    ) -> Result<(), Self::Error>;

    fn handle_event(
        &mut self,
        notification: &Notification<Self::Event>,
        ctx: &Self::Context,
        scope: &Scope<Self>,
    );

    fn handle_completion(
        &mut self,
        completion: Self::Completion,
        ctx: &Self::Context,
        scope: &Scope<Self>,
    );
}

/// What a component may do besides mutating itself: hand an emitter to its
/// children and start asynchronous work.
pub struct Scope<T: StatefulComponent> {
    emitter: Emitter<T::Event>,
    completions: mpsc::UnboundedSender<T::Completion>,
}

impl<T: StatefulComponent> Clone for Scope<T> {
    fn clone(&self) -> Self {
        Self {
            emitter: self.emitter.clone(),
            completions: self.completions.clone(),
        }
    }
}

/// Receiving halves paired with a [`Scope`].
pub struct ScopeReceivers<T: StatefulComponent> {
    pub events: mpsc::UnboundedReceiver<Notification<T::Event>>,
    pub completions: mpsc::UnboundedReceiver<T::Completion>,
}

impl<T: StatefulComponent> Scope<T> {
    pub fn channel() -> (Self, ScopeReceivers<T>) {
        let (emitter, events) = Emitter::channel();
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let scope = Self {
            emitter,
            completions: completions_tx,
        };
        (
            scope,
            ScopeReceivers {
                events,
                completions,
            },
        )
    }

    /// Emitter to hand to child components.
    pub fn emitter(&self) -> &Emitter<T::Event> {
        &self.emitter
    }

    /// Runs `future` in the background and feeds its output back to the
    /// component as a completion. Aborting the returned handle drops the
    /// future and no completion is delivered.
    pub fn spawn<F>(&self, future: F) -> AbortHandle
    where
        F: Future<Output = T::Completion> + Send + 'static,
    {
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let completion = future.await;
            if completions.send(completion).is_err() {
                tracing::debug!("Completion dropped, component gone");
            }
        })
        .abort_handle()
    }
}
