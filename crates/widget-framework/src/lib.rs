//! # Widget Framework
//!
//! Building blocks for UI components that own state, talk to their children
//! through notifications instead of references, and run their asynchronous work
//! without ever touching their state from two places at once.
//!
//! ## Architecture Overview
//!
//! 1. **Capability layer** ([`Component`]) - render a view, observe and reflect
//!    attributes, lifecycle hooks. Stateless leaf widgets stop here.
//! 2. **Reducer layer** ([`StatefulComponent`]) - interactions from the host,
//!    notifications from descendants and completions of spawned futures, each
//!    reduced into the component state.
//! 3. **Runtime layer** ([`ComponentActor`]) - one Tokio task per mounted
//!    component, applying messages sequentially.
//! 4. **Interface layer** ([`ComponentHandle`], [`WidgetClient`]) - type-safe
//!    async access for the host.
//!
//! Components are registered explicitly with a [`ComponentRegistry`] (see
//! [`registry::init`] for the process-wide one).
//!
//! ## Example
//!
//! ```rust
//! use widget_framework::{
//!     Component, ComponentActor, EventKind, Html, Notification, Scope, StatefulComponent,
//! };
//!
//! #[derive(Debug, Clone)]
//! struct Bumped;
//! impl EventKind for Bumped {
//!     fn name(&self) -> &'static str { "bumped" }
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! struct Counter { clicks: u32 }
//!
//! impl Component for Counter {
//!     const TAG: &'static str = "x-counter";
//!     fn render(&self) -> Html {
//!         Html::raw(format!("<button>{}</button>", self.clicks))
//!     }
//! }
//!
//! impl StatefulComponent for Counter {
//!     type Interaction = ();
//!     type Event = Bumped;
//!     type Completion = ();
//!     type Snapshot = u32;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn snapshot(&self) -> u32 { self.clicks }
//!     fn handle_interaction(&mut self, _: (), _: &(), scope: &Scope<Self>) -> Result<(), CounterError> {
//!         scope.emitter().emit(Self::TAG, Bumped);
//!         Ok(())
//!     }
//!     fn handle_event(&mut self, _: &Notification<Bumped>, _: &(), _: &Scope<Self>) {
//!         self.clicks += 1;
//!     }
//!     fn handle_completion(&mut self, _: (), _: &(), _: &Scope<Self>) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, handle) = ComponentActor::new(Counter { clicks: 0 }, 8);
//!     tokio::spawn(actor.run(()));
//!
//!     handle.interact(()).await.unwrap();
//!     assert_eq!(handle.snapshot().await.unwrap(), 1);
//!     assert_eq!(handle.render().await.unwrap().as_str(), "<button>1</button>");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each mounted stateful component runs in its own Tokio task.
//! - Interactions, notifications and completions are applied **sequentially**.
//! - Network calls and other slow work run in spawned futures; only their
//!   result re-enters the component, as a completion.
//!
//! ## Testing
//!
//! The [`mock`] module hands out real handles wired to receivers the test
//! controls, for testing typed clients without a running component.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod component;
pub mod error;
pub mod event;
pub mod message;
pub mod mock;
pub mod registry;
pub mod stateful;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ComponentActor;
pub use client::ComponentHandle;
pub use client_trait::WidgetClient;
pub use component::{boolean_attribute, escape, Component, Html};
pub use error::{AttributeError, FrameworkError, RegistryError};
pub use event::{Emitter, EventInit, EventKind, Notification};
pub use message::{ComponentRequest, Response};
pub use registry::{ComponentDescriptor, ComponentRegistry};
pub use stateful::{Scope, ScopeReceivers, StatefulComponent};
