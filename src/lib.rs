//! # Product Widgets
//!
//! > **A paginated product catalogue built from message-passing components.**
//!
//! This crate implements the product widgets of a server-rendered shop page on
//! top of [`widget_framework`]: a list item, a detail view and the list that
//! composes them, pages through the catalogue API and shows the selected
//! product.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Components talk through notifications
//! An item never calls into its list. It emits a
//! [`ProductEvent`](components::ProductEvent) on the emitter it was given and
//! the list reduces it on its own task. The same notifications bubble out to
//! the host page through [`ProductListClient::subscribe`](clients::ProductListClient::subscribe).
//!
//! ### One request in flight
//! Pressing Previous or Next starts a page request on a background task. Until
//! its completion comes back, both buttons are disabled and further presses
//! are ignored, so `page` and the list on screen always belong together.
//! A request can be abandoned with `cancel_pending`.
//!
//! ### Server-rendered first page
//! A list may start with markup rendered by the server. It counts those
//! children until the first page request succeeds, then switches to fetched
//! data for good. See [`DataSource`](model::DataSource).
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: products, pages and where a page came from.
//! - [`fetch`]: same-origin JSON GET over `reqwest`, plus a scripted mock.
//! - [`components`]: the widgets and their state machines.
//! - [`clients`]: typed async access to a mounted list.
//! - [`lifecycle`]: registry setup, mounting and shutdown.
//! - [`page`]: navbar, dismissible entries, CSRF header, error swaps.
//! - [`config`] and [`diagnostics`]: environment settings and failure reports.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Point the demo at a running catalogue
//! PRODUCTS_BASE_URL=http://127.0.0.1:5000 RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod components;
pub mod config;
pub mod diagnostics;
pub mod fetch;
pub mod lifecycle;
pub mod model;
pub mod page;
