//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger used by every binary.
//!
//! Component actors log with a `component` field carrying their tag instead of
//! a module path, so targets are hidden:
//!
//! ```text
//! INFO Component started component="spc-products-list"
//! DEBUG Interact component="spc-products-list" interaction=Next
//! INFO Page loaded component="spc-products-list" page=2 showing=5
//! WARN Page request failed component="spc-products-list" page=3 error=Not Found
//! ```
//!
//! Levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=widget_framework=trace cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
