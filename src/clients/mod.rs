//! Type-safe wrappers around [`ComponentHandle`](widget_framework::ComponentHandle).

pub mod product_list_client;

pub use product_list_client::*;
