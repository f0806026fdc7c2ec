//! Error types for the product list.

use thiserror::Error;
use widget_framework::AttributeError;

/// Errors that can occur while driving a [`ProductList`](super::ProductList).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductListError {
    /// The interaction targeted an item that is not on screen.
    #[error("No item at index {index}, {rendered} rendered")]
    NoSuchItem { index: usize, rendered: usize },

    /// A close was requested while no detail view is shown.
    #[error("No product detail is shown")]
    NoDetailShown,

    /// Construction or an attribute update was rejected.
    #[error("Invalid properties: {0}")]
    InvalidProps(#[from] AttributeError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
