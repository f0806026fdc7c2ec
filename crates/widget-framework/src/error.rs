//! # Framework Errors
//!
//! Common error types shared by every component runtime. Component-specific
//! failures travel inside [`FrameworkError::ComponentError`] and can be
//! downcast back to their concrete type by typed clients.

/// Errors that can occur within the component runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Component actor closed")]
    ActorClosed,
    #[error("Component actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    #[error("Component error: {0}")]
    ComponentError(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while applying an attribute to a component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The component does not observe this attribute.
    #[error("<{tag}> does not observe attribute `{name}`")]
    Unobserved { tag: &'static str, name: String },

    /// The attribute value could not be parsed or breaks an invariant.
    #[error("invalid value for `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl AttributeError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AttributeError::Invalid {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised by the component registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("`{0}` is not a valid custom element name")]
    InvalidTag(&'static str),
    #[error("`{0}` has already been defined")]
    AlreadyDefined(&'static str),
    #[error("component registry already initialized")]
    AlreadyInitialized,
}
