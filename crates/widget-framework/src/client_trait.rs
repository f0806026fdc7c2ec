//! # WidgetClient Trait
//!
//! Common interface for component-specific clients: default `render`,
//! `snapshot`, `set_attribute` and `attributes` built on a [`ComponentHandle`].
use crate::{ComponentHandle, FrameworkError, Html, StatefulComponent};
use async_trait::async_trait;

/// Trait for typed component clients to inherit the standard host operations.
///
/// Implementors only provide access to the inner handle and a mapping from
/// [`FrameworkError`] to their own error type; domain operations (clicking an
/// item, paging, ...) are added as inherent methods.
#[async_trait]
pub trait WidgetClient<T: StatefulComponent>: Send + Sync {
    /// The component-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic handle.
    fn inner(&self) -> &ComponentHandle<T>;

    /// Map framework errors to the component error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    #[tracing::instrument(skip(self), fields(component = T::TAG))]
    async fn render(&self) -> Result<Html, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().render().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(component = T::TAG))]
    async fn snapshot(&self) -> Result<T::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self, value), fields(component = T::TAG))]
    async fn set_attribute(&self, name: &str, value: Option<String>) -> Result<(), Self::Error> {
        tracing::debug!(?value, "Sending request");
        self.inner()
            .set_attribute(name, value)
            .await
            .map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(component = T::TAG))]
    async fn attributes(&self) -> Result<Vec<(&'static str, String)>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().attributes().await.map_err(Self::map_error)
    }
}
