use crate::components::{ProductEvent, ProductList, ProductListError, ProductListInteraction, ProductListSnapshot};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, instrument};
use widget_framework::{ComponentHandle, FrameworkError, Notification, WidgetClient};

/// Client for interacting with a mounted product list.
#[derive(Clone)]
pub struct ProductListClient {
    inner: ComponentHandle<ProductList>,
}

impl ProductListClient {
    pub fn new(inner: ComponentHandle<ProductList>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl WidgetClient<ProductList> for ProductListClient {
    type Error = ProductListError;

    fn inner(&self) -> &ComponentHandle<ProductList> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::ComponentError(source) => match source.downcast::<ProductListError>() {
                Ok(error) => *error,
                Err(other) => ProductListError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::Attribute(error) => ProductListError::InvalidProps(error),
            other => ProductListError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductListClient {
    #[instrument(skip(self))]
    async fn interact(&self, interaction: ProductListInteraction) -> Result<(), ProductListError> {
        debug!("Sending request");
        self.inner.interact(interaction).await.map_err(Self::map_error)
    }

    /// Clicks the item rendered at `index`.
    pub async fn select_item(&self, index: usize) -> Result<(), ProductListError> {
        self.interact(ProductListInteraction::SelectItem(index)).await
    }

    /// Clicks the detail view's Close button.
    pub async fn close_detail(&self) -> Result<(), ProductListError> {
        self.interact(ProductListInteraction::CloseDetail).await
    }

    pub async fn clear_selection(&self) -> Result<(), ProductListError> {
        self.interact(ProductListInteraction::ClearSelection).await
    }

    /// Presses Next. Returns once the request was started or ignored, not
    /// when the page arrives.
    pub async fn next_page(&self) -> Result<(), ProductListError> {
        self.interact(ProductListInteraction::Next).await
    }

    pub async fn previous_page(&self) -> Result<(), ProductListError> {
        self.interact(ProductListInteraction::Previous).await
    }

    pub async fn cancel_pending(&self) -> Result<(), ProductListError> {
        self.interact(ProductListInteraction::CancelPending).await
    }

    pub async fn state(&self) -> Result<ProductListSnapshot, ProductListError> {
        self.snapshot().await
    }

    /// `selected-product` / `unselect-product` notifications as the host page sees them.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification<ProductEvent>> {
        self.inner.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widget_framework::mock::{
        component_error, create_mock_handle, expect_interact, expect_render, expect_set_attribute,
    };
    use widget_framework::{AttributeError, Html};

    #[tokio::test]
    async fn test_next_page_sends_interaction() {
        let (handle, mut receiver) = create_mock_handle::<ProductList>(10);
        let client = ProductListClient::new(handle);

        let task = tokio::spawn(async move { client.next_page().await });

        let (interaction, responder) = expect_interact(&mut receiver).await.unwrap();
        assert_eq!(interaction, ProductListInteraction::Next);
        responder.send(Ok(())).unwrap();
        assert_eq!(task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_component_errors_are_downcast() {
        let (handle, mut receiver) = create_mock_handle::<ProductList>(10);
        let client = ProductListClient::new(handle);

        let task = tokio::spawn(async move { client.select_item(7).await });

        let (interaction, responder) = expect_interact(&mut receiver).await.unwrap();
        assert_eq!(interaction, ProductListInteraction::SelectItem(7));
        responder
            .send(Err(component_error(ProductListError::NoSuchItem { index: 7, rendered: 0 })))
            .unwrap();
        assert_eq!(
            task.await.unwrap(),
            Err(ProductListError::NoSuchItem { index: 7, rendered: 0 })
        );
    }

    #[tokio::test]
    async fn test_attribute_errors_map_to_invalid_props() {
        let (handle, mut receiver) = create_mock_handle::<ProductList>(10);
        let client = ProductListClient::new(handle);

        let task = tokio::spawn(async move { client.set_attribute("page", Some("0".into())).await });

        let (name, value, responder) = expect_set_attribute(&mut receiver).await.unwrap();
        assert_eq!((name.as_str(), value.as_deref()), ("page", Some("0")));
        let error = AttributeError::invalid("page", "must be at least 1");
        responder.send(Err(error.clone().into())).unwrap();
        assert_eq!(task.await.unwrap(), Err(ProductListError::InvalidProps(error)));
    }

    #[tokio::test]
    async fn test_render_passes_markup_through() {
        let (handle, mut receiver) = create_mock_handle::<ProductList>(10);
        let client = ProductListClient::new(handle);

        let task = tokio::spawn(async move { client.render().await });

        let responder = expect_render(&mut receiver).await.unwrap();
        responder.send(Ok(Html::raw("<ul></ul>"))).unwrap();
        assert_eq!(task.await.unwrap().unwrap().as_str(), "<ul></ul>");
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (handle, receiver) = create_mock_handle::<ProductList>(10);
        drop(receiver);
        let client = ProductListClient::new(handle);

        assert!(matches!(
            client.close_detail().await,
            Err(ProductListError::ActorCommunicationError(_))
        ));
    }
}
