use crate::clients::ProductListClient;
use crate::components::product_list::{self, ProductListContext, ProductListError, ProductListProps};
use crate::config::WidgetConfig;
use crate::diagnostics::Diagnostics;
use crate::fetch::{FetchError, HttpFetcher, ProductsApi};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    ProductList(#[from] ProductListError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Component task failed: {0}")]
    TaskFailed(String),
}

/// The mounted widgets of one page.
///
/// Owns the task of every stateful component and hands out their clients.
/// Dependencies are passed to each actor when it starts running, not when it
/// is created.
///
/// # Example
///
/// ```ignore
/// let system = WidgetSystem::from_config(&config, Diagnostics::default())?;
///
/// system.product_list.next_page().await?;
/// let html = system.product_list.render().await?;
///
/// system.shutdown().await?;
/// ```
pub struct WidgetSystem {
    pub product_list: ProductListClient,
    handles: Vec<JoinHandle<()>>,
}

impl WidgetSystem {
    /// Mounts a product list and starts its actor.
    pub fn new(
        props: ProductListProps,
        api: ProductsApi,
        diagnostics: Diagnostics,
        mailbox_size: usize,
    ) -> Result<Self, LifecycleError> {
        let (actor, product_list) = product_list::new(props, mailbox_size)?;
        let handle = tokio::spawn(actor.run(ProductListContext { api, diagnostics }));

        Ok(Self {
            product_list,
            handles: vec![handle],
        })
    }

    /// Mounts an empty product list talking to the configured origin over HTTP.
    pub fn from_config(config: &WidgetConfig, diagnostics: Diagnostics) -> Result<Self, LifecycleError> {
        let props = ProductListProps {
            limit: config.page_size,
            ..ProductListProps::default()
        };
        Self::new(props, products_api(config)?, diagnostics, config.mailbox_size)
    }

    /// Drops every client and waits for the component tasks to finish.
    ///
    /// Clients cloned out of the system keep their component alive, so drop
    /// them first.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down widgets...");
        drop(self.product_list);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Component task failed");
                return Err(LifecycleError::TaskFailed(e.to_string()));
            }
        }

        info!("Widgets shut down.");
        Ok(())
    }
}

/// Catalogue API over HTTP for the configured origin.
pub fn products_api(config: &WidgetConfig) -> Result<ProductsApi, FetchError> {
    let fetcher = HttpFetcher::new(config.base_url.clone(), config.request_timeout)?;
    Ok(ProductsApi::new(Arc::new(fetcher), config.products_endpoint.clone()))
}
