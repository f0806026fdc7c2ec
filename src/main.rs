use product_widgets::clients::ProductListClient;
use product_widgets::config::WidgetConfig;
use product_widgets::diagnostics::{Diagnostic, Diagnostics};
use product_widgets::lifecycle::{init_registry, WidgetSystem};
use std::error::Error;
use tracing::{info, warn};
use widget_framework::tracing::setup_tracing;
use widget_framework::WidgetClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = WidgetConfig::from_env()?;
    let registry = init_registry()?;
    info!(components = ?registry.tags().collect::<Vec<_>>(), "Registered");

    let (diagnostics, mut reports) = Diagnostics::channel();
    tokio::spawn(async move {
        while let Some(Diagnostic::Pagination(failure)) = reports.recv().await {
            warn!(page = failure.page, error = %failure.error, "Pagination failure reported");
        }
    });

    let system = WidgetSystem::from_config(&config, diagnostics)?;
    let list = system.product_list.clone();

    load_first_page(&list, &config).await?;
    println!("{}", list.render().await?);

    list.next_page().await?;
    let state = wait_until_idle(&list).await?;
    info!(page = state.page, showing = state.showing, count = state.count, "After Next");

    if state.showing > 0 {
        list.select_item(0).await?;
    }
    println!("{}", list.render().await?);

    drop(list);
    system.shutdown().await?;
    Ok(())
}

/// Fetches page 1 and hands it to the list the way a host page sets the
/// `paginated` attribute.
async fn load_first_page(list: &ProductListClient, config: &WidgetConfig) -> Result<(), Box<dyn Error>> {
    let api = product_widgets::lifecycle::products_api(config)?;
    match api.page(1, config.page_size).await {
        Ok(page) => {
            list.set_attribute("paginated", Some(serde_json::to_string(&page)?))
                .await?;
        }
        Err(e) => warn!(error = %e, "First page unavailable, starting empty"),
    }
    Ok(())
}

async fn wait_until_idle(
    list: &ProductListClient,
) -> Result<product_widgets::components::ProductListSnapshot, Box<dyn Error>> {
    loop {
        let state = list.state().await?;
        if !state.loading {
            return Ok(state);
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
}
