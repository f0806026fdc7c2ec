//! Startup and shutdown of the widgets.
//!
//! - [`register_components`] / [`init_registry`] make every widget known to the host.
//! - [`WidgetSystem`] mounts the stateful widgets and wires their dependencies.

pub mod widget_system;

pub use widget_system::*;

use crate::components::{ProductItemDetail, ProductList, ProductListItem, SampleGreeting};
use widget_framework::{registry, ComponentRegistry, RegistryError};

/// Defines every widget of this crate in `registry`.
pub fn register_components(registry: &mut ComponentRegistry) -> Result<(), RegistryError> {
    registry.define::<ProductListItem>()?;
    registry.define::<ProductItemDetail>()?;
    registry.define::<ProductList>()?;
    registry.define::<SampleGreeting>()?;
    Ok(())
}

/// Builds the process-wide registry. Call once at startup.
pub fn init_registry() -> Result<&'static ComponentRegistry, RegistryError> {
    registry::init(register_components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_components() {
        let mut registry = ComponentRegistry::new();
        register_components(&mut registry).unwrap();

        assert_eq!(
            registry.tags().collect::<Vec<_>>(),
            vec![
                "spc-product-item-detail",
                "spc-product-list-item",
                "spc-products-list",
                "spicy-sample"
            ]
        );
        assert_eq!(
            registry.get("spc-products-list").unwrap().observed_attributes,
            &["paginated", "page", "limit", "has-ssr-content"]
        );

        assert_eq!(
            register_components(&mut registry),
            Err(RegistryError::AlreadyDefined("spc-product-list-item"))
        );
    }
}
