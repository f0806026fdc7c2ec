//! The product widgets and the notifications they exchange.

pub mod product_item_detail;
pub mod product_list;
pub mod product_list_item;
pub mod sample;

pub use product_item_detail::ProductItemDetail;
pub use product_list::{
    next_disabled, prev_disabled, ProductList, ProductListContext, ProductListError,
    ProductListInteraction, ProductListProps, ProductListSnapshot,
};
pub use product_list_item::ProductListItem;
pub use sample::SampleGreeting;

use crate::model::Product;
use widget_framework::EventKind;

/// Notifications bubbled from the item and detail views to the list.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEvent {
    /// An item was clicked. Carries a copy of the item's product.
    Selected(Product),
    /// The detail view was closed.
    Unselected,
}

impl EventKind for ProductEvent {
    fn name(&self) -> &'static str {
        match self {
            ProductEvent::Selected(_) => "selected-product",
            ProductEvent::Unselected => "unselect-product",
        }
    }
}
