//! Pure data structures shared by the product widgets.

pub mod data_source;
pub mod paginated;
pub mod product;

pub use data_source::*;
pub use paginated::*;
pub use product::*;
