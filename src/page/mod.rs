//! Glue for the server-rendered page around the widgets: navbar toggling,
//! dismissible notifications and the request/response hooks of partial page
//! swaps.

pub mod csrf;
pub mod dismiss;
pub mod navbar;
pub mod swap;

pub use csrf::attach_csrf_token;
pub use dismiss::{DismissibleList, ItemId};
pub use navbar::NavbarBurger;
pub use swap::{error_swap_target, rebind_after_swap, ErrorSwap, Rebind, SwapTarget};
