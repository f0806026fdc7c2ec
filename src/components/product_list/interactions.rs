//! Inputs of the product list state machine.

use crate::fetch::FetchError;
use crate::model::{PaginatedResult, Product};

/// UI events a host forwards to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductListInteraction {
    /// Click on the item rendered at this index.
    SelectItem(usize),
    /// Click on the detail view's Close button.
    CloseDetail,
    /// Hides the detail view without going through the detail component.
    ClearSelection,
    Previous,
    Next,
    /// Abandons the page request in flight, if any.
    CancelPending,
}

/// Output of a page request started by the list.
#[derive(Debug)]
pub enum ProductListCompletion {
    PageLoaded {
        token: u64,
        target_page: u32,
        result: Result<PaginatedResult<Product>, FetchError>,
    },
}

/// Pagination direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Page reached from `page`. `None` when it would leave the valid range.
    pub fn target(self, page: u32) -> Option<u32> {
        match self {
            Direction::Previous => page.checked_sub(1).filter(|p| *p >= 1),
            Direction::Next => page.checked_add(1),
        }
    }
}
