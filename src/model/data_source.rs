//! Where the products a list shows came from.
//!
//! A page can arrive two ways: pre-rendered by the server and handed to the
//! component as child markup, or fetched by the component as JSON. The list
//! starts in one of the two and can only ever move from `Preloaded` to
//! `Fetched`.

use super::{PaginatedResult, Product};
use widget_framework::Html;

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Server-rendered children are still in place. `paginated` holds whatever
    /// structured data the host supplied alongside them (often nothing).
    Preloaded {
        children: Vec<Html>,
        paginated: PaginatedResult<Product>,
    },
    /// The current page was fetched by the component.
    Fetched(PaginatedResult<Product>),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Fetched(PaginatedResult::empty())
    }
}

impl DataSource {
    /// Number of products on screen.
    ///
    /// Structured data wins when there is any; otherwise pre-rendered children
    /// are counted. Never both, so nothing is counted twice.
    pub fn showing(&self) -> usize {
        match self {
            DataSource::Preloaded {
                children,
                paginated,
            } => {
                if paginated.is_empty() {
                    children.len()
                } else {
                    paginated.len()
                }
            }
            DataSource::Fetched(paginated) => paginated.len(),
        }
    }

    /// Size of the whole collection, as last reported.
    pub fn count(&self) -> u64 {
        self.paginated().count
    }

    pub fn paginated(&self) -> &PaginatedResult<Product> {
        match self {
            DataSource::Preloaded { paginated, .. } | DataSource::Fetched(paginated) => paginated,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.paginated().list
    }

    /// Pre-rendered children, empty once client data took over.
    pub fn children(&self) -> &[Html] {
        match self {
            DataSource::Preloaded { children, .. } => children,
            DataSource::Fetched(_) => &[],
        }
    }

    pub fn has_ssr_content(&self) -> bool {
        matches!(self, DataSource::Preloaded { .. })
    }

    /// Replaces the structured data, keeping the variant.
    pub fn set_paginated(&mut self, page: PaginatedResult<Product>) {
        match self {
            DataSource::Preloaded { paginated, .. } | DataSource::Fetched(paginated) => {
                *paginated = page
            }
        }
    }

    /// Moves to client data, dropping any pre-rendered children. Returns how
    /// many children were discarded.
    pub fn replace_with_fetched(&mut self, page: PaginatedResult<Product>) -> usize {
        let discarded = self.children().len();
        *self = DataSource::Fetched(page);
        discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(n: usize) -> Vec<Html> {
        (0..n).map(|i| Html::raw(format!("<li>{i}</li>"))).collect()
    }

    #[test]
    fn test_showing_counts_children_without_structured_data() {
        let source = DataSource::Preloaded {
            children: rendered(3),
            paginated: PaginatedResult::empty(),
        };
        assert_eq!(source.showing(), 3);
        assert_eq!(source.count(), 0);
        assert!(source.has_ssr_content());
    }

    #[test]
    fn test_showing_prefers_structured_data() {
        let source = DataSource::Preloaded {
            children: rendered(3),
            paginated: PaginatedResult::new(vec![Product::new("1", "A", 1.0)], 4),
        };
        assert_eq!(source.showing(), 1);
        assert_eq!(source.count(), 4);
    }

    #[test]
    fn test_empty_fetched_shows_nothing() {
        let source = DataSource::default();
        assert_eq!(source.showing(), 0);
        assert!(!source.has_ssr_content());
        assert!(source.children().is_empty());
    }

    #[test]
    fn test_replace_with_fetched_is_one_way() {
        let mut source = DataSource::Preloaded {
            children: rendered(2),
            paginated: PaginatedResult::empty(),
        };
        let page = PaginatedResult::new(vec![Product::new("7", "B", 2.0)], 9);

        assert_eq!(source.replace_with_fetched(page.clone()), 2);
        assert_eq!(source, DataSource::Fetched(page));
        assert_eq!(source.replace_with_fetched(PaginatedResult::empty()), 0);
        assert!(!source.has_ssr_content());
    }
}
