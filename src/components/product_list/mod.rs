//! The paginated product list.
//!
//! The list is two orthogonal state machines:
//!
//! - selection: `no-selection` / `detail-shown`, driven by [`ProductEvent`]s
//!   bubbled from its items and detail view;
//! - data: [`DataSource::Preloaded`](crate::model::DataSource) until the first
//!   page request succeeds, [`DataSource::Fetched`](crate::model::DataSource)
//!   forever after.
//!
//! At most one page request is in flight. While it is, both pagination
//! buttons are disabled; its completion carries a token and is dropped unless
//! it matches the request the list is waiting for.
//!
//! [`ProductEvent`]: crate::components::ProductEvent

mod component;
pub mod error;
mod interactions;
mod state;

pub use error::*;
pub use interactions::*;
pub use state::{next_disabled, prev_disabled, ProductList, ProductListContext, ProductListProps, ProductListSnapshot};

use crate::clients::ProductListClient;
use widget_framework::ComponentActor;

/// Creates a new ProductList actor and its client.
pub fn new(
    props: ProductListProps,
    buffer_size: usize,
) -> Result<(ComponentActor<ProductList>, ProductListClient), ProductListError> {
    let list = ProductList::new(props)?;
    let (actor, handle) = ComponentActor::new(list, buffer_size);
    Ok((actor, ProductListClient::new(handle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ProductEvent;
    use crate::diagnostics::Diagnostics;
    use crate::fetch::mock::MockFetcher;
    use crate::fetch::ProductsApi;
    use crate::model::{PaginatedResult, Product};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use widget_framework::{AttributeError, Component, Html, Scope, ScopeReceivers, StatefulComponent};

    fn context(mock: &MockFetcher) -> ProductListContext {
        ProductListContext {
            api: ProductsApi::new(Arc::new(mock.clone()), "/api/products"),
            diagnostics: Diagnostics::default(),
        }
    }

    fn two_products() -> PaginatedResult<Product> {
        PaginatedResult::new(
            vec![Product::new("1", "Lamp", 12.5), Product::new("2", "Desk", 80.0)],
            4,
        )
    }

    fn list_with(paginated: PaginatedResult<Product>, limit: u32) -> ProductList {
        ProductList::new(ProductListProps {
            paginated,
            limit,
            ..ProductListProps::default()
        })
        .unwrap()
    }

    async fn deliver_event(
        list: &mut ProductList,
        receivers: &mut ScopeReceivers<ProductList>,
        ctx: &ProductListContext,
        scope: &Scope<ProductList>,
    ) -> ProductEvent {
        let notification = receivers.events.recv().await.unwrap();
        list.handle_event(&notification, ctx, scope);
        notification.event
    }

    #[test]
    fn test_render_empty_list() {
        let list = list_with(PaginatedResult::empty(), 5);
        assert_eq!(
            list.render().as_str(),
            "<ul></ul><p>Showing 0 of 0 products</p><button disabled>Previous</button><button disabled>Next</button>"
        );
    }

    #[test]
    fn test_render_preloaded_children_in_slot() {
        let list = ProductList::new(ProductListProps::preloaded(vec![
            Html::raw("<li>A</li>"),
            Html::raw("<li>B</li>"),
        ]))
        .unwrap();
        let html = list.render();
        assert!(html.as_str().starts_with("<ul><slot><li>A</li><li>B</li></slot></ul>"));
        assert!(html.as_str().contains("<p>Showing 2 of 0 products</p>"));
    }

    #[tokio::test]
    async fn test_select_and_close_through_children() {
        let mock = MockFetcher::new();
        let ctx = context(&mock);
        let (scope, mut receivers) = Scope::channel();
        let mut list = list_with(two_products(), 2);

        list.handle_interaction(ProductListInteraction::SelectItem(1), &ctx, &scope)
            .unwrap();
        let event = deliver_event(&mut list, &mut receivers, &ctx, &scope).await;
        assert_eq!(event, ProductEvent::Selected(Product::new("2", "Desk", 80.0)));
        assert_eq!(list.detailed_product().map(|p| p.name.as_str()), Some("Desk"));
        assert!(list.render().as_str().ends_with("<button>Close</button>"));

        list.handle_interaction(ProductListInteraction::CloseDetail, &ctx, &scope)
            .unwrap();
        let event = deliver_event(&mut list, &mut receivers, &ctx, &scope).await;
        assert_eq!(event, ProductEvent::Unselected);
        assert_eq!(list.detailed_product(), None);
    }

    #[tokio::test]
    async fn test_invalid_targets_are_rejected() {
        let mock = MockFetcher::new();
        let ctx = context(&mock);
        let (scope, _receivers) = Scope::channel();
        let mut list = list_with(two_products(), 2);

        assert_eq!(
            list.handle_interaction(ProductListInteraction::SelectItem(5), &ctx, &scope),
            Err(ProductListError::NoSuchItem { index: 5, rendered: 2 })
        );
        assert_eq!(
            list.handle_interaction(ProductListInteraction::CloseDetail, &ctx, &scope),
            Err(ProductListError::NoDetailShown)
        );
    }

    #[tokio::test]
    async fn test_next_applies_completion_and_guards_overlap() {
        let mock = MockFetcher::new();
        mock.expect_get("/api/products?page=2&limit=2").return_ok(json!({
            "list": [{"_id": "3", "name": "Rug", "price": 5}],
            "count": 4
        }));
        let ctx = context(&mock);
        let (scope, mut receivers) = Scope::channel();
        let mut list = list_with(two_products(), 2);

        list.handle_interaction(ProductListInteraction::Next, &ctx, &scope)
            .unwrap();
        assert!(list.is_loading());
        assert!(list.prev_disabled() && list.next_disabled());
        list.handle_interaction(ProductListInteraction::Next, &ctx, &scope)
            .unwrap();

        let completion = receivers.completions.recv().await.unwrap();
        list.handle_completion(completion, &ctx, &scope);

        let snapshot = list.snapshot();
        assert_eq!(snapshot.page, 2);
        assert_eq!(snapshot.paginated.list, vec![Product::new("3", "Rug", 5.0)]);
        assert!(!snapshot.loading);
        assert_eq!(mock.requests(), vec!["/api/products?page=2&limit=2"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let mock = MockFetcher::new();
        let ctx = context(&mock);
        let (scope, _receivers) = Scope::channel();
        let mut list = list_with(two_products(), 2);

        list.handle_completion(
            ProductListCompletion::PageLoaded {
                token: 42,
                target_page: 9,
                result: Ok(PaginatedResult::empty()),
            },
            &ctx,
            &scope,
        );

        assert_eq!(list.page(), 1);
        assert_eq!(list.source().paginated(), &two_products());
    }

    #[test]
    fn test_attributes() {
        let mut list = list_with(PaginatedResult::empty(), 5);

        list.attribute_changed("page", Some("3")).unwrap();
        list.attribute_changed("limit", Some(" 20 ")).unwrap();
        list.attribute_changed(
            "paginated",
            Some(r#"{"list":[{"_id":{"$oid":"a1"},"name":"Lamp","price":12.5}],"count":41}"#),
        )
        .unwrap();
        assert_eq!((list.page(), list.limit()), (3, 20));
        assert_eq!(list.source().count(), 41);
        assert!(list.render().as_str().contains("<span>Lamp</span>"));
        assert_eq!(
            list.reflected_attributes(),
            vec![("page", "3".to_string()), ("limit", "20".to_string())]
        );

        assert!(matches!(
            list.attribute_changed("page", Some("0")),
            Err(AttributeError::Invalid { name: "page", .. })
        ));
        assert!(list.attribute_changed("limit", Some("ten")).is_err());
        assert!(list
            .attribute_changed("paginated", Some(r#"{"list":[],"count":-1}"#))
            .is_err());
        assert!(matches!(
            list.attribute_changed("color", Some("red")),
            Err(AttributeError::Unobserved { .. })
        ));
        assert_eq!((list.page(), list.limit()), (3, 20));

        list.attribute_changed("page", None).unwrap();
        assert_eq!(list.page(), 1);
    }

    #[tokio::test]
    async fn test_page_attributes_are_frozen_while_loading() {
        let mock = MockFetcher::new();
        mock.expect_get("/api/products?page=2&limit=2").return_ok(json!({
            "list": [{"_id": "3", "name": "Rug", "price": 5}],
            "count": 4
        }));
        let ctx = context(&mock);
        let (scope, mut receivers) = Scope::channel();
        let mut list = list_with(two_products(), 2);

        list.handle_interaction(ProductListInteraction::Next, &ctx, &scope)
            .unwrap();
        for (name, value) in [
            ("limit", Some("5")),
            ("page", Some("3")),
            ("paginated", Some(r#"{"list":[],"count":0}"#)),
            ("limit", None),
        ] {
            assert!(
                matches!(
                    list.attribute_changed(name, value),
                    Err(AttributeError::Invalid { .. })
                ),
                "{name} should be rejected while loading"
            );
        }
        assert_eq!((list.page(), list.limit()), (1, 2));
        assert_eq!(list.source().paginated(), &two_products());

        let completion = receivers.completions.recv().await.unwrap();
        list.handle_completion(completion, &ctx, &scope);
        assert_eq!((list.page(), list.limit()), (2, 2));

        list.attribute_changed("limit", Some("5")).unwrap();
        assert_eq!(list.limit(), 5);
    }

    #[test]
    fn test_ssr_flag_is_one_way() {
        let mut list = ProductList::new(ProductListProps::preloaded(vec![Html::raw("<li>A</li>")])).unwrap();
        assert!(list
            .reflected_attributes()
            .contains(&("has-ssr-content", String::new())));

        list.attribute_changed("has-ssr-content", Some("")).unwrap();
        assert!(list.source().has_ssr_content());

        list.attribute_changed("has-ssr-content", None).unwrap();
        assert!(!list.source().has_ssr_content());
        assert!(list.source().children().is_empty());

        assert!(matches!(
            list.attribute_changed("has-ssr-content", Some("")),
            Err(AttributeError::Invalid { name: "has-ssr-content", .. })
        ));
    }
}
