//! Component and StatefulComponent implementations for [`ProductList`].

use super::interactions::{Direction, ProductListCompletion, ProductListInteraction};
use super::state::{validate_page_size, DEFAULT_LIMIT, DEFAULT_PAGE};
use super::{ProductList, ProductListContext, ProductListError, ProductListSnapshot};
use crate::components::ProductEvent;
use crate::model::{DataSource, PaginatedResult, Product};
use tracing::debug;
use widget_framework::{
    boolean_attribute, AttributeError, Component, Html, Notification, Scope, StatefulComponent,
};

fn parse_page_size(name: &'static str, value: Option<&str>, default: u32) -> Result<u32, AttributeError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| AttributeError::invalid(name, e.to_string()))?;
    validate_page_size(name, parsed)
}

/// `page`, `limit` and `paginated` describe the page on screen and must not
/// move while the next one is being fetched.
fn ensure_idle(list: &ProductList, name: &'static str) -> Result<(), AttributeError> {
    if list.is_loading() {
        return Err(AttributeError::invalid(name, "a page request is in flight"));
    }
    Ok(())
}

impl Component for ProductList {
    const TAG: &'static str = "spc-products-list";

    fn observed_attributes() -> &'static [&'static str] {
        &["paginated", "page", "limit", "has-ssr-content"]
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        match name {
            "paginated" => {
                ensure_idle(self, "paginated")?;
                let paginated = match value {
                    Some(raw) => serde_json::from_str::<PaginatedResult<Product>>(raw)
                        .map_err(|e| AttributeError::invalid("paginated", e.to_string()))?,
                    None => PaginatedResult::empty(),
                };
                paginated
                    .validate()
                    .map_err(|reason| AttributeError::invalid("paginated", reason))?;
                self.source.set_paginated(paginated);
                self.rebuild_items();
            }
            "page" => {
                ensure_idle(self, "page")?;
                self.page = parse_page_size("page", value, DEFAULT_PAGE)?;
            }
            "limit" => {
                ensure_idle(self, "limit")?;
                self.limit = parse_page_size("limit", value, DEFAULT_LIMIT)?;
            }
            "has-ssr-content" => {
                let requested = boolean_attribute(value);
                let active = self.source.has_ssr_content();
                if requested && !active {
                    return Err(AttributeError::invalid(
                        "has-ssr-content",
                        "pre-rendered content cannot be restored once client data is active",
                    ));
                }
                if !requested && active {
                    let paginated = self.source.paginated().clone();
                    let discarded = self.source.replace_with_fetched(paginated);
                    debug!(component = Self::TAG, discarded, "Switched to client data");
                }
            }
            _ => {
                return Err(AttributeError::Unobserved {
                    tag: Self::TAG,
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    fn reflected_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if self.source.has_ssr_content() {
            attributes.push(("has-ssr-content", String::new()));
        }
        attributes
    }

    fn connected(&mut self) {
        debug!(
            component = Self::TAG,
            page = self.page,
            limit = self.limit,
            has_ssr_content = self.source.has_ssr_content(),
            "Connected"
        );
    }

    fn render(&self) -> Html {
        let mut html = Html::raw("<ul>");
        for item in &self.items {
            html.push_html(&item.render());
        }
        if let DataSource::Preloaded { children, .. } = &self.source {
            html.push_raw("<slot>");
            for child in children {
                html.push_html(child);
            }
            html.push_raw("</slot>");
        }
        html.push_raw("</ul>");

        html.push_raw(&format!(
            "<p>Showing {} of {} products</p>",
            self.source.showing(),
            self.source.count()
        ));
        html.push_raw(&format!(
            "<button{}>Previous</button><button{}>Next</button>",
            disabled(self.prev_disabled()),
            disabled(self.next_disabled())
        ));

        if let Some(error) = &self.last_error {
            html.push_raw(r#"<p role="alert">"#)
                .push_text(&error.to_string())
                .push_raw("</p>");
        }
        if let Some(detail) = &self.detail {
            html.push_html(&detail.render());
        }
        html
    }
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

impl StatefulComponent for ProductList {
    type Interaction = ProductListInteraction;
    type Event = ProductEvent;
    type Completion = ProductListCompletion;
    type Snapshot = ProductListSnapshot;
    type Context = ProductListContext;
    type Error = ProductListError;

    fn snapshot(&self) -> Self::Snapshot {
        self.to_snapshot()
    }

    fn handle_interaction(
        &mut self,
        interaction: Self::Interaction,
        ctx: &Self::Context,
        scope: &Scope<Self>,
    ) -> Result<(), Self::Error> {
        match interaction {
            ProductListInteraction::SelectItem(index) => {
                let item = self.items.get(index).ok_or(ProductListError::NoSuchItem {
                    index,
                    rendered: self.items.len(),
                })?;
                item.click(scope.emitter());
            }
            ProductListInteraction::CloseDetail => {
                let detail = self.detail.as_ref().ok_or(ProductListError::NoDetailShown)?;
                detail.close(scope.emitter());
            }
            ProductListInteraction::ClearSelection => self.deselect(),
            ProductListInteraction::Previous => {
                self.paginate(Direction::Previous, ctx, scope);
            }
            ProductListInteraction::Next => {
                self.paginate(Direction::Next, ctx, scope);
            }
            ProductListInteraction::CancelPending => {
                self.cancel_pending();
            }
        }
        Ok(())
    }

    fn handle_event(
        &mut self,
        notification: &Notification<Self::Event>,
        _ctx: &Self::Context,
        _scope: &Scope<Self>,
    ) {
        match &notification.event {
            ProductEvent::Selected(product) => self.select(product.clone()),
            ProductEvent::Unselected => self.deselect(),
        }
    }

    fn handle_completion(
        &mut self,
        completion: Self::Completion,
        ctx: &Self::Context,
        _scope: &Scope<Self>,
    ) {
        self.complete(completion, ctx);
    }
}
