//! State of the product list and the transitions that mutate it.

use super::interactions::{Direction, ProductListCompletion};
use super::ProductListError;
use crate::components::{ProductItemDetail, ProductListItem};
use crate::diagnostics::{Diagnostic, Diagnostics, PaginationFailure};
use crate::fetch::{FetchError, ProductsApi};
use crate::model::{DataSource, PaginatedResult, Product};
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};
use widget_framework::{AttributeError, Component, Html, Scope};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Prev is disabled on the first page.
pub fn prev_disabled(page: u32) -> bool {
    page <= 1
}

/// Next is disabled once the current page reaches the end of the collection.
pub fn next_disabled(page: u32, limit: u32, count: u64) -> bool {
    u64::from(page) * u64::from(limit) >= count
}

/// Construction parameters, mirroring the attributes a host page sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListProps {
    pub page: u32,
    pub limit: u32,
    pub paginated: PaginatedResult<Product>,
    pub has_ssr_content: bool,
    /// Pre-rendered items. Ignored unless `has_ssr_content` is set.
    pub children: Vec<Html>,
}

impl Default for ProductListProps {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            paginated: PaginatedResult::empty(),
            has_ssr_content: false,
            children: Vec::new(),
        }
    }
}

impl ProductListProps {
    /// Props for a list whose first page was rendered by the server.
    pub fn preloaded(children: Vec<Html>) -> Self {
        Self {
            has_ssr_content: true,
            children,
            ..Self::default()
        }
    }
}

/// Runtime dependencies of the list.
#[derive(Debug, Clone)]
pub struct ProductListContext {
    pub api: ProductsApi,
    pub diagnostics: Diagnostics,
}

/// Read-only view of the list handed to hosts and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListSnapshot {
    pub page: u32,
    pub limit: u32,
    pub paginated: PaginatedResult<Product>,
    pub showing: usize,
    pub count: u64,
    pub detailed_product: Option<Product>,
    pub has_ssr_content: bool,
    pub loading: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub last_error: Option<FetchError>,
}

struct PendingRequest {
    token: u64,
    target_page: u32,
    abort: AbortHandle,
}

/// Paginated product list with an optional detail view.
pub struct ProductList {
    pub(super) page: u32,
    pub(super) limit: u32,
    pub(super) source: DataSource,
    pub(super) items: Vec<ProductListItem>,
    pub(super) detail: Option<ProductItemDetail>,
    pending: Option<PendingRequest>,
    last_token: u64,
    pub(super) last_error: Option<FetchError>,
}

pub(super) fn validate_page_size(name: &'static str, value: u32) -> Result<u32, AttributeError> {
    if value == 0 {
        return Err(AttributeError::invalid(name, "must be at least 1"));
    }
    Ok(value)
}

impl ProductList {
    pub fn new(props: ProductListProps) -> Result<Self, ProductListError> {
        let page = validate_page_size("page", props.page)?;
        let limit = validate_page_size("limit", props.limit)?;
        props
            .paginated
            .validate()
            .map_err(|reason| AttributeError::invalid("paginated", reason))?;

        let source = if props.has_ssr_content {
            DataSource::Preloaded {
                children: props.children,
                paginated: props.paginated,
            }
        } else {
            if !props.children.is_empty() {
                debug!(
                    component = Self::TAG,
                    children = props.children.len(),
                    "Children without has-ssr-content dropped"
                );
            }
            DataSource::Fetched(props.paginated)
        };

        let mut list = Self {
            page,
            limit,
            source,
            items: Vec::new(),
            detail: None,
            pending: None,
            last_token: 0,
            last_error: None,
        };
        list.rebuild_items();
        Ok(list)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn detailed_product(&self) -> Option<&Product> {
        self.detail.as_ref().map(ProductItemDetail::product)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn prev_disabled(&self) -> bool {
        self.is_loading() || prev_disabled(self.page)
    }

    pub fn next_disabled(&self) -> bool {
        self.is_loading() || next_disabled(self.page, self.limit, self.source.count())
    }

    pub(super) fn rebuild_items(&mut self) {
        self.items = self
            .source
            .products()
            .iter()
            .cloned()
            .map(ProductListItem::new)
            .collect();
    }

    pub(super) fn select(&mut self, product: Product) {
        self.detail = Some(ProductItemDetail::new(product));
    }

    pub(super) fn deselect(&mut self) {
        self.detail = None;
    }

    /// Starts a page request unless one is already in flight or the button for
    /// `direction` is disabled. Returns whether a request was started.
    pub(super) fn paginate(
        &mut self,
        direction: Direction,
        ctx: &ProductListContext,
        scope: &Scope<Self>,
    ) -> bool {
        if let Some(pending) = &self.pending {
            debug!(
                component = Self::TAG,
                ?direction,
                token = pending.token,
                "Request in flight, pagination ignored"
            );
            return false;
        }
        let disabled = match direction {
            Direction::Previous => self.prev_disabled(),
            Direction::Next => self.next_disabled(),
        };
        let Some(target_page) = direction.target(self.page).filter(|_| !disabled) else {
            debug!(component = Self::TAG, ?direction, page = self.page, "Pagination disabled");
            return false;
        };

        self.last_token += 1;
        let token = self.last_token;
        let limit = self.limit;
        let api = ctx.api.clone();
        debug!(component = Self::TAG, token, page = target_page, limit, "Requesting page");

        let abort = scope.spawn(async move {
            ProductListCompletion::PageLoaded {
                token,
                target_page,
                result: api.page(target_page, limit).await,
            }
        });
        self.pending = Some(PendingRequest {
            token,
            target_page,
            abort,
        });
        true
    }

    /// Aborts the request in flight. Returns whether there was one.
    pub(super) fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.abort.abort();
                info!(
                    component = Self::TAG,
                    token = pending.token,
                    page = pending.target_page,
                    "Page request cancelled"
                );
                true
            }
            None => false,
        }
    }

    pub(super) fn complete(&mut self, completion: ProductListCompletion, ctx: &ProductListContext) {
        let ProductListCompletion::PageLoaded {
            token,
            target_page,
            result,
        } = completion;

        if self.pending.as_ref().map(|p| p.token) != Some(token) {
            debug!(component = Self::TAG, token, "Stale page discarded");
            return;
        }
        self.pending = None;

        match result {
            Ok(paginated) => {
                let discarded = self.source.replace_with_fetched(paginated);
                if discarded > 0 {
                    debug!(component = Self::TAG, discarded, "Pre-rendered children removed");
                }
                self.page = target_page;
                self.last_error = None;
                self.rebuild_items();
                info!(component = Self::TAG, page = self.page, showing = self.source.showing(), "Page loaded");
            }
            Err(e) => {
                warn!(component = Self::TAG, page = target_page, error = %e, "Page request failed");
                ctx.diagnostics
                    .report(Diagnostic::Pagination(PaginationFailure {
                        component: Self::TAG,
                        page: target_page,
                        error: e.clone(),
                    }));
                self.last_error = Some(e);
            }
        }
    }

    pub(super) fn to_snapshot(&self) -> ProductListSnapshot {
        ProductListSnapshot {
            page: self.page,
            limit: self.limit,
            paginated: self.source.paginated().clone(),
            showing: self.source.showing(),
            count: self.source.count(),
            detailed_product: self.detailed_product().cloned(),
            has_ssr_content: self.source.has_ssr_content(),
            loading: self.is_loading(),
            prev_disabled: self.prev_disabled(),
            next_disabled: self.next_disabled(),
            last_error: self.last_error.clone(),
        }
    }
}
