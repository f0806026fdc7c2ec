//! Where partial page responses land, and what must be rewired afterwards.

/// Element a swap is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapTarget {
    Body,
    Selector(String),
}

impl SwapTarget {
    pub fn selector(selector: impl Into<String>) -> Self {
        SwapTarget::Selector(selector.into())
    }
}

/// Main content region of the page layout.
pub const APP_MAIN: &str = ".app-main";

/// Handlers to reattach after new markup was swapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rebind {
    pub navbar: bool,
    pub deletes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSwap {
    /// Where the error body is written.
    pub into: SwapTarget,
    pub rebind: Rebind,
}

/// Routes an error response. Errors aimed at the whole body only replace the
/// main region so the layout survives.
pub fn error_swap_target(target: &SwapTarget, elt: &SwapTarget) -> ErrorSwap {
    let into = match target {
        SwapTarget::Body => SwapTarget::selector(APP_MAIN),
        other => other.clone(),
    };
    ErrorSwap {
        into,
        rebind: rebind_after_swap(elt),
    }
}

/// Navbar handlers only need rebinding when the whole body was replaced;
/// delete controls can appear in any fragment.
pub fn rebind_after_swap(elt: &SwapTarget) -> Rebind {
    Rebind {
        navbar: *elt == SwapTarget::Body,
        deletes: true,
    }
}
