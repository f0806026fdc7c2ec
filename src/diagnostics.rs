//! Out-of-band reporting of failures that do not change visible state.

use crate::fetch::FetchError;
use tokio::sync::mpsc;
use tracing::trace;

/// A failed page request.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationFailure {
    pub component: &'static str,
    /// The page that was requested, not the page still on screen.
    pub page: u32,
    pub error: FetchError,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    Pagination(PaginationFailure),
}

/// Sink for [`Diagnostic`]s. The default sink discards everything.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    sender: Option<mpsc::UnboundedSender<Diagnostic>>,
}

impl Diagnostics {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Diagnostic>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        match &self.sender {
            Some(sender) => {
                if sender.send(diagnostic).is_err() {
                    trace!("Diagnostics observer gone");
                }
            }
            None => trace!(?diagnostic, "Diagnostic discarded"),
        }
    }
}
