//! # Generic Messages
//!
//! Requests sent from a [`ComponentHandle`](crate::ComponentHandle) to its
//! [`ComponentActor`](crate::ComponentActor).

use crate::component::Html;
use crate::error::FrameworkError;
use crate::stateful::StatefulComponent;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by component actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Host-side operations on a mounted component.
///
/// - **Render**: produce the current view.
/// - **Snapshot**: read the state without rendering it.
/// - **SetAttribute**: apply an observed attribute (`None` removes it).
/// - **Attributes**: read the reflected attributes.
/// - **Interact**: deliver a UI event to the component's reducer.
#[derive(Debug)]
pub enum ComponentRequest<T: StatefulComponent> {
    Render {
        respond_to: Response<Html>,
    },
    Snapshot {
        respond_to: Response<T::Snapshot>,
    },
    SetAttribute {
        name: String,
        value: Option<String>,
        respond_to: Response<()>,
    },
    Attributes {
        respond_to: Response<Vec<(&'static str, String)>>,
    },
    Interact {
        interaction: T::Interaction,
        respond_to: Response<()>,
    },
}
