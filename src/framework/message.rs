//! # Generic Messages
//!
//! Requests carried from a [`ResourceClient`](crate::framework::ResourceClient) to its
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::{ActorEntity, FrameworkError};
use tokio::sync::oneshot;

/// One-shot reply channel attached to every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Lifecycle operations understood by every actor, plus a typed `Action` escape hatch.
///
/// - **Create**: build a resource from [`ActorEntity::Create`].
/// - **Get**: fetch a snapshot of the current state.
/// - **Delete**: drop the resource.
/// - **Action**: run an [`ActorEntity::Action`] against it.
///
/// Resources here never change through a generic update: sessions move through their
/// transitions and submitted orders are immutable.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Request name for logs and mock diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::Delete { .. } => "Delete",
            ResourceRequest::Action { .. } => "Action",
        }
    }
}
