//! # Order Actor
//!
//! Turns checkout snapshots into draft orders on the commerce platform and keeps the
//! accepted ones for confirmation.
//!
//! Submission happens in the entity's `on_create` hook: the snapshot is validated, handed
//! to the [`CommerceGateway`](crate::commerce::CommerceGateway) injected as the actor
//! context, and only stored once the gateway accepts it. A rejected submission leaves
//! nothing behind, so a retry is simply another create.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`DraftOrder`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::DraftOrder;

/// Creates a new order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<DraftOrder>, ResourceClient<DraftOrder>) {
    ResourceActor::new(buffer_size)
}
