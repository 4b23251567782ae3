//! # Session Actor
//!
//! Owns every live [`CateringSession`] and applies transitions to them one message at a
//! time. Quotes and checkout snapshots are computed inside the actor from the state it
//! holds, so callers never price a stale copy.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`CateringSession`]
//! - [`error`] - [`SessionError`]
//! - [`actions`] - [`SessionAction`] and [`SessionActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, generic_client) = session_actor::new(32);
//! let sessions = SessionClient::new(generic_client);
//! tokio::spawn(actor.run(DeliveryFeeSchedule::default()));
//!
//! let id = sessions.open().await?;
//! sessions.select_event_type(id, EventType::Lunch).await?;
//! let quote = sessions.quote(id).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::CateringSession;

/// Creates a new session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CateringSession>, ResourceClient<CateringSession>) {
    ResourceActor::new(buffer_size)
}
