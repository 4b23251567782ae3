//! Generic actor framework.
//!
//! - [`ActorEntity`] - what a managed resource must provide
//! - [`ResourceActor`] - the task that owns a store of entities
//! - [`ResourceClient`] - the typed sending half
//! - [`FrameworkError`] - plumbing failures and wrapped entity errors
//!
//! See [`mock`] for test doubles.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
