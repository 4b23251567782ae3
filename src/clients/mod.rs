//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client turns actor actions into plain async methods with the actor's own error
//! type, so callers never match on action results themselves.

pub mod actor_client;
pub mod order_client;
pub mod session_client;

pub use actor_client::ActorClient;
pub use order_client::*;
pub use session_client::*;
