//! Pure data structures: catalog entries, session state and order documents.
//!
//! [`CateringSession`] and [`DraftOrder`] are also the entities managed by the
//! session and order actors.

pub mod budget;
pub mod headcount;
pub mod order;
pub mod package;
pub mod pricing;
pub mod product;
pub mod session;

pub use budget::*;
pub use headcount::*;
pub use order::*;
pub use package::*;
pub use pricing::*;
pub use product::*;
pub use session::*;
