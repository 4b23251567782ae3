//! Pure pricing engine: allocator, calculator, evaluator, delivery fees and formatting.
//!
//! Nothing in this module holds state. Identical inputs always produce identical outputs.

pub mod allocator;
pub mod calculator;
pub mod delivery;
pub mod evaluator;
pub mod format;
pub mod quote;

pub use allocator::{allocate, Allocation};
pub use calculator::*;
pub use delivery::*;
pub use evaluator::*;
pub use format::*;
pub use quote::Quote;
