//! # Tracing setup
//!
//! One compact `fmt` subscriber for the whole process, filtered by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # actor lifecycle, submissions
//! RUST_LOG=debug cargo run    # every request and transition
//! ```
//!
//! Actor logs carry an `entity_type` field (`CateringSession`, `DraftOrder`) instead of a
//! module path, and client spans are named after the client method, so a checkout reads
//! as `place_order:checkout` followed by `place_order:submit`.

/// Install the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
