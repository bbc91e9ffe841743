//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for every binary built on the
//! framework.
//!
//! ## What Gets Traced
//!
//! - **Pool**: startup with its connection limit
//! - **Entity Operations**: Create, Get, List, Update, Delete with `entity_type` and `id`
//! - **Units of Work**: begin, commit and rollback at `debug`
//! - **Retries**: every transient failure that triggers another attempt, at `warn`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # state changes only
//! RUST_LOG=debug cargo run     # payloads, reads and transaction boundaries
//! RUST_LOG=storefront=trace cargo run   # checkout step checkpoints
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); records carry
//! `entity_type` instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
