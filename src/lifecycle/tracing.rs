//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter
//! filtered by `RUST_LOG`. Module paths are hidden (`with_target(false)`);
//! actor logs carry an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actors**: startup, shutdown and every Create / Update / Action outcome
//! - **Clients**: one span per call (`#[instrument]`), payloads at `debug`
//! - **Import**: per-row verdicts at `debug`, the batch summary at `info`
//! - **Checkout**: each reservation, rollbacks at `warn`
//!
//! ```bash
//! # Batch summaries, sales and stock movements
//! RUST_LOG=info cargo run
//!
//! # Every row verdict and request payload
//! RUST_LOG=debug cargo run
//!
//! # Only the actor plumbing
//! RUST_LOG=apotek_pos::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a sale looks like:
//!
//! ```text
//! INFO checkout: Action ok entity_type="Product" id=PRD-0001 lines=2
//! INFO checkout: Reserved product_id=PRD-0001 quantity=2 remaining=98 lines=2
//! INFO checkout: Sale completed total=44000 change=6000 lines=2
//! ```

/// Initializes structured logging. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor instead
        .compact()
        .init();
}
