//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`) and
//! the level filter comes from `RUST_LOG`.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Request payloads and every actor message
//! RUST_LOG=debug cargo run
//!
//! # Only the scheduler
//! RUST_LOG=food_delivery::delivery::scheduler=info cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle** (`info`): startup, shutdown with the number of handled requests
//! - **State changes** (`info`): categories, restaurants, dishes, ratings and
//!   orders added, batches scheduled
//! - **Rejections** (`warn`): duplicate names, unknown categories, invalid orders
//! - **Requests** (`debug`): every message the actor receives, with its fields
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started actor="Delivery"
//! INFO setup: Category added category="Chinese" size=1
//! INFO setup: Restaurant added restaurant="Sol levante" category="Chinese" size=1
//! INFO ordering: Order created id=order_1 restaurant=Sol levante delivery_time=10 delivery_distance=3
//! INFO dispatch: Delivery scheduled delivery_time=10 max_distance=5 max_orders=3 candidates=1 assigned=1 pending=0
//! INFO Shutdown actor="Delivery" handled=9
//! ```
//!
//! Client calls run inside `#[instrument]` spans, so the span of the caller
//! (`setup`, `ordering`) is shown inline in front of each event.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths are noise next to the structured fields
        .compact() // Compact format shows spans inline (e.g., "ordering:create_order")
        .init();
}
