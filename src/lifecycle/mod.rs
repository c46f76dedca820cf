//! # System Lifecycle
//!
//! This module starts the Delivery actor, hands out its client and shuts it
//! down again.
//!
//! ## The DeliverySystem Pattern
//!
//! [`DeliverySystem`] owns the running actor task and one [`DeliveryClient`](crate::clients::DeliveryClient).
//! Callers clone the client freely; every clone talks to the same state.
//!
//! ```rust
//! use food_delivery::lifecycle::DeliverySystem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = DeliverySystem::new();
//!     system.client.add_category("Chinese").await?;
//!
//!     let state = system.shutdown().await?;
//!     assert_eq!(state.categories(), ["Chinese"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor drains its mailbox** - Requests already queued are still answered
//! 3. **Await completion** - The task returns the final [`Delivery`](crate::delivery::Delivery) state
//!
//! Client clones held elsewhere keep the actor alive, so `shutdown` only
//! completes once those are dropped too.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs the log subscriber. See the [`tracing`](self::tracing) module.
//!
//! **Usage:**
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod delivery_system;
pub mod tracing;

pub use self::delivery_system::*;
pub use self::tracing::*;
