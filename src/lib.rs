#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Food Delivery
//!
//! > **An in-memory food-delivery marketplace behind a single actor.**
//!
//! The crate keeps a catalog of categories, restaurants and dishes, collects
//! customer ratings, stores orders and assigns pending orders to delivery
//! slots in batches.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One state, one writer
//!
//! All marketplace data lives in a single [`Delivery`](delivery::Delivery)
//! value. When it is shared, an [`Actor`](framework::Actor) owns it and
//! applies requests one at a time, so:
//! - Order IDs are handed out without gaps or duplicates, whatever the number of callers.
//! - A scheduling call never assigns an order that a concurrent call already assigned.
//! - Every listing sees a complete state, never a half-applied write.
//!
//! No `Mutex` guards the state: the actor task is the only code that touches it.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Service failures are [`DeliveryError`](delivery::DeliveryError) values. Transport
//! failures ([`FrameworkError`](framework::FrameworkError)) are mapped onto
//! `DeliveryError::ActorCommunication` by the client, so callers match on one type.
//!
//! ### 2. Sync core, async shell
//! The service logic is plain synchronous Rust on `&mut Delivery` and is tested
//! without a runtime. The actor and the [`DeliveryClient`](clients::DeliveryClient)
//! add the async boundary on top.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured fields. See the [`lifecycle::tracing`] module.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`Actor`](framework::Actor), [`Mailbox`](framework::Mailbox) and
//! [`Handler`](framework::Handler) trait, plus test mocks.
//!
//! ### 2. The Service ([`delivery`], [`model`])
//! The marketplace state, its operations and its data types.
//!
//! ### 3. The Interface ([`clients`])
//! [`DeliveryClient`](clients::DeliveryClient) wraps the mailbox in one async method per operation.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`DeliverySystem`](lifecycle::DeliverySystem) starts and stops the actor from a
//! [`DeliveryConfig`](config::DeliveryConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Narrow the delivery window
//! DELIVERY_OPENING_HOUR=11 DELIVERY_CLOSING_HOUR=22 cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod delivery;
pub mod framework;
pub mod lifecycle;
pub mod model;
