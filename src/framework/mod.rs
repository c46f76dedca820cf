//! Generic actor runtime for single-owner service state.
//!
//! # Main Components
//!
//! - [`Handler`] - Trait a state value implements to be driven by an actor
//! - [`Actor`] - Generic actor that owns the state and drains its mailbox
//! - [`Mailbox`] - Cloneable request/reply handle to a running actor
//! - [`FrameworkError`] - Transport error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning real state.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
