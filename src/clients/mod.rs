//! Type-safe wrappers around [`Mailbox`](crate::framework::Mailbox).

pub mod actor_client;
pub mod delivery_client;

pub use actor_client::*;
pub use delivery_client::*;
