//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor runtime.
//!
//! ## Key Types
//!
//! - [`Handler`]: The trait a state value implements to be driven by an actor.
//! - [`Actor`]: The generic actor that owns the state and drains its mailbox.
//! - [`Mailbox`]: The cloneable sending half used by clients.
//! - [`FrameworkError`]: Transport errors (e.g., ActorClosed, ActorDropped).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that a state value must implement to be owned by an [`Actor`].
///
/// # Architecture Note
/// The actor owns exactly one `Handler` and feeds it one request at a time.
/// Every request carries its own reply channel ([`Response`]), so the request
/// enum alone decides what each caller gets back. Because the handler is only
/// ever touched from the actor task, it needs no `Mutex` or `RwLock`: all
/// writes are serialized and every read sees a complete state.
pub trait Handler: Send + 'static {
    /// The message type accepted by this handler.
    type Request: Send + Debug + 'static;

    /// Handle a single request, answering on the channel it carries.
    fn handle(&mut self, request: Self::Request);
}

// =============================================================================
// 2. MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<T>;

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a [`Handler`] and processes its mailbox.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `Actor::new()` to get the `actor` (server) and `mailbox` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Stop**: Drop every mailbox clone; `run()` then returns the final state.
pub struct Actor<H: Handler> {
    receiver: mpsc::Receiver<H::Request>,
    handler: H,
}

impl<H: Handler> Actor<H> {
    /// Creates a new `Actor` around `handler` and its associated [`Mailbox`].
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// senders wait until there is space.
    pub fn new(handler: H, buffer_size: usize) -> (Self, Mailbox<H::Request>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, handler };
        (actor, Mailbox::new(sender))
    }

    /// Runs the actor's event loop until every mailbox is dropped, then hands
    /// the state back to the caller.
    pub async fn run(mut self) -> H {
        // Extract just the type name (e.g., "Delivery" instead of "food_delivery::delivery::Delivery")
        let actor = std::any::type_name::<H>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(actor, "Actor started");

        let mut handled: u64 = 0;
        while let Some(request) = self.receiver.recv().await {
            debug!(actor, ?request, "Request");
            self.handler.handle(request);
            handled += 1;
        }

        info!(actor, handled, "Shutdown");
        self.handler
    }
}

// =============================================================================
// 4. THE GENERIC MAILBOX
// =============================================================================

/// The sending half of an actor. Cheap to clone and share across tasks.
pub struct Mailbox<M> {
    sender: mpsc::Sender<M>,
}

impl<M> Clone for Mailbox<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M: Send + 'static> Mailbox<M> {
    pub fn new(sender: mpsc::Sender<M>) -> Self {
        Self { sender }
    }

    /// Sends the request built by `make` and waits for the actor's reply.
    ///
    /// `make` receives the reply channel and must embed it in the message.
    pub async fn request<T, F>(&self, make: F) -> Result<T, FrameworkError>
    where
        F: FnOnce(Response<T>) -> M,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Returns `true` once the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
