//! # Mock Mailboxes & Testing Guide
//!
//! A [`MockMailbox<M>`] hands out the same [`Mailbox<M>`] a real actor would, but
//! answers requests from a queue of scripted expectations instead of a real
//! handler. Use it to test client code (request shaping, error mapping) without
//! building any service state.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockMailbox | Real Actor |
//! |---------|-------------|------------|
//! | **State** | None (scripted replies) | Real state management |
//! | **Use Case** | Logic *around* the mailbox | The handler itself or the full system |
//! | **Error Injection** | Easy (drop the reply, close the mailbox) | Hard |
//!
//! ## Example
//!
//! ```rust
//! use food_delivery::framework::mock::MockMailbox;
//! use food_delivery::framework::Response;
//!
//! #[derive(Debug)]
//! enum Ping {
//!     Ping { respond_to: Response<&'static str> },
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockMailbox::<Ping>::new();
//!     mock.expect(|request| match request {
//!         Ping::Ping { respond_to } => {
//!             let _ = respond_to.send("pong");
//!         }
//!     });
//!
//!     let mailbox = mock.mailbox();
//!     let reply = mailbox.request(|respond_to| Ping::Ping { respond_to }).await.unwrap();
//!     assert_eq!(reply, "pong");
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step control, [`create_mock_mailbox`] returns the raw receiver
//! and [`expect_request`] pulls the next message off it.

use crate::framework::core::Mailbox;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Expectation<M> = Box<dyn FnOnce(M) + Send>;

/// A mock mailbox with expectation tracking for fluent testing.
pub struct MockMailbox<M: Send + 'static> {
    mailbox: Mailbox<M>,
    expectations: Arc<Mutex<VecDeque<Expectation<M>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<M: Send + 'static> Default for MockMailbox<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Send + 'static> MockMailbox<M> {
    /// Creates a new mock with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<M>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<M>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = expectations_clone
                    .lock()
                    .map(|mut exps| exps.pop_front())
                    .unwrap_or(None);
                match next {
                    Some(answer) => answer(request),
                    // Dropping the request drops its reply channel, so the
                    // caller sees `ActorDropped`.
                    None => tracing::warn!("Unexpected request on mock mailbox"),
                }
            }
        });

        Self {
            mailbox: Mailbox::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the mailbox for use in tests.
    pub fn mailbox(&self) -> Mailbox<M> {
        self.mailbox.clone()
    }

    /// Queues an expectation. `answer` receives the next request and replies on it.
    pub fn expect(&mut self, answer: impl FnOnce(M) + Send + 'static) -> &mut Self {
        if let Ok(mut exps) = self.expectations.lock() {
            exps.push_back(Box::new(answer));
        }
        self
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().map(|exps| exps.len()).unwrap_or(0)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Creates a mailbox and the receiver behind it, for asserting on raw requests.
pub fn create_mock_mailbox<M: Send + 'static>(
    buffer_size: usize,
) -> (Mailbox<M>, mpsc::Receiver<M>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Mailbox::new(sender), receiver)
}

/// Waits for the next request on a mock receiver.
pub async fn expect_request<M>(receiver: &mut mpsc::Receiver<M>) -> Option<M> {
    receiver.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::core::{FrameworkError, Response};

    #[derive(Debug)]
    enum EchoRequest {
        Echo {
            text: String,
            respond_to: Response<String>,
        },
    }

    #[tokio::test]
    async fn test_raw_mock_mailbox() {
        let (mailbox, mut receiver) = create_mock_mailbox::<EchoRequest>(10);

        let task = tokio::spawn(async move {
            mailbox
                .request(|respond_to| EchoRequest::Echo {
                    text: "hello".to_string(),
                    respond_to,
                })
                .await
        });

        let EchoRequest::Echo { text, respond_to } = expect_request(&mut receiver)
            .await
            .expect("Expected Echo request");
        assert_eq!(text, "hello");
        respond_to.send(text.to_uppercase()).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), "HELLO");
    }

    #[tokio::test]
    async fn test_mock_mailbox_with_expectations() {
        let mut mock = MockMailbox::<EchoRequest>::new();
        mock.expect(|EchoRequest::Echo { text, respond_to }| {
            let _ = respond_to.send(format!("{text}!"));
        });
        assert_eq!(mock.remaining(), 1);

        let mailbox = mock.mailbox();
        let reply = mailbox
            .request(|respond_to| EchoRequest::Echo {
                text: "hi".to_string(),
                respond_to,
            })
            .await
            .unwrap();
        assert_eq!(reply, "hi!");
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_drops_reply() {
        let mock = MockMailbox::<EchoRequest>::new();
        let result = mock
            .mailbox()
            .request(|respond_to| EchoRequest::Echo {
                text: "nobody home".to_string(),
                respond_to,
            })
            .await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));
    }
}
