use crate::framework::{FrameworkError, Mailbox, Response};
use async_trait::async_trait;

/// Trait for actor-specific clients to share the request/reply plumbing.
///
/// Implementors only expose their mailbox and say how transport failures map
/// onto their own error type; [`send_request`](ActorClient::send_request)
/// does the rest.
#[async_trait]
pub trait ActorClient<M: Send + 'static>: Send + Sync {
    /// The actor-specific error type.
    type Error: Send;

    /// Access the inner mailbox.
    fn mailbox(&self) -> &Mailbox<M>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send the request built by `make` and wait for the reply.
    async fn send_request<T, F>(&self, make: F) -> Result<T, Self::Error>
    where
        T: Send + 'static,
        F: FnOnce(Response<T>) -> M + Send + 'static,
    {
        tracing::trace!("Sending request");
        self.mailbox().request(make).await.map_err(Self::map_error)
    }
}
