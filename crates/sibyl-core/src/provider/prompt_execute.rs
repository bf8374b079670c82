use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::GenericGenerationResponse,
    template::{IntoPrompt, PromptTemplate},
};

/// The typed flavour of [`GenerationProvider`](super::GenerationProvider).
///
/// Instead of handing the backend a schema as a generic mapping, the caller
/// implements [`PromptTemplate`] and lets the backend derive the response
/// schema from `P::Output` and deserialize the reply back into it.
///
/// The method returns a `Pin<Box<dyn Future>>` so we stay object-safe
/// without pulling in `async_trait`.
pub trait PromptExecutionProvider: Send + Sync {
    /// Turn type consumed by this backend.
    ///
    /// A simple setup can re-use `crate::generic::GenericTurn`. Providers
    /// with richer wire formats can supply their own struct.
    type Message: Send + Sync + 'static;

    /// Execute the prompt and deserialize the provider's reply into
    /// `P::Output`.
    ///
    /// The blanket constraint on `P` guarantees at **compile time** that
    /// callers only feed the backend turns it understands.
    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> Pin<Box<dyn Future<Output = Result<GenericGenerationResponse<P::Output>>> + Send + 'p>>
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message>;
}
