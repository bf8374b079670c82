//! Generic, lightweight client that executes generation requests against a
//! single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that:
//! * The request's turn type matches what the backend expects.
//! * No dynamic dispatch or object-safety hurdles appear in user code.
//!
//! Any backend crate (e.g. `sibyl-gemini`) just implements the provider
//! traits and the same client works out of the box:
//!
//! ```rust,ignore
//! let client = SibylClient::new(GeminiAdapterBuilder::new_from_env().build()?);
//! let reply = client.generate(params).await?;
//! ```
use std::sync::Arc;

use crate::{
    error::Result,
    generic::{GenerationOutput, GenericGenerationResponse},
    provider::{GenerateParameters, GenerationProvider, PromptExecutionProvider},
    template::{IntoPrompt, PromptTemplate},
};

/// A client bound to a single backend.
///
/// Clone the client if you need to share it across tasks—the backend sits
/// behind an `Arc`, so clones are cheap.
#[derive(Debug, Clone)]
pub struct SibylClient<B> {
    backend: Arc<B>,
}

impl<B> SibylClient<B> {
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific
    /// settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: GenerationProvider + 'static> GenerationProvider for SibylClient<B> {
    type Message = B::Message;

    fn generate<'p, M>(
        &self,
        params: GenerateParameters<M>,
    ) -> std::pin::Pin<
        Box<
            dyn std::future::Future<Output = Result<GenericGenerationResponse<GenerationOutput>>>
                + Send
                + 'p,
        >,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.generate(params).await })
    }
}

impl<B: PromptExecutionProvider> PromptExecutionProvider for SibylClient<B> {
    type Message = B::Message;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<GenericGenerationResponse<P::Output>>> + Send + 'p>,
    >
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message>,
    {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.prompt_execute(prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::GenericTurn;
    use crate::model::{GeminiModel, Model};

    /// Backend stub that echoes the new user message back as free-form text.
    struct EchoBackend;

    impl GenerationProvider for EchoBackend {
        type Message = GenericTurn;

        fn generate<'p, M>(
            &self,
            params: GenerateParameters<M>,
        ) -> std::pin::Pin<
            Box<
                dyn std::future::Future<
                        Output = Result<GenericGenerationResponse<GenerationOutput>>,
                    > + Send
                    + 'p,
            >,
        >
        where
            M: Into<Self::Message> + Clone + Send + Sync + 'p,
        {
            Box::pin(async move {
                Ok(GenericGenerationResponse {
                    output: GenerationOutput::Text(params.message),
                    usage: None,
                })
            })
        }
    }

    #[tokio::test]
    async fn client_delegates_to_the_backend() {
        let client = SibylClient::new(EchoBackend);
        let params: GenerateParameters<GenericTurn> =
            GenerateParameters::new("Be terse.", "Hello", Model::Gemini(GeminiModel::Gemini25Flash));

        let response = client.generate(params).await.unwrap();
        assert_eq!(response.output.as_text(), Some("Hello"));
    }
}
