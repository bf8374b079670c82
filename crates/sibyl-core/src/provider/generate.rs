use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenerationOutput, GenericGenerationResponse},
    model::Model,
};

/// A **backend** turns a generation request into a network call to a concrete
/// provider and normalizes the structured reply.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts for conversation turns.
/// * **One async-ish method** – `generate`, which performs a *single*
///   non-streaming round-trip and returns either free-form text or parsed
///   JSON, depending on whether the parameters carried an output schema.
///
/// The method returns a `Pin<Box<dyn Future>>` so we stay object-safe
/// without pulling in `async_trait`.
pub trait GenerationProvider: Send + Sync {
    /// Turn type consumed by this backend.
    ///
    /// A simple setup can re-use [`crate::generic::GenericTurn`]. Providers
    /// with richer wire formats can supply their own struct.
    type Message: Send + Sync + 'static;

    /// Execute the request and normalize the provider's reply.
    ///
    /// Exactly one network round trip per invocation; every failure
    /// propagates to the caller unchanged.
    fn generate<'p, M>(
        &self,
        params: GenerateParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericGenerationResponse<GenerationOutput>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// Everything a backend needs for one generation round trip.
///
/// * `history` is the prior conversation in order; it is passed through
///   as-is, without reordering, deduplication, or truncation.
/// * `message` is the new user utterance. Back-ends append it as the final
///   user turn of the outbound transcript.
/// * `output_schema` is a generic nested schema description
///   (see the backend's schema translator for the recognised vocabulary).
///   Supplying one switches the reply into structured JSON mode.
#[derive(Debug, Clone)]
pub struct GenerateParameters<M: Clone> {
    pub system_instruction: String,
    pub history: Vec<M>,
    pub message: String,
    pub model: Model,
    pub temperature: Option<f64>,
    pub output_schema: Option<serde_json::Value>,
}

impl<M: Clone> GenerateParameters<M> {
    pub fn new(system_instruction: impl Into<String>, message: impl Into<String>, model: Model) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            history: Vec::new(),
            message: message.into(),
            model,
            temperature: None,
            output_schema: None,
        }
    }

    pub fn history(&self) -> &Vec<M> {
        &self.history
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn with_history(mut self, history: Vec<M>) -> Self {
        self.history = history;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_output_schema(mut self, output_schema: serde_json::Value) -> Self {
        self.output_schema = Some(output_schema);
        self
    }
}
