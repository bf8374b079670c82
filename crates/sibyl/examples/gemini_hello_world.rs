use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sibyl::gemini::GeminiAdapterBuilder;
use sibyl::prompt::chain::PromptChain;
use sibyl::types::fragments::StaticFragment;
use sibyl::{
    SibylClient,
    generic::{GenericRole, GenericTurn},
    model::{GeminiModel, Model},
    provider::PromptExecutionProvider as _,
    template::{IntoPrompt, PromptTemplate},
};

/// # Hello, JSON! – Minimal yet *typed* prompt
///
/// This example is the "smallest viable program" that
///
/// 1. **Builds** a Gemini backend (`GeminiAdapter`).
/// 2. **Creates** a prompt consisting of two turns:
///    * a *system* instruction
///    * a *user* request
/// 3. **Asks** the model to respond with **valid JSON** that can be
///    deserialised into the `HelloResponse` struct below.
/// 4. **Prints** the strongly-typed Rust value.
///
/// ## How to run
///
/// ```bash
/// export GEMINI_API_KEY=…             # your key, free tier works fine
/// cargo run -p sibyl --example gemini_hello_world
/// ```
///
/// ## Note on the schema pipeline
///
/// Because `HelloResponse` implements [`schemars::JsonSchema`] and is used
/// as `PromptTemplate::Output`, the backend automatically derives a response
/// schema, attaches it to the request's generation config, and the API can
/// *only* reply with valid JSON that matches our struct.

/// The *shape* of the answer we expect from the model.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct HelloResponse {
    greeting: String,
}

/// A tiny prompt that leverages `PromptChain` to showcase fragment
/// composition.
struct HelloPrompt;

impl IntoPrompt for HelloPrompt {
    type Message = GenericTurn;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::from(
                "You are a cheerful distress-signal operator.",
            ))
            .with(StaticFragment::new("Mayday Mayday!", GenericRole::User))
            .build()
    }
}

/// Tell `sibyl-core` which model we want and which type we expect back.
impl PromptTemplate for HelloPrompt {
    type Output = HelloResponse;
    const MODEL: Model = Model::Gemini(GeminiModel::Gemini25Flash);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Build the backend from the environment (needs GEMINI_API_KEY).
    let backend = GeminiAdapterBuilder::new_from_env().build()?;

    // 2. Wrap it inside the generic client.
    let client = SibylClient::new(backend);

    // 3. Run our prompt and await the typed result.
    let response = client.prompt_execute(HelloPrompt).await?;

    // 4. Done – enjoy a well-typed greeting.
    println!("Response: {:?}", response.output);

    Ok(())
}
