use sibyl::gemini::GeminiAdapterBuilder;
use sibyl::{
    SibylClient,
    generic::GenericTurn,
    model::{GeminiModel, Model},
    provider::{GenerateParameters, GenerationProvider as _},
};

/// # Multi-turn, plain text – no schema, prior history
///
/// Without an output schema the reply comes back as free-form text. The
/// prior conversation is passed through in order, and the new message
/// becomes the final user turn.
///
/// ```bash
/// export GEMINI_API_KEY=…      # mandatory
/// cargo run -p sibyl --example gemini_multi_turn
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = GeminiAdapterBuilder::new_from_env().build()?;
    let client = SibylClient::new(backend);

    let history = vec![
        GenericTurn::user("My name is Alice."),
        GenericTurn::model("Nice to meet you, Alice! How can I help?"),
    ];

    let params = GenerateParameters::new(
        "You are a concise, friendly assistant.",
        "What's my name?",
        Model::Gemini(GeminiModel::Gemini25FlashLite),
    )
    .with_history(history)
    .with_temperature(0.7);

    let reply = client.generate(params).await?;

    match reply.output.as_text() {
        Some(text) => println!("Assistant: {text}"),
        None => println!("Assistant returned no textual content"),
    }

    Ok(())
}
