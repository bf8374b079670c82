use sibyl::gemini::GeminiAdapterBuilder;
use sibyl::{
    SibylClient,
    generic::GenericTurn,
    model::{GeminiModel, Model},
    provider::{GenerateParameters, GenerationProvider as _},
};

/// # Invoice extraction – untyped structured output
///
/// The schema is written by hand as a plain JSON value, the way you would
/// load it from a config file or receive it over an API boundary. Supplying
/// it switches the reply into JSON mode: the model can *only* answer with a
/// JSON object conforming to the schema, and the client hands you the parsed
/// value.
///
/// ```bash
/// export GEMINI_API_KEY=…      # mandatory
/// cargo run -p sibyl --example gemini_extract_invoice
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = GeminiAdapterBuilder::new_from_env().build()?;
    let client = SibylClient::new(backend);

    let schema = serde_json::json!({
        "type": "object",
        "properties": {
            "invoice_id": {"type": "string"},
            "customer_name": {"type": "string"},
            "due_date": {"type": "string", "description": "Date in YYYY-MM-DD format"},
            "total_amount": {"type": "number"},
            "line_item": {"type": "string"},
        },
        "required": ["invoice_id", "customer_name", "due_date", "total_amount"],
    });

    let params: GenerateParameters<GenericTurn> = GenerateParameters::new(
        "You are an invoice processor. Extract key details from the user's \
         text into a structured JSON object.",
        "Please process invoice #4815 for ACME Corp, due on 2025-07-31, for \
         the amount of $1,250.50. The item is 'Software License'.",
        Model::Gemini(GeminiModel::Gemini25Flash),
    )
    .with_temperature(0.0)
    .with_output_schema(schema);

    let reply = client.generate(params).await?;

    println!("{:#}", reply.output.into_value());

    if let Some(usage) = reply.usage {
        println!(
            "Tokens – prompt: {}, completion: {}, total: {}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
