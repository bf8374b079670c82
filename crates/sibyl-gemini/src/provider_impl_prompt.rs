use std::sync::Arc;

use sibyl_core::{
    error::{Result, SibylError},
    generic::{GenericGenerationResponse, GenericTurn, GenericUsageReport},
    provider::PromptExecutionProvider,
    schema_util::derive_response_schema,
    template::{IntoPrompt, PromptTemplate},
};

use crate::{
    GeminiAdapter,
    api_v1beta::{
        GenerateContentRequest, GenerationConfig, ResponseMimeType, Schema,
        strip_unsupported_schema_fields,
    },
    error::GeminiError,
    model_map::map_model,
};

impl PromptExecutionProvider for GeminiAdapter {
    type Message = GenericTurn;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> std::pin::Pin<
        Box<dyn Future<Output = Result<GenericGenerationResponse<P::Output>>> + Send + 'p>,
    >
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message>,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(&P::MODEL)
                .ok_or(SibylError::InvalidRequest(format!(
                    "backend does not support selected model: {:?}",
                    P::MODEL
                )))?
                .into_owned();

            // The response schema is derived from the prompt's output type,
            // so typed execution is always a JSON-mode request.
            let mut description = derive_response_schema::<P::Output>();
            strip_unsupported_schema_fields(&mut description);

            let config = GenerationConfig::new()
                .response_mime_type(ResponseMimeType::Json)
                .response_schema(Schema::try_from(&description)?);

            let turns: Vec<GenericTurn> =
                prompt.into_prompt().into_iter().map(Into::into).collect();
            let request = GenerateContentRequest::from_turns(model, turns, config);

            tracing::debug!(model = %request.model, "dispatching typed generateContent request");

            let response = match client.generate_content(request).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(error = %err, "generateContent call failed");
                    return Err(err.into());
                }
            };

            let usage = response.usage_metadata.map(GenericUsageReport::from);

            let Some(text) = response.text() else {
                let detail = response
                    .prompt_feedback
                    .as_ref()
                    .and_then(|feedback| feedback.block_reason.as_deref())
                    .unwrap_or("response has no candidate with text content");
                return Err(GeminiError::Format(format!("empty reply from API: {detail}")).into());
            };

            let output: P::Output = serde_json::from_str(&text)?;
            Ok(GenericGenerationResponse { output, usage })
        })
    }
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde_json::Value;
    use sibyl_core::schema_util::derive_response_schema;

    use crate::api_v1beta::{Schema, SchemaType, strip_unsupported_schema_fields};

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Invoice {
        invoice_id: String,
        total_amount: f64,
    }

    #[test]
    fn derived_schemas_survive_sanitation_and_translation() {
        let mut description: Value = derive_response_schema::<Invoice>();
        strip_unsupported_schema_fields(&mut description);

        let schema = Schema::try_from(&description).unwrap();
        assert_eq!(schema.schema_type, SchemaType::Object);

        let fields = schema.properties.unwrap();
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert!(names.contains(&"invoice_id"));
        assert!(names.contains(&"total_amount"));
    }
}
