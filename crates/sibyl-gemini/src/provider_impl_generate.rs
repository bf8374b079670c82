use std::sync::Arc;

use sibyl_core::{
    error::Result,
    generic::{GenerationOutput, GenericGenerationResponse, GenericTurn, GenericUsageReport},
    provider::{GenerateParameters, GenerationProvider},
};

use crate::{
    GeminiAdapter,
    api_v1beta::{GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
};

impl GenerationProvider for GeminiAdapter {
    type Message = GenericTurn;

    fn generate<'p, M>(
        &self,
        params: GenerateParameters<M>,
    ) -> std::pin::Pin<
        Box<dyn Future<Output = Result<GenericGenerationResponse<GenerationOutput>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            // Schema translation happens inside the request conversion, so a
            // bad schema fails here, before the wire.
            let json_mode = params.output_schema.is_some();
            let request = GenerateContentRequest::try_from(params)?;

            tracing::debug!(model = %request.model, json_mode, "dispatching generateContent request");

            let response = match client.generate_content(request).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(error = %err, "generateContent call failed");
                    return Err(err.into());
                }
            };

            normalize_response(response, json_mode)
        })
    }
}

/// Turn a wire response into the caller-facing reply shape.
///
/// In JSON mode the candidate text must parse as JSON; a parse failure
/// surfaces as a serialization error rather than being caught here. In plain
/// mode the text is returned as-is.
fn normalize_response(
    response: GenerateContentResponse,
    json_mode: bool,
) -> Result<GenericGenerationResponse<GenerationOutput>> {
    let usage = response.usage_metadata.map(GenericUsageReport::from);

    let Some(text) = response.text() else {
        let detail = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
            .unwrap_or("response has no candidate with text content");
        return Err(GeminiError::Format(format!("empty reply from API: {detail}")).into());
    };

    let output = if json_mode {
        GenerationOutput::Json(serde_json::from_str(&text)?)
    } else {
        GenerationOutput::Text(text)
    };

    Ok(GenericGenerationResponse { output, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply_with_text(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP",
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 5,
                "totalTokenCount": 17,
            },
        }))
        .unwrap()
    }

    #[test]
    fn json_mode_parses_the_reply_into_a_value() {
        let response = reply_with_text(r#"{"name": "Alice"}"#);
        let normalized = normalize_response(response, true).unwrap();

        assert_eq!(
            normalized.output.as_json(),
            Some(&json!({"name": "Alice"}))
        );
        let usage = normalized.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 12);
        assert_eq!(usage.total_tokens, 17);
    }

    #[test]
    fn plain_mode_returns_the_text_verbatim() {
        let response = reply_with_text("Hi there");
        let normalized = normalize_response(response, false).unwrap();

        assert_eq!(normalized.output.as_text(), Some("Hi there"));
        assert_eq!(
            normalized.output.into_value(),
            json!({"text": "Hi there"})
        );
    }

    #[test]
    fn a_non_json_reply_in_json_mode_is_a_serialization_error() {
        let response = reply_with_text("Sorry, I cannot answer that.");
        let err = normalize_response(response, true).unwrap_err();
        assert!(matches!(
            err,
            sibyl_core::SibylError::Serialization(_)
        ));
    }

    #[test]
    fn a_candidateless_reply_reports_the_block_reason() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [],
            "promptFeedback": {"blockReason": "SAFETY"},
        }))
        .unwrap();
        let err = normalize_response(response, false).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }
}
