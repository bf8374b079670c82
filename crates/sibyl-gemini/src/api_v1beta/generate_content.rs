use serde::{Deserialize, Serialize};
use sibyl_core::error::SibylError;
use sibyl_core::generic::{GenericRole, GenericTurn};
use sibyl_core::provider::GenerateParameters;

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common::UsageMetadata;
use super::schema::Schema;

/// Body of a `models/{model}:generateContent` call.
///
/// The model name is carried for URL addressing only; the endpoint takes it
/// from the request path, not the body.
#[derive(Debug, Serialize, Clone)]
pub struct GenerateContentRequest {
    #[serde(skip_serializing)]
    pub model: String,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "systemInstruction")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "generationConfig")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Assemble a request from an ordered list of turns.
    ///
    /// `System` turns never enter the transcript: their text is hoisted into
    /// `systemInstruction` (joined with blank lines when there are several).
    /// `User` and `Model` turns are emitted in the order given.
    pub(crate) fn from_turns(
        model: String,
        turns: Vec<GenericTurn>,
        generation_config: GenerationConfig,
    ) -> Self {
        let mut system_parts: Vec<String> = Vec::new();
        let mut contents = Vec::with_capacity(turns.len());

        for turn in turns {
            match turn.role {
                GenericRole::System => system_parts.push(turn.text),
                GenericRole::User => contents.push(Content::user(turn.text)),
                GenericRole::Model => contents.push(Content::model(turn.text)),
            }
        }

        Self {
            model,
            contents,
            system_instruction: (!system_parts.is_empty())
                .then(|| Content::system(system_parts.join("\n\n"))),
            generation_config: Some(generation_config),
        }
    }
}

impl<M> TryFrom<GenerateParameters<M>> for GenerateContentRequest
where
    M: Into<GenericTurn> + Clone,
{
    type Error = SibylError;

    /// Translate generation parameters into the wire request.
    ///
    /// History order is preserved exactly; the new user message becomes the
    /// single trailing `user` turn. Supplying an output schema switches the
    /// response into JSON mode, otherwise plain text is requested.
    fn try_from(value: GenerateParameters<M>) -> Result<Self, Self::Error> {
        let model = map_model(&value.model)
            .ok_or(SibylError::InvalidRequest(format!(
                "backend does not support selected model: {:?}",
                value.model
            )))?
            .into_owned();

        let mut config = GenerationConfig::new();
        config.temperature = value.temperature;
        config.response_mime_type = Some(match &value.output_schema {
            Some(_) => ResponseMimeType::Json,
            None => ResponseMimeType::Text,
        });
        if let Some(description) = &value.output_schema {
            config.response_schema = Some(Schema::try_from(description)?);
        }

        let mut turns: Vec<GenericTurn> = Vec::with_capacity(value.history.len() + 2);
        if !value.system_instruction.is_empty() {
            turns.push(GenericTurn::system(value.system_instruction));
        }
        turns.extend(value.history.into_iter().map(Into::into));
        turns.push(GenericTurn::user(value.message));

        Ok(Self::from_turns(model, turns, config))
    }
}

/// One transcript entry: a role plus its parts.
///
/// The role is absent on the system-instruction content, present on every
/// transcript entry.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ContentRole>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: String) -> Self {
        Self {
            role: Some(ContentRole::User),
            parts: vec![Part { text }],
        }
    }

    pub fn model(text: String) -> Self {
        Self {
            role: Some(ContentRole::Model),
            parts: vec![Part { text }],
        }
    }

    pub fn system(text: String) -> Self {
        Self {
            role: None,
            parts: vec![Part { text }],
        }
    }
}

/// Transcript roles the endpoint accepts. The model's own turns are tagged
/// `model`, not `assistant`.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentRole {
    User,
    Model,
}

/// A single text part. The endpoint's part union has many more arms (inline
/// data, function calls, …); text is the only one this backend speaks.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    pub text: String,
}

/// Generation settings, including the response-mode switch.
#[derive(Debug, Serialize, Clone, Default)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "responseMimeType")]
    pub response_mime_type: Option<ResponseMimeType>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "responseSchema")]
    pub response_schema: Option<Schema>,
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl_builder_methods!(
    GenerationConfig,
    temperature: f64,
    response_mime_type: ResponseMimeType,
    response_schema: Schema
);

/// The two response encodings the backend requests: JSON when a schema
/// constrains the reply, plain text otherwise.
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum ResponseMimeType {
    #[serde(rename = "application/json")]
    Json,
    #[serde(rename = "text/plain")]
    Text,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(rename = "modelVersion")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, when there is one.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Blocklist,
    ProhibitedContent,
    #[serde(other)]
    Other,
}

/// Feedback attached when the prompt itself was rejected.
#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sibyl_core::model::{GeminiModel, Model};

    fn params(message: &str) -> GenerateParameters<GenericTurn> {
        GenerateParameters::new(
            "You are an extraction engine.",
            message,
            Model::Gemini(GeminiModel::Gemini25Flash),
        )
    }

    #[test]
    fn history_order_is_preserved_and_user_turn_is_appended() {
        let history = vec![
            GenericTurn::user("What's the capital of France?"),
            GenericTurn::model("Paris."),
            GenericTurn::user("And of Italy?"),
            GenericTurn::model("Rome."),
        ];
        let request =
            GenerateContentRequest::try_from(params("And of Spain?").with_history(history))
                .unwrap();

        let body = serde_json::to_value(&request).unwrap();
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 5);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "Paris.");
        assert_eq!(contents[4]["role"], "user");
        assert_eq!(contents[4]["parts"][0]["text"], "And of Spain?");
    }

    #[test]
    fn system_instruction_is_separate_from_the_transcript() {
        let request = GenerateContentRequest::try_from(params("Hello")).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are an extraction engine."
        );
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn system_turns_from_fragments_are_hoisted() {
        let history = vec![GenericTurn::system("Answer in French.")];
        let request = GenerateContentRequest::try_from(params("Hello").with_history(history)).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        let instruction = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(instruction.contains("You are an extraction engine."));
        assert!(instruction.contains("Answer in French."));
        // Hoisted turns never appear in the transcript.
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["role"], "user");
    }

    #[test]
    fn supplying_a_schema_requests_json_mode() {
        let schema = json!({
            "type": "object",
            "properties": {"name": {"type": "string"}},
            "required": ["name"],
        });
        let request =
            GenerateContentRequest::try_from(params("My name is Alice").with_output_schema(schema))
                .unwrap();

        let body = serde_json::to_value(&request).unwrap();
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        assert_eq!(config["responseSchema"]["required"][0], "name");
    }

    #[test]
    fn without_a_schema_plain_text_is_requested() {
        let request = GenerateContentRequest::try_from(params("Hello").with_temperature(0.0)).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "text/plain");
        assert!(config.get("responseSchema").is_none());
        assert_eq!(config["temperature"], 0.0);
    }

    #[test]
    fn a_bad_schema_fails_translation_before_anything_else() {
        let request = GenerateContentRequest::try_from(
            params("Convert ten dollars").with_output_schema(json!({ "type": "currency" })),
        );
        let err = request.unwrap_err();
        assert!(err.to_string().contains("currency"));
    }

    #[test]
    fn the_model_name_stays_out_of_the_body() {
        let request = GenerateContentRequest::try_from(params("Hello")).unwrap();
        assert_eq!(request.model, "gemini-2.5-flash");

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("model").is_none());
    }

    #[test]
    fn response_text_concatenates_the_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hi "}, {"text": "there"}]},
                "finishReason": "STOP",
            }],
            "usageMetadata": {"promptTokenCount": 7, "candidatesTokenCount": 2, "totalTokenCount": 9},
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Hi there"));
        assert_eq!(
            response.candidates[0].finish_reason,
            Some(FinishReason::Stop)
        );
    }

    #[test]
    fn unknown_finish_reasons_deserialize_as_other() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "hm"}]},
                "finishReason": "SPII",
            }],
        }))
        .unwrap();
        assert_eq!(
            response.candidates[0].finish_reason,
            Some(FinishReason::Other)
        );
    }
}
