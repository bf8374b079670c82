//! Generic turn and role types used by the *sibyl-core* crate.
//!
//! They deliberately mirror the conversation model exposed by the Gemini
//! family of APIs: a transcript alternates between a "user" and the "model",
//! while system-level guidance lives outside the transcript. By staying
//! minimal and provider-agnostic we can:
//!
//! * convert them into provider-specific structs via a simple `From`/`Into`,
//! * serialize them without pulling in heavyweight dependencies, and
//! * use them in unit tests without mocking a full transport layer.
//!
//! ## When to add more fields?
//!
//! Only if the additional data is **required by multiple back-ends** or
//! **fundamentally provider-independent**. Otherwise extend the
//! provider-specific turn type instead of bloating this one.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lightweight container representing a single conversation turn that is
/// independent of any specific LLM provider.
///
/// * `text` – the raw UTF-8 content. Markdown is fine, but keep newlines and
///   indentation portable.
/// * `role` – see [`GenericRole`] for permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericTurn {
    pub role: GenericRole,
    pub text: String,
}

impl GenericTurn {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then content).
    ///
    /// ```rust
    /// use sibyl_core::generic::{GenericRole, GenericTurn};
    ///
    /// let turn = GenericTurn::new("My name is Alice.".into(), GenericRole::User);
    /// assert_eq!(turn.role, GenericRole::User);
    /// ```
    pub fn new(text: String, role: GenericRole) -> Self {
        Self { role, text }
    }

    /// Shorthand for a turn spoken by the human user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), GenericRole::User)
    }

    /// Shorthand for a turn produced by the model.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(text.into(), GenericRole::Model)
    }

    /// Shorthand for system-level guidance contributed by a prompt fragment.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(text.into(), GenericRole::System)
    }
}

/// Conversation roles recognised by the generation back-ends.
///
/// The transcript itself only ever carries [`User`](GenericRole::User) and
/// [`Model`](GenericRole::Model) turns. [`System`](GenericRole::System)
/// exists so prompt fragments can contribute behavioural guidance; back-ends
/// hoist such turns into their dedicated system-instruction slot during
/// request translation rather than sending them as part of the transcript.
///
/// The `Display` implementation renders the canonical lowercase name so you
/// can feed it directly into JSON without extra mapping logic.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Behavioural guidance; never part of the outbound transcript.
    System,
    /// Messages originating from the human user.
    User,
    /// Messages produced by the model.
    Model,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::User => write!(f, "user"),
            GenericRole::Model => write!(f, "model"),
        }
    }
}

/// What the model produced, in the shape the caller asked for.
///
/// Structured mode (an output schema was supplied) yields [`Json`]; free-form
/// mode yields [`Text`]. Use [`into_value`](Self::into_value) when you need a
/// uniform JSON representation of either case.
///
/// [`Json`]: GenerationOutput::Json
/// [`Text`]: GenerationOutput::Text
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutput {
    /// Free-form reply text.
    Text(String),
    /// Parsed JSON reply conforming to the requested schema.
    Json(serde_json::Value),
}

impl GenerationOutput {
    /// The reply as a single JSON-compatible value: the parsed object for
    /// structured mode, `{"text": …}` for free-form mode.
    ///
    /// ```rust
    /// use sibyl_core::generic::GenerationOutput;
    ///
    /// let out = GenerationOutput::Text("Hi there".into());
    /// assert_eq!(out.into_value(), serde_json::json!({"text": "Hi there"}));
    /// ```
    pub fn into_value(self) -> serde_json::Value {
        match self {
            GenerationOutput::Json(value) => value,
            GenerationOutput::Text(text) => serde_json::json!({ "text": text }),
        }
    }

    /// The free-form text, if this is a free-form reply.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GenerationOutput::Text(text) => Some(text),
            GenerationOutput::Json(_) => None,
        }
    }

    /// The parsed JSON value, if this is a structured reply.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            GenerationOutput::Json(value) => Some(value),
            GenerationOutput::Text(_) => None,
        }
    }
}

/// Reply envelope returned by every generation call.
///
/// `T` is [`GenerationOutput`] for the untyped [`GenerationProvider`] path
/// and the prompt's `Output` type for the typed
/// [`PromptExecutionProvider`] path.
///
/// [`GenerationProvider`]: crate::provider::GenerationProvider
/// [`PromptExecutionProvider`]: crate::provider::PromptExecutionProvider
#[derive(Debug)]
pub struct GenericGenerationResponse<T> {
    pub output: T,
    pub usage: Option<GenericUsageReport>,
}

/// Token accounting as reported by the provider, when available.
#[derive(Debug, Clone)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_form_output_wraps_text_under_a_single_key() {
        let value = GenerationOutput::Text("Hi there".into()).into_value();
        assert_eq!(value, serde_json::json!({"text": "Hi there"}));
    }

    #[test]
    fn structured_output_passes_the_parsed_value_through() {
        let parsed = serde_json::json!({"name": "Alice"});
        let value = GenerationOutput::Json(parsed.clone()).into_value();
        assert_eq!(value, parsed);
    }

    #[test]
    fn roles_render_their_canonical_wire_names() {
        assert_eq!(GenericRole::User.to_string(), "user");
        assert_eq!(GenericRole::Model.to_string(), "model");
        assert_eq!(GenericRole::System.to_string(), "system");
    }
}
