use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The one-key object shape free-form replies take when viewed as JSON
/// (see `GenerationOutput::into_value` in `sibyl-core`).
///
/// Also usable as a `PromptTemplate::Output` when you want the typed
/// execution path but the answer is just prose:
///
/// ```rust
/// use sibyl_types::outputs::PlainText;
///
/// let reply: PlainText = serde_json::from_value(
///     serde_json::json!({"text": "Hi there"}),
/// ).unwrap();
/// assert_eq!(reply.text, "Hi there");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PlainText {
    /// The model's reply, verbatim.
    pub text: String,
}
