//! Abstractions that tie a **prompt** to a concrete **model** and a **typed
//! response**.
//!
//! The *sibyl* framework purposely keeps the public surface small. A
//! developer usually needs only two traits to go from "some string fragments"
//! to "ready-to-send payload":
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of conversation turns.
//! 2. [`PromptTemplate`] – adds metadata such as the target model and the
//!    expected JSON response schema.
//!
//! Backend crates (e.g. `sibyl-gemini`) accept *any* `P` that implements
//! **both** traits. Thanks to Rust's type system the compiler guarantees at
//! compile time that
//!
//! * the turn type produced by the prompt matches what the back-end expects,
//! * the JSON returned by the provider can be deserialised into `P::Output`.
//!
//! ```rust
//! use sibyl_core::template::{IntoPrompt, PromptTemplate};
//! use sibyl_core::generic::{GenericRole, GenericTurn};
//! use sibyl_core::model::{GeminiModel, Model};
//! use schemars::JsonSchema;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, JsonSchema)]
//! #[serde(deny_unknown_fields)]
//! struct Contact { name: String }
//!
//! struct ExtractContact(String);
//!
//! impl IntoPrompt for ExtractContact {
//!     type Message = GenericTurn;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericTurn::new(self.0, GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for ExtractContact {
//!     type Output = Contact;
//!     const MODEL: Model = Model::Gemini(GeminiModel::Gemini25Flash);
//! }
//! ```
use std::any::Any;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::model::Model;

/// High-level description of a prompt.
///
/// Implement this trait **in addition** to [`IntoPrompt`] to specify:
///
/// * `Output` – the strongly-typed Rust struct you expect from the LLM.
/// * `MODEL`  – the identifier of the model that should handle the request.
///
/// The blanket constraints on `Output` (`JsonSchema + Deserialize + Any`)
/// enable the backend to automatically derive a response schema and to
/// down-cast the erased type if necessary.
pub trait PromptTemplate: IntoPrompt {
    /// Type produced by the LLM and returned to the caller.
    type Output: JsonSchema + for<'de> Deserialize<'de> + Any;

    /// Logical model identifier. The back-end will map this to its own
    /// naming scheme (`"gemini-2.5-flash"`, …).
    const MODEL: Model;
}

/// Converts a value into a series of conversation turns.
///
/// Backend crates typically use [`crate::generic::GenericTurn`], but a
/// back-end can require its own richer struct. By making the `Message` type
/// an **associated type** we keep the trait flexible without resorting to
/// dynamic dispatch.
pub trait IntoPrompt {
    /// Turn representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** turns in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// Convenience implementation so a single [`crate::generic::GenericTurn`]
/// can be passed directly to the client without wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericTurn {
    type Message = crate::generic::GenericTurn;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
