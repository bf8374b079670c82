//! Model identifiers used throughout the **sibyl** workspace.
//!
//! The enum hierarchy keeps the *public* API blissfully simple while allowing
//! each backend crate to map the variants onto its own naming scheme. As a
//! consequence you never have to type literal strings such as
//! `"gemini-2.5-flash"` in your application code—pick an enum variant instead
//! and let the adapter translate it.
//!
//! # Adding more models
//!
//! 1. **Provider-specific enum**
//!    Add the variant to the sub-enum (`GeminiModel`, …).
//! 2. **Mapping layer**
//!    Update the mapping function in the backend crate
//!    (`sibyl-gemini::model_map::map_model`, etc.).
//! 3. **Compile-time safety**
//!    The compiler will tell you if you forgot to handle the new variant in
//!    `From<T> for Model` or in backend match statements.
//!
//! # Example
//!
//! ```rust
//! use sibyl_core::model::{GeminiModel, Model};
//! assert_eq!(Model::from(GeminiModel::Gemini25Flash),
//!            Model::Gemini(GeminiModel::Gemini25Flash));
//! ```

/// Universal identifier for an LLM model.
///
/// * `Gemini` – Enumerated list of officially supported Gemini models.
/// * `Custom` – Any provider / model name not yet covered by a dedicated enum. Use this if you run a beta or preview model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Gemini models (generateContent API).
    Gemini(GeminiModel),
    /// Literal model name passed through to the backend unchanged.
    Custom(&'static str),
}

/// Exhaustive list of models **officially** supported by the Gemini back-end.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary model names through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    Gemini25Pro,
    Gemini25Flash,
    Gemini25FlashLite,
    Gemini20Flash,
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}
