//! # `sibyl` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate             | What it provides                                                               |
//! |-------------------|--------------------------------------------------------------------------------|
//! | **`sibyl-core`**  | Provider-agnostic traits, generic client, errors, schema derivation            |
//! | **`sibyl-prompt`**| Ergonomic helpers for building and chaining prompt fragments                   |
//! | **`sibyl-types`** | Reusable fragments and typed outputs (`StaticFragment`, `PlainText`, …)        |
//! | **`sibyl-gemini`**| HTTP client implementing the provider traits for the Gemini v1beta API *(optional)* |
//!
//! By default the crate re-exports everything including the Gemini backend;
//! disable default features to stay 100 % provider-agnostic:
//!
//! ```toml
//! [dependencies]
//! sibyl = { version = "0.1", default-features = false }
//! ```
//!
//! ## Design philosophy
//!
//! * **Opt-in providers** – Enabling `gemini` pulls in `reqwest`, TLS, etc.,
//!   otherwise your binary stays lean.
//! * **No procedural macros** – Everything is powered by ordinary traits and
//!   `impl`s so you can understand and extend the code without magic.
//! * **Type-safe JSON** – Response schemas are derived with
//!   [`schemars`](https://docs.rs/schemars) and enforced server-side through
//!   the API's JSON mode.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use sibyl::{
//!     SibylClient,
//!     generic::GenericTurn,
//!     model::{GeminiModel, Model},
//!     provider::{GenerateParameters, GenerationProvider as _},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = sibyl::gemini::GeminiAdapterBuilder::new_from_env().build()?;
//!     let client = SibylClient::new(backend);
//!
//!     let params: GenerateParameters<GenericTurn> = GenerateParameters::new(
//!         "You are an extraction engine.",
//!         "My name is Alice",
//!         Model::Gemini(GeminiModel::Gemini25Flash),
//!     )
//!     .with_output_schema(serde_json::json!({
//!         "type": "object",
//!         "properties": {"name": {"type": "string"}},
//!         "required": ["name"],
//!     }));
//!
//!     let reply = client.generate(params).await?;
//!     println!("{}", reply.output.into_value());
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/sibyl/latest")]

pub use sibyl_core::*;
pub use sibyl_prompt as prompt;
pub use sibyl_types as types;

#[cfg(feature = "gemini")]
pub use sibyl_gemini as gemini;
