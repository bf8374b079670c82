mod adapter;
mod model_map;
mod provider_impl_generate;
mod provider_impl_prompt;

pub use adapter::{API_KEY_ENV, GeminiAdapter, GeminiAdapterBuilder};
pub mod api_v1beta;
mod client;
pub mod error;
