use std::{env, sync::Arc};

use sibyl_core::error::{Result, SibylError};

use crate::client::GeminiClient;

/// Environment variable consulted when no explicit API key is supplied.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Thin wrapper that wires the HTTP client [`GeminiClient`] into a value that
/// implements the `sibyl-core` provider traits.
///
/// Think of it as the **service locator** for the Gemini back-end:
///
/// * stores the API key (and optionally a custom base URL),
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`GeminiAdapterBuilder`] so callers don't have to
///   juggle `Option<String>` manually.
///
/// The type itself purposefully exposes **no additional methods**—all user-
/// facing functionality sits on the generic [`sibyl_core::SibylClient`] once
/// the adapter is plugged in.
#[derive(Debug)]
pub struct GeminiAdapter {
    pub(crate) client: Arc<GeminiClient>,
}

/// Builder for [`GeminiAdapter`].
///
/// Credential precedence is **explicit key over environment**: a key set via
/// [`with_api_key`](Self::with_api_key) wins over whatever
/// [`new_from_env`](Self::new_from_env) picked up, and an empty value counts
/// as absent either way.
///
/// # Typical usage
///
/// ```rust,no_run
/// use sibyl_gemini::GeminiAdapterBuilder;
///
/// let backend = GeminiAdapterBuilder::new_from_env()
///     .build()
///     .expect("GEMINI_API_KEY must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, project ID, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct GeminiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl GeminiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `GEMINI_API_KEY`
    /// environment variable.
    ///
    /// # Panics
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            base_url: None,
        }
    }

    /// Supply the API key explicitly, overriding any value read from the
    /// environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a non-default endpoint (e.g. a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`SibylError::Configuration`] – if no non-empty API key was found.
    ///   Raised here, before any HTTP machinery exists and before any
    ///   network activity.
    pub fn build(self) -> Result<GeminiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                SibylError::Configuration(format!(
                    "an API key must be supplied explicitly or via the `{API_KEY_ENV}` environment variable"
                ))
            })?;

        let client = match self.base_url {
            Some(base_url) => GeminiClient::with_http(
                api_key,
                reqwest::Client::builder()
                    .timeout(std::time::Duration::from_secs(30))
                    .build()
                    .expect("building reqwest client"),
                Some(base_url),
            ),
            None => GeminiClient::new(api_key),
        };

        Ok(GeminiAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_explicit_key_builds_an_adapter() {
        let adapter = GeminiAdapterBuilder::new().with_api_key("test-key").build();
        assert!(adapter.is_ok());
    }

    #[test]
    fn a_missing_key_is_a_configuration_error() {
        let err = GeminiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, SibylError::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn an_empty_key_counts_as_absent() {
        let err = GeminiAdapterBuilder::new().with_api_key("").build().unwrap_err();
        assert!(matches!(err, SibylError::Configuration(_)));
    }

    #[test]
    fn an_explicit_key_overrides_the_environment() {
        // new_from_env may or may not have found a key; the explicit one
        // must win either way.
        let adapter = GeminiAdapterBuilder::new_from_env()
            .with_api_key("explicit-key")
            .build();
        assert!(adapter.is_ok());
    }
}
