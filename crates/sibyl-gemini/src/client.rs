use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1beta::{GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Minimal HTTP client for the *generateContent* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api_v1beta` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `GeminiClient` is cheap.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl GeminiClient {
    /// Convenience constructor building a default `reqwest` client:
    /// 30 s timeout, HTTP/2, Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Perform a single **non-streaming** generateContent round trip.
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        // The API key travels in the x-goog-api-key header, not the query
        // string.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|_| {
                GeminiError::Format("API key contains characters that cannot travel in a header".into())
            })?,
        );

        let url = self.request_url(&request.model);
        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    /// Endpoint address for `model`; the `models/` path segment is the API's
    /// model addressing convention.
    fn request_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_addresses_the_model_under_models() {
        let client = GeminiClient::new("k");
        assert_eq!(
            client.request_url("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn custom_base_urls_are_honoured() {
        let http = HttpClient::builder().build().unwrap();
        let client = GeminiClient::with_http("k", http, Some("http://localhost:4010".into()));
        assert_eq!(
            client.request_url("gemini-2.0-flash"),
            "http://localhost:4010/models/gemini-2.0-flash:generateContent"
        );
    }
}
