use serde::Deserialize;
use sibyl_core::generic::GenericUsageReport;

#[macro_export]
macro_rules! impl_builder_methods {
    ($builder:ident, $($field:ident: $field_type:ty),*) => {
        impl $builder {
            $(
                pub fn $field(mut self, $field: $field_type) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }
    };
}

/// Token accounting attached to a generateContent reply.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    pub prompt_token_count: Option<i32>,
    #[serde(rename = "candidatesTokenCount")]
    pub candidates_token_count: Option<i32>,
    #[serde(rename = "totalTokenCount")]
    pub total_token_count: Option<i32>,
}

impl From<UsageMetadata> for GenericUsageReport {
    fn from(value: UsageMetadata) -> Self {
        let prompt_tokens = value.prompt_token_count.unwrap_or(0) as i64;
        let completion_tokens = value.candidates_token_count.unwrap_or(0) as i64;
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: value
                .total_token_count
                .map(|total| total as i64)
                .unwrap_or(prompt_tokens + completion_tokens),
        }
    }
}
