pub mod client;
pub mod mock;

use std::sync::Arc;

pub use client::LlmClient;
pub use mock::MockProvider;

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub module: String,
}

#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub content: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub finish_reason: String,
    pub provider: String,
}

/// Text-generation backend. Implementations are interchangeable behind
/// `LlmClient`.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, req: &GenerateRequest) -> anyhow::Result<GenerateResponse>;
    fn name(&self) -> &str;
}

pub fn build_provider(name: &str) -> anyhow::Result<Arc<dyn Provider>> {
    match name {
        "mock" => Ok(Arc::new(MockProvider)),
        other => Err(anyhow::anyhow!(
            "unsupported LLM provider {other:?}, only \"mock\" is available"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_provider_mock() {
        let provider = build_provider("mock").unwrap();
        assert_eq!(provider.name(), "mock");
    }

    #[test]
    fn test_build_provider_unknown() {
        let err = build_provider("openai").err().unwrap();
        assert!(err.to_string().contains("unsupported LLM provider"));
    }
}
