use super::{GenerateRequest, GenerateResponse, Provider};

const PREVIEW_CHARS: usize = 60;

/// Placeholder backend: echoes the start of the prompt instead of analysing
/// anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn render(prompt: &str) -> String {
        let preview: String = prompt.chars().take(PREVIEW_CHARS).collect();
        format!("模拟分析: {preview}...")
    }
}

#[async_trait::async_trait]
impl Provider for MockProvider {
    async fn generate(&self, req: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let content = Self::render(&req.prompt);

        // character counts stand in for token usage
        Ok(GenerateResponse {
            input_tokens: req.prompt.chars().count() as u32,
            output_tokens: content.chars().count() as u32,
            content,
            model: req.model.clone(),
            finish_reason: "stop".to_string(),
            provider: String::new(),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
