use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNote {
    pub module: String,
    pub content: String,
}

impl ModuleNote {
    pub fn render(&self) -> String {
        format!("### {}\n{}", self.module, self.content)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub document: String,
    pub modules_analyzed: usize,
    pub total_tokens: u32,
    pub generation_duration_ms: u64,
    pub generated_at: DateTime<Utc>,
    pub trace_id: Option<String>,
}

pub struct FormatParams<'a> {
    pub notes: &'a [ModuleNote],
    pub total_tokens: u32,
    pub duration: Duration,
    pub trace_id: Option<String>,
}

/// Blocks are joined with a single newline, in plan order.
pub fn render_document(notes: &[ModuleNote]) -> String {
    notes
        .iter()
        .map(ModuleNote::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[tracing::instrument(
    name = "pipeline_stage format",
    skip(params),
    fields(pipeline.stage = "format", report.blocks = params.notes.len())
)]
pub fn format_report(params: FormatParams<'_>) -> AnalysisReport {
    AnalysisReport {
        document: render_document(params.notes),
        modules_analyzed: params.notes.len(),
        total_tokens: params.total_tokens,
        generation_duration_ms: params.duration.as_millis() as u64,
        generated_at: Utc::now(),
        trace_id: params.trace_id,
    }
}
