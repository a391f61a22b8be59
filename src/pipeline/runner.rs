use std::time::Instant;

use crate::error::{AppError, current_trace_id};
use crate::llm::LlmClient;
use crate::prompt::build_prompt;
use crate::session::SessionContext;
use crate::telemetry::metrics::{ANALYSIS_MODULES, ANALYSIS_RUN_DURATION};

use super::format::{self, AnalysisReport, FormatParams, ModuleNote};

/// Runs every planned module through the backend, one at a time, in plan
/// order. The first backend failure aborts the run; nothing produced before
/// it is returned.
#[tracing::instrument(
    name = "pipeline analysis",
    skip(llm_client, plan, context),
    fields(
        analysis.plan_size = plan.len(),
        analysis.total_tokens,
        analysis.duration_ms,
    )
)]
pub async fn run_analysis(
    llm_client: &LlmClient,
    plan: &[String],
    context: &SessionContext,
) -> Result<AnalysisReport, AppError> {
    let start = Instant::now();
    let mut notes = Vec::with_capacity(plan.len());
    let mut total_tokens = 0u32;

    for (index, module) in plan.iter().enumerate() {
        let prompt = build_prompt(module, context);
        let req = llm_client.request(module, prompt);

        let resp = llm_client.generate(&req).await.map_err(|e| {
            tracing::warn!(
                module = %module,
                position = index + 1,
                plan_size = plan.len(),
                error = %e,
                "Module generation failed, aborting analysis"
            );
            AppError::Llm(format!("module {module}: {e}"))
        })?;

        total_tokens = total_tokens.saturating_add(resp.input_tokens + resp.output_tokens);
        notes.push(ModuleNote {
            module: module.clone(),
            content: resp.content,
        });
    }

    let duration = start.elapsed();
    let report = format::format_report(FormatParams {
        notes: &notes,
        total_tokens,
        duration,
        trace_id: current_trace_id(),
    });

    ANALYSIS_RUN_DURATION.record(duration.as_secs_f64(), &[]);
    ANALYSIS_MODULES.record(report.modules_analyzed as f64, &[]);

    let span = tracing::Span::current();
    span.record("analysis.total_tokens", report.total_tokens);
    span.record("analysis.duration_ms", report.generation_duration_ms);

    Ok(report)
}
