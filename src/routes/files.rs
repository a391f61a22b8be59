use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use opentelemetry::KeyValue;
use uuid::Uuid;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::session::{SessionView, load_sample_files};
use crate::telemetry::metrics::FILES_UPLOADED;

/// Every multipart part carrying a file name is stored; other parts are
/// ignored.
#[tracing::instrument(name = "files.upload", skip(state, multipart), fields(session.id = %id))]
pub async fn upload_files(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> AppResult<Json<SessionView>> {
    let handle = state.sessions.get(id).await?;

    let mut uploads = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read {name}: {e}")))?;
        uploads.push((name, content));
    }

    FILES_UPLOADED.add(uploads.len() as u64, &[KeyValue::new("files.source", "upload")]);
    tracing::info!(count = uploads.len(), "Files uploaded");

    let mut session = handle.lock().await;
    session.files = std::mem::take(&mut session.files).add_files(uploads);

    Ok(Json(session.view()))
}

#[tracing::instrument(name = "files.load_sample", skip(state), fields(session.id = %id))]
pub async fn load_samples(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionView>> {
    let handle = state.sessions.get(id).await?;
    let samples = load_sample_files(&state.config.sample_files_dir).await?;

    FILES_UPLOADED.add(samples.len() as u64, &[KeyValue::new("files.source", "sample")]);

    let mut session = handle.lock().await;
    session.files = std::mem::take(&mut session.files).add_files(samples);

    Ok(Json(session.view()))
}
