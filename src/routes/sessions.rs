use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppResult;
use crate::pipeline::run_analysis;
use crate::plan::{PlanMode, PlanRequest};
use crate::session::{ContextForm, SessionContext, SessionView};

pub async fn create_session(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<SessionView>)> {
    let handle = state.sessions.create(state.planner.as_ref()).await;
    let view = handle.lock().await.view();

    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionView>> {
    let handle = state.sessions.get(id).await?;
    let view = handle.lock().await.view();

    Ok(Json(view))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.sessions.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_context(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ContextForm>, JsonRejection>,
) -> AppResult<Json<SessionView>> {
    let Json(form) = payload?;
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.context = SessionContext::collect(form);

    Ok(Json(session.view()))
}

pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> AppResult<Json<SessionView>> {
    let Json(req) = payload?;
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.apply_plan_mode(PlanMode::from(req), state.planner.as_ref());

    Ok(Json(session.view()))
}

#[tracing::instrument(name = "session.analyze", skip(state), fields(session.id = %id))]
pub async fn start_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionView>> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;

    let plan = session.effective_plan(state.planner.as_ref());
    let report = run_analysis(&state.llm_client, &plan, &session.context).await?;

    tracing::info!(
        modules = report.modules_analyzed,
        duration_ms = report.generation_duration_ms,
        "Analysis complete"
    );
    session.report = Some(report);

    Ok(Json(session.view()))
}
