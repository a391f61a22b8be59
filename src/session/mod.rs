pub mod context;
pub mod files;
pub mod store;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pipeline::AnalysisReport;
use crate::plan::{self, PlanMode, Planner};

pub use context::{AnalysisAngle, ContextForm, ListingStatus, SessionContext};
pub use files::{FileSummary, UploadedFileSet, load_sample_files};
pub use store::SessionStore;

/// Everything one user works on between session start and end.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub context: SessionContext,
    pub files: UploadedFileSet,
    pub ai_planning: bool,
    pub plan: Vec<String>,
    pub report: Option<AnalysisReport>,
}

impl Session {
    pub fn new(id: Uuid, planner: &dyn Planner) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            context: SessionContext::default(),
            files: UploadedFileSet::new(),
            ai_planning: false,
            plan: plan::select_plan(PlanMode::Full, Vec::new(), planner),
            report: None,
        }
    }

    pub fn apply_plan_mode(&mut self, mode: PlanMode, planner: &dyn Planner) {
        self.ai_planning = matches!(mode, PlanMode::Ai { .. });
        let previous = std::mem::take(&mut self.plan);
        self.plan = plan::select_plan(mode, previous, planner);
    }

    /// Plan for the next run. Without AI planning this is always the full
    /// catalog.
    pub fn effective_plan(&mut self, planner: &dyn Planner) -> Vec<String> {
        if !self.ai_planning {
            self.apply_plan_mode(PlanMode::Full, planner);
        }
        self.plan.clone()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            created_at: self.created_at,
            context: self.context.clone(),
            files: self.files.summaries(),
            ai_planning: self.ai_planning,
            plan: self.plan.clone(),
            report: self.report.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub context: SessionContext,
    pub files: Vec<FileSummary>,
    pub ai_planning: bool,
    pub plan: Vec<String>,
    pub report: Option<AnalysisReport>,
}
