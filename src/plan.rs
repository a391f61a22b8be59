use serde::Deserialize;

use crate::catalog;

pub const AI_PLAN_SIZE: usize = 3;

/// Strategy used when AI planning is switched on.
pub trait Planner: Send + Sync {
    fn propose(&self, modules: &[&'static str]) -> Vec<String>;
    fn name(&self) -> &str;
}

/// Takes the first `len` modules of the catalog. Stand-in until a real
/// planning step exists.
#[derive(Debug, Clone, Copy)]
pub struct PrefixPlanner {
    pub len: usize,
}

impl Default for PrefixPlanner {
    fn default() -> Self {
        Self { len: AI_PLAN_SIZE }
    }
}

impl Planner for PrefixPlanner {
    fn propose(&self, modules: &[&'static str]) -> Vec<String> {
        modules
            .iter()
            .take(self.len)
            .map(|m| m.to_string())
            .collect()
    }

    fn name(&self) -> &str {
        "prefix"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    Full,
    Ai { generate: bool },
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub ai_planning: bool,
    pub generate: bool,
}

impl From<PlanRequest> for PlanMode {
    fn from(req: PlanRequest) -> Self {
        if req.ai_planning {
            PlanMode::Ai {
                generate: req.generate,
            }
        } else {
            PlanMode::Full
        }
    }
}

pub fn select_plan(mode: PlanMode, previous: Vec<String>, planner: &dyn Planner) -> Vec<String> {
    match mode {
        PlanMode::Full => catalog::all_modules()
            .into_iter()
            .map(str::to_string)
            .collect(),
        PlanMode::Ai { generate: true } => {
            let plan = planner.propose(&catalog::all_modules());
            tracing::info!(
                planner = planner.name(),
                modules = plan.len(),
                "AI plan generated"
            );
            plan
        }
        PlanMode::Ai { generate: false } => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Vec<String> {
        catalog::all_modules()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_full_mode_ignores_previous() {
        let planner = PrefixPlanner::default();
        assert_eq!(select_plan(PlanMode::Full, vec![], &planner), full());
        assert_eq!(
            select_plan(PlanMode::Full, vec!["stale".to_string()], &planner),
            full()
        );
    }

    #[test]
    fn test_ai_generate_takes_prefix() {
        let plan = select_plan(
            PlanMode::Ai { generate: true },
            vec![],
            &PrefixPlanner::default(),
        );
        assert_eq!(plan, full()[..3].to_vec());
    }

    #[test]
    fn test_ai_without_trigger_keeps_previous() {
        let planner = PrefixPlanner::default();
        let previous = vec!["2.2 杜邦分析".to_string()];
        assert_eq!(
            select_plan(PlanMode::Ai { generate: false }, previous.clone(), &planner),
            previous
        );
        assert!(select_plan(PlanMode::Ai { generate: false }, vec![], &planner).is_empty());
    }

    #[test]
    fn test_plan_request_into_mode() {
        let req: PlanRequest = serde_json::from_str(r#"{"ai_planning": true}"#).unwrap();
        assert_eq!(PlanMode::from(req), PlanMode::Ai { generate: false });

        let req: PlanRequest = serde_json::from_str(r#"{"generate": true}"#).unwrap();
        assert_eq!(PlanMode::from(req), PlanMode::Full);
    }

    #[test]
    fn test_custom_planner_is_pluggable() {
        struct LastOne;
        impl Planner for LastOne {
            fn propose(&self, modules: &[&'static str]) -> Vec<String> {
                modules.last().map(|m| vec![m.to_string()]).unwrap_or_default()
            }
            fn name(&self) -> &str {
                "last"
            }
        }

        let plan = select_plan(PlanMode::Ai { generate: true }, vec![], &LastOne);
        assert_eq!(plan, vec!["7.6 基于调整后账面价值的估值".to_string()]);
    }
}
