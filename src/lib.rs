pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod plan;
pub mod prompt;
pub mod routes;
pub mod session;
pub mod telemetry;

use std::sync::Arc;

pub use config::Config;

use plan::Planner;
use session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub llm_client: Arc<llm::LlmClient>,
    pub planner: Arc<dyn Planner>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn llm::Provider>) -> Self {
        let llm_client = Arc::new(llm::LlmClient::new(provider, &config));
        Self {
            config,
            sessions: SessionStore::new(),
            llm_client,
            planner: Arc::new(plan::PrefixPlanner::default()),
        }
    }
}
