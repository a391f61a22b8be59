pub mod format;
pub mod runner;

pub use format::AnalysisReport;
pub use runner::run_analysis;
