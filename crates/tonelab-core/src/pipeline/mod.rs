pub mod config;
mod helpers;
mod orchestrator;
mod types;

pub use helpers::apply_step;
pub use orchestrator::{apply_steps, run_pipeline, run_pipeline_reported};
pub use types::{NoOpReporter, PipelineStage, ProgressReporter};
