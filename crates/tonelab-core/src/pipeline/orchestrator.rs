use std::sync::Arc;

use tracing::info;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::io::image_io::{load_buffer, save_buffer};

use super::config::{PipelineConfig, TransformStep};
use super::helpers::apply_step;
use super::types::{NoOpReporter, PipelineStage, ProgressReporter};

/// Apply `steps` in order to an in-memory buffer.
pub fn apply_steps(
    buffer: &PixelBuffer,
    steps: &[TransformStep],
    reference: Option<&PixelBuffer>,
    reporter: &dyn ProgressReporter,
) -> Result<PixelBuffer> {
    reporter.begin_stage(PipelineStage::Transforming, Some(steps.len()));
    let mut current = buffer.clone();
    for (i, step) in steps.iter().enumerate() {
        current = apply_step(&current, step, reference)?;
        info!(step = %step, index = i, "Transform applied");
        reporter.advance(i + 1);
    }
    reporter.finish_stage();
    Ok(current)
}

/// Run the full pipeline with a thread-safe progress reporter: load the input
/// (and reference, if configured), apply every step, save the result.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PixelBuffer> {
    let image_count = 1 + usize::from(config.reference.is_some());
    reporter.begin_stage(PipelineStage::Reading, Some(image_count));
    let input = load_buffer(&config.input, config.color_load)?;
    info!(
        input = %config.input.display(),
        width = input.width(),
        height = input.height(),
        channels = input.channel_count(),
        "Input loaded"
    );
    reporter.advance(1);

    let reference = match &config.reference {
        Some(path) => {
            let reference = load_buffer(path, config.color_load)?;
            info!(reference = %path.display(), "Reference loaded");
            reporter.advance(2);
            Some(reference)
        }
        None => None,
    };
    reporter.finish_stage();

    let result = apply_steps(&input, &config.steps, reference.as_ref(), reporter.as_ref())?;

    reporter.begin_stage(PipelineStage::Writing, None);
    save_buffer(&result, &config.output)?;
    info!(output = %config.output.display(), "Output saved");
    reporter.finish_stage();

    Ok(result)
}

/// Run the full pipeline without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PixelBuffer> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
