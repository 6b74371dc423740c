/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Transforming,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading images"),
            Self::Transforming => write!(f, "Applying transforms"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Receives stage and step events while a pipeline runs.
///
/// Shared across threads, so implementations must be `Send + Sync`. Every
/// method defaults to doing nothing.
pub trait ProgressReporter: Send + Sync {
    /// `stage` has started; `total_items` is its unit count when known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` units of the current stage are complete.
    fn advance(&self, _items_done: usize) {}

    fn finish_stage(&self) {}
}

/// Reporter that ignores all events.
pub struct NoOpReporter;

impl ProgressReporter for NoOpReporter {}
