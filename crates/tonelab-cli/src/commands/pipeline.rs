use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tonelab_core::pipeline::config::PipelineConfig;
use tonelab_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};

use crate::summary::print_pipeline_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Pipeline config file (TOML)
    pub config: PathBuf,

    /// Override the input image from the config
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Override the output path from the config
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Drives an indicatif bar from pipeline stage events.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_length(total_items.unwrap_or(1) as u64);
        self.bar.set_position(0);
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let mut config: PipelineConfig =
        toml::from_str(&contents).context("Invalid pipeline config")?;

    if let Some(ref input) = args.input {
        config.input = input.clone();
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }

    print_pipeline_summary(&config);

    let bar = ProgressBar::new(1);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { bar: bar.clone() });

    run_pipeline_reported(&config, reporter)
        .with_context(|| format!("Pipeline failed for {}", config.input.display()))?;

    bar.finish_with_message("Done");
    println!("\nOutput saved to {}", config.output.display());

    Ok(())
}
