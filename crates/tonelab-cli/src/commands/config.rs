use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tonelab_core::filters::levels::PiecewiseParams;
use tonelab_core::pipeline::config::{PipelineConfig, TransformStep};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include a template of the parameterised tone steps
    #[arg(long)]
    pub full: bool,
}

/// Print or save a default PipelineConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let mut config = PipelineConfig::default();
    if args.full {
        config.steps = vec![
            TransformStep::LinearStretch {
                dst_min: 0,
                dst_max: 255,
            },
            TransformStep::Slide(0),
            TransformStep::Piecewise(PiecewiseParams::default()),
            TransformStep::ReduceResolution(100),
        ]
        .into_iter()
        .chain(config.steps)
        .collect();
    }
    let toml_str = toml::to_string_pretty(&config)?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &toml_str)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            println!("Default config saved to {}", path.display());
        }
        None => print!("{toml_str}"),
    }

    Ok(())
}
