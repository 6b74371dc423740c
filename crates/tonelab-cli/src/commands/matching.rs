use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tonelab_core::pipeline::apply_step;
use tonelab_core::pipeline::config::TransformStep;
use tonelab_core::specification::specification_map;

use super::{load, save, LoadModeArg};

#[derive(Args)]
pub struct MatchArgs {
    /// Image to transform
    pub source: PathBuf,

    /// Image whose histogram should be matched
    pub target: PathBuf,

    /// Print the 256-entry level mapping (first channel)
    #[arg(long)]
    pub print_map: bool,

    /// Channel conversion on load
    #[arg(long, value_enum, default_value = "gray")]
    pub mode: LoadModeArg,

    /// Output file path
    #[arg(short, long, default_value = "matched.png")]
    pub output: PathBuf,
}

pub fn run(args: &MatchArgs) -> Result<()> {
    let source = load(&args.source, args.mode.into())?;
    let target = load(&args.target, args.mode.into())?;

    if args.print_map {
        let lut = specification_map(&source.planes()[0], &target.planes()[0]);
        for (level, out) in lut.table().iter().enumerate() {
            println!("{level:>3} -> {out:>3}");
        }
    }

    println!("Matching histogram of {}", args.target.display());
    let result = apply_step(&source, &TransformStep::MatchHistogram, Some(&target))?;
    save(&result, &args.output)
}
