use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tonelab_core::resample::reduce_resolution;

use super::{load, save, LoadModeArg};

#[derive(Args)]
pub struct ReduceArgs {
    /// Input image file
    pub file: PathBuf,

    /// Intermediate size as a percentage of the original (1-100)
    #[arg(long, default_value = "25")]
    pub percent: u32,

    /// Channel conversion on load
    #[arg(long, value_enum, default_value = "auto")]
    pub mode: LoadModeArg,

    /// Output file path
    #[arg(short, long, default_value = "reduced.png")]
    pub output: PathBuf,
}

pub fn run(args: &ReduceArgs) -> Result<()> {
    let buffer = load(&args.file, args.mode.into())?;
    println!("Reducing resolution to {}%", args.percent);
    let result = reduce_resolution(&buffer, args.percent)?;
    save(&result, &args.output)
}
