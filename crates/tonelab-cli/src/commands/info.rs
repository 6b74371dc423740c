use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tonelab_core::histogram::compute_histogram;

use super::{load, LoadModeArg};
use crate::summary::print_channel_table;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Channel conversion on load
    #[arg(long, value_enum, default_value = "auto")]
    pub mode: LoadModeArg,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let buffer = load(&args.file, args.mode.into())?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", buffer.width(), buffer.height());
    println!("Channels:    {}", buffer.channel_count());
    println!();

    let histograms: Vec<_> = buffer.planes().iter().map(compute_histogram).collect();
    print_channel_table(&histograms);

    Ok(())
}
