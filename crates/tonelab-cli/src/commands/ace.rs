use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tonelab_core::ace::AceParams;
use tonelab_core::consts::{DEFAULT_ACE_K1, DEFAULT_ACE_K2, DEFAULT_ACE_WINDOW};
use tonelab_core::pipeline::apply_step;
use tonelab_core::pipeline::config::TransformStep;

use super::{load, save, LoadModeArg};

#[derive(Args)]
pub struct AceArgs {
    /// Input image file
    pub file: PathBuf,

    /// Global gain (>= 0)
    #[arg(long, default_value_t = DEFAULT_ACE_K1)]
    pub k1: f64,

    /// Local mean blend factor in [0, 1]
    #[arg(long, default_value_t = DEFAULT_ACE_K2)]
    pub k2: f64,

    /// Neighbourhood side length (odd)
    #[arg(long, default_value_t = DEFAULT_ACE_WINDOW)]
    pub window: usize,

    /// Channel conversion on load
    #[arg(long, value_enum, default_value = "gray")]
    pub mode: LoadModeArg,

    /// Output file path
    #[arg(short, long, default_value = "ace.png")]
    pub output: PathBuf,
}

pub fn run(args: &AceArgs) -> Result<()> {
    let buffer = load(&args.file, args.mode.into())?;
    let params = AceParams {
        k1: args.k1,
        k2: args.k2,
        window_size: args.window,
    };
    params.validate()?;

    println!(
        "Applying ACE: k1={}, k2={}, window={}",
        params.k1, params.k2, params.window_size
    );
    let result = apply_step(&buffer, &TransformStep::Ace(params), None)?;
    save(&result, &args.output)
}
