use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tonelab_core::histogram::{compute_cdf, compute_histogram, Histogram};

use super::{load, LoadModeArg};
use crate::summary::print_histogram_comparison;

#[derive(Args)]
pub struct HistogramArgs {
    /// Input image file
    pub file: PathBuf,

    /// Channel index (0 for gray; 0/1/2 for R/G/B)
    #[arg(long, default_value = "0")]
    pub channel: usize,

    /// Channel conversion on load
    #[arg(long, value_enum, default_value = "auto")]
    pub mode: LoadModeArg,

    /// Second image to compare statistics against (e.g. a processed result)
    #[arg(long)]
    pub compare: Option<PathBuf>,

    /// Write the table as CSV instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &HistogramArgs) -> Result<()> {
    let hist = channel_histogram(&args.file, args)?;

    if let Some(ref other) = args.compare {
        let other_hist = channel_histogram(other, args)?;
        print_histogram_comparison(&hist, &other_hist);
        return Ok(());
    }

    let table = histogram_csv(&hist);
    if let Some(ref path) = args.output {
        std::fs::write(path, &table)
            .with_context(|| format!("Failed to write histogram to {}", path.display()))?;
        println!("Histogram saved to {}", path.display());
    } else {
        print!("{table}");
    }

    Ok(())
}

fn channel_histogram(path: &std::path::Path, args: &HistogramArgs) -> Result<Histogram> {
    let buffer = load(path, args.mode.into())?;
    let channel = buffer.channel(args.channel).with_context(|| {
        format!(
            "Channel {} out of range ({} channel(s))",
            args.channel,
            buffer.channel_count()
        )
    })?;
    Ok(compute_histogram(channel))
}

fn histogram_csv(hist: &Histogram) -> String {
    let cdf = compute_cdf(hist);
    let mut out = String::from("level,count,cdf\n");
    for (level, (&count, &c)) in hist.counts().iter().zip(cdf.values().iter()).enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{level},{count},{c:.6}");
    }
    out
}
